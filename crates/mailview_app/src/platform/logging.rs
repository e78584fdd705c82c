//! Platform logging initialization for mailview_app.
//!
//! File output goes to `./mailview.log` in the current working directory;
//! terminal output goes to stderr so it does not interleave with the view.

use mailview_logging::LogDestination;

use super::config::{AppConfig, LogTarget};

pub fn initialize(config: &AppConfig) {
    let destination = match config.log_destination {
        LogTarget::File => LogDestination::File,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::Both => LogDestination::Both,
    };
    mailview_logging::initialize(destination, config.level_filter());
}
