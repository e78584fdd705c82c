//! Mailview core: pure state machine and view-model helpers.
mod date;
mod effect;
mod message;
mod msg;
mod preview;
mod state;
mod update;
mod view_model;

pub use date::{format_created, format_timestamp, parse_formatted, DATE_FORMAT, INVALID_DATE};
pub use effect::Effect;
pub use message::Message;
pub use msg::Msg;
pub use preview::{prepare_preview_body, MAX_PREVIEW_BODY};
pub use state::{AppState, RequestId};
pub use update::update;
pub use view_model::{AppViewModel, MessageRowView, PreviewView};
