//! Terminal front end: wires config, logging, input, engine and rendering
//! around the pure core.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
