//! Terminal front-end for the best-response sweep
//!
//! Runs the sweep from [`bestresp_core`], prints one report line per e_j and
//! shows the best-response curve against the identity line as a full-screen
//! terminal chart.

pub mod app;
pub mod chart;
pub mod config_file;
pub mod logging;

pub use app::{PlotApp, View};
pub use config_file::{ConfigError, load_config};
pub use logging::init_logging;
