//! Pomodoro Room - a terminal Pomodoro timer
//!
//! This library provides the session state machine, the background countdown
//! and quote rotation tasks, and the terminal front-end that renders them.

pub mod config;
pub mod quotes;
pub mod services;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, TimerState};
pub use ui::run_ui;
pub use utils::signals::shutdown_signal;
