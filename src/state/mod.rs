//! State management module
//!
//! This module contains the timer state machine, its supporting types and the
//! shared application state the background tasks and the UI work through.

pub mod app_state;
pub mod durations;
pub mod notice;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, UiEvent};
pub use durations::{parse_minutes, Durations, MAX_MINUTES};
pub use notice::{Notice, NoticeKind};
pub use snapshot::Snapshot;
pub use timer_state::{format_mmss, Phase, RunStatus, TimerState};
