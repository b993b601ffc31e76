//! Read-only view of the timer handed to the presentation layer

use serde::{Deserialize, Serialize};

use super::{Durations, Phase, RunStatus};
use crate::quotes::QuoteMode;

/// Render request payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Remaining time as `MM:SS`
    pub display: String,
    pub phase: Phase,
    pub phase_label: String,
    pub status: RunStatus,
    pub toggle_label: String,
    pub can_skip: bool,
    pub session_count: u64,
    pub durations: Durations,
    pub quote_mode: QuoteMode,
    pub quote: Option<String>,
}
