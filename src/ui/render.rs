//! Text rendering for the terminal front-end

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{Notice, RunStatus, Snapshot};

/// Full status printed by the `status` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub timer: Snapshot,
    pub uptime: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// One-line view of the timer
pub fn status_line(snapshot: &Snapshot) -> String {
    let status = match snapshot.status {
        RunStatus::Idle => "idle",
        RunStatus::Running => "running",
        RunStatus::Paused => "paused",
    };
    let skip = if snapshot.can_skip { " | [s] Skip Break" } else { "" };

    format!(
        "{} {} ({}) | Sessions completed: {} | [t] {}{} | {}",
        snapshot.phase_label,
        snapshot.display,
        status,
        snapshot.session_count,
        snapshot.toggle_label,
        skip,
        snapshot.quote_mode.label(),
    )
}

/// Quote line, empty until the first rotation
pub fn quote_line(snapshot: &Snapshot) -> Option<String> {
    snapshot.quote.as_ref().map(|quote| format!("  \"{}\"", quote))
}

/// Alert banner for a notice
pub fn notice_banner(notice: &Notice, at: DateTime<Local>) -> String {
    format!("[{}] *** {} *** {}", at.format("%H:%M:%S"), notice.title, notice.message)
}
