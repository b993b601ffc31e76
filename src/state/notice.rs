//! User-visible alerts emitted by the state machine

use serde::{Deserialize, Serialize};

/// What happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    WorkComplete,
    LongBreakEarned,
    BreakOver,
    BreakSkipped,
}

/// A (title, message) alert for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, title: &str, message: String) -> Self {
        Self {
            kind,
            title: title.to_string(),
            message,
        }
    }

    pub fn work_complete() -> Self {
        Self::new(
            NoticeKind::WorkComplete,
            "Time's Up!",
            "Work session completed! Time for a break!".to_string(),
        )
    }

    pub fn long_break_earned(sessions: u64, long_break_minutes: u64) -> Self {
        Self::new(
            NoticeKind::LongBreakEarned,
            "Long Break!",
            format!(
                "You've completed {} sessions! Take a {} minute break!",
                sessions, long_break_minutes
            ),
        )
    }

    pub fn break_over() -> Self {
        Self::new(
            NoticeKind::BreakOver,
            "Break Over!",
            "Break time is over! Get ready to grind!".to_string(),
        )
    }

    pub fn break_skipped() -> Self {
        Self::new(
            NoticeKind::BreakSkipped,
            "Break Skipped",
            "Ready to get back to work!".to_string(),
        )
    }
}
