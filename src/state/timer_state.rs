//! Pomodoro session state machine

use serde::{Deserialize, Serialize};

use super::{Durations, Notice, Snapshot};
use crate::quotes::QuoteMode;

/// A long break follows every this many completed work sessions
pub const LONG_BREAK_EVERY: u64 = 4;

/// Session type currently counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Work,
    Break,
    LongBreak,
}

impl Phase {
    /// Heading shown above the countdown
    pub fn label(self) -> &'static str {
        match self {
            Phase::Work => "Grinding",
            Phase::Break => "Break Time",
            Phase::LongBreak => "Long Break",
        }
    }

    pub fn is_break(self) -> bool {
        matches!(self, Phase::Break | Phase::LongBreak)
    }

    /// Phase that follows this one once it runs out, given the completed
    /// session count at that point.
    pub fn next(self, session_count: u64) -> Phase {
        match self {
            Phase::Work if session_count > 0 && session_count % LONG_BREAK_EVERY == 0 => {
                Phase::LongBreak
            }
            Phase::Work => Phase::Break,
            Phase::Break | Phase::LongBreak => Phase::Work,
        }
    }
}

/// Whether the countdown is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Idle,
    Running,
    Paused,
}

/// The whole timer: phase, countdown, session counter, settings and quote.
#[derive(Debug, Clone)]
pub struct TimerState {
    phase: Phase,
    remaining_seconds: u64,
    status: RunStatus,
    session_count: u64,
    durations: Durations,
    quote_mode: QuoteMode,
    quote: Option<&'static str>,
}

impl TimerState {
    /// Idle timer at the start of a work phase
    pub fn new(durations: Durations, quote_mode: QuoteMode) -> Self {
        Self {
            phase: Phase::Work,
            remaining_seconds: durations.seconds(Phase::Work),
            status: RunStatus::Idle,
            session_count: 0,
            durations,
            quote_mode,
            quote: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == RunStatus::Paused
    }

    pub fn is_idle(&self) -> bool {
        self.status == RunStatus::Idle
    }

    pub fn session_count(&self) -> u64 {
        self.session_count
    }

    pub fn durations(&self) -> Durations {
        self.durations
    }

    pub fn quote_mode(&self) -> QuoteMode {
        self.quote_mode
    }

    pub fn quote(&self) -> Option<&'static str> {
        self.quote
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format_mmss(self.remaining_seconds)
    }

    /// Label of the start/pause/resume control
    pub fn toggle_label(&self) -> &'static str {
        match self.status {
            RunStatus::Idle => "Start",
            RunStatus::Running => "Pause",
            RunStatus::Paused => "Resume",
        }
    }

    /// Skipping is only offered during a break
    pub fn can_skip(&self) -> bool {
        self.phase.is_break()
    }

    /// Start counting down. Returns false when the timer was not idle.
    pub fn start(&mut self) -> bool {
        if self.status != RunStatus::Idle {
            return false;
        }
        self.status = RunStatus::Running;
        true
    }

    /// Start, pause, resume or leave a break depending on where the timer is.
    /// Pausing during a break ends the break.
    pub fn toggle(&mut self) -> Vec<Notice> {
        match (self.status, self.phase) {
            (RunStatus::Idle, _) => {
                self.start();
                Vec::new()
            }
            (RunStatus::Running, Phase::Work) => {
                self.pause();
                Vec::new()
            }
            (RunStatus::Running, _) => self.skip_to_work().into_iter().collect(),
            (RunStatus::Paused, _) => {
                self.resume();
                Vec::new()
            }
        }
    }

    /// Halt a running work phase, keeping the remaining time
    pub fn pause(&mut self) -> bool {
        if self.status != RunStatus::Running || self.phase != Phase::Work {
            return false;
        }
        self.status = RunStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.status != RunStatus::Paused {
            return false;
        }
        self.status = RunStatus::Running;
        true
    }

    /// Back to an idle, full-length work phase. The session count is kept.
    pub fn stop(&mut self) {
        self.status = RunStatus::Idle;
        self.phase = Phase::Work;
        self.remaining_seconds = self.durations.seconds(Phase::Work);
    }

    /// Leave a break for an idle, full-length work phase
    pub fn skip_to_work(&mut self) -> Option<Notice> {
        if !self.phase.is_break() {
            return None;
        }
        self.phase = Phase::Work;
        self.remaining_seconds = self.durations.seconds(Phase::Work);
        self.status = RunStatus::Idle;
        Some(Notice::break_skipped())
    }

    /// One elapsed second
    pub fn tick(&mut self) -> Vec<Notice> {
        if self.status != RunStatus::Running {
            return Vec::new();
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.complete_phase()
        } else {
            Vec::new()
        }
    }

    /// Move to the next phase as if the current one ran out.
    ///
    /// The run status is left untouched, so a running timer carries straight
    /// on into the next phase.
    pub fn complete_phase(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        if self.phase == Phase::Work {
            self.session_count += 1;
            notices.push(Notice::work_complete());
        } else {
            notices.push(Notice::break_over());
        }

        let next = self.phase.next(self.session_count);
        if next == Phase::LongBreak {
            notices.push(Notice::long_break_earned(
                self.session_count,
                self.durations.long_break_minutes,
            ));
        }

        self.phase = next;
        self.remaining_seconds = self.durations.seconds(next);
        notices
    }

    /// Change a phase length. An idle timer shows the new length right away;
    /// otherwise it applies from the next phase reset.
    pub fn set_minutes(&mut self, phase: Phase, minutes: u64) -> bool {
        if !self.durations.set_minutes(phase, minutes) {
            return false;
        }
        if self.status == RunStatus::Idle {
            self.remaining_seconds = self.durations.seconds(self.phase);
        }
        true
    }

    pub fn toggle_quote_mode(&mut self) -> QuoteMode {
        self.quote_mode = self.quote_mode.toggled();
        self.quote_mode
    }

    pub fn set_quote(&mut self, quote: Option<&'static str>) {
        self.quote = quote;
    }

    /// Everything the presentation layer renders
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display(),
            phase: self.phase,
            phase_label: self.phase.label().to_string(),
            status: self.status,
            toggle_label: self.toggle_label().to_string(),
            can_skip: self.can_skip(),
            session_count: self.session_count,
            durations: self.durations,
            quote_mode: self.quote_mode,
            quote: self.quote.map(str::to_string),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(Durations::default(), QuoteMode::default())
    }
}

/// Format seconds as zero-padded `MM:SS`
pub fn format_mmss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
