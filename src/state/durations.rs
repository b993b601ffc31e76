//! Configured phase durations and duration input validation

use serde::{Deserialize, Serialize};

use super::Phase;

/// Longest accepted phase, one day
pub const MAX_MINUTES: u64 = 24 * 60;

/// Phase lengths in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub work_minutes: u64,
    pub break_minutes: u64,
    pub long_break_minutes: u64,
}

impl Durations {
    pub fn new(work_minutes: u64, break_minutes: u64, long_break_minutes: u64) -> Self {
        Self {
            work_minutes,
            break_minutes,
            long_break_minutes,
        }
    }

    /// Minutes configured for a phase
    pub fn minutes(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Work => self.work_minutes,
            Phase::Break => self.break_minutes,
            Phase::LongBreak => self.long_break_minutes,
        }
    }

    /// Full length of a phase in seconds
    pub fn seconds(&self, phase: Phase) -> u64 {
        self.minutes(phase).saturating_mul(60)
    }

    /// Set the minutes for a phase. Values outside `1..=MAX_MINUTES` are
    /// rejected and the old value kept.
    pub fn set_minutes(&mut self, phase: Phase, minutes: u64) -> bool {
        if !(1..=MAX_MINUTES).contains(&minutes) {
            return false;
        }
        match phase {
            Phase::Work => self.work_minutes = minutes,
            Phase::Break => self.break_minutes = minutes,
            Phase::LongBreak => self.long_break_minutes = minutes,
        }
        true
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self::new(25, 5, 15)
    }
}

/// Parse user input as a whole number of minutes in `1..=MAX_MINUTES`
pub fn parse_minutes(input: &str) -> Option<u64> {
    input
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|minutes| (1..=MAX_MINUTES).contains(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_25_5_15() {
        let durations = Durations::default();
        assert_eq!(durations.seconds(Phase::Work), 1500);
        assert_eq!(durations.seconds(Phase::Break), 300);
        assert_eq!(durations.seconds(Phase::LongBreak), 900);
    }

    #[test]
    fn zero_minutes_keep_previous_value() {
        let mut durations = Durations::default();
        assert!(!durations.set_minutes(Phase::Break, 0));
        assert_eq!(durations.break_minutes, 5);
        assert!(durations.set_minutes(Phase::Break, 7));
        assert_eq!(durations.break_minutes, 7);
    }

    #[test]
    fn oversized_minutes_keep_previous_value() {
        let mut durations = Durations::default();
        assert!(!durations.set_minutes(Phase::Work, 307_445_734_561_825_861));
        assert!(!durations.set_minutes(Phase::LongBreak, MAX_MINUTES + 1));
        assert_eq!(durations, Durations::default());

        assert!(durations.set_minutes(Phase::Work, MAX_MINUTES));
        assert_eq!(durations.seconds(Phase::Work), MAX_MINUTES * 60);
    }

    #[test]
    fn seconds_saturate_instead_of_overflowing() {
        let durations = Durations::new(u64::MAX, 5, 15);
        assert_eq!(durations.seconds(Phase::Work), u64::MAX);
    }

    #[test]
    fn parse_minutes_accepts_positive_integers() {
        assert_eq!(parse_minutes("30"), Some(30));
        assert_eq!(parse_minutes(" 1 "), Some(1));
        assert_eq!(parse_minutes("1440"), Some(MAX_MINUTES));
    }

    #[test]
    fn parse_minutes_rejects_everything_else() {
        for input in ["", "0", "-5", "abc", "2.5", "10m", "1441", "307445734561825861"] {
            assert_eq!(parse_minutes(input), None, "input {:?}", input);
        }
    }
}
