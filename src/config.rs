//! Configuration and CLI argument handling

use std::time::Duration;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    quotes::QuoteMode,
    state::{Durations, MAX_MINUTES},
};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-room")]
#[command(about = "A terminal Pomodoro timer with auto-chained sessions and rotating quotes")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Work session length in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=MAX_MINUTES as u64))]
    pub work: u64,

    /// Short break length in minutes
    #[arg(short = 'b', long = "break", default_value = "5", value_parser = clap::value_parser!(u64).range(1..=MAX_MINUTES as u64))]
    pub short_break: u64,

    /// Long break length in minutes (every fourth session)
    #[arg(short, long, default_value = "15", value_parser = clap::value_parser!(u64).range(1..=MAX_MINUTES as u64))]
    pub long_break: u64,

    /// Initial quote collection
    #[arg(short, long, value_enum, default_value = "motivational")]
    pub quote_mode: QuoteMode,

    /// Seconds between quote changes
    #[arg(long, default_value = "8", value_parser = clap::value_parser!(u64).range(1..))]
    pub quote_interval: u64,

    /// Also show alerts as desktop notifications
    #[arg(long)]
    pub desktop_notify: bool,

    /// Seed for quote selection, for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Phase lengths requested on the command line
    pub fn durations(&self) -> Durations {
        Durations::new(self.work, self.short_break, self.long_break)
    }

    pub fn quote_period(&self) -> Duration {
        Duration::from_secs(self.quote_interval)
    }

    /// Random source for quotes, seeded when `--seed` is given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Get the appropriate log level based on verbose flag.
    /// Quiet by default since stdout carries the status line.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_pomodoro() {
        let config = Config::try_parse_from(["pomodoro-room"]).unwrap();
        assert_eq!(config.durations(), Durations::default());
        assert_eq!(config.quote_mode, QuoteMode::Motivational);
        assert_eq!(config.quote_period(), Duration::from_secs(8));
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::try_parse_from([
            "pomodoro-room", "--work", "50", "--break", "10", "--long-break", "30",
            "--quote-mode", "sarcastic", "--verbose",
        ])
        .unwrap();
        assert_eq!(config.durations(), Durations::new(50, 10, 30));
        assert_eq!(config.quote_mode, QuoteMode::Sarcastic);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn zero_minutes_are_rejected() {
        assert!(Config::try_parse_from(["pomodoro-room", "--work", "0"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-room", "--break", "abc"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-room", "--long-break", "1441"]).is_err());
    }
}
