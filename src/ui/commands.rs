//! Line commands accepted by the terminal front-end

use std::str::FromStr;

use crate::state::Phase;

/// A user command read from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start, pause, resume, or leave a break
    Toggle,
    Start,
    Pause,
    Resume,
    Stop,
    SkipBreak,
    /// Set a phase length; the raw value is validated by the state
    SetMinutes(Phase, String),
    ToggleQuoteMode,
    Status,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            // Bare enter works like the big start button
            return Ok(Command::Toggle);
        };
        let argument = parts.next();

        let command = match (word.to_lowercase().as_str(), argument) {
            ("t" | "toggle", None) => Command::Toggle,
            ("start", None) => Command::Start,
            ("p" | "pause", None) => Command::Pause,
            ("r" | "resume", None) => Command::Resume,
            ("x" | "stop", None) => Command::Stop,
            ("s" | "skip", None) => Command::SkipBreak,
            ("q" | "quote", None) => Command::ToggleQuoteMode,
            ("status", None) => Command::Status,
            ("h" | "help" | "?", None) => Command::Help,
            ("quit" | "exit", None) => Command::Quit,
            ("work", Some(value)) => Command::SetMinutes(Phase::Work, value.to_string()),
            ("break", Some(value)) => Command::SetMinutes(Phase::Break, value.to_string()),
            ("long", Some(value)) => Command::SetMinutes(Phase::LongBreak, value.to_string()),
            ("work" | "break" | "long", None) => {
                return Err(format!("'{}' needs a number of minutes", word))
            }
            _ => return Err(format!("Unknown command: '{}' (type 'help')", line.trim())),
        };

        if parts.next().is_some() {
            return Err(format!("Too many arguments: '{}'", line.trim()));
        }
        Ok(command)
    }
}

/// Usage text for the `help` command
pub fn help_text() -> &'static str {
    "Commands:
  <enter>, t           start / pause / resume (skips the break while on one)
  start                start an idle timer
  p, pause             pause a running work session
  r, resume            resume a paused work session
  x, stop              stop and reset to a full work session
  s, skip              skip the current break
  work N               set work length to N minutes
  break N              set short break length to N minutes
  long N               set long break length to N minutes
  q, quote             switch between motivational and sarcastic quotes
  status               print the full status as JSON
  help                 show this help
  quit                 exit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_toggles() {
        assert_eq!("".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("   ".parse::<Command>(), Ok(Command::Toggle));
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("t".parse::<Command>(), Ok(Command::Toggle));
        assert_eq!("START".parse::<Command>(), Ok(Command::Start));
        assert_eq!("pause".parse::<Command>(), Ok(Command::Pause));
        assert_eq!("r".parse::<Command>(), Ok(Command::Resume));
        assert_eq!("x".parse::<Command>(), Ok(Command::Stop));
        assert_eq!("skip".parse::<Command>(), Ok(Command::SkipBreak));
        assert_eq!("q".parse::<Command>(), Ok(Command::ToggleQuoteMode));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn duration_commands_keep_raw_value() {
        assert_eq!(
            "work 30".parse::<Command>(),
            Ok(Command::SetMinutes(Phase::Work, "30".to_string()))
        );
        assert_eq!(
            "long abc".parse::<Command>(),
            Ok(Command::SetMinutes(Phase::LongBreak, "abc".to_string()))
        );
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!("work".parse::<Command>().is_err());
        assert!("stop now".parse::<Command>().is_err());
        assert!("break 5 10".parse::<Command>().is_err());
        assert!("dance".parse::<Command>().is_err());
    }
}
