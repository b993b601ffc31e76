//! Terminal front-end
//!
//! The UI task is the only place that writes to stdout. It consumes render
//! requests and alerts from `AppState` and turns stdin lines into commands.

pub mod commands;
pub mod render;

use std::{
    io::{self, Write},
    sync::Arc,
};
use chrono::Local;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{error, info, warn};

use crate::{
    services::show_desktop_notification,
    state::{AppState, Snapshot, UiEvent},
    utils::shutdown_signal,
};
pub use commands::{help_text, Command};
pub use render::{notice_banner, quote_line, status_line, StatusReport};

const CLEAR_LINE: &str = "\x1b[2K";

/// Redraws a single status line in place and prints everything else above it
pub struct Terminal<W: Write> {
    out: W,
    status: String,
    quote: Option<String>,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status: String::new(),
            quote: None,
        }
    }

    /// Redraw the status line; a changed quote is printed above it first
    pub fn render(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if snapshot.quote != self.quote {
            self.quote = snapshot.quote.clone();
            if let Some(line) = quote_line(snapshot) {
                writeln!(self.out, "\r{}{}", CLEAR_LINE, line)?;
            }
        }
        self.status = status_line(snapshot);
        write!(self.out, "\r{}{}", CLEAR_LINE, self.status)?;
        self.out.flush()
    }

    /// Print a message above the status line
    pub fn message(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\r{}{}\n{}", CLEAR_LINE, text, self.status)?;
        self.out.flush()
    }

    /// Leave the cursor on a fresh line
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Run the UI loop until `quit`, end of input, or a shutdown signal
pub async fn run_ui(
    state: Arc<AppState>,
    mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    desktop_notify: bool,
) -> anyhow::Result<()> {
    let mut terminal = Terminal::new(io::stdout());
    let mut input = BufReader::new(tokio::io::stdin());
    let mut line_buf = Vec::new();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    terminal.message("Type 'help' for commands, <enter> to start.")?;
    state.refresh().map_err(anyhow::Error::msg)?;

    loop {
        tokio::select! {
            Some(event) = ui_rx.recv() => match event {
                UiEvent::Render(snapshot) => terminal.render(&snapshot)?,
                UiEvent::Notice(notice) => {
                    terminal.message(&notice_banner(&notice, Local::now()))?;
                    if desktop_notify {
                        tokio::spawn(async move {
                            if let Err(e) = show_desktop_notification(notice).await {
                                warn!("{}", e);
                            }
                        });
                    }
                }
            },

            line = next_command_line(&mut input, &mut line_buf) => match line {
                Ok(Some(line)) => match line.parse::<Command>() {
                    Ok(Command::Quit) => {
                        info!("Quit requested");
                        break;
                    }
                    Ok(command) => dispatch(&state, &mut terminal, command)?,
                    Err(e) => terminal.message(&e)?,
                },
                Ok(None) => {
                    info!("Input closed");
                    break;
                }
                Err(e) => {
                    error!("Failed to read input: {}", e);
                    break;
                }
            },

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    terminal.finish()?;
    Ok(())
}

/// Read one line of input, decoding invalid UTF-8 lossily. `Ok(None)` means
/// the input is closed.
///
/// Bytes of a partly read line stay in `buf`, so the future can be dropped
/// inside `select!` and polled again later.
pub async fn next_command_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    if reader.read_until(b'\n', buf).await? == 0 && buf.is_empty() {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(buf)
        .trim_end_matches(['\n', '\r'])
        .to_string();
    buf.clear();
    Ok(Some(line))
}

/// Apply one command. State failures are logged and the UI keeps going.
pub fn dispatch<W: Write>(
    state: &AppState,
    terminal: &mut Terminal<W>,
    command: Command,
) -> io::Result<()> {
    let result = match command {
        Command::Toggle => state.toggle().map(drop),
        Command::Start => state.start().map(drop),
        Command::Pause => state.pause().map(drop),
        Command::Resume => state.resume().map(drop),
        Command::Stop => state.stop().map(drop),
        Command::SkipBreak => state.skip_break().map(drop),
        // Rejected input keeps the old value without telling the user
        Command::SetMinutes(phase, value) => state.set_minutes(phase, &value).map(drop),
        Command::ToggleQuoteMode => state.toggle_quote_mode().map(drop),
        Command::Status => {
            return match status_report(state) {
                Ok(report) => terminal.message(&report),
                Err(e) => {
                    error!("Failed to build status report: {}", e);
                    Ok(())
                }
            };
        }
        Command::Help => return terminal.message(help_text()),
        Command::Quit => Ok(()),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
    }
    Ok(())
}

/// Pretty JSON status for the `status` command
pub fn status_report(state: &AppState) -> Result<String, String> {
    let (last_action, last_action_time) = state.last_user_action();
    let report = StatusReport {
        timer: state.snapshot()?,
        uptime: state.uptime(),
        last_action,
        last_action_time,
    };
    serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Failed to serialize status: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        quotes::QuoteMode,
        state::{Durations, Phase, RunStatus, TimerState},
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn new_state() -> AppState {
        let (state, _rx) = AppState::new(
            Durations::default(),
            QuoteMode::Motivational,
            StdRng::seed_from_u64(3),
        );
        state
    }

    fn output(terminal: Terminal<Vec<u8>>) -> String {
        String::from_utf8(terminal.into_inner()).unwrap()
    }

    #[test]
    fn render_prints_quote_only_when_it_changes() {
        let mut timer = TimerState::default();
        timer.set_quote(Some("Stay focused and never give up!"));
        let mut terminal = Terminal::new(Vec::new());

        terminal.render(&timer.snapshot()).unwrap();
        timer.start();
        timer.tick();
        terminal.render(&timer.snapshot()).unwrap();

        let out = output(terminal);
        assert_eq!(out.matches("Stay focused").count(), 1);
        assert!(out.contains("Grinding 24:59"));
    }

    #[test]
    fn message_redraws_status_below() {
        let mut terminal = Terminal::new(Vec::new());
        terminal.render(&TimerState::default().snapshot()).unwrap();
        terminal.message("hello").unwrap();

        let out = output(terminal);
        assert!(out.ends_with("hello\nGrinding 25:00 (idle) | Sessions completed: 0 | [t] Start | MOTIVATIONAL"));
    }

    #[test]
    fn dispatch_drives_the_state() {
        let state = new_state();
        let mut terminal = Terminal::new(Vec::new());

        dispatch(&state, &mut terminal, Command::Toggle).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Running);

        dispatch(&state, &mut terminal, Command::Stop).unwrap();
        dispatch(&state, &mut terminal, Command::SetMinutes(Phase::Work, "45".into())).unwrap();
        dispatch(&state, &mut terminal, Command::SetMinutes(Phase::Work, "nope".into())).unwrap();
        assert_eq!(state.snapshot().unwrap().display, "45:00");

        dispatch(&state, &mut terminal, Command::ToggleQuoteMode).unwrap();
        assert_eq!(state.snapshot().unwrap().quote_mode, QuoteMode::Sarcastic);
    }

    #[test]
    fn explicit_commands_skip_the_toggle_rules() {
        let state = new_state();
        let mut terminal = Terminal::new(Vec::new());

        dispatch(&state, &mut terminal, Command::Pause).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Idle);

        dispatch(&state, &mut terminal, Command::Start).unwrap();
        dispatch(&state, &mut terminal, Command::Start).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Running);

        dispatch(&state, &mut terminal, Command::Pause).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Paused);
        dispatch(&state, &mut terminal, Command::Start).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Paused);

        dispatch(&state, &mut terminal, Command::Resume).unwrap();
        assert_eq!(state.snapshot().unwrap().status, RunStatus::Running);
    }

    #[tokio::test]
    async fn invalid_utf8_input_does_not_end_the_loop() {
        let mut input = &b"\xff\xfe\nstop\r\nlast"[..];
        let mut buf = Vec::new();

        let garbled = next_command_line(&mut input, &mut buf).await.unwrap().unwrap();
        assert_eq!(garbled, "\u{FFFD}\u{FFFD}");
        assert!(garbled.parse::<Command>().is_err());

        let stop = next_command_line(&mut input, &mut buf).await.unwrap();
        assert_eq!(stop.as_deref(), Some("stop"));
        assert_eq!(stop.unwrap().parse::<Command>(), Ok(Command::Stop));

        let last = next_command_line(&mut input, &mut buf).await.unwrap();
        assert_eq!(last.as_deref(), Some("last"));
        assert_eq!(next_command_line(&mut input, &mut buf).await.unwrap(), None);
    }

    #[test]
    fn status_command_prints_json() {
        let state = new_state();
        state.start().unwrap();
        let mut terminal = Terminal::new(Vec::new());
        dispatch(&state, &mut terminal, Command::Status).unwrap();

        let out = output(terminal);
        assert!(out.contains("\"session_count\": 0"));
        assert!(out.contains("\"last_action\": \"start\""));
        assert!(out.contains("\"status\": \"running\""));
    }

    #[test]
    fn status_report_round_trips_through_serde() {
        let state = new_state();
        let report: StatusReport = serde_json::from_str(&status_report(&state).unwrap()).unwrap();
        assert_eq!(report.timer.display, "25:00");
        assert_eq!(report.last_action, None);
    }
}
