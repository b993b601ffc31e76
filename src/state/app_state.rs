//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::{parse_minutes, Durations, Notice, Phase, Snapshot, TimerState};
use crate::quotes::{pick, QuoteMode};

/// Presentation work requested from the UI task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Redraw with this view of the timer
    Render(Snapshot),
    /// Surface an alert
    Notice(Notice),
}

/// Shared application state: the timer plus the channels that carry its
/// changes to the UI task and the countdown task.
#[derive(Debug)]
pub struct AppState {
    /// The session state machine
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Random source for quote selection
    rng: Mutex<StdRng>,
    /// Application metadata
    pub start_time: Instant,
    /// Last user action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Render requests and alerts, consumed only by the UI task
    pub ui_tx: mpsc::UnboundedSender<UiEvent>,
    /// Whether the countdown should be ticking
    pub running_tx: watch::Sender<bool>,
    /// Keep the receiver alive to prevent channel closure
    pub _running_rx: watch::Receiver<bool>,
}

impl AppState {
    /// Create the state and the receiving end of the UI channel
    pub fn new(
        durations: Durations,
        quote_mode: QuoteMode,
        rng: StdRng,
    ) -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (running_tx, running_rx) = watch::channel(false);

        let state = Self {
            timer_state: Arc::new(Mutex::new(TimerState::new(durations, quote_mode))),
            rng: Mutex::new(rng),
            start_time: Instant::now(),
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            ui_tx,
            running_tx,
            _running_rx: running_rx,
        };
        (state, ui_rx)
    }

    /// Apply a transition, then publish the run flag, a render request and
    /// any alerts it produced.
    ///
    /// Publishing happens under the timer lock so the run flag and the render
    /// order always match the order of transitions.
    pub fn update<F>(&self, action: Option<&str>, updater: F) -> Result<Snapshot, String>
    where
        F: FnOnce(&mut TimerState) -> Vec<Notice>,
    {
        let mut timer = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let notices = updater(&mut *timer);
        let snapshot = timer.snapshot();
        let running = timer.is_running();

        self.running_tx.send_if_modified(|current| {
            if *current == running {
                return false;
            }
            *current = running;
            true
        });
        self.publish(UiEvent::Render(snapshot.clone()));
        for notice in notices {
            info!("{}: {}", notice.title, notice.message);
            self.publish(UiEvent::Notice(notice));
        }
        drop(timer);

        if let Some(action) = action {
            debug!("Applied action: {}", action);
            if let Ok(mut last_action) = self.last_action.lock() {
                *last_action = Some(action.to_string());
            }
            if let Ok(mut last_time) = self.last_action_time.lock() {
                *last_time = Some(Utc::now());
            }
        }

        Ok(snapshot)
    }

    fn publish(&self, event: UiEvent) {
        if let Err(e) = self.ui_tx.send(event) {
            warn!("Failed to send UI event: {}", e);
        }
    }

    /// Start, pause, resume or skip depending on the current state
    pub fn toggle(&self) -> Result<Snapshot, String> {
        self.update(Some("toggle"), |timer| timer.toggle())
    }

    /// Begin counting down from idle; does nothing otherwise
    pub fn start(&self) -> Result<Snapshot, String> {
        self.update(Some("start"), |timer| {
            timer.start();
            Vec::new()
        })
    }

    /// Halt a running work phase
    pub fn pause(&self) -> Result<Snapshot, String> {
        self.update(Some("pause"), |timer| {
            timer.pause();
            Vec::new()
        })
    }

    pub fn resume(&self) -> Result<Snapshot, String> {
        self.update(Some("resume"), |timer| {
            timer.resume();
            Vec::new()
        })
    }

    pub fn stop(&self) -> Result<Snapshot, String> {
        self.update(Some("stop"), |timer| {
            timer.stop();
            Vec::new()
        })
    }

    /// Leave the current break, if any
    pub fn skip_break(&self) -> Result<Snapshot, String> {
        self.update(Some("skip"), |timer| timer.skip_to_work().into_iter().collect())
    }

    /// One elapsed second, driven by the countdown task
    pub fn tick(&self) -> Result<Snapshot, String> {
        self.update(None, |timer| timer.tick())
    }

    /// Set a phase length from raw user input. Invalid input is ignored and
    /// reported back as `Ok(false)`.
    pub fn set_minutes(&self, phase: Phase, input: &str) -> Result<bool, String> {
        let Some(minutes) = parse_minutes(input) else {
            debug!("Ignoring invalid {:?} duration input: {:?}", phase, input);
            return Ok(false);
        };

        let mut accepted = false;
        self.update(Some("set-minutes"), |timer| {
            accepted = timer.set_minutes(phase, minutes);
            Vec::new()
        })?;
        Ok(accepted)
    }

    /// Switch quote collections and show a quote from the new one
    pub fn toggle_quote_mode(&self) -> Result<Snapshot, String> {
        let mut rng = self.rng.lock()
            .map_err(|e| format!("Failed to lock random source: {}", e))?;

        self.update(Some("quote-mode"), |timer| {
            let mode = timer.toggle_quote_mode();
            info!("Quote mode set to: {}", mode.label());
            timer.set_quote(pick(mode.quotes(), &mut *rng));
            Vec::new()
        })
    }

    /// Show a fresh quote from the active collection
    pub fn rotate_quote(&self) -> Result<Snapshot, String> {
        let mut rng = self.rng.lock()
            .map_err(|e| format!("Failed to lock random source: {}", e))?;

        self.update(None, |timer| {
            let quotes = timer.quote_mode().quotes();
            timer.set_quote(pick(quotes, &mut *rng));
            Vec::new()
        })
    }

    /// Ask the UI to redraw without changing anything
    pub fn refresh(&self) -> Result<Snapshot, String> {
        self.update(None, |_| Vec::new())
    }

    /// Get current timer view
    pub fn snapshot(&self) -> Result<Snapshot, String> {
        self.timer_state.lock()
            .map(|timer| timer.snapshot())
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Watch the run flag that arms and disarms the countdown
    pub fn subscribe_running(&self) -> watch::Receiver<bool> {
        self.running_tx.subscribe()
    }

    /// How long the timer has been open, e.g. `1h 2m 3s`
    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        match (secs / 3600, secs % 3600 / 60, secs % 60) {
            (0, 0, s) => format!("{}s", s),
            (0, m, s) => format!("{}m {}s", m, s),
            (h, m, s) => format!("{}h {}m {}s", h, m, s),
        }
    }

    /// Most recent user command and when it was applied
    pub fn last_user_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let action = self.last_action.lock().ok().and_then(|guard| guard.clone());
        let at = self.last_action_time.lock().ok().and_then(|guard| *guard);
        (action, at)
    }
}
