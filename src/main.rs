//! Pomodoro Room - a terminal Pomodoro timer
//!
//! This is the main entry point for the pomodoro-room application.

use std::sync::Arc;
use tracing::info;

use pomodoro_room::{
    config::Config,
    state::AppState,
    tasks::{countdown_task, quote_rotation_task},
    ui::run_ui,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout belongs to the status line
    tracing_subscriber::fmt()
        .with_env_filter(format!("pomodoro_room={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let durations = config.durations();
    info!("Starting pomodoro-room v1.0.0");
    info!("Configuration: work={}min, break={}min, long_break={}min, quotes={}",
          durations.work_minutes, durations.break_minutes, durations.long_break_minutes,
          config.quote_mode.label());

    // Create application state
    let (state, ui_rx) = AppState::new(durations, config.quote_mode, config.rng());
    let state = Arc::new(state);

    // Start the background tasks
    let countdown_state = Arc::clone(&state);
    tokio::spawn(async move {
        countdown_task(countdown_state).await;
    });

    let quote_state = Arc::clone(&state);
    let quote_period = config.quote_period();
    tokio::spawn(async move {
        quote_rotation_task(quote_state, quote_period).await;
    });

    run_ui(state, ui_rx, config.desktop_notify).await?;

    info!("Shutdown complete");

    // The stdin reader may still be parked on a blocking read after a signal,
    // which would hold up runtime shutdown until the next line of input.
    std::process::exit(0)
}
