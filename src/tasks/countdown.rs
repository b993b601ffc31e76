//! Countdown background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::state::AppState;

/// Length of one tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Background task that ticks the timer once per second while it is running.
///
/// There is exactly one of these per application. It arms itself when the run
/// flag turns on and disarms when it turns off; every (re)arm starts a fresh
/// one-second period. Phase changes while running do not touch the flag, so
/// auto-chained sessions keep ticking in the same loop.
pub async fn countdown_task(state: Arc<AppState>) {
    info!("Starting countdown task");

    let mut running_rx = state.subscribe_running();

    loop {
        if !*running_rx.borrow_and_update() {
            // Idle or paused, wait for the next run flag change
            if running_rx.changed().await.is_err() {
                debug!("Run flag channel closed, countdown task exiting");
                return;
            }
            continue;
        }

        debug!("Countdown armed");
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    if let Err(e) = state.tick() {
                        error!("Failed to tick timer: {}", e);
                    }
                }

                // Flag flipped: disarm, then re-check at the top of the outer loop
                changed = running_rx.changed() => {
                    if changed.is_err() {
                        debug!("Run flag channel closed, countdown task exiting");
                        return;
                    }
                    debug!("Countdown disarmed");
                    break;
                }
            }
        }
    }
}
