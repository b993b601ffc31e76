//! Quote rotation background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{info, warn};

use crate::state::AppState;

/// Default time between quotes
pub const QUOTE_PERIOD: Duration = Duration::from_secs(8);

/// Background task that shows a new random quote every `period`, starting
/// immediately. Runs for the lifetime of the application regardless of the
/// timer state.
pub async fn quote_rotation_task(state: Arc<AppState>, period: Duration) {
    info!("Starting quote rotation task, period={}s", period.as_secs());

    let mut interval = interval(period);

    loop {
        interval.tick().await;

        if let Err(e) = state.rotate_quote() {
            warn!("Failed to rotate quote: {}", e);
        }
    }
}
