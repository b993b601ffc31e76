//! Desktop notifications

use notify_rust::Notification;

use crate::state::Notice;

/// Show a notice as a desktop notification.
///
/// The notification daemon call blocks, so it runs on the blocking pool.
pub async fn show_desktop_notification(notice: Notice) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        Notification::new()
            .appname("pomodoro-room")
            .summary(&notice.title)
            .body(&notice.message)
            .show()
            .map(|_| ())
            .map_err(|e| format!("Failed to show desktop notification: {}", e))
    })
    .await
    .map_err(|e| format!("Notification task failed: {}", e))?
}
