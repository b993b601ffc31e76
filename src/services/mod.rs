//! External service integration module
//!
//! This module contains the bridge to the desktop notification daemon.

pub mod notifier;

// Re-export main functions
pub use notifier::show_desktop_notification;
