//! Background tasks module
//!
//! This module contains the periodic tasks that run alongside the UI task.
//! Neither writes to the terminal; both go through `AppState`.

pub mod countdown;
pub mod quote_rotation;

// Re-export main functions
pub use countdown::countdown_task;
pub use quote_rotation::quote_rotation_task;
