//! Application layer - Use cases and port interfaces
//!
//! Contains the notification helper, the background-task runner,
//! and trait definitions for external system interactions.

pub mod notification_helper;
pub mod ports;
pub mod task_runner;

// Re-export use cases
pub use notification_helper::NotificationHelper;
pub use task_runner::{RunError, TaskOutcome, TaskRunner, TaskRunnerConfig};
