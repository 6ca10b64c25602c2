//! Domain layer - Core business logic
//!
//! Contains value objects, the notification slot state machine, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod notification;

// Re-export common types
pub use config::{AppConfig, BackendKind};
pub use error::*;
pub use notification::{
    Completion, Notification, NotificationIcon, NotificationId, NotificationSlot, SlotState,
    TapAction,
};
