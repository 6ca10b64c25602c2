//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod notifier;

pub use config::ConfigStore;
pub use notifier::{NotificationError, NotificationService};
