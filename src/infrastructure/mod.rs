//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the desktop notification server and the config file.

pub mod config;
pub mod notification;

// Re-export adapters
pub use config::XdgConfigStore;
pub use notification::{
    create_notification_service, DesktopNotificationService, InMemoryNotificationService,
};
