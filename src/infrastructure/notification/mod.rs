//! Notification infrastructure module
//!
//! Provides cross-platform desktop notifications using notify-rust,
//! and a process-local table for headless runs.

mod desktop;
mod memory;

pub use desktop::DesktopNotificationService;
pub use memory::InMemoryNotificationService;

use crate::application::ports::NotificationService;
use crate::domain::config::BackendKind;

/// Create the notification service selected by `kind`
pub fn create_notification_service(
    kind: BackendKind,
    app_name: &str,
) -> Box<dyn NotificationService> {
    match kind {
        BackendKind::Desktop => Box::new(DesktopNotificationService::with_app_name(app_name)),
        BackendKind::Memory => Box::new(InMemoryNotificationService::new()),
    }
}
