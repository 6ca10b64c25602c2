//! Desktop notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux. Replacing and withdrawing a
//! notification needs the freedesktop server; elsewhere a withdrawal
//! is logged and ignored.

#[cfg(all(unix, not(target_os = "macos")))]
use std::collections::HashMap;
#[cfg(all(unix, not(target_os = "macos")))]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{NotificationError, NotificationService};
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::notification::{Notification, NotificationId};

#[cfg(all(unix, not(target_os = "macos")))]
type HandleTable = Arc<Mutex<HashMap<NotificationId, notify_rust::NotificationHandle>>>;

/// Cross-platform notification service using notify-rust
pub struct DesktopNotificationService {
    /// Application name for notifications
    app_name: String,
    /// Server handles of the notifications currently shown, per slot
    #[cfg(all(unix, not(target_os = "macos")))]
    handles: HandleTable,
}

impl DesktopNotificationService {
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            #[cfg(all(unix, not(target_os = "macos")))]
            handles: HandleTable::default(),
        }
    }

    fn build(&self, notification: &Notification) -> notify_rust::Notification {
        let mut native = notify_rust::Notification::new();
        native
            .appname(&self.app_name)
            .summary(notification.title())
            .body(notification.body())
            .icon(notification.icon().icon_name())
            .timeout(notify_rust::Timeout::Never);

        #[cfg(all(unix, not(target_os = "macos")))]
        native.hint(notify_rust::Hint::Resident(!notification.auto_cancel()));

        if notification.action().is_some() {
            debug!("desktop backend does not deliver tap actions");
        }
        native
    }
}

impl Default for DesktopNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a failed show to a port error. `server_reachable` tells whether
/// the notification server still answers on the session bus.
fn show_error(error: impl std::fmt::Display, server_reachable: bool) -> NotificationError {
    if server_reachable {
        NotificationError::SendFailed(error.to_string())
    } else {
        NotificationError::BackendUnavailable(error.to_string())
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn lock_handles(
    handles: &HandleTable,
) -> std::sync::MutexGuard<'_, HashMap<NotificationId, notify_rust::NotificationHandle>> {
    handles.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(all(unix, not(target_os = "macos")))]
#[async_trait]
impl NotificationService for DesktopNotificationService {
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        let native = self.build(notification);
        let handles = Arc::clone(&self.handles);

        // notify-rust talks to the session bus synchronously
        tokio::task::spawn_blocking(move || -> Result<(), NotificationError> {
            let mut native = native;
            let previous = lock_handles(&handles).remove(&id);
            if let Some(previous) = &previous {
                // Replace in place on the server
                native.id(previous.id());
            }

            let handle = match native.show() {
                Ok(handle) => handle,
                Err(e) => {
                    // The old notification is still up, keep tracking it
                    if let Some(previous) = previous {
                        lock_handles(&handles).insert(id, previous);
                    }
                    let reachable = notify_rust::get_server_information().is_ok();
                    return Err(show_error(e, reachable));
                }
            };
            debug!(%id, server_id = handle.id(), "desktop notification shown");
            lock_handles(&handles).insert(id, handle);
            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))?
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        let Some(handle) = lock_handles(&self.handles).remove(&id) else {
            debug!(%id, "nothing to withdraw");
            return Ok(());
        };

        tokio::task::spawn_blocking(move || handle.close())
            .await
            .map_err(|e| NotificationError::CancelFailed(format!("Task join error: {}", e)))?;
        debug!(%id, "desktop notification closed");
        Ok(())
    }
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
#[async_trait]
impl NotificationService for DesktopNotificationService {
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        let native = self.build(notification);

        tokio::task::spawn_blocking(move || -> Result<(), NotificationError> {
            native.show().map_err(|e| show_error(e, true))?;
            Ok(())
        })
        .await
        .map_err(|e| NotificationError::SendFailed(format!("Task join error: {}", e)))??;
        debug!(%id, "desktop notification shown");
        Ok(())
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        debug!(%id, "platform cannot withdraw notifications, ignoring");
        Ok(())
    }
}
