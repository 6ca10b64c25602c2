//! In-memory notification service
//!
//! Keeps the active notifications in a process-local table instead of
//! displaying them. Used for headless runs and to observe the helper.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::{NotificationError, NotificationService};
use crate::domain::notification::{Notification, NotificationId};

/// Notification service backed by a process-local table
#[derive(Debug, Default)]
pub struct InMemoryNotificationService {
    active: Mutex<HashMap<NotificationId, Notification>>,
}

impl InMemoryNotificationService {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> MutexGuard<'_, HashMap<NotificationId, Notification>> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// The notification currently posted under `id`
    pub fn active(&self, id: NotificationId) -> Option<Notification> {
        self.table().get(&id).cloned()
    }

    pub fn active_count(&self) -> usize {
        self.table().len()
    }

    /// Simulate the user tapping the notification under `id`.
    ///
    /// Dismisses it first when auto-cancel is set, then runs its tap
    /// action. Returns false when nothing is posted under `id`.
    pub fn tap(&self, id: NotificationId) -> bool {
        let notification = {
            let mut table = self.table();
            match table.get(&id) {
                Some(n) if n.auto_cancel() => table.remove(&id),
                Some(n) => Some(n.clone()),
                None => None,
            }
        };
        let Some(notification) = notification else {
            return false;
        };

        // Lock released, the action may post under the same id
        if let Some(action) = notification.action() {
            action.run();
        }
        true
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationService {
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        let replaced = self.table().insert(id, notification.clone()).is_some();
        debug!(%id, replaced, title = notification.title(), "stored notification");
        Ok(())
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        let removed = self.table().remove(&id).is_some();
        debug!(%id, removed, "cleared notification");
        Ok(())
    }
}
