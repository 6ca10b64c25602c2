//! Notification service port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::notification::{Notification, NotificationId};

/// Notification service errors
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    #[error("Notification service unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to show notification: {0}")]
    SendFailed(String),

    #[error("Failed to withdraw notification: {0}")]
    CancelFailed(String),
}

/// Port for the host notification service.
///
/// Notifications are addressed by identifier slots: posting under an
/// identifier that is already in use replaces the previous notification,
/// and withdrawing an identifier with nothing under it is a no-op.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Post `notification` under `id`, replacing whatever was there.
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError>;

    /// Withdraw the notification under `id`.
    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed service types
#[async_trait]
impl NotificationService for Box<dyn NotificationService> {
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(id, notification).await
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.as_ref().cancel(id).await
    }
}

/// Shared services, so a caller can keep inspecting a service it handed out
#[async_trait]
impl<S: NotificationService + ?Sized> NotificationService for Arc<S> {
    async fn notify(
        &self,
        id: NotificationId,
        notification: &Notification,
    ) -> Result<(), NotificationError> {
        self.as_ref().notify(id, notification).await
    }

    async fn cancel(&self, id: NotificationId) -> Result<(), NotificationError> {
        self.as_ref().cancel(id).await
    }
}
