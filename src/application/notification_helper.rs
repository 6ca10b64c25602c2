//! Single-slot notification helper
//!
//! Posts one replaceable notification through an injected
//! [`NotificationService`] and withdraws it again once the work it
//! announces has finished.

use tracing::debug;

use crate::domain::notification::{
    Completion, Notification, NotificationIcon, NotificationId, NotificationSlot, SlotState,
    TapAction,
};

use super::ports::{NotificationError, NotificationService};

/// Presents a single, replaceable notification and allows it to be dismissed.
pub struct NotificationHelper<S: NotificationService> {
    service: S,
    title: String,
    icon: NotificationIcon,
    auto_cancel: bool,
    slot: NotificationSlot,
    last: Option<Notification>,
}

impl<S: NotificationService> NotificationHelper<S> {
    /// Title used for every notification unless overridden
    pub const TAG: &'static str = "PerformanceHelper";

    /// The one slot this helper manages
    pub const NOTIFICATION_ID: NotificationId = NotificationId::new(1);

    pub fn new(service: S) -> Self {
        Self {
            service,
            title: Self::TAG.to_string(),
            icon: NotificationIcon::default(),
            auto_cancel: true,
            slot: NotificationSlot::new(),
            last: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_auto_cancel(mut self, auto_cancel: bool) -> Self {
        self.auto_cancel = auto_cancel;
        self
    }

    /// Put a notification carrying `text` into the status area.
    ///
    /// Any notification this helper showed before is replaced. `action`
    /// runs if the user taps the notification; `None` makes the tap inert.
    pub async fn create_notification(
        &mut self,
        text: &str,
        action: Option<TapAction>,
    ) -> Result<(), NotificationError> {
        let icon = self.icon;
        self.create_notification_with_icon(text, icon, action).await
    }

    /// Same as [`create_notification`](Self::create_notification) with an explicit icon.
    pub async fn create_notification_with_icon(
        &mut self,
        text: &str,
        icon: NotificationIcon,
        action: Option<TapAction>,
    ) -> Result<(), NotificationError> {
        let notification = Notification::new(self.title.as_str(), text)
            .with_icon(icon)
            .with_action(action)
            .with_auto_cancel(self.auto_cancel);

        self.service
            .notify(Self::NOTIFICATION_ID, &notification)
            .await?;

        let replaced = self.slot.show();
        debug!(
            id = %Self::NOTIFICATION_ID,
            replaced,
            body_len = text.len(),
            "notification posted"
        );
        self.last = Some(notification);
        Ok(())
    }

    /// Withdraw the notification. Called when the background work is complete.
    ///
    /// The withdrawal is always forwarded to the service; the returned
    /// [`Completion`] reports whether this helper had anything showing,
    /// not whether the user dismissed it in the meantime.
    pub async fn completed(&mut self) -> Result<Completion, NotificationError> {
        self.service.cancel(Self::NOTIFICATION_ID).await?;

        let completion = self.slot.withdraw();
        debug!(id = %Self::NOTIFICATION_ID, ?completion, "notification withdrawn");
        Ok(completion)
    }

    pub fn state(&self) -> SlotState {
        self.slot.state()
    }

    /// The record built by the most recent show
    pub fn last_notification(&self) -> Option<&Notification> {
        self.last.as_ref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}
