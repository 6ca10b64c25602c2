//! Notification record value object

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::icon::NotificationIcon;

/// Identifier slot under which the notification service tracks a notification.
/// Posting under an identifier that is already in use replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u32);

impl NotificationId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What happens when the user taps a notification.
#[derive(Clone)]
pub struct TapAction(Arc<dyn Fn() + Send + Sync>);

impl TapAction {
    pub fn new(action: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(action))
    }

    /// Run the action
    pub fn run(&self) {
        (self.0)()
    }
}

impl fmt::Debug for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TapAction(..)")
    }
}

/// A notification ready to be handed to a notification service.
///
/// Records are transient: a fresh one is built for every show request and
/// nothing reads it again once the service has accepted it.
#[derive(Debug, Clone)]
pub struct Notification {
    icon: NotificationIcon,
    ticker: String,
    when: DateTime<Utc>,
    title: String,
    body: String,
    action: Option<TapAction>,
    auto_cancel: bool,
}

impl Notification {
    /// Create a record stamped with the current time.
    /// No tap action, empty ticker, auto-cancel off.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            icon: NotificationIcon::default(),
            ticker: String::new(),
            when: Utc::now(),
            title: title.into(),
            body: body.into(),
            action: None,
            auto_cancel: false,
        }
    }

    pub fn with_icon(mut self, icon: NotificationIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Text flashed in the status bar when the notification first appears
    pub fn with_ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = ticker.into();
        self
    }

    pub fn with_action(mut self, action: Option<TapAction>) -> Self {
        self.action = action;
        self
    }

    /// Dismiss the notification as soon as the user interacts with it
    pub fn with_auto_cancel(mut self, auto_cancel: bool) -> Self {
        self.auto_cancel = auto_cancel;
        self
    }

    pub fn icon(&self) -> NotificationIcon {
        self.icon
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn when(&self) -> DateTime<Utc> {
        self.when
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn action(&self) -> Option<&TapAction> {
        self.action.as_ref()
    }

    pub fn auto_cancel(&self) -> bool {
        self.auto_cancel
    }
}
