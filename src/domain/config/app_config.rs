//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::config::BackendKind;
use crate::domain::notification::NotificationIcon;

/// Title used when nothing is configured
pub const DEFAULT_TITLE: &str = "PerformanceHelper";

/// Application name reported to the desktop notification server
pub const DEFAULT_APP_NAME: &str = "perf-notifier";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: Option<String>,
    pub app_name: Option<String>,
    pub icon: Option<String>,
    pub backend: Option<String>,
    pub auto_cancel: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            title: Some(DEFAULT_TITLE.to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            icon: Some(NotificationIcon::default().to_string()),
            backend: Some(BackendKind::default().to_string()),
            auto_cancel: Some(true),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            title: other.title.or(self.title),
            app_name: other.app_name.or(self.app_name),
            icon: other.icon.or(self.icon),
            backend: other.backend.or(self.backend),
            auto_cancel: other.auto_cancel.or(self.auto_cancel),
        }
    }

    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get icon as parsed NotificationIcon, or default if not set/invalid
    pub fn icon_or_default(&self) -> NotificationIcon {
        self.icon
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get backend as parsed BackendKind, or default if not set/invalid
    pub fn backend_or_default(&self) -> BackendKind {
        self.backend
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Get auto-cancel setting, or true if not set
    pub fn auto_cancel_or_default(&self) -> bool {
        self.auto_cancel.unwrap_or(true)
    }
}
