//! Notification icon value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidIconError;

/// All available notification icons
pub const ALL_ICONS: &[NotificationIcon] = &[
    NotificationIcon::Info,
    NotificationIcon::Success,
    NotificationIcon::Warning,
    NotificationIcon::Error,
    NotificationIcon::Performance,
];

/// Notification icon types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NotificationIcon {
    Info,
    Success,
    Warning,
    Error,
    #[default]
    Performance,
}

impl NotificationIcon {
    /// Get the freedesktop icon name
    pub const fn icon_name(&self) -> &'static str {
        match self {
            Self::Info => "dialog-information",
            Self::Success => "dialog-ok",
            Self::Warning => "dialog-warning",
            Self::Error => "dialog-error",
            Self::Performance => "utilities-system-monitor",
        }
    }

    /// Get the string identifier for this icon
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Performance => "performance",
        }
    }
}

impl FromStr for NotificationIcon {
    type Err = InvalidIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "performance" => Ok(Self::Performance),
            _ => Err(InvalidIconError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for NotificationIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
