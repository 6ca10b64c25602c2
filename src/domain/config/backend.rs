//! Notification backend selection

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidBackendError;

/// Which notification service the CLI wires into the helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Native desktop notifications via notify-rust
    #[default]
    Desktop,
    /// Process-local table, nothing is displayed
    Memory,
}

impl BackendKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Memory => "memory",
        }
    }
}

impl FromStr for BackendKind {
    type Err = InvalidBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "memory" => Ok(Self::Memory),
            _ => Err(InvalidBackendError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
