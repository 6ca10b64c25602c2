//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::BackendKind;
use crate::domain::notification::NotificationIcon;

/// perf-notifier - status notifications for long-running tasks
#[derive(Parser, Debug)]
#[command(name = "perf-notifier")]
#[command(version)]
#[command(about = "Show a replaceable status notification while background work runs")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification backend
    #[arg(short = 'b', long, value_name = "BACKEND", global = true)]
    pub backend: Option<BackendArg>,

    /// Notification title
    #[arg(short = 't', long, value_name = "TITLE", global = true)]
    pub title: Option<String>,

    /// Keep the notification when the user clicks it
    #[arg(long, global = true)]
    pub persistent: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a notification
    Show {
        /// Notification text
        text: String,

        /// Icon to display
        #[arg(short = 'i', long, value_name = "ICON")]
        icon: Option<IconArg>,

        /// Withdraw the notification after this many seconds
        #[arg(short = 'd', long, value_name = "SECS")]
        dismiss_after: Option<u64>,
    },
    /// Run a command with a notification shown until it exits
    Run {
        /// Name used in notification texts (defaults to the command line)
        #[arg(short = 'l', long, value_name = "LABEL")]
        label: Option<String>,

        /// Post a result notification when the command exits
        #[arg(short = 'n', long)]
        notify_on_finish: bool,

        /// Command and arguments to run
        #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
        command: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Desktop,
    Memory,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Desktop => BackendKind::Desktop,
            BackendArg::Memory => BackendKind::Memory,
        }
    }
}

/// Icon argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum IconArg {
    Info,
    Success,
    Warning,
    Error,
    Performance,
}

impl From<IconArg> for NotificationIcon {
    fn from(arg: IconArg) -> Self {
        match arg {
            IconArg::Info => NotificationIcon::Info,
            IconArg::Success => NotificationIcon::Success,
            IconArg::Warning => NotificationIcon::Warning,
            IconArg::Error => NotificationIcon::Error,
            IconArg::Performance => NotificationIcon::Performance,
        }
    }
}

/// Parsed show options
#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub text: String,
    pub icon: Option<NotificationIcon>,
    pub dismiss_after: Option<std::time::Duration>,
}

/// Parsed run options
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub label: String,
    pub notify_on_finish: bool,
    pub command: Vec<String>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["title", "app_name", "icon", "backend", "auto_cancel"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
