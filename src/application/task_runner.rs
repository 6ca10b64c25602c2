//! Background task use case
//!
//! Shows a notification while a long-running task is in flight, withdraws
//! it when the task ends, and optionally posts a follow-up notification
//! with the result.

use std::future::Future;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::notification::NotificationIcon;

use super::notification_helper::NotificationHelper;
use super::ports::NotificationService;

/// Exit code reported for a task stopped by Ctrl-C
pub const EXIT_INTERRUPTED: u8 = 130;

/// Errors from the task runner
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to run task: {0}")]
    Task(#[from] std::io::Error),
}

/// How the background task ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Succeeded,
    /// Non-zero exit; `code` is None when the task was killed by a signal
    Failed { code: Option<i32> },
    Interrupted,
}

impl TaskOutcome {
    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Succeeded,
            code => Self::Failed { code },
        }
    }

    /// Process exit code to hand back to the shell
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Succeeded => 0,
            Self::Failed { code: Some(code) } => u8::try_from(*code).unwrap_or(1).max(1),
            Self::Failed { code: None } => 1,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }
}

/// Input parameters for the task runner
#[derive(Debug, Clone)]
pub struct TaskRunnerConfig {
    /// Human-readable name of the task, used in notification texts
    pub label: String,
    /// Post a result notification after the task ends
    pub notify_on_finish: bool,
}

/// Runs one task under a notification
pub struct TaskRunner<S: NotificationService> {
    helper: NotificationHelper<S>,
    config: TaskRunnerConfig,
}

impl<S: NotificationService> TaskRunner<S> {
    pub fn new(helper: NotificationHelper<S>, config: TaskRunnerConfig) -> Self {
        Self { helper, config }
    }

    pub fn helper(&self) -> &NotificationHelper<S> {
        &self.helper
    }

    /// Text of the notification shown while the task runs
    pub fn running_text(&self) -> String {
        format!("Running {}...", self.config.label)
    }

    /// Text and icon of the follow-up notification, if one is due
    pub fn finish_message(&self, outcome: TaskOutcome) -> Option<(String, NotificationIcon)> {
        if !self.config.notify_on_finish {
            return None;
        }
        let label = &self.config.label;
        match outcome {
            TaskOutcome::Succeeded => {
                Some((format!("{} finished", label), NotificationIcon::Success))
            }
            TaskOutcome::Failed { code: Some(code) } => Some((
                format!("{} failed (exit code {})", label, code),
                NotificationIcon::Error,
            )),
            TaskOutcome::Failed { code: None } => Some((
                format!("{} was terminated", label),
                NotificationIcon::Error,
            )),
            TaskOutcome::Interrupted => None,
        }
    }

    /// Run `task` until it finishes or `shutdown` resolves.
    ///
    /// Notification failures are logged and never abort the task. Dropping
    /// `task` on shutdown must stop the underlying work.
    pub async fn run<T, D>(&mut self, task: T, shutdown: D) -> Result<TaskOutcome, RunError>
    where
        T: Future<Output = Result<TaskOutcome, std::io::Error>>,
        D: Future<Output = ()>,
    {
        let running = self.running_text();
        if let Err(e) = self.helper.create_notification(&running, None).await {
            warn!(error = %e, "could not show progress notification");
        }

        let result = tokio::select! {
            result = task => result,
            _ = shutdown => Ok(TaskOutcome::Interrupted),
        };

        if let Err(e) = self.helper.completed().await {
            warn!(error = %e, "could not withdraw progress notification");
        }

        let outcome = result?;
        info!(label = %self.config.label, ?outcome, "task ended");

        if let Some((text, icon)) = self.finish_message(outcome) {
            if let Err(e) = self
                .helper
                .create_notification_with_icon(&text, icon, None)
                .await
            {
                warn!(error = %e, "could not show result notification");
            }
        }

        Ok(outcome)
    }
}
