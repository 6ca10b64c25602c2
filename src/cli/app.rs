//! Runners for the show and run commands

use std::process::ExitCode;

use tokio::process::Command;

use crate::application::ports::{ConfigStore, NotificationService};
use crate::application::{NotificationHelper, TaskOutcome, TaskRunner, TaskRunnerConfig};
use crate::domain::config::{AppConfig, BackendKind};
use crate::domain::notification::Completion;
use crate::infrastructure::{create_notification_service, XdgConfigStore};

use super::args::{RunOptions, ShowOptions};
use super::presenter::Presenter;
use super::signals::shutdown_requested;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Wire the configured backend into a helper
pub fn build_helper(config: &AppConfig) -> NotificationHelper<Box<dyn NotificationService>> {
    let service =
        create_notification_service(config.backend_or_default(), config.app_name_or_default());

    NotificationHelper::new(service)
        .with_title(config.title_or_default())
        .with_icon(config.icon_or_default())
        .with_auto_cancel(config.auto_cancel_or_default())
}

/// Show one notification, optionally withdrawing it after a delay
pub async fn run_show(options: ShowOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let mut helper = build_helper(&config);

    let shown = match options.icon {
        Some(icon) => {
            helper
                .create_notification_with_icon(&options.text, icon, None)
                .await
        }
        None => helper.create_notification(&options.text, None).await,
    };
    if let Err(e) = shown {
        presenter.error(&e.to_string());
        return ExitCode::from(EXIT_ERROR);
    }

    if config.backend_or_default() == BackendKind::Memory {
        presenter.info("Memory backend: notification recorded, nothing displayed");
    }

    let Some(delay) = options.dismiss_after else {
        return ExitCode::from(EXIT_SUCCESS);
    };

    presenter.start_spinner(&format!("Dismissing in {}s...", delay.as_secs()));
    tokio::select! {
        _ = tokio::time::sleep(delay) => {}
        _ = shutdown_requested() => {}
    }
    presenter.stop_spinner();

    match helper.completed().await {
        Ok(Completion::Withdrawn) => {
            presenter.success("Notification withdrawn");
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(Completion::NotShown) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Run a command under a notification and return its exit status
pub async fn run_task(options: RunOptions, config: AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let Some((program, args)) = options.command.split_first() else {
        presenter.error("No command given");
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);

    let task = async move {
        let status = command.status().await?;
        Ok::<_, std::io::Error>(TaskOutcome::from_exit_code(status.code()))
    };

    let mut runner = TaskRunner::new(
        build_helper(&config),
        TaskRunnerConfig {
            label: options.label.clone(),
            notify_on_finish: options.notify_on_finish,
        },
    );

    match runner.run(task, shutdown_requested()).await {
        Ok(outcome) => {
            match outcome {
                TaskOutcome::Succeeded => presenter.success(&format!("{} finished", options.label)),
                TaskOutcome::Failed { code: Some(code) } => presenter.warn(&format!(
                    "{} exited with code {}",
                    options.label, code
                )),
                TaskOutcome::Failed { code: None } => {
                    presenter.warn(&format!("{} was terminated by a signal", options.label))
                }
                TaskOutcome::Interrupted => presenter.warn("Interrupted"),
            }
            ExitCode::from(outcome.exit_code())
        }
        Err(e) => {
            presenter.error(&format!("{}: {}", program, e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Load and merge configuration from file and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < cli
    AppConfig::defaults().merge(file_config).merge(cli_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::{NotificationIcon, SlotState};

    fn memory_config() -> AppConfig {
        AppConfig {
            backend: Some("memory".to_string()),
            ..AppConfig::defaults()
        }
    }

    #[tokio::test]
    async fn build_helper_applies_config() {
        let config = AppConfig {
            title: Some("Bench".to_string()),
            icon: Some("info".to_string()),
            auto_cancel: Some(false),
            ..memory_config()
        };
        let mut helper = build_helper(&config);
        helper.create_notification("x", None).await.unwrap();

        let record = helper.last_notification().unwrap();
        assert_eq!(record.title(), "Bench");
        assert_eq!(record.icon(), NotificationIcon::Info);
        assert!(!record.auto_cancel());
        assert_eq!(helper.state(), SlotState::Shown);
    }

    #[tokio::test]
    async fn run_show_with_memory_backend_succeeds() {
        let options = ShowOptions {
            text: "Benchmark finished".to_string(),
            icon: None,
            dismiss_after: Some(std::time::Duration::from_millis(10)),
        };
        assert_eq!(
            run_show(options, memory_config()).await,
            ExitCode::from(EXIT_SUCCESS)
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_task_propagates_exit_code() {
        let options = RunOptions {
            label: "false".to_string(),
            notify_on_finish: true,
            command: vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()],
        };
        assert_eq!(run_task(options, memory_config()).await, ExitCode::from(3));
    }

    #[tokio::test]
    async fn run_task_reports_missing_program() {
        let options = RunOptions {
            label: "nope".to_string(),
            notify_on_finish: false,
            command: vec!["perf-notifier-no-such-program".to_string()],
        };
        assert_eq!(
            run_task(options, memory_config()).await,
            ExitCode::from(EXIT_ERROR)
        );
    }
}
