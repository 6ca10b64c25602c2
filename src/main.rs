//! perf-notifier CLI entry point

use std::process::ExitCode;

use clap::Parser;

use perf_notifier::cli::{
    app::{load_merged_config, run_show, run_task, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    RunOptions, ShowOptions,
};
use perf_notifier::domain::config::{AppConfig, BackendKind};
use perf_notifier::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Build CLI config from global args
    let cli_config = AppConfig {
        title: cli.title.clone(),
        backend: cli
            .backend
            .map(|b| BackendKind::from(b).to_string()),
        auto_cancel: if cli.persistent { Some(false) } else { None },
        ..Default::default()
    };

    match cli.command {
        Commands::Config { action } => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Commands::Show {
            text,
            icon,
            dismiss_after,
        } => {
            let config = load_merged_config(cli_config).await;
            let options = ShowOptions {
                text,
                icon: icon.map(Into::into),
                dismiss_after: dismiss_after.map(std::time::Duration::from_secs),
            };
            run_show(options, config).await
        }
        Commands::Run {
            label,
            notify_on_finish,
            command,
        } => {
            let config = load_merged_config(cli_config).await;
            let options = RunOptions {
                label: label.unwrap_or_else(|| command.join(" ")),
                notify_on_finish,
                command,
            };
            run_task(options, config).await
        }
    }
}
