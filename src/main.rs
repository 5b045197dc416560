// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Install | Build | Lint | Format | Clean | Test | Run | List | Options | Version
//! ```

use std::process::ExitCode;

use minitask::cli::global::GlobalOptions;
use minitask::cli::{self, Command};
use minitask::cmd::config::run_options_command;
use minitask::cmd::list::run_list_command;
use minitask::cmd::run::{run_chain_command, run_task_command};
use minitask::cmd::version::run_version_command;
use minitask::config::{Config, ConfigLoader, ENV_PREFIX};
use minitask::error::bail_out;
use minitask::logging::{FAILURE_TARGET, LogConfig, LogGuard, init_logging};
use minitask::task::Task;
use minitask::task::tasks::build::BuildTask;
use minitask::task::tasks::clean::CleanTask;
use minitask::task::tasks::format::FormatTask;
use minitask::task::tasks::install::InstallTask;
use minitask::task::tasks::lint::LintTask;
use minitask::task::tasks::testsuite::TestTask;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_log(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn init_log(config: &Config) -> minitask::error::Result<LogGuard> {
    let log_config = LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build();
    init_logging(&log_config)
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let dry_run = config.global.dry;

    let result = match &cli.command {
        Some(Command::Install) => {
            run_task_command(Task::Install(InstallTask::new()), config, dry_run).await
        }
        Some(Command::Build(args)) => {
            let task = BuildTask::new().with_reconfigure(args.reconfigure);
            run_task_command(Task::Build(task), config, dry_run).await
        }
        Some(Command::Lint) => run_task_command(Task::Lint(LintTask::new()), config, dry_run).await,
        Some(Command::Format) => {
            run_task_command(Task::Format(FormatTask::new()), config, dry_run).await
        }
        Some(Command::Clean(args)) => {
            let task = match &args.extra {
                Some(extra) => CleanTask::new().with_extra(extra),
                None => CleanTask::new(),
            };
            run_task_command(Task::Clean(task), config, dry_run).await
        }
        Some(Command::Test) => run_task_command(Task::Test(TestTask::new()), config, dry_run).await,
        Some(Command::Run(args)) => run_chain_command(args, config, dry_run).await,
        Some(Command::List(args)) => {
            run_list_command(args, config);
            Ok(())
        }
        Some(Command::Options(args)) => run_options_command(args, config),
        Some(Command::Version) => {
            run_version_command(config);
            Ok(())
        }
        None => Err(bail_out("no command specified, use --help for usage information").into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: FAILURE_TARGET, "{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> minitask::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_project_file(global.root.as_deref());
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader
        .with_env_prefix(ENV_PREFIX)
        .set_overrides(&global.to_config_overrides())
}

fn load_config(global: &GlobalOptions) -> minitask::error::Result<Config> {
    build_config_loader(global)?.build()
}
