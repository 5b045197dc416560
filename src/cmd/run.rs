// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task command implementation for minitask.

use std::sync::Arc;

use crate::cli::task::RunArgs;
use crate::config::Config;
use crate::error::{Result, TaskError};
use crate::task::manager::TaskManager;
use crate::task::registry::TaskRegistry;
use crate::task::{TASK_NAMES, Task};

/// Registry of the built-in tasks and the configured aliases.
pub(crate) fn task_registry(config: &Config) -> TaskRegistry {
    let mut registry = TaskRegistry::new(config.aliases.clone());
    registry.register_all(TASK_NAMES.iter().copied());
    registry
}

/// Resolves task names, globs and aliases to tasks with default options.
///
/// # Errors
///
/// Returns an error if an entry is an invalid glob or nothing matches.
pub fn resolve_tasks(config: &Config, specs: &[String]) -> Result<Vec<Task>> {
    let names = task_registry(config).resolve(specs)?;
    tracing::debug!(tasks = ?names, "Resolved tasks to run");

    names
        .into_iter()
        .map(|name| {
            Task::from_name(&name).ok_or_else(|| anyhow::Error::from(TaskError::NotFound(name)))
        })
        .collect()
}

/// Runs the given tasks in order.
///
/// # Errors
///
/// Returns the first task failure.
pub async fn run_tasks(tasks: Vec<Task>, config: &Config, dry_run: bool) -> Result<()> {
    let mut manager = TaskManager::new(Arc::new(config.clone())).with_dry_run(dry_run);
    for task in tasks {
        manager.add(task);
    }
    manager.run_all().await
}

/// Handler for the single-task commands (`build`, `clean`, ...).
///
/// # Errors
///
/// Returns an error if the task fails.
pub async fn run_task_command(task: Task, config: &Config, dry_run: bool) -> Result<()> {
    run_tasks(vec![task], config, dry_run).await
}

/// Handler for `run`.
///
/// # Errors
///
/// Returns an error if task resolution fails or a task fails.
pub async fn run_chain_command(args: &RunArgs, config: &Config, dry_run: bool) -> Result<()> {
    let tasks = resolve_tasks(config, &args.tasks)?;
    run_tasks(tasks, config, dry_run).await
}
