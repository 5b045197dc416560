// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task manager for orchestrating task execution.
//!
//! ```text
//! TaskManager::new(config)
//!   .with_dry_run()  .add(task)...
//!   .run_all().await
//!       task 1 --> task 2 --> ...   (stops at the first failure)
//! ```

use std::sync::Arc;

use crate::error::Result;
use anyhow::Context;
use tracing::debug;

use crate::config::Config;

use super::{Task, TaskContext, Taskable};

/// Manager for orchestrating task execution.
///
/// Tasks are executed sequentially in the order they were added.
pub struct TaskManager {
    /// Tasks to execute.
    tasks: Vec<Task>,

    /// Shared configuration.
    config: Arc<Config>,

    /// Whether to run in dry-run mode.
    dry_run: bool,
}

impl TaskManager {
    /// Creates a new `TaskManager` with the given configuration.
    #[must_use]
    pub const fn new(config: Arc<Config>) -> Self {
        Self {
            tasks: Vec::new(),
            config,
            dry_run: false,
        }
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Adds a task to be executed.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether dry-run mode is enabled.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    fn create_context(&self) -> TaskContext {
        TaskContext::new(Arc::clone(&self.config)).with_dry_run(self.dry_run)
    }

    /// Runs all tasks sequentially.
    ///
    /// # Errors
    ///
    /// Returns the first task failure, wrapped with the task name. Tasks
    /// after it do not run.
    pub async fn run_all(&self) -> Result<()> {
        if self.tasks.is_empty() {
            debug!("No tasks to run");
            return Ok(());
        }

        let ctx = self.create_context();

        for (i, task) in self.tasks.iter().enumerate() {
            debug!(
                task = %task.name(),
                index = i + 1,
                total = self.tasks.len(),
                "Running task"
            );

            task.run(&ctx)
                .await
                .with_context(|| format!("task '{}' failed", task.name()))?;
        }

        debug!("All tasks completed");
        Ok(())
    }
}
