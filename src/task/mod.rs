// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task execution system.
//!
//! # Architecture
//!
//! ```text
//! TaskManager
//!      |
//!      v
//!   Task enum ----> TaskContext (config, dry-run)
//!      |
//!      v
//!  install build lint format clean test
//!      |
//!      v
//!    Tools
//!  package manager, meson, clang-tidy, clang-format
//! ```
//!
//! # Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`TaskManager`](manager::TaskManager) | Runs tasks in order, stops at the first failure |
//! | [`TaskRegistry`](registry::TaskRegistry) | Resolves names, globs and aliases |
//! | [`Task`] | Enum dispatching to concrete task implementations |
//! | [`Taskable`] | Trait defining the common task interface |
//! | [`TaskContext`] | Execution context with config and dry-run flag |
//!
//! # The Taskable Pattern
//!
//! The [`Task`] enum implements `Taskable` via the `impl_taskable_for_task!` macro,
//! which generates a match arm for each variant, delegating to the inner type's
//! `Taskable` implementation.
//!
//! ## Adding a New Task
//!
//! 1. Create the task struct in `tasks/` module
//! 2. Implement `Taskable` for the struct
//! 3. Add a variant to the `Task` enum and its name to [`TASK_NAMES`]
//! 4. Add the variant name to `impl_taskable_for_task!` invocation

pub mod helpers;
pub mod manager;
pub mod registry;
pub mod tasks;
pub mod tools;

use futures_util::future::BoxFuture;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::task::tools::ToolContext;

use tasks::build::BuildTask;
use tasks::clean::CleanTask;
use tasks::format::FormatTask;
use tasks::install::InstallTask;
use tasks::lint::LintTask;
use tasks::testsuite::TestTask;

/// Built-in task names, in the order `list` shows them.
pub const TASK_NAMES: &[&str] = &["install", "build", "lint", "format", "clean", "test"];

/// Trait for task implementations.
///
/// Methods return `BoxFuture` so the `Task` enum can dispatch without
/// async-trait machinery.
///
/// # Example
///
/// ```ignore
/// impl Taskable for MyTask {
///     fn name(&self) -> &str { "mine" }
///     fn description(&self) -> &str { "Does my thing" }
///     fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
///         Box::pin(self.do_run(ctx))
///     }
/// }
/// ```
pub trait Taskable {
    /// Returns the task name.
    fn name(&self) -> &str;

    /// One-line summary shown by `list`.
    fn description(&self) -> &str;

    /// Executes the task.
    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>>;
}

/// Context provided to tasks during execution.
#[derive(Clone)]
pub struct TaskContext {
    /// Reference to the configuration.
    config: Arc<Config>,

    /// Whether this is a dry-run execution.
    dry_run: bool,
}

impl TaskContext {
    /// Creates a new `TaskContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>) -> Self {
        Self {
            config,
            dry_run: false,
        }
    }

    /// Gets a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Sets dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Creates a `ToolContext` from this `TaskContext`.
    #[must_use]
    pub fn tool_context(&self) -> ToolContext {
        ToolContext::new(Arc::clone(&self.config), self.dry_run)
    }
}

/// A runnable task.
#[derive(Debug, Clone)]
pub enum Task {
    /// Check for and install required tools.
    Install(InstallTask),
    /// Configure and compile with meson.
    Build(BuildTask),
    /// Run clang-tidy over the sources.
    Lint(LintTask),
    /// Run clang-format over the sources.
    Format(FormatTask),
    /// Remove build output and editor leftovers.
    Clean(CleanTask),
    /// Run the meson test suite.
    Test(TestTask),
}

impl Task {
    /// Creates the task registered under `name` with default options.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let task = match name {
            "install" => Self::Install(InstallTask::new()),
            "build" => Self::Build(BuildTask::new()),
            "lint" => Self::Lint(LintTask::new()),
            "format" => Self::Format(FormatTask::new()),
            "clean" => Self::Clean(CleanTask::new()),
            "test" => Self::Test(TestTask::new()),
            _ => return None,
        };
        Some(task)
    }

    /// All built-in tasks with default options, in [`TASK_NAMES`] order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        TASK_NAMES.iter().filter_map(|name| Self::from_name(name)).collect()
    }
}

/// Macro to implement Taskable for Task enum by delegating to inner types.
macro_rules! impl_taskable_for_task {
    ($($variant:ident),+ $(,)?) => {
        impl Taskable for Task {
            fn name(&self) -> &str {
                match self {
                    $(Task::$variant(t) => Taskable::name(t),)+
                }
            }

            fn description(&self) -> &str {
                match self {
                    $(Task::$variant(t) => Taskable::description(t),)+
                }
            }

            fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
                match self {
                    $(Task::$variant(t) => Taskable::run(t, ctx),)+
                }
            }
        }
    };
}

impl_taskable_for_task!(Install, Build, Lint, Format, Clean, Test);

#[cfg(test)]
mod tests;
