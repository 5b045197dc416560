// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tool abstractions for task execution.
//!
//! ```text
//! Task --> ToolContext --> Tool --> ProcessBuilder
//!   PackageManagerTool   <install.command> <package>
//!   MesonTool            setup | compile | test
//!   ClangTidyTool        clang-tidy -p <build> <file>
//!   ClangFormatTool      clang-format -i <file>
//! ```
//!
//! Every tool runs from the project root and honors dry-run by logging a
//! `[dry-run] Would ...` line instead of spawning anything.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;

pub mod clang;
pub mod meson;
pub mod package;

use futures_util::future::BoxFuture;

/// Context provided to tools during execution.
#[derive(Clone)]
pub struct ToolContext {
    /// Whether this is a dry-run execution.
    /// When true, tools log what they would do without making changes.
    dry_run: bool,

    /// Reference to the configuration.
    config: Arc<Config>,
}

impl ToolContext {
    /// Creates a new `ToolContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>, dry_run: bool) -> Self {
        Self { dry_run, config }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Trait for tools that execute external processes.
///
/// Tools are the building blocks of tasks. Each tool wraps one external
/// invocation (meson setup, clang-tidy on a file, a package install).
///
/// # Implementation Notes
///
/// - Tools run with the project root as working directory
/// - Tools should respect `ctx.is_dry_run()` and only log actions without executing
/// - A failing process surfaces as `ProcessError::NonZeroExit` in the error chain
pub trait Tool: Send + Sync {
    /// Returns the name of this tool (e.g., "meson", "clang-tidy").
    fn name(&self) -> &str;

    /// Executes the tool's operation.
    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>>;
}

#[cfg(test)]
pub(crate) mod test_utils;
