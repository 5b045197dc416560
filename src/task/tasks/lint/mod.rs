// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lint task implementation.
//!
//! Runs clang-tidy on every file matched by `sources.patterns`, one file
//! at a time, against the compilation database in the build directory.
//! The first failing file stops the task.

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use crate::task::tools::Tool;
use crate::task::tools::clang::ClangTidyTool;
use crate::task::{TaskContext, Taskable};
use crate::utility::fs::walk::find_files;

#[derive(Debug, Clone, Default)]
pub struct LintTask;

impl LintTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or clang-tidy fails on a file.
    pub async fn do_lint(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let tool_ctx = ctx.tool_context();

        info!("Linting...");

        for pattern in &config.sources.patterns {
            info!("Linting files matching pattern '{pattern}'");
            for entry in find_files(config.paths.root(), pattern)? {
                ClangTidyTool::new(entry.relative()).run(&tool_ctx).await?;
                info!("{} linted", entry.relative().display());
            }
        }

        info!("Linting done");
        Ok(())
    }
}

impl Taskable for LintTask {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Run clang-tidy on the source files"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_lint(ctx))
    }
}
