// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Format task implementation.
//!
//! Rewrites every file matched by `sources.patterns` in place with
//! clang-format. Stops at the first file clang-format rejects.

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use crate::task::tools::Tool;
use crate::task::tools::clang::ClangFormatTool;
use crate::task::{TaskContext, Taskable};
use crate::utility::fs::walk::find_files;

#[derive(Debug, Clone, Default)]
pub struct FormatTask;

impl FormatTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or clang-format fails on a file.
    pub async fn do_format(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let tool_ctx = ctx.tool_context();

        info!("Formatting...");

        for pattern in &config.sources.patterns {
            info!("Formatting files matching pattern '{pattern}'");
            for entry in find_files(config.paths.root(), pattern)? {
                ClangFormatTool::new(entry.relative())
                    .run(&tool_ctx)
                    .await?;
                info!("{} formatted", entry.relative().display());
            }
        }

        info!("Formatting done");
        Ok(())
    }
}

impl Taskable for FormatTask {
    fn name(&self) -> &'static str {
        "format"
    }

    fn description(&self) -> &'static str {
        "Format the source files in place with clang-format"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_format(ctx))
    }
}
