// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! clang-tidy and clang-format wrappers.
//!
//! ```text
//! ClangTidyTool    clang-tidy -p <build> <file>
//! ClangFormatTool  clang-format -i <file>
//! ```
//!
//! Files are passed as given; relative paths resolve against the project
//! root, which is the working directory of both tools.

use std::path::{Path, PathBuf};

use crate::error::Result;
use anyhow::Context;
use tracing::info;

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;

/// Static analysis of one file against the compilation database in the build directory.
#[derive(Debug, Clone)]
pub struct ClangTidyTool {
    file: PathBuf,
}

impl ClangTidyTool {
    #[must_use]
    pub fn new(file: impl AsRef<Path>) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
        }
    }

    async fn do_lint(&self, ctx: &ToolContext) -> Result<()> {
        let build = ctx.config().paths.build();

        if ctx.is_dry_run() {
            info!(
                file = %self.file.display(),
                build = %build.display(),
                "[dry-run] Would lint"
            );
            return Ok(());
        }

        ProcessBuilder::new(&ctx.config().tools.clang_tidy)
            .cwd(ctx.config().paths.root())
            .arg("-p")
            .arg(&build)
            .arg(&self.file)
            .run()
            .await
            .with_context(|| format!("clang-tidy failed on {}", self.file.display()))?;
        Ok(())
    }
}

impl Tool for ClangTidyTool {
    fn name(&self) -> &'static str {
        "clang-tidy"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_lint(ctx))
    }
}

/// In-place formatting of one file.
#[derive(Debug, Clone)]
pub struct ClangFormatTool {
    file: PathBuf,
}

impl ClangFormatTool {
    #[must_use]
    pub fn new(file: impl AsRef<Path>) -> Self {
        Self {
            file: file.as_ref().to_path_buf(),
        }
    }

    async fn do_format(&self, ctx: &ToolContext) -> Result<()> {
        if ctx.is_dry_run() {
            info!(file = %self.file.display(), "[dry-run] Would format");
            return Ok(());
        }

        ProcessBuilder::new(&ctx.config().tools.clang_format)
            .cwd(ctx.config().paths.root())
            .arg("-i")
            .arg(&self.file)
            .run()
            .await
            .with_context(|| format!("clang-format failed on {}", self.file.display()))?;
        Ok(())
    }
}

impl Tool for ClangFormatTool {
    fn name(&self) -> &'static str {
        "clang-format"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_format(ctx))
    }
}

#[cfg(test)]
mod tests;
