// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Test task implementation.
//!
//! Runs `meson test -C <build>` against an already built tree.

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::{info, warn};

use crate::task::tools::Tool;
use crate::task::tools::meson::MesonTool;
use crate::task::{TaskContext, Taskable};

/// Runs the meson test suite.
#[derive(Debug, Clone, Default)]
pub struct TestTask;

impl TestTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// Returns an error if `meson test` fails.
    pub async fn do_test(&self, ctx: &TaskContext) -> Result<()> {
        let test_dir = ctx.config().paths.test();

        info!("Testing...");

        if !test_dir.is_dir() {
            warn!(path = %test_dir.display(), "Test directory not found");
        }
        MesonTool::new().test_op().run(&ctx.tool_context()).await?;

        info!("Tests done");
        Ok(())
    }
}

impl Taskable for TestTask {
    fn name(&self) -> &'static str {
        "test"
    }

    fn description(&self) -> &'static str {
        "Run the meson test suite in the build directory"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_test(ctx))
    }
}

#[cfg(test)]
mod tests;
