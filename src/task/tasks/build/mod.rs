// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build task implementation.
//!
//! ```text
//! BuildTask
//! mkdir -p <build>
//!   --> CC=<compiler> meson setup [--reconfigure] <build>
//!   --> meson compile -C <build>
//! ```
//!
//! Each step must succeed before the next one starts.

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::info;

use crate::task::helpers::ensure_dir;
use crate::task::tools::Tool;
use crate::task::tools::meson::MesonTool;
use crate::task::{TaskContext, Taskable};

/// Configures and compiles the project with meson.
#[derive(Debug, Clone, Default)]
pub struct BuildTask {
    reconfigure: bool,
}

impl BuildTask {
    #[must_use]
    pub const fn new() -> Self {
        Self { reconfigure: false }
    }

    /// Passes `--reconfigure` to `meson setup`, needed once the build
    /// directory has been configured.
    #[must_use]
    pub const fn with_reconfigure(mut self, reconfigure: bool) -> Self {
        self.reconfigure = reconfigure;
        self
    }

    #[must_use]
    pub const fn reconfigure(&self) -> bool {
        self.reconfigure
    }

    /// # Errors
    ///
    /// Returns an error if the build directory cannot be created or a meson
    /// step fails; later steps do not run.
    pub async fn do_build(&self, ctx: &TaskContext) -> Result<()> {
        let tool_ctx = ctx.tool_context();

        info!("Building...");

        ensure_dir(ctx, &ctx.config().paths.build(), "build directory").await?;
        MesonTool::new()
            .setup_op(self.reconfigure)
            .run(&tool_ctx)
            .await?;
        MesonTool::new().compile_op().run(&tool_ctx).await?;

        info!("Build done");
        Ok(())
    }
}

impl Taskable for BuildTask {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Configure the build directory with meson and compile"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_build(ctx))
    }
}
