// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Meson tool for setup/compile/test operations.
//!
//! ```text
//! MesonTool
//! Operations: Setup { reconfigure } | Compile | Test
//!   Setup    CC=<compiler> meson setup [--reconfigure] <build>
//!   Compile  meson compile -C <build>
//!   Test     meson test -C <build>
//! <build> is paths.build
//! ```

use crate::error::Result;
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;

/// Meson operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MesonOperation {
    /// Configure the build directory.
    Setup {
        /// Reconfigure an already configured build directory.
        reconfigure: bool,
    },
    /// Compile all targets.
    Compile,
    /// Run the test suite.
    Test,
}

impl Default for MesonOperation {
    fn default() -> Self {
        Self::Setup { reconfigure: false }
    }
}

/// Meson tool for setup/compile/test operations.
#[derive(Debug, Clone, Default)]
pub struct MesonTool {
    operation: MesonOperation,
}

impl MesonTool {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operation: MesonOperation::Setup { reconfigure: false },
        }
    }

    #[must_use]
    pub const fn setup_op(mut self, reconfigure: bool) -> Self {
        self.operation = MesonOperation::Setup { reconfigure };
        self
    }

    #[must_use]
    pub const fn compile_op(mut self) -> Self {
        self.operation = MesonOperation::Compile;
        self
    }

    #[must_use]
    pub const fn test_op(mut self) -> Self {
        self.operation = MesonOperation::Test;
        self
    }

    #[must_use]
    pub const fn operation(&self) -> MesonOperation {
        self.operation
    }

    fn meson_builder(ctx: &ToolContext) -> ProcessBuilder {
        ProcessBuilder::new(&ctx.config().tools.meson).cwd(ctx.config().paths.root())
    }

    async fn do_setup(&self, ctx: &ToolContext, reconfigure: bool) -> Result<()> {
        let build = ctx.config().paths.build();
        let compiler = &ctx.config().tools.compiler;

        if ctx.is_dry_run() {
            info!(
                build = %build.display(),
                compiler = %compiler,
                reconfigure,
                "[dry-run] Would configure meson"
            );
            return Ok(());
        }

        let mut builder = Self::meson_builder(ctx)
            .arg("setup")
            .env_var("CC", compiler.as_str());
        if reconfigure {
            builder = builder.arg("--reconfigure");
        }
        builder = builder.arg(&build);

        debug!(build = %build.display(), "Configuring meson");
        builder.run().await.context("meson setup failed")?;
        Ok(())
    }

    async fn do_compile(&self, ctx: &ToolContext) -> Result<()> {
        let build = ctx.config().paths.build();

        if ctx.is_dry_run() {
            info!(build = %build.display(), "[dry-run] Would compile with meson");
            return Ok(());
        }

        debug!(build = %build.display(), "Compiling with meson");
        Self::meson_builder(ctx)
            .arg("compile")
            .arg("-C")
            .arg(&build)
            .run()
            .await
            .context("meson compile failed")?;
        Ok(())
    }

    async fn do_test(&self, ctx: &ToolContext) -> Result<()> {
        let build = ctx.config().paths.build();

        if ctx.is_dry_run() {
            info!(build = %build.display(), "[dry-run] Would run meson tests");
            return Ok(());
        }

        debug!(build = %build.display(), "Running meson tests");
        Self::meson_builder(ctx)
            .arg("test")
            .arg("-C")
            .arg(&build)
            .run()
            .await
            .context("meson test failed")?;
        Ok(())
    }
}

impl Tool for MesonTool {
    fn name(&self) -> &'static str {
        "meson"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            match self.operation {
                MesonOperation::Setup { reconfigure } => self.do_setup(ctx, reconfigure).await,
                MesonOperation::Compile => self.do_compile(ctx).await,
                MesonOperation::Test => self.do_test(ctx).await,
            }
        })
    }
}
