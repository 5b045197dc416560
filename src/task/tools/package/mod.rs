// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! System package manager wrapper.
//!
//! Runs `install.command` with the package name appended, e.g.
//! `sudo apt-get install -y clang-19`.

use crate::error::{ConfigError, Result};
use anyhow::Context;
use tracing::{debug, info};

use super::{BoxFuture, Tool, ToolContext};
use crate::core::process::builder::ProcessBuilder;

/// Installs one package through the configured package manager.
#[derive(Debug, Clone)]
pub struct PackageManagerTool {
    package: String,
}

impl PackageManagerTool {
    #[must_use]
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
        }
    }

    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    fn install_builder(&self, ctx: &ToolContext) -> Result<ProcessBuilder> {
        let Some((program, args)) = ctx.config().install.command.split_first() else {
            return Err(ConfigError::InvalidValue {
                section: "install".to_string(),
                key: "command".to_string(),
                message: "install command must not be empty".to_string(),
            }
            .into());
        };

        Ok(ProcessBuilder::new(program)
            .args(args)
            .arg(&self.package)
            .cwd(ctx.config().paths.root()))
    }

    async fn do_install(&self, ctx: &ToolContext) -> Result<()> {
        let builder = self.install_builder(ctx)?;

        if ctx.is_dry_run() {
            info!(
                command = %builder.command_line(),
                "[dry-run] Would install {}", self.package
            );
            return Ok(());
        }

        debug!(package = %self.package, "Installing package");
        builder
            .run()
            .await
            .with_context(|| format!("failed to install {}", self.package))?;
        Ok(())
    }
}

impl Tool for PackageManagerTool {
    fn name(&self) -> &'static str {
        "package-manager"
    }

    fn run<'a>(&'a self, ctx: &'a ToolContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_install(ctx))
    }
}
