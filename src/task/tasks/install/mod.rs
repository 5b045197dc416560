// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install task implementation.
//!
//! ```text
//! InstallTask
//! for dependency in install.dependencies:
//!   <command> --version spawns?  yes --> "already installed"
//!                                no  --> <install.command> <package>
//! any failed install --> TaskError::InstallFailed (after the loop)
//! ```
//!
//! Presence is checked by running the command with `install.version_flag`;
//! any exit status counts as present, only a failed spawn counts as missing.

use crate::error::{Result, TaskError};
use futures_util::future::BoxFuture;
use tracing::{error, info, warn};

use crate::core::process::builder::ProcessBuilder;
use crate::task::tools::Tool;
use crate::task::tools::package::PackageManagerTool;
use crate::task::{TaskContext, Taskable};

/// Installs missing tools through the system package manager.
#[derive(Debug, Clone, Default)]
pub struct InstallTask;

impl InstallTask {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks every dependency and installs the missing ones.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::InstallFailed` listing the packages whose
    /// installation failed. Other dependencies are still processed first.
    pub async fn do_install(&self, ctx: &TaskContext) -> Result<()> {
        let config = ctx.config();
        let tool_ctx = ctx.tool_context();
        let mut failed = Vec::new();

        info!("Installing dependencies...");

        for dependency in &config.install.dependencies {
            let present = ProcessBuilder::new(&dependency.command)
                .arg(&config.install.version_flag)
                .is_startable()
                .await;

            if present {
                info!("{} already installed", dependency.package);
                continue;
            }

            warn!(
                "{} not found. Installing {}...",
                dependency.command, dependency.package
            );
            if let Err(e) = PackageManagerTool::new(&dependency.package)
                .run(&tool_ctx)
                .await
            {
                error!("{e:#}");
                failed.push(dependency.package.clone());
            }
        }

        if !failed.is_empty() {
            return Err(TaskError::InstallFailed { packages: failed }.into());
        }

        info!("Dependencies installed");
        Ok(())
    }
}

impl Taskable for InstallTask {
    fn name(&self) -> &'static str {
        "install"
    }

    fn description(&self) -> &'static str {
        "Install missing build tools with the system package manager"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_install(ctx))
    }
}
