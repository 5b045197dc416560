// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean task implementation.
//!
//! ```text
//! for pattern in clean.patterns (+ --extra):
//!   expand pattern under the project root
//!     file      --> remove
//!     directory --> remove recursively
//! ```
//!
//! Patterns run in order, so a later pattern may match entries an earlier
//! one already removed (or, in dry-run, would have removed); those are
//! skipped. An empty match set is not an error.

use std::path::PathBuf;

use crate::error::Result;
use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::task::helpers::remove_match;
use crate::task::{TaskContext, Taskable};
use crate::utility::fs::walk::expand_pattern;

/// Removes build output and editor leftovers.
#[derive(Debug, Clone, Default)]
pub struct CleanTask {
    extra: Option<String>,
}

impl CleanTask {
    #[must_use]
    pub const fn new() -> Self {
        Self { extra: None }
    }

    /// Adds one pattern after the configured ones.
    #[must_use]
    pub fn with_extra(mut self, pattern: impl Into<String>) -> Self {
        self.extra = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    fn patterns<'a>(&'a self, ctx: &'a TaskContext) -> impl Iterator<Item = &'a str> {
        ctx.config()
            .clean
            .patterns
            .iter()
            .map(String::as_str)
            .chain(self.extra.as_deref().filter(|p| !p.is_empty()))
    }

    /// # Errors
    ///
    /// Returns an error if a pattern is invalid or an entry cannot be removed.
    pub async fn do_clean(&self, ctx: &TaskContext) -> Result<()> {
        let root = ctx.config().paths.root();
        let mut removed: Vec<PathBuf> = Vec::new();

        for pattern in self.patterns(ctx) {
            info!("Removing files matching pattern '{pattern}'");
            for entry in expand_pattern(root, pattern)? {
                if removed.iter().any(|gone| entry.path().starts_with(gone)) {
                    debug!(path = %entry.relative().display(), "Covered by an earlier match");
                    continue;
                }
                remove_match(ctx, &entry).await?;
                removed.push(entry.path().to_path_buf());
            }
        }

        info!("Clean up completed.");
        Ok(())
    }
}

impl Taskable for CleanTask {
    fn name(&self) -> &'static str {
        "clean"
    }

    fn description(&self) -> &'static str {
        "Remove build output and editor backup files"
    }

    fn run<'a>(&'a self, ctx: &'a TaskContext) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.do_clean(ctx))
    }
}
