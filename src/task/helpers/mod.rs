// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common task helper functions.
//!
//! | Function | Purpose |
//! |----------|---------|
//! | [`ensure_dir`] | Create directory if it doesn't exist (dry-run aware) |
//! | [`remove_match`] | Remove a file or directory tree matched by a pattern (dry-run aware) |

use std::path::Path;

use anyhow::Context;
use tracing::{debug, info};

use crate::error::{FsError, Result};
use crate::task::TaskContext;
use crate::utility::fs::walk::PatternMatch;

/// Ensure a directory exists, creating it and its parents if necessary.
///
/// This is dry-run aware - in dry-run mode, logs what would be created.
///
/// # Errors
///
/// Returns an error if the directory creation fails.
///
/// # Example
///
/// ```ignore
/// ensure_dir(ctx, &build_dir, "build directory").await?;
/// ```
pub async fn ensure_dir(ctx: &TaskContext, path: &Path, label: &str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!(path = %path.display(), "[dry-run] Would create {label}");
    } else {
        debug!(path = %path.display(), "Creating {label}");
        tokio::fs::create_dir_all(path)
            .await
            .with_context(|| format!("failed to create {}", path.display()))?;
    }

    Ok(())
}

/// Remove a pattern match: files directly, directories recursively.
///
/// A match that no longer exists (removed earlier through its parent) is
/// skipped. Status lines use the root-relative path.
///
/// # Errors
///
/// Returns an `FsError` if the removal fails.
pub async fn remove_match(ctx: &TaskContext, entry: &PatternMatch) -> Result<()> {
    let path = entry.path();
    let shown = entry.relative().display();
    let kind = if entry.is_dir() { "directory" } else { "file" };

    if tokio::fs::symlink_metadata(path).await.is_err() {
        debug!(path = %shown, "Already removed");
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!("[dry-run] Would remove {kind} {shown}");
        return Ok(());
    }

    let removed = if entry.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    };
    removed.map_err(|e| FsError::from_io(path, e))?;

    info!("Removed {kind} {shown}");
    Ok(())
}

#[cfg(test)]
mod tests;
