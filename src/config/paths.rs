// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! root/
//!   src/     (sources, lint/format)
//!   build/   (meson build directory)
//!   test/    (test sources, built by meson)
//! ```
//!
//! `src`, `build` and `test` are optional; unset ones default to the
//! directory of the same name under `root`, relative ones resolve against it.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Project layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Project root (default: current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Source directory (default: root/src).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<PathBuf>,
    /// Build directory (default: root/build).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<PathBuf>,
    /// Test directory (default: root/test).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<PathBuf>,
}

impl PathsConfig {
    /// Creates a layout rooted at `root` with default subdirectories.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    /// Project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Source directory.
    #[must_use]
    pub fn src(&self) -> PathBuf {
        self.under_root(self.src.as_deref(), "src")
    }

    /// Build directory.
    #[must_use]
    pub fn build(&self) -> PathBuf {
        self.under_root(self.build.as_deref(), "build")
    }

    /// Test directory.
    #[must_use]
    pub fn test(&self) -> PathBuf {
        self.under_root(self.test.as_deref(), "test")
    }

    fn under_root(&self, path: Option<&Path>, default: &str) -> PathBuf {
        match path {
            Some(p) if p.is_absolute() => p.to_path_buf(),
            Some(p) => self.root().join(p),
            None => self.root().join(default),
        }
    }

    /// Makes `root` absolute and fills in every unset directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn resolve(&mut self) -> Result<()> {
        let root = match self.root.take() {
            Some(root) if root.is_absolute() => root,
            other => {
                let cwd = std::env::current_dir().context("failed to get current directory")?;
                other.map_or_else(|| cwd.clone(), |relative| cwd.join(relative))
            }
        };
        self.root = Some(root);

        self.src = Some(self.src());
        self.build = Some(self.build());
        self.test = Some(self.test());
        Ok(())
    }
}
