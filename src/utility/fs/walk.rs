// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Glob pattern expansion over a directory tree.
//!
//! Patterns are relative to a root directory. `*` stays within one path
//! component and `**` spans zero or more directories. Wildcards never match
//! hidden names; a hidden entry is only reached when a pattern component
//! itself starts with `.` (`.cache`, `**/.coverage`, `build/.*`).
//!
//! The walk starts at the literal prefix of the pattern, so `src/**/*.c`
//! never descends into `build/`.

use crate::error::Result;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{trace, warn};
use wax::{Glob, Program};

/// What a pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    File,
    Directory,
}

/// A single entry matched by a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    path: PathBuf,
    relative: PathBuf,
    kind: MatchKind,
}

impl PatternMatch {
    fn new(root: &Path, relative: PathBuf, is_dir: bool) -> Self {
        Self {
            path: root.join(&relative),
            relative,
            kind: if is_dir {
                MatchKind::Directory
            } else {
                MatchKind::File
            },
        }
    }

    /// Full path (root joined with the relative path).
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path relative to the walk root, as written in logs.
    #[must_use]
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    #[must_use]
    pub const fn kind(&self) -> MatchKind {
        self.kind
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == MatchKind::Directory
    }
}

/// Pattern components that name hidden entries explicitly.
fn dot_components(pattern: &str) -> Vec<Glob<'static>> {
    pattern
        .split('/')
        .filter(|c| c.starts_with('.') && *c != "." && *c != "..")
        .filter_map(|c| Glob::new(c).ok().map(Glob::into_owned))
        .collect()
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// Sequential walker rooted at `start`: hidden entries pass only when one
/// of `dot` matches their name, ignore files are not read.
fn build_walker(start: &Path, dot: Vec<Glob<'static>>) -> WalkBuilder {
    let mut builder = WalkBuilder::new(start);

    builder
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            let name = entry.file_name();
            !is_hidden(name) || dot.iter().any(|glob| glob.is_match(name))
        });

    builder
}

/// Expands a glob pattern relative to `root`.
///
/// Matches are sorted by path.
///
/// # Errors
///
/// Returns an error if the root directory does not exist or the pattern is
/// not a valid glob.
///
/// # Example
/// ```no_run
/// use minitask::utility::fs::walk::expand_pattern;
///
/// for m in expand_pattern(".", "build/*")? {
///     println!("{} ({:?})", m.relative().display(), m.kind());
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn expand_pattern<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PatternMatch>> {
    let root = root.as_ref();

    if !root.exists() {
        anyhow::bail!("root directory does not exist: {}", root.display());
    }

    let glob =
        Glob::new(pattern).map_err(|e| anyhow::anyhow!("invalid glob pattern '{pattern}': {e}"))?;
    let (prefix, rest) = glob.partition();
    let start = root.join(&prefix);

    let Ok(start_meta) = std::fs::symlink_metadata(&start) else {
        trace!(pattern, prefix = %prefix.display(), "pattern prefix does not exist");
        return Ok(Vec::new());
    };

    // A fully literal pattern names one entry.
    let Some(rest) = rest else {
        if prefix.as_os_str().is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![PatternMatch::new(root, prefix, start_meta.is_dir())]);
    };

    let mut matches = Vec::new();
    for entry_result in build_walker(&start, dot_components(pattern)).build() {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }

        let Ok(below_prefix) = entry.path().strip_prefix(&start) else {
            continue;
        };
        if !rest.is_match(below_prefix) {
            continue;
        }

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        matches.push(PatternMatch::new(root, prefix.join(below_prefix), is_dir));
    }

    matches.sort_by(|a, b| a.path.cmp(&b.path));
    trace!(pattern, count = matches.len(), "expanded pattern");
    Ok(matches)
}

/// Finds regular files matching a glob pattern; directories are skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The root directory does not exist.
/// - The glob pattern is invalid.
pub fn find_files<P: AsRef<Path>>(root: P, pattern: &str) -> Result<Vec<PatternMatch>> {
    Ok(expand_pattern(root, pattern)?
        .into_iter()
        .filter(|m| m.kind() == MatchKind::File && m.path().is_file())
        .collect())
}
