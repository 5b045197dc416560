// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  expand_pattern()  glob --> sorted PatternMatch (file/dir)
//!        find_files()      files only
//!        dot components    the only way into hidden entries
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
