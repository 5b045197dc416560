// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concrete task implementations.
//!
//! ```text
//! task::tasks
//! Setup:   InstallTask  check --> package manager
//! Build:   BuildTask    mkdir --> meson setup --> meson compile
//!          TestTask     meson test
//! Sources: LintTask     clang-tidy per file
//!          FormatTask   clang-format -i per file
//! Cleanup: CleanTask    glob --> remove
//! ```

pub mod build;
pub mod clean;
pub mod format;
pub mod install;
pub mod lint;
pub mod testsuite;
