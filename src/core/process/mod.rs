// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::new("meson")
//!   .args() .cwd() .env_var() .quiet()
//!   .run() / .is_startable()
//!       --> tokio::process::Command
//!           stream stdout/stderr to the log
//!       --> ProcessOutput { exit_code }
//! ```

pub mod builder;
mod io;
mod runner;
#[cfg(test)]
mod tests;
