// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for minitask using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! minitask [global options] <command>
//! install
//! build [--reconfigure]
//! lint
//! format
//! clean [--extra PATTERN]
//! test
//! run <TASK>...
//! list [--aliases]
//! options [--json]
//! version
//! ```

pub mod global;
pub mod task;


use crate::cli::global::GlobalOptions;
use crate::cli::task::{BuildArgs, CleanArgs, ListArgs, OptionsArgs, RunArgs};
use clap::{Parser, Subcommand};

/// Developer task runner for meson/clang C projects.
#[derive(Debug, Parser)]
#[command(
    name = "minitask",
    author,
    version,
    about = "Developer task runner",
    long_about = "minitask Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Installs the toolchain, builds with meson, lints with clang-tidy,\n\
                  formats with clang-format and cleans build output.\n\n\
                  Do `minitask run clean build lint` to chain tasks. See\n\
                  `minitask <command> --help` for more information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  minitask reads `minitask.toml` from the project root (the current\n\
                  directory unless --root is given) when it exists. Files given with\n\
                  --config are loaded after it, then MINITASK_SECTION__KEY environment\n\
                  variables, then --set overrides and the other command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Installs missing build tools with the system package manager.
    Install,

    /// Configures the build directory with meson and compiles.
    Build(BuildArgs),

    /// Runs clang-tidy on the source files.
    Lint,

    /// Formats the source files in place with clang-format.
    Format,

    /// Removes build output and editor backup files.
    Clean(CleanArgs),

    /// Runs the meson test suite.
    Test,

    /// Runs several tasks in order.
    Run(RunArgs),

    /// Lists available tasks.
    List(ListArgs),

    /// Lists all options and their values.
    Options(OptionsArgs),

    /// Shows the version and the tools found in PATH.
    Version,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
