// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task command arguments.

use clap::Args;

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, Args)]
pub struct BuildArgs {
    /// Passes --reconfigure to `meson setup`, for an already configured
    /// build directory.
    #[arg(short = 'r', long)]
    pub reconfigure: bool,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CleanArgs {
    /// Additional glob pattern to remove, relative to the project root.
    #[arg(short = 'e', long, value_name = "PATTERN")]
    pub extra: Option<String>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Tasks to run, in order. Aliases from the configuration and globs
    /// like 'l*' are supported.
    #[arg(value_name = "TASK", required = true)]
    pub tasks: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Shows only aliases.
    #[arg(short = 'i', long)]
    pub aliases: bool,
}

/// Arguments for the `options` command.
#[derive(Debug, Clone, Default, Args)]
pub struct OptionsArgs {
    /// Prints the configuration as JSON.
    #[arg(long)]
    pub json: bool,
}
