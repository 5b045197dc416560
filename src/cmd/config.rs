// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for minitask.

use crate::cli::task::OptionsArgs;
use crate::config::Config;
use crate::error::Result;
use anyhow::Context;

/// Display current configuration options.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized to JSON.
pub fn run_options_command(args: &OptionsArgs, config: &Config) -> Result<()> {
    if args.json {
        let json =
            serde_json::to_string_pretty(config).context("failed to serialize configuration")?;
        println!("{json}");
        return Ok(());
    }

    for line in config.format_options() {
        println!("{line}");
    }
    Ok(())
}
