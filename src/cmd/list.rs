// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for minitask.

use crate::cli::task::ListArgs;
use crate::config::Config;
use crate::task::{Task, Taskable};

/// Lines printed by `list`: tasks with descriptions, or aliases.
#[must_use]
pub fn list_lines(args: &ListArgs, config: &Config) -> Vec<String> {
    if args.aliases {
        if config.aliases.is_empty() {
            return vec!["No aliases defined".to_string()];
        }
        return config
            .aliases
            .iter()
            .map(|(name, targets)| format!("{} = {}", name, targets.join(", ")))
            .collect();
    }

    let tasks = Task::all();
    let width = tasks.iter().map(|t| t.name().len()).max().unwrap_or(0);
    tasks
        .iter()
        .map(|t| format!("{:<width$}  {}", t.name(), t.description()))
        .collect()
}

/// Main handler for list command.
pub fn run_list_command(args: &ListArgs, config: &Config) {
    for line in list_lines(args, config) {
        println!("{line}");
    }
}
