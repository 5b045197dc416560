// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version command implementation for minitask.

use std::path::Path;

use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;

/// Version line followed by where each configured tool resolves in PATH.
#[must_use]
pub fn version_lines(config: &Config) -> Vec<String> {
    let tools: [(&str, &Path); 4] = [
        ("meson", &config.tools.meson),
        ("compiler", Path::new(&config.tools.compiler)),
        ("clang-tidy", &config.tools.clang_tidy),
        ("clang-format", &config.tools.clang_format),
    ];

    let mut lines = vec![format!("minitask {}", env!("CARGO_PKG_VERSION"))];
    for (label, tool) in tools {
        let found = ProcessBuilder::find(&tool.to_string_lossy())
            .map_or_else(|| "not found".to_string(), |p| p.display().to_string());
        lines.push(format!("{label:<12} {} ({found})", tool.display()));
    }
    lines
}

/// Main handler for version command.
pub fn run_version_command(config: &Config) {
    for line in version_lines(config) {
        println!("{line}");
    }
}
