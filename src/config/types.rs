// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for minitask.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, PathsConfig, ToolsConfig, InstallConfig,
//!         SourcesConfig, CleanConfig
//! Aliases: alias name --> [task list]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Task aliases: alias name to the task names (or other aliases) it expands to.
pub type Aliases = BTreeMap<String, Vec<String>>;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log what would be done without running tools or touching files.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (no file log when unset).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::DEBUG,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// External tool executables, located via `PATH` unless given as paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    /// Build generator and driver.
    pub meson: PathBuf,
    /// C compiler handed to `meson setup` through `CC`.
    pub compiler: String,
    /// Static analyzer.
    pub clang_tidy: PathBuf,
    /// Code formatter.
    pub clang_format: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            meson: PathBuf::from("meson"),
            compiler: "clang-19".to_string(),
            clang_tidy: PathBuf::from("clang-tidy-19"),
            clang_format: PathBuf::from("clang-format-19"),
        }
    }
}

/// A tool the project needs and the package that provides it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// Executable started with the version flag to check presence.
    pub command: String,
    /// Package handed to the package manager when the command is missing.
    pub package: String,
}

impl Dependency {
    #[must_use]
    pub fn new(command: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            package: package.into(),
        }
    }
}

/// Dependency installation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallConfig {
    /// Install command prefix; the package name is appended.
    pub command: Vec<String>,
    /// Flag passed when probing whether a dependency is present.
    pub version_flag: String,
    /// Dependencies, checked in order.
    pub dependencies: Vec<Dependency>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: ["sudo", "apt-get", "install", "-y"]
                .into_iter()
                .map(String::from)
                .collect(),
            version_flag: "--version".to_string(),
            dependencies: ["meson", "clang-19", "clang-format-19", "clang-tidy-19"]
                .into_iter()
                .map(|name| Dependency::new(name, name))
                .collect(),
        }
    }
}

/// Source files handled by `lint` and `format`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    /// Glob patterns relative to the project root.
    pub patterns: Vec<String>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            patterns: vec!["src/**/*.c".to_string(), "src/**/*.h".to_string()],
        }
    }
}

/// Artifacts removed by `clean`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Glob patterns relative to the project root.
    pub patterns: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            patterns: ["build/*", "**/*~", "**/#*", "*~", "#*"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}
