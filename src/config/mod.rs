// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for minitask.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. minitask.toml (project root, optional)
//! 3. --config FILE (repeatable)
//! 4. MINITASK_* env vars
//! 5. --set section.key=value
//! 6. CLI flags (--dry, --root, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MINITASK_GLOBAL__DRY=true          → global.dry = true
//! MINITASK_PATHS__BUILD=out          → paths.build = "out"
//! MINITASK_TOOLS__CLANG_TIDY=tidy-18 → tools.clang_tidy = "tidy-18"
//! ```
//!
//! # Example
//!
//! ```toml
//! [tools]
//! compiler = "clang-18"
//!
//! [[install.dependencies]]
//! command = "ninja"
//! package = "ninja-build"
//!
//! [aliases]
//! check = ["build", "lint"]
//! ```
//!
//! The configuration is an explicit value handed to every task; nothing
//! reads paths or tool names from process-wide state.

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

pub use loader::ConfigLoader;
pub use paths::PathsConfig;
use types::{Aliases, CleanConfig, GlobalConfig, InstallConfig, SourcesConfig, ToolsConfig};

/// Name of the configuration file picked up from the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "minitask.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "MINITASK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project layout.
    pub paths: PathsConfig,
    /// External tool executables.
    pub tools: ToolsConfig,
    /// Dependency installation.
    pub install: InstallConfig,
    /// Files handled by lint and format.
    pub sources: SourcesConfig,
    /// Artifacts removed by clean.
    pub clean: CleanConfig,
    /// Task aliases for `run`.
    pub aliases: Aliases,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use minitask::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("minitask.toml")
    ///     .with_env_prefix("MINITASK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory is unavailable, the install
    /// command is empty, or a source/clean pattern is not a valid glob.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve()?;
        self.validate()?;
        Ok(())
    }

    /// Checks values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` describing the first problem found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.install.command.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "install".to_string(),
                key: "command".to_string(),
                message: "install command must not be empty".to_string(),
            });
        }

        validate_patterns("sources", &self.sources.patterns)?;
        validate_patterns("clean", &self.clean.patterns)?;

        for (alias, targets) in &self.aliases {
            if targets.iter().any(|target| target == alias) {
                return Err(ConfigError::InvalidValue {
                    section: "aliases".to_string(),
                    key: alias.clone(),
                    message: "alias refers to itself".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_paths_options(&mut options);
        self.format_tools_options(&mut options);
        self.format_install_options(&mut options);

        options.insert("sources.patterns".into(), self.sources.patterns.join(", "));
        options.insert("clean.patterns".into(), self.clean.patterns.join(", "));
        for (name, targets) in &self.aliases {
            options.insert(format!("aliases.{name}"), targets.join(", "));
        }

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.root".into(),
            self.paths.root().display().to_string(),
        );
        options.insert("paths.src".into(), self.paths.src().display().to_string());
        options.insert(
            "paths.build".into(),
            self.paths.build().display().to_string(),
        );
        options.insert("paths.test".into(), self.paths.test().display().to_string());
    }

    fn format_tools_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("tools.meson".into(), self.tools.meson.display().to_string());
        options.insert("tools.compiler".into(), self.tools.compiler.clone());
        options.insert(
            "tools.clang_tidy".into(),
            self.tools.clang_tidy.display().to_string(),
        );
        options.insert(
            "tools.clang_format".into(),
            self.tools.clang_format.display().to_string(),
        );
    }

    fn format_install_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("install.command".into(), self.install.command.join(" "));
        options.insert(
            "install.version_flag".into(),
            self.install.version_flag.clone(),
        );
        options.insert(
            "install.dependencies".into(),
            self.install
                .dependencies
                .iter()
                .map(|dep| format!("{} ({})", dep.command, dep.package))
                .collect::<Vec<_>>()
                .join(", "),
        );
    }
}

fn validate_patterns(section: &str, patterns: &[String]) -> std::result::Result<(), ConfigError> {
    for pattern in patterns {
        if let Err(e) = wax::Glob::new(pattern) {
            return Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: "patterns".to_string(),
                message: format!("invalid glob '{pattern}': {e}"),
            });
        }
    }
    Ok(())
}
