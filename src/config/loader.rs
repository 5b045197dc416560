// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_project_file(--root)     <root>/minitask.toml, optional
//!   .add_toml_file(--config)      required, repeatable
//!   .with_env_prefix("MINITASK")  MINITASK_SECTION__KEY, known sections only
//!   .set_overrides(--set, flags)  section.key=value
//!        |
//!        v
//!    build() --> Config (paths resolved, validated)
//! ```

use std::path::Path;

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File, FileFormat, Map};

use super::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{ConfigError, Result};

/// Sections an environment variable may address.
const ENV_SECTIONS: &[&str] = &[
    "global", "paths", "tools", "install", "sources", "clean", "aliases",
];

/// Keys whose environment value is a space-separated list.
const ENV_LIST_KEYS: &[&str] = &["install.command", "sources.patterns", "clean.patterns"];

/// Builder for loading configuration from multiple sources.
///
/// Sources added later win; overrides win over every source.
pub struct ConfigLoader {
    builder: ConfigBuilder<DefaultState>,
    env_prefix: Option<String>,
    env_vars: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            env_vars: None,
        }
    }

    fn add_file(mut self, path: &Path, required: bool) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path).format(FileFormat::Toml).required(required));
        self
    }

    /// Adds a TOML file that must exist when `build()` runs.
    #[must_use]
    pub fn add_toml_file(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), true)
    }

    /// Adds a TOML file that is skipped when missing.
    #[must_use]
    pub fn add_toml_file_optional(self, path: impl AsRef<Path>) -> Self {
        self.add_file(path.as_ref(), false)
    }

    /// Adds `minitask.toml` from the project root (current directory when
    /// `root` is `None`), if present.
    #[must_use]
    pub fn add_project_file(self, root: Option<&Path>) -> Self {
        let root = root.unwrap_or_else(|| Path::new("."));
        self.add_toml_file_optional(root.join(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Reads `<PREFIX>_SECTION__KEY` environment variables.
    ///
    /// Sections and keys are separated by a double underscore so keys that
    /// contain underscores survive: `MINITASK_TOOLS__CLANG_TIDY=clang-tidy`.
    /// Variables that do not name a known section (`MINITASK_HOME`) are
    /// left alone. List keys and aliases take space-separated values:
    /// `MINITASK_SOURCES__PATTERNS="lib/*.c lib/*.h"`.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Uses `vars` instead of the process environment.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Applies `section.key=value` overrides, in order.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` for an entry without `=` or
    /// with an empty key.
    pub fn set_overrides(mut self, overrides: &[String]) -> Result<Self> {
        for entry in overrides {
            let (key, value) = entry
                .split_once('=')
                .map(|(key, value)| (key.trim(), value.trim()))
                .filter(|(key, _)| !key.is_empty())
                .ok_or_else(|| ConfigError::InvalidOverride(entry.clone()))?;

            self.builder = self
                .builder
                .set_override(key, value)
                .map_err(|e| anyhow::anyhow!("invalid override '{entry}': {e}"))?;
        }
        Ok(self)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required configuration file is missing.
    /// - A configuration file has invalid TOML syntax.
    /// - The merged configuration does not match the `Config` structure.
    /// - Validation fails (empty install command, invalid glob patterns).
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => {
                let vars = self.env_vars.unwrap_or_else(|| {
                    std::env::vars_os()
                        .filter_map(|(key, value)| {
                            Some((key.into_string().ok()?, value.into_string().ok()?))
                        })
                        .collect()
                });
                self.builder.add_source(env_source(prefix, vars))
            }
            None => self.builder,
        };
        let mut config: Config = builder.build()?.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }
}

/// Maps `<prefix>_section__key` to `section.key`, or `None` when the
/// variable does not address a known section.
fn env_key(prefix: &str, var: &str) -> Option<String> {
    let var = var.to_lowercase();
    let rest = var.strip_prefix(&prefix.to_lowercase())?.strip_prefix('_')?;
    let (section, key) = rest.split_once("__")?;
    (ENV_SECTIONS.contains(&section) && !key.is_empty()).then(|| rest.replace("__", "."))
}

fn env_source(prefix: &str, vars: Map<String, String>) -> Environment {
    let vars: Map<String, String> = vars
        .into_iter()
        .filter(|(var, _)| env_key(prefix, var).is_some())
        .collect();

    let mut source = Environment::with_prefix(prefix)
        .prefix_separator("_")
        .separator("__")
        .list_separator(" ")
        .try_parsing(true);

    let alias_keys = vars
        .keys()
        .filter_map(|var| env_key(prefix, var))
        .filter(|key| key.starts_with("aliases."));
    for key in ENV_LIST_KEYS
        .iter()
        .map(ToString::to_string)
        .chain(alias_keys)
    {
        source = source.with_list_parse_key(&key);
    }

    source.source(Some(vars))
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
