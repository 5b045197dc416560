// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Task registry for resolving task names and aliases.
//!
//! ```text
//! input ["check", "f*"]
//!   resolve_aliases: "check" --> [build, lint]
//!   match_pattern:   "f*"    --> [format]
//!   dedupe + preserve order  --> [build, lint, format]
//! ```

use std::collections::BTreeSet;

use crate::error::{Result, TaskError};
use anyhow::Context;
use tracing::warn;
use wax::{Glob, Program};

use crate::config::types::Aliases;

/// Registry for looking up tasks by name or pattern.
pub struct TaskRegistry {
    /// Available task names.
    task_names: BTreeSet<String>,

    /// Aliases mapping names to task lists.
    aliases: Aliases,
}

impl TaskRegistry {
    /// Creates a new `TaskRegistry`.
    #[must_use]
    pub const fn new(aliases: Aliases) -> Self {
        Self {
            task_names: BTreeSet::new(),
            aliases,
        }
    }

    /// Registers a task name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.task_names.insert(name.into());
    }

    /// Registers multiple task names.
    pub fn register_all(&mut self, names: impl IntoIterator<Item = impl Into<String>>) {
        for name in names {
            self.task_names.insert(name.into());
        }
    }

    /// Returns all registered task names.
    #[must_use]
    pub const fn all_tasks(&self) -> &BTreeSet<String> {
        &self.task_names
    }

    /// Returns the configured aliases.
    #[must_use]
    pub const fn aliases(&self) -> &Aliases {
        &self.aliases
    }

    /// Resolves aliases in a list of task patterns.
    ///
    /// Aliases expand recursively to their targets; everything else is
    /// returned as-is. An alias reached again while it is being expanded
    /// is dropped with a warning.
    #[must_use]
    pub fn resolve_aliases(&self, patterns: &[String]) -> Vec<String> {
        let mut result = Vec::new();
        let mut expanding = Vec::new();
        self.expand_into(patterns, &mut expanding, &mut result);
        result
    }

    fn expand_into<'a>(
        &'a self,
        patterns: &'a [String],
        expanding: &mut Vec<&'a str>,
        result: &mut Vec<String>,
    ) {
        for pattern in patterns {
            let Some(targets) = self.aliases.get(pattern) else {
                result.push(pattern.clone());
                continue;
            };

            if expanding.contains(&pattern.as_str()) {
                warn!(alias = %pattern, "Alias cycle, skipping");
                continue;
            }

            expanding.push(pattern);
            self.expand_into(targets, expanding, result);
            expanding.pop();
        }
    }

    /// Matches a glob pattern against registered task names.
    ///
    /// # Examples
    ///
    /// - `"*"` matches all tasks
    /// - `"l*"` matches "lint"
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid glob.
    pub fn match_pattern(&self, pattern: &str) -> Result<Vec<String>> {
        if self.task_names.contains(pattern) {
            return Ok(vec![pattern.to_string()]);
        }

        let glob =
            Glob::new(pattern).with_context(|| format!("invalid task pattern '{pattern}'"))?;

        let matched: Vec<String> = self
            .task_names
            .iter()
            .filter(|name| glob.is_match(name.as_str()))
            .cloned()
            .collect();

        Ok(matched)
    }

    /// Resolves task names, globs and aliases to concrete task names.
    ///
    /// Expands aliases, matches names and globs, and deduplicates while
    /// keeping first-seen order. Entries matching nothing are warned about.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is an invalid glob, or
    /// `TaskError::NotFound` if no entry matched any task.
    pub fn resolve(&self, specs: &[String]) -> Result<Vec<String>> {
        let expanded = self.resolve_aliases(specs);

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in &expanded {
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                warn!(pattern = %pattern, "Pattern matched no tasks");
            }

            for name in matches {
                if seen.insert(name.clone()) {
                    result.push(name);
                }
            }
        }

        if result.is_empty() {
            return Err(TaskError::NotFound(specs.join(", ")).into());
        }

        Ok(result)
    }
}
