// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          MinitaskError (~24 bytes)
//!                  |
//!   +------+-------+------+------+
//!   |      |       |      |      |
//!   v      v       v      v      v
//! Bail   Cfg     Task   Proc    Fs
//! str    Box     Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  InvalidValue, InvalidOverride
//!   Task    NotFound, InstallFailed
//!   Process SpawnFailed, NonZeroExit, OutputError
//!   Fs      NotFound, PermissionDenied, IoError
//!
//! All variants boxed => MinitaskError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MinitaskError`].
pub type MinitaskResult<T> = std::result::Result<T, MinitaskError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MinitaskError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Task execution error.
    #[error("task error: {0}")]
    Task(#[from] Box<TaskError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

/// Create a fatal [`MinitaskError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> MinitaskError {
    MinitaskError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MinitaskError {
                fn from(err: $error) -> Self {
                    MinitaskError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    TaskError => Task,
    ProcessError => Process,
    FsError => Fs,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}', expected 'section.key=value'")]
    InvalidOverride(String),
}

// --- Task Errors ---

/// Task execution errors.
#[derive(Debug, Error)]
pub enum TaskError {
    /// No task matched the given names.
    #[error("no task matches '{0}'")]
    NotFound(String),

    /// One or more dependencies could not be installed.
    #[error("failed to install {}", packages.join(", "))]
    InstallFailed { packages: Vec<String> },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a non-zero status.
    #[error("command '{command}' failed with exit code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while operating on `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
