// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()                          is_startable()
//!   |                              |
//!   v                              v
//! build_command()             build_command() (quiet)
//! args, cwd, env, stdio            |
//!   |                              v
//!   v                          spawn() ok? --> true / false
//! spawn() --> SpawnFailed
//!   |
//!   v
//! run_child() (io.rs)
//!   |
//!   v
//! exit_code != 0 --> NonZeroExit
//!   |
//!   v
//! ProcessOutput { exit_code }
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Program file name, used to tag forwarded output.
    fn display_name(&self) -> String {
        self.program().file_name().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string, quoting arguments with spaces.
    ///
    /// Non-UTF-8 arguments are shown lossily; the child still receives them
    /// unchanged.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program().display().to_string();
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The process cannot be spawned (`ProcessError::SpawnFailed`).
    /// - The exit code is not 0 (`ProcessError::NonZeroExit`).
    /// - Waiting for the process fails.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        for (key, value) in self.env_vars() {
            debug!(key = %key, value = %value, "env");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let mut child = command
            .spawn()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = self.run_child(&name, &mut child).await?;

        if !output.success() {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: output.exit_code(),
            }
            .into());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Checks whether the program can be started.
    ///
    /// Output is discarded and the exit status ignored: a program that runs
    /// but rejects its arguments is still present.
    pub async fn is_startable(self) -> bool {
        let cmd_line = self.command_line();
        let mut command = self.quiet().build_command();

        match command.spawn() {
            Ok(mut child) => {
                let status = child.wait().await;
                trace!(cmd = %cmd_line, status = ?status.ok(), "startable");
                true
            }
            Err(e) => {
                trace!(cmd = %cmd_line, error = %e, "not startable");
                false
            }
        }
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.envs(self.env_vars());

        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_stream()));
        command.stderr(Self::stdio_from_flags(self.stderr_stream()));
        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}
