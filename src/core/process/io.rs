// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for processes.
//!
//! ```text
//! run_child()
//!   join!( read stdout, read stderr, wait )
//!   FORWARD_TO_LOG --> info! per line
//!   --> ProcessOutput { exit_code }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tracing::{info, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result};

impl ProcessBuilder {
    /// Drains both output streams while waiting for the child to exit.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let ((), (), status) = tokio::join!(
            forward_stream(stdout, self.stdout_stream(), name),
            forward_stream(stderr, self.stderr_stream(), name),
            child.wait(),
        );
        let status = status.map_err(|e| ProcessError::OutputError {
            command: name.to_string(),
            message: e.to_string(),
        })?;

        Ok(ProcessOutput::new(status.code().unwrap_or(-1)))
    }
}

/// Reads a stream line by line, forwarding each line to the log.
///
/// Invalid UTF-8 is replaced rather than aborting the read.
async fn forward_stream<R>(reader: Option<R>, flags: StreamFlags, process_name: &str)
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return;
    };

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    let text = String::from_utf8_lossy(&buf);
                    info!(process = %process_name, "{}", text.trim_end_matches(['\n', '\r']));
                }
            }
            Err(e) => {
                warn!(process = %process_name, error = %e, "error reading stream");
                break;
            }
        }
    }
}
