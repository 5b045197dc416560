// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test utilities for tool and task tests.
//!
//! Provides log-capturing infrastructure for testing status and dry-run output.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct BufferMakeWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl<'a> MakeWriter<'a> for BufferMakeWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter {
            buffer: self.buffer.clone(),
        }
    }
}

/// Runs an async closure while capturing INFO-and-above tracing output.
///
/// Returns the captured log output, one event per line, without timestamps,
/// levels or targets. The closure's error is returned as-is.
pub(crate) async fn run_with_logs<F, Fut>(f: F) -> Result<String>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let (logs, result) = run_capturing_logs(f).await;
    result.map(|()| logs)
}

/// Like [`run_with_logs`], but returns the logs even when the closure fails.
pub(crate) async fn run_capturing_logs<F, Fut>(f: F) -> (String, Result<()>)
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<()>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferMakeWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .without_time()
        .finish();

    let result = {
        let _guard = tracing::subscriber::set_default(subscriber);
        f().await
    };

    let logs = buffer
        .lock()
        .map(|guard| String::from_utf8_lossy(&guard).into_owned())
        .unwrap_or_default();
    (logs, result)
}

/// Trims every line and replaces `root` with `<root>` so snapshots are stable.
pub(crate) fn normalize_logs(logs: &str, root: &Path) -> String {
    let root = root.display().to_string();
    logs.lines()
        .map(|line| line.trim().replace(&root, "<root>"))
        .collect::<Vec<_>>()
        .join("\n")
}
