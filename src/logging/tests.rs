// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::sync::{Arc, Mutex};

use super::{FAILURE_TARGET, LogConfig, LogLevel, StatusFormat, console_filter};
use tracing::{debug, error, info, warn};
use tracing_subscriber::fmt;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture(color: bool, f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = fmt::Subscriber::builder()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .event_format(StatusFormat::new(color))
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(0).is_ok());
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(9), None);
    assert!(LogLevel::WARN < LogLevel::INFO);
}

#[test]
fn test_filter_strings_scope_verbosity_to_crate() {
    let filters: Vec<_> = (0..=6)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "warn,minitask=info",
        "warn,minitask=debug",
        "warn,minitask=trace",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::DEBUG);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());

    let config = LogConfig::builder().with_color(false).build();
    assert!(!config.use_color());
}

#[test]
fn test_log_level_deserialize_rejects_out_of_range() {
    let ok: LogLevel = serde_json::from_str("5").unwrap();
    assert_eq!(ok, LogLevel::TRACE);

    let err = serde_json::from_str::<LogLevel>("12").unwrap_err();
    assert!(err.to_string().contains("log level must be 0-6"));
}

#[test]
fn test_status_format_plain() {
    let output = capture(false, || {
        info!("Building...");
        warn!("meson not found. Installing meson...");
        debug!(cwd = %"/srv/project", "exec");
        error!("meson setup failed");
    });

    insta::assert_snapshot!(output, @r"
    Building...
    meson not found. Installing meson...
    [DEBUG] exec cwd=/srv/project
    error: meson setup failed
    ");
}

#[test]
fn test_status_format_colored() {
    let output = capture(true, || {
        info!("Build done");
        error!("boom");
    });

    assert_eq!(output, "\x1b[32mBuild done\x1b[0m\n\x1b[31merror: boom\x1b[0m\n");
}

#[test]
fn test_console_filter_drops_failure_target() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = fmt::Subscriber::builder()
        .with_writer(move || writer.clone())
        .with_env_filter(console_filter(LogLevel::INFO))
        .with_ansi(false)
        .event_format(StatusFormat::new(false))
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        info!("Building...");
        error!(target: FAILURE_TARGET, "task 'build' failed");
        error!("meson setup failed");
    });

    let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    insta::assert_snapshot!(output.trim(), @r"
    Building...
    error: meson setup failed
    ");
}
