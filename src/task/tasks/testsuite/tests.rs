// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::TestTask;
use crate::config::{Config, PathsConfig};
use crate::task::tools::test_utils::{normalize_logs, run_capturing_logs, run_with_logs};
use crate::task::{TaskContext, Taskable};

fn context(root: &Path, meson: &str, dry_run: bool) -> TaskContext {
    let mut config = Config::default();
    config.paths = PathsConfig::with_root(root);
    config.tools.meson = PathBuf::from(meson);
    TaskContext::new(Arc::new(config)).with_dry_run(dry_run)
}

#[test]
fn test_test_task_info() {
    assert_eq!(TestTask::new().name(), "test");
    assert!(!TestTask::new().description().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn test_test_dry_run_warns_on_missing_dir() {
    let temp = tempfile::tempdir().unwrap();
    let ctx = context(temp.path(), "meson", true);

    let logs = run_with_logs(|| async { TestTask::new().run(&ctx).await })
        .await
        .unwrap();

    insta::assert_snapshot!(normalize_logs(&logs, temp.path()), @r"
    Testing...
    Test directory not found path=<root>/test
    [dry-run] Would run meson tests build=<root>/build
    Tests done
    ");
}

#[cfg(unix)]
#[tokio::test(flavor = "current_thread")]
async fn test_test_propagates_failure() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::create_dir(temp.path().join("test")).unwrap();
    let ctx = context(temp.path(), "false", false);

    let (logs, result) = run_capturing_logs(|| async { TestTask::new().run(&ctx).await }).await;

    assert_eq!(result.unwrap_err().to_string(), "meson test failed");
    assert!(!logs.contains("Test directory not found"), "{logs}");
    assert!(!logs.contains("Tests done"), "{logs}");
}
