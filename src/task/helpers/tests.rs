// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{TaskContext, ensure_dir, remove_match};
use crate::config::Config;
use crate::task::tools::test_utils::run_with_logs;
use crate::utility::fs::walk::expand_pattern;
use std::sync::Arc;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("minitask-helpers")
        .tempdir()
        .expect("failed to create temp dir")
}

fn test_context() -> (TempDir, TaskContext) {
    let temp = temp_dir();
    let ctx = TaskContext::new(Arc::new(Config::default()));
    (temp, ctx)
}

#[tokio::test]
async fn ensure_dir_creates_nested_directory() {
    let (temp, ctx) = test_context();
    let new_dir = temp.path().join("build/deep");

    ensure_dir(&ctx, &new_dir, "build directory")
        .await
        .expect("should create dir");

    assert!(new_dir.is_dir());
    // Existing directories are left alone.
    ensure_dir(&ctx, &new_dir, "build directory").await.unwrap();
}

#[tokio::test]
async fn ensure_dir_dry_run_does_not_create() {
    let (temp, ctx) = test_context();
    let ctx = ctx.with_dry_run(true);
    let new_dir = temp.path().join("subdir");

    ensure_dir(&ctx, &new_dir, "test directory")
        .await
        .expect("should succeed");

    assert!(!new_dir.exists());
}

#[tokio::test(flavor = "current_thread")]
async fn remove_match_removes_files_and_trees() {
    let (temp, ctx) = test_context();
    std::fs::create_dir_all(temp.path().join("build/sub")).unwrap();
    std::fs::write(temp.path().join("build/sub/x.o"), "").unwrap();
    std::fs::write(temp.path().join("build/a.o"), "").unwrap();

    let matches = expand_pattern(temp.path(), "build/*").unwrap();
    let logs = run_with_logs(|| async {
        for entry in &matches {
            remove_match(&ctx, entry).await?;
        }
        Ok(())
    })
    .await
    .unwrap();

    insta::assert_snapshot!(logs.trim(), @r"
    Removed file build/a.o
    Removed directory build/sub
    ");
    assert!(temp.path().join("build").is_dir());
    assert_eq!(std::fs::read_dir(temp.path().join("build")).unwrap().count(), 0);
}

#[tokio::test]
async fn remove_match_skips_vanished_entries() {
    let (temp, ctx) = test_context();
    std::fs::create_dir_all(temp.path().join("build/sub")).unwrap();
    std::fs::write(temp.path().join("build/sub/old~"), "").unwrap();

    let nested = expand_pattern(temp.path(), "**/*~").unwrap();
    assert_eq!(nested.len(), 1);

    std::fs::remove_dir_all(temp.path().join("build/sub")).unwrap();
    remove_match(&ctx, &nested[0]).await.unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn remove_match_dry_run_keeps_files() {
    let (temp, ctx) = test_context();
    let ctx = ctx.with_dry_run(true);
    std::fs::write(temp.path().join("notes~"), "").unwrap();

    let matches = expand_pattern(temp.path(), "*~").unwrap();
    let logs = run_with_logs(|| async { remove_match(&ctx, &matches[0]).await })
        .await
        .unwrap();

    insta::assert_snapshot!(logs.trim(), @"[dry-run] Would remove file notes~");
    assert!(temp.path().join("notes~").exists());
}
