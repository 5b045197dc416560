// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use super::{ClangFormatTool, ClangTidyTool};
use crate::config::{Config, PathsConfig};
use crate::error::ProcessError;
use crate::task::tools::test_utils::{normalize_logs, run_with_logs};
use crate::task::tools::{Tool, ToolContext};

fn dry_run_context() -> ToolContext {
    let mut config = Config::default();
    config.paths = PathsConfig::with_root("/work/project");
    ToolContext::new(Arc::new(config), true)
}

#[tokio::test(flavor = "current_thread")]
async fn test_clang_tidy_dry_run() -> Result<()> {
    let logs = run_with_logs(|| async {
        ClangTidyTool::new("src/main.c")
            .run(&dry_run_context())
            .await
    })
    .await?;

    insta::assert_snapshot!(
        normalize_logs(&logs, Path::new("/work/project")),
        @"[dry-run] Would lint file=src/main.c build=<root>/build"
    );
    Ok(())
}

#[tokio::test(flavor = "current_thread")]
async fn test_clang_format_dry_run() -> Result<()> {
    let logs = run_with_logs(|| async {
        ClangFormatTool::new("src/util/helper.h")
            .run(&dry_run_context())
            .await
    })
    .await?;

    insta::assert_snapshot!(logs.trim(), @"[dry-run] Would format file=src/util/helper.h");
    Ok(())
}

#[test]
fn test_tool_names() {
    assert_eq!(ClangTidyTool::new("a.c").name(), "clang-tidy");
    assert_eq!(ClangFormatTool::new("a.c").name(), "clang-format");
}

#[cfg(unix)]
#[tokio::test]
async fn test_clang_tidy_failure_names_file() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.clang_tidy = PathBuf::from("false");
    config.paths = PathsConfig::with_root(temp.path());
    let ctx = ToolContext::new(Arc::new(config), false);

    let err = ClangTidyTool::new("src/bad.c")
        .run(&ctx)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "clang-tidy failed on src/bad.c");
    assert!(err.downcast_ref::<ProcessError>().is_some());
}

#[cfg(unix)]
#[tokio::test]
async fn test_clang_format_success() {
    let temp = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.tools.clang_format = PathBuf::from("true");
    config.paths = PathsConfig::with_root(temp.path());
    let ctx = ToolContext::new(Arc::new(config), false);

    ClangFormatTool::new("src/main.c").run(&ctx).await.unwrap();
}
