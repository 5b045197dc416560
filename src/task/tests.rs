// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{TASK_NAMES, Task, TaskContext, Taskable};
use crate::config::Config;
use std::sync::Arc;

fn test_config() -> Arc<Config> {
    Arc::new(Config::default())
}

#[test]
fn test_task_context_creation() {
    let ctx = TaskContext::new(test_config());
    assert!(!ctx.is_dry_run());
    assert!(!ctx.tool_context().is_dry_run());
}

#[test]
fn test_task_context_dry_run_reaches_tools() {
    let ctx = TaskContext::new(test_config()).with_dry_run(true);
    assert!(ctx.is_dry_run());
    assert!(ctx.tool_context().is_dry_run());
    assert!(Arc::ptr_eq(ctx.config(), ctx.tool_context().config()));
}

#[test]
fn test_task_from_name() {
    for name in TASK_NAMES {
        let task = Task::from_name(name).unwrap();
        assert_eq!(task.name(), *name);
    }
    assert!(Task::from_name("deploy").is_none());
    assert!(Task::from_name("Build").is_none());
}

#[test]
fn test_task_all_in_listing_order() {
    let names: Vec<_> = Task::all().iter().map(|t| t.name().to_string()).collect();
    insta::assert_debug_snapshot!(names, @r#"
    [
        "install",
        "build",
        "lint",
        "format",
        "clean",
        "test",
    ]
    "#);
}

#[test]
fn test_task_descriptions() {
    for task in Task::all() {
        assert!(!task.description().is_empty(), "{}", task.name());
    }
}
