// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::ProcessBuilder;
use crate::error::ProcessError;

#[cfg(unix)]
fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("sh").arg("-c").arg(script)
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_success() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    assert_eq!(output.exit_code(), 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = sh("exit 3").run().await.unwrap_err();
    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert!(matches!(
        process_err,
        ProcessError::NonZeroExit { code: 3, .. }
    ));
    insta::assert_snapshot!(err.to_string(), @r#"command 'sh -c "exit 3"' failed with exit code 3"#);
}

#[tokio::test]
async fn test_process_spawn_failure() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .unwrap_err();
    let process_err = err.downcast_ref::<ProcessError>().unwrap();
    assert!(matches!(process_err, ProcessError::SpawnFailed { .. }));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_env_var_and_cwd() {
    let temp = tempfile::tempdir().unwrap();
    sh("echo \"$CC\" > out.txt && pwd >> out.txt")
        .env_var("CC", "clang-19")
        .cwd(temp.path())
        .run()
        .await
        .expect("process should succeed");

    let written = std::fs::read_to_string(temp.path().join("out.txt")).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("clang-19"));
    let cwd = std::path::PathBuf::from(lines.next().unwrap());
    assert_eq!(
        cwd.canonicalize().unwrap(),
        temp.path().canonicalize().unwrap()
    );
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn test_process_passes_non_utf8_arguments_unchanged() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = tempfile::tempdir().unwrap();
    let name = OsStr::from_bytes(b"bad\xff.c");
    std::fs::write(temp.path().join(name), "").unwrap();

    let builder = sh("test -f \"$1\"").arg("sh").arg(name).cwd(temp.path());
    assert!(
        builder.command_line().ends_with(" sh bad\u{fffd}.c"),
        "{}",
        builder.command_line()
    );
    builder
        .run()
        .await
        .expect("the exact file name reaches the child");
}

#[cfg(unix)]
#[tokio::test]
async fn test_is_startable() {
    // `sh` may reject --version; it still counts as present.
    assert!(ProcessBuilder::new("sh").arg("--version").is_startable().await);
    assert!(
        !ProcessBuilder::new("nonexistent_program_12345")
            .arg("--version")
            .is_startable()
            .await
    );
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("clang-tidy-19")
        .args(["-p", "/work/my project/build"])
        .arg("src/main.c");
    insta::assert_snapshot!(
        builder.command_line(),
        @r#"clang-tidy-19 -p "/work/my project/build" src/main.c"#
    );
}

#[cfg(unix)]
#[test]
fn test_executable_lookup_found() {
    let path = ProcessBuilder::find("sh").unwrap();
    assert!(path.exists());
    // Second lookup is served from the cache.
    assert_eq!(ProcessBuilder::find("sh"), Some(path));
}

#[test]
fn test_executable_lookup_not_found() {
    assert!(ProcessBuilder::find("nonexistent_program_12345").is_none());
}
