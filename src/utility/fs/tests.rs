// minitask: developer task runner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{MatchKind, expand_pattern, find_files};
use std::path::Path;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("minitask-walk")
        .tempdir()
        .expect("failed to create temp dir")
}

/// Lays out a small project tree with build output and editor leftovers.
fn project_tree() -> TempDir {
    let temp = temp_dir();
    let root = temp.path();
    for dir in ["build/sub", "src/util", "src/dir.c"] {
        std::fs::create_dir_all(root.join(dir)).unwrap();
    }
    for file in [
        "build/a.o",
        "build/sub/b.o",
        "build/.ninja_log",
        "src/main.c",
        "src/util/helper.c",
        "src/util/helper.h",
        "src/.hidden.c",
        "src/old.c~",
        "notes.txt~",
        "#scratch#",
    ] {
        std::fs::write(root.join(file), "").unwrap();
    }
    temp
}

fn relative_names(root: &Path, pattern: &str) -> Vec<(String, MatchKind)> {
    expand_pattern(root, pattern)
        .unwrap()
        .iter()
        .map(|m| (m.relative().display().to_string(), m.kind()))
        .collect()
}

#[test]
fn test_star_stays_in_one_directory() {
    let temp = project_tree();
    assert_eq!(
        relative_names(temp.path(), "build/*"),
        vec![
            ("build/a.o".to_string(), MatchKind::File),
            ("build/sub".to_string(), MatchKind::Directory),
        ]
    );
}

#[test]
fn test_double_star_matches_zero_or_more_directories() {
    let temp = project_tree();
    assert_eq!(
        relative_names(temp.path(), "**/*~"),
        vec![
            ("notes.txt~".to_string(), MatchKind::File),
            ("src/old.c~".to_string(), MatchKind::File),
        ]
    );
    assert_eq!(
        relative_names(temp.path(), "#*"),
        vec![("#scratch#".to_string(), MatchKind::File)]
    );
}

#[test]
fn test_find_files_skips_directories() {
    let temp = project_tree();

    let all = relative_names(temp.path(), "src/**/*.c");
    assert!(all.contains(&("src/dir.c".to_string(), MatchKind::Directory)));

    let files: Vec<_> = find_files(temp.path(), "src/**/*.c")
        .unwrap()
        .iter()
        .map(|m| m.relative().display().to_string())
        .collect();
    assert_eq!(files, ["src/main.c", "src/util/helper.c"]);
}

#[test]
fn test_matches_carry_full_paths() {
    let temp = project_tree();
    let matches = find_files(temp.path(), "src/**/*.h").unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].path(), temp.path().join("src/util/helper.h"));
    assert!(!matches[0].is_dir());
}

#[test]
fn test_wildcards_skip_hidden_entries() {
    let temp = project_tree();
    std::fs::create_dir_all(temp.path().join(".cache/objs")).unwrap();
    std::fs::write(temp.path().join(".cache/old~"), "").unwrap();

    assert_eq!(relative_names(temp.path(), "build/*").len(), 2);
    assert!(
        relative_names(temp.path(), "**/*~")
            .iter()
            .all(|(name, _)| !name.starts_with(".cache"))
    );
}

#[test]
fn test_dot_components_reach_hidden_entries() {
    let temp = project_tree();
    std::fs::create_dir_all(temp.path().join(".cache/objs")).unwrap();
    std::fs::write(temp.path().join(".cache/x"), "").unwrap();
    std::fs::write(temp.path().join(".cache/.stamp"), "").unwrap();
    std::fs::write(temp.path().join(".coverage"), "").unwrap();
    std::fs::write(temp.path().join("src/.coverage"), "").unwrap();

    assert_eq!(
        relative_names(temp.path(), ".cache"),
        vec![(".cache".to_string(), MatchKind::Directory)]
    );
    assert_eq!(
        relative_names(temp.path(), ".coverage"),
        vec![(".coverage".to_string(), MatchKind::File)]
    );
    assert_eq!(
        relative_names(temp.path(), ".cache/*"),
        vec![
            (".cache/objs".to_string(), MatchKind::Directory),
            (".cache/x".to_string(), MatchKind::File),
        ]
    );
    assert_eq!(
        relative_names(temp.path(), "**/.coverage"),
        vec![
            (".coverage".to_string(), MatchKind::File),
            ("src/.coverage".to_string(), MatchKind::File),
        ]
    );
    assert_eq!(
        relative_names(temp.path(), "build/.*"),
        vec![("build/.ninja_log".to_string(), MatchKind::File)]
    );
}

#[test]
fn test_literal_pattern_for_missing_entry() {
    let temp = project_tree();
    assert!(expand_pattern(temp.path(), ".cache").unwrap().is_empty());
    assert!(expand_pattern(temp.path(), "out/*").unwrap().is_empty());
}

#[test]
fn test_walk_starts_at_literal_prefix() {
    let temp = project_tree();
    std::fs::write(temp.path().join("build/generated.c"), "").unwrap();

    let files: Vec<_> = find_files(temp.path(), "src/**/*.c")
        .unwrap()
        .iter()
        .map(|m| m.relative().display().to_string())
        .collect();
    assert_eq!(files, ["src/main.c", "src/util/helper.c"]);
    assert_eq!(
        find_files(temp.path(), "src/**/*.c").unwrap()[0].path(),
        temp.path().join("src/main.c")
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_kept_intact() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = project_tree();
    let name = OsStr::from_bytes(b"bad\xff.c");
    std::fs::write(temp.path().join("src").join(name), "").unwrap();

    let matches = find_files(temp.path(), "src/*.c").unwrap();
    assert!(
        matches
            .iter()
            .any(|m| m.relative() == Path::new("src").join(name) && m.path().is_file())
    );
}

#[test]
fn test_gitignore_not_honored_by_default() {
    let temp = project_tree();
    std::fs::write(temp.path().join(".gitignore"), "build/\n").unwrap();
    std::fs::write(temp.path().join(".ignore"), "build/\n").unwrap();

    assert_eq!(relative_names(temp.path(), "build/*").len(), 2);
}

#[test]
fn test_no_matches() {
    let temp = project_tree();
    assert!(expand_pattern(temp.path(), "**/*.log").unwrap().is_empty());
}

#[test]
fn test_invalid_pattern() {
    let temp = temp_dir();
    let err = expand_pattern(temp.path(), "src/[").unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern"), "{err}");
}

#[test]
fn test_missing_root() {
    let temp = temp_dir();
    assert!(expand_pattern(temp.path().join("absent"), "*").is_err());
}
