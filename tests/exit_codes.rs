#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const MIXED: &str = r#"[
    ["RUN", [15000, 1, 75]],
    ["XYZ", [1, 1, 1]],
    ["SWM", [720, 1, 80, 25, 40]]
]"#;

fn packages_file(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("packages.json");
    fs::write(&path, body).unwrap();
    path
}

fn sportlog(path: Option<&Path>, extra: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sportlog"));
    cmd.env_remove("RUST_LOG").arg("-qq");
    if let Some(path) = path {
        cmd.arg(path);
    }
    cmd.args(extra).output().unwrap()
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn built_in_packages_exit_zero() {
    let out = sportlog(None, &[]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Workout type: Swimming;"));
}

#[test]
fn unknown_code_aborts_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = packages_file(&dir, MIXED);

    let out = sportlog(Some(&path), &[]);
    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Workout type: Running;"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("XYZ"));
}

#[test]
fn keep_going_prints_the_rest_and_still_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = packages_file(&dir, MIXED);

    let out = sportlog(Some(&path), &["--keep-going"]);
    assert!(!out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("Workout type: Swimming;"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("1 of 3 packages"));
}

#[test]
fn keep_going_with_clean_input_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = packages_file(&dir, r#"[["WLK", [9000, 1, 75, 180]]]"#);

    let out = sportlog(Some(&path), &["--keep-going", "--format", "json"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    let v: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(v["type"], "SportsWalking");
}
