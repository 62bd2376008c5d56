use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

fn folio_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_folio"))
}

fn run(args: &[&str]) -> Output {
    Command::new(folio_bin())
        .args(args)
        .output()
        .expect("run folio")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

#[test]
fn projects_json_applies_and_filter() {
    let output = run(&["--json", "projects", "--tag", "ML", "--tag", "Embedded"]);
    assert!(output.status.success());

    let payload: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    let titles: Vec<&str> = payload["items"]
        .as_array()
        .expect("items array")
        .iter()
        .map(|item| item["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, vec!["Edge Audio Keyword Spotting"]);
    assert_eq!(payload["all_active"], false);
}

#[test]
fn blog_query_is_case_insensitive() {
    let upper = run(&["--json", "blog", "--query", "PID"]);
    let lower = run(&["--json", "blog", "--query", "pid"]);
    assert!(upper.status.success());
    let upper: serde_json::Value = serde_json::from_str(&stdout(&upper)).expect("json");
    let lower: serde_json::Value = serde_json::from_str(&stdout(&lower)).expect("json");
    assert_eq!(upper["items"], lower["items"]);
    assert_eq!(upper["items"].as_array().map(Vec::len), Some(1));
}

#[test]
fn open_with_unknown_id_fails() {
    let output = run(&["projects", "--open", "99"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found in projects catalog"));
}

#[test]
fn site_resolves_media_under_base_path() {
    let output = run(&["--base-path", "/portfolio", "site"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("/portfolio/vid3.mp4"));
    assert!(text.contains("/portfolio/sanam.jpg"));
}

#[test]
fn blank_base_path_is_rejected() {
    let output = run(&["--base-path", " ", "site"]);
    assert!(!output.status.success());
}

#[test]
fn format_prints_compact_label() {
    let output = run(&["format", "1500"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "2K");
}

#[test]
fn tags_lists_sorted_vocabulary() {
    let output = run(&["tags", "blog"]);
    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec!["Audio", "Control", "Embedded", "IoT", "ML", "Robotics"]
    );
}

#[test]
fn log_dir_enables_file_logging() {
    let dir = tempdir().expect("tempdir");
    let log_dir = dir.path().to_str().expect("utf-8 path");
    let output = run(&["--log-dir", log_dir, "--log-level", "info", "tags", "projects"]);
    assert!(output.status.success());

    let has_log = std::fs::read_dir(dir.path())
        .expect("read log dir")
        .filter_map(Result::ok)
        .any(|entry| entry.file_name().to_string_lossy().starts_with("folio"));
    assert!(has_log);
}

#[test]
fn relative_log_dir_is_rejected() {
    let output = run(&["--log-dir", "logs", "version"]);
    assert!(!output.status.success());
}

#[test]
fn log_level_without_log_dir_is_rejected() {
    let output = run(&["--log-level", "debug", "version"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--log-dir"));
}
