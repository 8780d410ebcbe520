//! Integration tests for the coursechunk CLI

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn coursechunk() -> Command {
    let mut cmd = Command::cargo_bin("coursechunk").unwrap();
    cmd.env_remove("COURSECHUNK_RAW_DIR")
        .env_remove("COURSECHUNK_OUT_DIR")
        .env_remove("COURSECHUNK_STATE_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Workspace with a raw directory seeded from fixtures
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn with_fixtures(names: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("raw")).unwrap();
        for name in names {
            fs::copy(fixture_path(name), dir.path().join("raw").join(name)).unwrap();
        }
        Self { dir }
    }

    fn raw(&self) -> PathBuf {
        self.dir.path().join("raw")
    }

    fn out(&self) -> PathBuf {
        self.dir.path().join("materials")
    }

    fn state(&self) -> PathBuf {
        self.dir.path().join("state.json")
    }

    fn ingest(&self) -> Command {
        let mut cmd = coursechunk();
        cmd.arg("ingest")
            .arg("--raw-dir")
            .arg(self.raw())
            .arg("--out-dir")
            .arg(self.out())
            .arg("--state-file")
            .arg(self.state());
        cmd
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_ingest_writes_chunk_sets_and_state() {
    let ws = Workspace::with_fixtures(&["english-lecture.txt", "japanese-lecture.txt"]);

    ws.ingest()
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 file(s). Processing..."))
        .stdout(predicate::str::contains("english-lecture.txt -> 1 chunk(s)"))
        .stdout(predicate::str::contains(
            "Done! 2/2 files processed successfully.",
        ));

    let english = read_json(&ws.out().join("english-lecture.json"));
    assert_eq!(english["course_id"], "english-lecture");
    assert_eq!(english["total_chunks"], 1);

    let japanese = fs::read_to_string(ws.out().join("japanese-lecture.json")).unwrap();
    assert!(japanese.contains("これはテストです。"));

    let state = read_json(&ws.state());
    assert_eq!(state["active_course"], "english-lecture");
    assert_eq!(state["courses"]["japanese-lecture"]["current_chunk"], 0);
    assert_eq!(state["courses"]["japanese-lecture"]["review_queue"], Value::Array(vec![]));
}

#[test]
fn test_ingest_small_target_produces_overlapping_chunks() {
    let ws = Workspace::with_fixtures(&["japanese-lecture.txt"]);

    ws.ingest()
        .args(["-t", "30", "--overlap", "10"])
        .assert()
        .success();

    let set = read_json(&ws.out().join("japanese-lecture.json"));
    let chunks = set["chunks"].as_array().unwrap();
    assert!(chunks.len() > 1);
    assert_eq!(set["total_chunks"], chunks.len());
    assert_eq!(chunks[0], "これはテストです。 日本語の講義を正しく分割できるか確認しています！");
    assert!(chunks[1]
        .as_str()
        .unwrap()
        .starts_with("るか確認しています！ 所有権とは何でしょうか？"));
}

#[test]
fn test_ingest_refresh_keeps_progress() {
    let ws = Workspace::with_fixtures(&["english-lecture.txt"]);
    fs::write(
        ws.state(),
        r#"{"active_course":"other","courses":{"english-lecture":{"current_chunk":3,"total_chunks":9,"last_interaction":"2024-05-01","review_queue":[1]}},"streak":4}"#,
    )
    .unwrap();

    ws.ingest().assert().success();

    let state = read_json(&ws.state());
    assert_eq!(state["active_course"], "other");
    assert_eq!(state["streak"], 4);
    let entry = &state["courses"]["english-lecture"];
    assert_eq!(entry["current_chunk"], 3);
    assert_eq!(entry["total_chunks"], 1);
    assert_eq!(entry["last_interaction"], "2024-05-01");
    assert_eq!(entry["review_queue"], serde_json::json!([1]));
}

#[test]
fn test_ingest_counts_empty_file_as_failure() {
    let ws = Workspace::with_fixtures(&["mixed-lecture.txt"]);
    fs::write(ws.raw().join("blank.txt"), "\n  \n").unwrap();

    ws.ingest()
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 file(s). Processing..."))
        .stdout(predicate::str::contains(
            "Done! 1/2 files processed successfully.",
        ))
        .stderr(predicate::str::contains("is empty"));

    assert!(!ws.out().join("blank.json").exists());
    assert!(ws.out().join("mixed-lecture.json").exists());
}

#[test]
fn test_ingest_missing_raw_dir() {
    let ws = Workspace::with_fixtures(&[]);
    fs::remove_dir(ws.raw()).unwrap();

    ws.ingest()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Raw directory not found"));

    assert!(!ws.state().exists());
}

#[test]
fn test_ingest_without_transcripts() {
    let ws = Workspace::with_fixtures(&[]);
    fs::write(ws.raw().join("notes.md"), "# notes").unwrap();

    ws.ingest()
        .assert()
        .success()
        .stdout(predicate::str::contains("No .txt files found"))
        .stdout(predicate::str::contains("Done!").not());
}

#[test]
fn test_ingest_reads_directories_from_env() {
    let ws = Workspace::with_fixtures(&["mixed-lecture.txt"]);

    coursechunk()
        .arg("ingest")
        .env("COURSECHUNK_RAW_DIR", ws.raw())
        .env("COURSECHUNK_OUT_DIR", ws.out())
        .env("COURSECHUNK_STATE_FILE", ws.state())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Done! 1/1 files processed successfully.",
        ));

    assert!(ws.out().join("mixed-lecture.json").exists());
    assert!(ws.state().exists());
}

#[test]
fn test_ingest_no_state() {
    let ws = Workspace::with_fixtures(&["mixed-lecture.txt"]);

    ws.ingest().arg("--no-state").assert().success();

    assert!(ws.out().join("mixed-lecture.json").exists());
    assert!(!ws.state().exists());
}

#[test]
fn test_ingest_quiet_keeps_summary() {
    let ws = Workspace::with_fixtures(&["mixed-lecture.txt"]);

    ws.ingest()
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found").not())
        .stdout(predicate::str::contains(
            "Done! 1/1 files processed successfully.",
        ));
}

#[test]
fn test_ingest_paragraph_granularity() {
    let ws = Workspace::with_fixtures(&[]);
    fs::write(
        ws.raw().join("notes.txt"),
        "First paragraph.\n\nSecond paragraph.\n\nThird paragraph.",
    )
    .unwrap();

    ws.ingest()
        .args(["-g", "paragraph", "-t", "40"])
        .assert()
        .success();

    let set = read_json(&ws.out().join("notes.json"));
    assert_eq!(
        set["chunks"],
        serde_json::json!([
            "First paragraph.\n\nSecond paragraph.",
            "Third paragraph."
        ])
    );
}

#[test]
fn test_ingest_with_generated_config() {
    let ws = Workspace::with_fixtures(&["english-lecture.txt"]);
    let config = ws.dir.path().join("coursechunk.toml");

    coursechunk()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    ws.ingest().arg("-c").arg(&config).assert().success();
    assert!(ws.out().join("english-lecture.json").exists());
}

#[test]
fn test_ingest_invalid_config() {
    let ws = Workspace::with_fixtures(&["english-lecture.txt"]);
    let config = ws.dir.path().join("bad.toml");
    fs::write(&config, "[chunking]\ntarget_length = 0\n").unwrap();

    ws.ingest()
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_chunk_text_output() {
    coursechunk()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("english-lecture.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[english-lecture] 1 chunk(s)"))
        .stdout(predicate::str::contains(
            "Welcome back to the systems course! Today we look at ownership in Rust.",
        ));
}

#[test]
fn test_chunk_json_output() {
    coursechunk()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("japanese-lecture.txt"))
        .arg("-f")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"course_id\": \"japanese-lecture\""))
        .stdout(predicate::str::contains("これはテストです。"));
}

#[test]
fn test_chunk_markdown_output() {
    coursechunk()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("mixed-lecture.txt"))
        .arg("-f")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## mixed-lecture"))
        .stdout(predicate::str::contains("### Chunk 1"))
        .stdout(predicate::str::contains("*Total chunks: 1*"));
}

#[test]
fn test_chunk_glob_pattern_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("chunks.json");

    coursechunk()
        .arg("chunk")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-f")
        .arg("json")
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let courses = read_json(&output_file);
    let ids: Vec<&str> = courses
        .as_array()
        .unwrap()
        .iter()
        .map(|course| course["course_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["english-lecture", "japanese-lecture", "mixed-lecture"]);
}

#[test]
fn test_chunk_invalid_file() {
    coursechunk()
        .arg("chunk")
        .arg("-i")
        .arg("nonexistent.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_status_after_ingest() {
    let ws = Workspace::with_fixtures(&["english-lecture.txt", "japanese-lecture.txt"]);
    ws.ingest().assert().success();

    coursechunk()
        .arg("status")
        .arg("--state-file")
        .arg(ws.state())
        .assert()
        .success()
        .stdout(predicate::str::contains("Active course: english-lecture"))
        .stdout(predicate::str::contains("* english-lecture: chunk 0/1"))
        .stdout(predicate::str::contains("  japanese-lecture: chunk 0/1"));

    coursechunk()
        .arg("status")
        .arg("--state-file")
        .arg(ws.state())
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"active_course\": \"english-lecture\""));
}

#[test]
fn test_status_reads_state_file_from_config() {
    let ws = Workspace::with_fixtures(&["mixed-lecture.txt"]);
    ws.ingest().assert().success();

    let config = ws.dir.path().join("coursechunk.toml");
    fs::write(
        &config,
        format!("[paths]\nstate_file = {:?}\n", ws.state().display().to_string()),
    )
    .unwrap();

    coursechunk()
        .arg("status")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Active course: mixed-lecture"));
}

#[test]
fn test_status_missing_state_file() {
    let temp_dir = TempDir::new().unwrap();

    coursechunk()
        .arg("status")
        .arg("--state-file")
        .arg(temp_dir.path().join("state.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses registered."));
}

#[test]
fn test_help_command() {
    coursechunk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chunk lecture transcripts"))
        .stdout(predicate::str::contains("ingest"));
}
