//! Binary integration tests for CLI commands
//!
//! These tests run the actual scribe binary with `HOME` and the working
//! directory pointed at temporary directories.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const CLEARED_VARS: &[&str] = &[
    "GEMINI_WRITER_MODE",
    "GEMINI_PRO_STYLE_GUIDE",
    "GEMINI_WRITER_LANG",
    "GEMINI_WRITER_SAFETY",
    "GEMINI_SYSTEM_MD",
    "GEMINI_WRITE_SYSTEM_MD",
    "SANDBOX",
    "DEBUG",
    "SCRIBE_ROOT",
    "SCRIBE_BUILD_CHECK",
    "SCRIBE_SANDBOX_PROBE",
    "SCRIBE_AGENT_COMMAND",
];

fn scribe_bin(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_scribe"));
    for var in CLEARED_VARS {
        command.env_remove(var);
    }
    command.env("HOME", home).env("USERPROFILE", home).current_dir(home);
    command
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path()).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Writer modes"));
    assert!(stdout.contains("prompt"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path()).arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path()).arg("--invalid-flag").output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_mode_switch_persists_and_shows() {
    let home = TempDir::new().unwrap();

    let output = scribe_bin(home.path())
        .args(["mode", "pro-writer", "--style", "chicago", "--genre", "mystery"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mode switched to: PRO-WRITER"));
    assert!(stdout.contains("- Style Guide: chicago"));
    assert!(stdout.contains("- Genre: mystery"));

    let settings_path = home.path().join(".gemini").join("writer-settings.json");
    let settings: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(settings["currentMode"], "pro-writer");
    assert_eq!(settings["modeOptions"]["style"], "chicago");
    assert_eq!(settings["modeOptions"]["genre"], "mystery");

    scribe_bin(home.path())
        .args(["mode", "novel-auto", "--world", "eldoria.json"])
        .output()
        .unwrap();
    let output = scribe_bin(home.path()).args(["mode", "show"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Current Writing Mode: NOVEL-AUTO"));
    assert!(stdout.contains("- Language: ko"));
}

#[test]
fn test_cli_mode_invalid_is_reported() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path())
        .args(["mode", "screenplay"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Invalid mode: screenplay"));
    assert!(stdout.contains("Available Writing Modes"));
    assert!(!home.path().join(".gemini").join("writer-settings.json").exists());
}

#[test]
fn test_cli_mode_list() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path()).args(["mode", "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/mode novel-auto --world eldoria.json"));
}

#[test]
fn test_cli_prompt_follows_mode() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path())
        .env("GEMINI_WRITER_MODE", "ghostwriter")
        .args(["prompt", "--memory", "Prefers short chapters."])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ghostwriter (ghostwriter)"));
    assert!(stdout.trim_end().ends_with("---\n\nPrefers short chapters."));
}

#[test]
fn test_cli_prompt_override_file() {
    let home = TempDir::new().unwrap();
    let override_path = home.path().join("my-prompt.md");
    fs::write(&override_path, "Only write sonnets.").unwrap();

    let output = scribe_bin(home.path())
        .env("GEMINI_SYSTEM_MD", &override_path)
        .args(["prompt", "--mode", "novel-auto"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Only write sonnets.\n");
}

#[test]
fn test_cli_prompt_missing_override_fails() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path())
        .env("GEMINI_SYSTEM_MD", "true")
        .arg("prompt")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("missing system prompt file"));
}

#[test]
fn test_cli_prompt_compression() {
    let home = TempDir::new().unwrap();
    let output = scribe_bin(home.path())
        .args(["prompt", "--compression"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<state_snapshot>"));
}

#[cfg(unix)]
#[test]
fn test_cli_launch_forwards_exit_code() {
    let root = TempDir::new().unwrap();
    let output = scribe_bin(root.path())
        .env("SCRIBE_ROOT", root.path())
        .env("SCRIBE_BUILD_CHECK", "true")
        .env("SCRIBE_SANDBOX_PROBE", "true")
        .env("SCRIBE_AGENT_COMMAND", r#"sh -c 'pwd > cwd.txt; exit 5' agent"#)
        .args(["launch", "--", "--yolo"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(5));
    let workdir = root.path().join("my_writings");
    assert!(workdir.is_dir());
    let cwd = fs::read_to_string(workdir.join("cwd.txt")).unwrap();
    assert_eq!(
        fs::canonicalize(cwd.trim()).unwrap(),
        fs::canonicalize(&workdir).unwrap()
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Working folder"));
}

#[cfg(unix)]
#[test]
fn test_cli_launch_build_check_failure() {
    let root = TempDir::new().unwrap();
    let output = scribe_bin(root.path())
        .env("SCRIBE_ROOT", root.path())
        .env("SCRIBE_BUILD_CHECK", "false")
        .env("SCRIBE_AGENT_COMMAND", "true")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Build status check failed"));
}
