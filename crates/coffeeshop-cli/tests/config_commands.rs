// coffeeshop-cli/tests/config_commands.rs
// ============================================================================
// Module: CLI Config Command Tests
// Description: Integration tests for CLI config workflows.
// Purpose: Ensure config commands report success and fail closed on errors.
// Dependencies: coffeeshop binary
// ============================================================================

//! ## Overview
//! Runs the CLI binary for config validation, inspection, and artifact
//! generation, and ensures invalid configuration fails closed with explicit
//! errors.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn coffeeshop_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_coffeeshop"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(coffeeshop_bin())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("spawn coffeeshop binary")
}

fn write_example(dir: &Path) -> PathBuf {
    let path = dir.join("coffeeshop.toml");
    let example = r#"production = false
api_server_url = "http://127.0.0.1:5000"

[auth]
domain_prefix = "dev-k73xuqib8s3gch5c.us"
audience = "coffee"
client_id = "kZfgJuxb4n2bo7yBN1eqUeKdwDweiLz5"
callback_url = "http://localhost:4200"
"#;
    fs::write(&path, example).expect("write example config");
    path
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn version_flag_reports_package_version() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coffeeshop"), "unexpected stdout: {stdout}");
}

#[test]
fn config_validate_accepts_a_valid_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_example(dir.path());
    let output =
        run_in(dir.path(), &["config", "validate", "--config", path.to_str().expect("utf-8")]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Config valid."), "unexpected stdout: {stdout}");
}

#[test]
fn config_validate_fails_closed_on_empty_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("coffeeshop.toml");
    fs::write(&path, "").expect("write empty config");
    let output =
        run_in(dir.path(), &["config", "validate", "--config", path.to_str().expect("utf-8")]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"), "unexpected stderr: {stderr}");
    assert!(stderr.contains("api_server_url must be non-empty"), "unexpected stderr: {stderr}");
}

#[test]
fn config_validate_falls_back_to_builtin_development() {
    let dir = tempfile::tempdir().expect("temp dir");
    let absent = dir.path().join("absent.toml");
    let output = run_in(
        dir.path(),
        &[
            "config",
            "validate",
            "--target",
            "development",
            "--config",
            absent.to_str().expect("utf-8"),
        ],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
}

#[test]
fn config_validate_requires_a_file_for_production() {
    let dir = tempfile::tempdir().expect("temp dir");
    let absent = dir.path().join("absent.toml");
    let output = run_in(
        dir.path(),
        &[
            "config",
            "validate",
            "--target",
            "production",
            "--config",
            absent.to_str().expect("utf-8"),
        ],
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"), "unexpected stderr: {stderr}");
}

#[test]
fn config_show_prints_effective_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_example(dir.path());
    let output = run_in(dir.path(), &["config", "show", "--config", path.to_str().expect("utf-8")]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("parse show output");
    assert_eq!(
        value.pointer("/api_server_url").and_then(serde_json::Value::as_str),
        Some("http://127.0.0.1:5000")
    );
    assert_eq!(
        value.pointer("/auth/audience").and_then(serde_json::Value::as_str),
        Some("coffee")
    );
}

#[test]
fn config_init_writes_and_protects_existing_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("coffeeshop.toml");
    let path_arg = path.to_str().expect("utf-8");

    let first = run_in(dir.path(), &["config", "init", "--output", path_arg]);
    assert!(first.status.success(), "stderr: {}", String::from_utf8_lossy(&first.stderr));
    let written = fs::read_to_string(&path).expect("read generated config");
    let parsed: toml::Value = toml::from_str(&written).expect("parse generated config");
    assert!(parsed.get("auth").is_some());

    let second = run_in(dir.path(), &["config", "init", "--output", path_arg]);
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("Refusing to overwrite"), "unexpected stderr: {stderr}");

    let forced = run_in(dir.path(), &["config", "init", "--output", path_arg, "--force"]);
    assert!(forced.status.success(), "stderr: {}", String::from_utf8_lossy(&forced.stderr));
}

#[test]
fn config_schema_prints_valid_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["config", "schema"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("parse schema output");
    assert!(value.get("$schema").is_some());
    assert!(value.pointer("/properties/auth/properties/client_id").is_some());
}

#[test]
fn config_docs_prints_markdown_reference() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["config", "docs"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# coffeeshop.toml Configuration"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("### [auth]"), "unexpected stdout: {stdout}");
}
