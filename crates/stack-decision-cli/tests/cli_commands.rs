// crates/stack-decision-cli/tests/cli_commands.rs
// ============================================================================
// Module: CLI Command Tests
// Description: Integration tests running the stack-decision binary.
// Purpose: Ensure commands honor config and fail closed on bad input.
// Dependencies: stack-decision-cli binary
// ============================================================================

//! ## Overview
//! Runs the CLI binary in an isolated working directory so no ambient
//! `stack-decision.toml` or environment override leaks into the results.
//!
//! Security posture: inputs are untrusted; failures must exit non-zero.

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

use serde_json::Value;
use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn stack_decision_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_stack-decision"))
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(stack_decision_bin())
        .current_dir(dir)
        .env_remove("STACK_DECISION_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run stack-decision")
}

fn workspace_with_inputs() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    let graph = r#"{
  "nodes": [
    {"id": "db", "type": "database"},
    {"id": "cache", "type": "cache"},
    {"id": "gw", "type": "api-gateway"}
  ],
  "edges": [{"source": "gw", "target": "db"}, {"source": "gw", "target": "cache"}]
}"#;
    let descriptor = r#"{
  "projectName": "Checkout",
  "description": "Startup MVP for a small shop, launch soon"
}"#;
    fs::write(dir.path().join("graph.json"), graph).expect("write graph");
    fs::write(dir.path().join("descriptor.json"), descriptor).expect("write descriptor");
    dir
}

fn analyze_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["analyze", "--graph", "graph.json", "--descriptor", "descriptor.json"];
    args.extend_from_slice(extra);
    args
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout json")
}

// ============================================================================
// SECTION: Analyze
// ============================================================================

#[test]
fn analyze_prints_pretty_json_with_digest() {
    let dir = workspace_with_inputs();
    let report = stdout_json(&run_in(dir.path(), &analyze_args(&[])));
    assert_eq!(report["projectName"], "Checkout");
    assert_eq!(report["componentCount"], 3);
    assert_eq!(report["context"]["budgetTier"], "startup");
    assert_eq!(report["digest"]["algorithm"], "sha256");
    let decisions = report["decisions"].as_array().expect("decisions");
    assert_eq!(decisions[0]["component"], "database");
    assert!(decisions[0]["candidates"].is_array());
}

#[test]
fn analyze_is_deterministic() {
    let dir = workspace_with_inputs();
    let first = run_in(dir.path(), &analyze_args(&["--format", "json"]));
    let second = run_in(dir.path(), &analyze_args(&["--format", "json"]));
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn analyze_summary_format() {
    let dir = workspace_with_inputs();
    let output = run_in(dir.path(), &analyze_args(&["--format", "summary"]));
    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.starts_with("Project: Checkout\n"));
    assert!(text.contains("Database Selection"));
    assert!(text.contains("Digest: sha256:"));
}

#[test]
fn analyze_honors_output_config() {
    let dir = workspace_with_inputs();
    fs::write(
        dir.path().join("stack-decision.toml"),
        "[output]\nformat = \"json\"\ninclude_digest = false\ninclude_candidates = false\n",
    )
    .expect("write config");
    let output = run_in(dir.path(), &analyze_args(&[]));
    let report = stdout_json(&output);
    assert!(report.get("digest").is_none());
    let decisions = report["decisions"].as_array().expect("decisions");
    assert!(decisions.iter().all(|decision| decision.get("candidates").is_none()));
    let text = String::from_utf8_lossy(&output.stdout);
    assert_eq!(text.trim_end().lines().count(), 1);
}

#[test]
fn analyze_rejects_input_over_size_limit() {
    let dir = workspace_with_inputs();
    fs::write(dir.path().join("tiny.toml"), "[input]\nmax_input_bytes = 32\nmax_description_bytes = 32\n")
        .expect("write config");
    let output = run_in(dir.path(), &analyze_args(&["--config", "tiny.toml"]));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("graph file"), "stderr: {stderr}");
    assert!(stderr.contains("too large"), "stderr: {stderr}");
}

#[test]
fn analyze_rejects_graph_without_nodes() {
    let dir = workspace_with_inputs();
    fs::write(dir.path().join("graph.json"), r#"{"edges": []}"#).expect("write graph");
    let output = run_in(dir.path(), &analyze_args(&[]));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing the required `nodes` array"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn analyze_rejects_node_count_over_config_limit() {
    let dir = workspace_with_inputs();
    fs::write(dir.path().join("limits.toml"), "[input]\nmax_nodes = 2\n").expect("write config");
    let output = run_in(dir.path(), &analyze_args(&["--config", "limits.toml"]));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input nodes count 3 exceeds limit 2"), "stderr: {stderr}");
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

#[test]
fn catalog_lists_category_tools() {
    let dir = tempfile::tempdir().expect("temp dir");
    let tools = stdout_json(&run_in(dir.path(), &["catalog", "--category", "database"]));
    let tools = tools.as_array().expect("tool list");
    assert!(!tools.is_empty());
    assert!(tools.iter().all(|tool| tool["category"] == "database"));
    assert_eq!(tools[0]["id"], "postgresql");
}

#[test]
fn catalog_rejects_unknown_category() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["catalog", "--category", "frontend"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown category: frontend"));
}

#[test]
fn catalog_honors_configured_log_level() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("verbose.toml"), "[logging]\nlevel = \"info\"\n").expect("write config");

    let quiet = run_in(dir.path(), &["catalog"]);
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("catalog listed"));

    let verbose = run_in(dir.path(), &["catalog", "--config", "verbose.toml"]);
    assert!(verbose.status.success());
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("catalog listed"), "stderr: {stderr}");
}

// ============================================================================
// SECTION: Config
// ============================================================================

#[test]
fn config_example_validates() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["config", "example"]);
    assert!(output.status.success());
    fs::write(dir.path().join("example.toml"), &output.stdout).expect("write example");

    let output = run_in(dir.path(), &["config", "validate", "--config", "example.toml"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "config ok");
}

#[test]
fn config_validate_without_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["config", "validate"]);
    assert!(output.status.success());
}

#[test]
fn config_validate_rejects_invalid_limits() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("stack-decision.toml"), "[input]\nmax_nodes = 0\n").expect("write config");
    let output = run_in(dir.path(), &["config", "validate"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input.max_nodes must be greater than zero"), "stderr: {stderr}");
}

#[test]
fn config_validate_honors_configured_log_level() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("stack-decision.toml"), "[logging]\nlevel = \"info\"\n").expect("write config");
    let output = run_in(dir.path(), &["config", "validate"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config validated"), "stderr: {stderr}");

    let output = run_in(dir.path(), &["--log-level", "error", "config", "validate"]);
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stderr).contains("config validated"));
}

#[test]
fn config_validate_reports_missing_explicit_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_in(dir.path(), &["config", "validate", "--config", "absent.toml"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config io error"));
}
