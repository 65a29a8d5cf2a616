// crates/stack-decision-cli/tests/input_limits.rs
// ============================================================================
// Module: CLI Input Limit Tests
// Description: Bounded reads of graph and descriptor files.
// Purpose: Ensure oversized or malformed inputs fail closed.
// ============================================================================

//! ## Overview
//! Exercises `read_bytes_with_limit` and `read_json_with_limit` against files
//! at, above, and well below the configured limit.

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

use stack_decision_cli::input::InputFileError;
use stack_decision_cli::input::ReadLimitError;
use stack_decision_cli::input::read_bytes_with_limit;
use stack_decision_cli::input::read_json_with_limit;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn read_bytes_with_limit_allows_small_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("small.bin");
    fs::write(&path, b"ok").expect("write file");
    let bytes = read_bytes_with_limit(&path, 8).expect("read file");
    assert_eq!(bytes, b"ok");
}

#[test]
fn read_bytes_with_limit_allows_exact_limit() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("exact.bin");
    fs::write(&path, [7_u8; 16]).expect("write file");
    let bytes = read_bytes_with_limit(&path, 16).expect("read file");
    assert_eq!(bytes.len(), 16);
}

#[test]
fn read_bytes_with_limit_rejects_large_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("large.bin");
    fs::write(&path, [0_u8; 17]).expect("write file");
    match read_bytes_with_limit(&path, 16) {
        Err(ReadLimitError::TooLarge {
            size,
            limit,
        }) => {
            assert_eq!(size, 17);
            assert_eq!(limit, 16);
        }
        other => panic!("expected too large error, got {other:?}"),
    }
}

#[test]
fn read_bytes_with_limit_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    assert!(matches!(read_bytes_with_limit(&path, 16), Err(ReadLimitError::Io(_))));
}

#[test]
fn read_json_with_limit_parses_object() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("graph.json");
    fs::write(&path, br#"{"nodes": []}"#).expect("write file");
    let value = read_json_with_limit(&path, "graph", 1024).expect("read json");
    assert!(value["nodes"].is_array());
}

#[test]
fn read_json_with_limit_labels_errors_with_kind() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("descriptor.json");
    fs::write(&path, b"{not json").expect("write file");
    let err = read_json_with_limit(&path, "descriptor", 1024).unwrap_err();
    assert!(matches!(err, InputFileError::Json { .. }));
    assert!(err.to_string().starts_with("descriptor file "));

    let err = read_json_with_limit(&path, "descriptor", 4).unwrap_err();
    assert!(matches!(err, InputFileError::TooLarge { limit: 4, .. }));
}
