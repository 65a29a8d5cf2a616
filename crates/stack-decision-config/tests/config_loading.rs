//! File loading tests for stack-decision-config.
// crates/stack-decision-config/tests/config_loading.rs
// =============================================================================
// Module: Config Loading Tests
// Description: File-level loading with size, encoding, and path limits.
// Purpose: Ensure config files fail closed on malformed or oversized input.
// =============================================================================

use std::path::PathBuf;

use stack_decision_config::OutputFormat;
use stack_decision_config::StackDecisionConfig;
use stack_decision_config::config_toml_example;

mod common;

use crate::common::assert_invalid;
use crate::common::write_config;

type TestResult = Result<(), String>;

#[test]
fn loads_explicit_file() -> TestResult {
    let (_dir, path) = write_config(b"[output]\nformat = \"json\"\n")?;
    let config = StackDecisionConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config.output.format != OutputFormat::Json {
        return Err("format from file not applied".to_string());
    }
    Ok(())
}

#[test]
fn loads_example_file() -> TestResult {
    let (_dir, path) = write_config(config_toml_example().as_bytes())?;
    let config = StackDecisionConfig::load(Some(&path)).map_err(|err| err.to_string())?;
    if config != StackDecisionConfig::default() {
        return Err("example file should load as defaults".to_string());
    }
    Ok(())
}

#[test]
fn missing_explicit_file_is_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(StackDecisionConfig::load(Some(&path)), "config io error")
}

#[test]
fn oversized_file_is_rejected() -> TestResult {
    let mut content = b"# padding\n".to_vec();
    content.resize(1024 * 1024 + 1, b' ');
    let (_dir, path) = write_config(&content)?;
    assert_invalid(StackDecisionConfig::load(Some(&path)), "config file exceeds size limit")
}

#[test]
fn non_utf8_file_is_rejected() -> TestResult {
    let (_dir, path) = write_config(&[0xff, 0xfe, 0x00])?;
    assert_invalid(StackDecisionConfig::load(Some(&path)), "config file must be utf-8")
}

#[test]
fn invalid_limits_in_file_are_rejected() -> TestResult {
    let (_dir, path) = write_config(b"[input]\nmax_edges = 0\n")?;
    assert_invalid(StackDecisionConfig::load(Some(&path)), "input.max_edges")
}

#[test]
fn overlong_path_component_is_rejected() -> TestResult {
    let path = PathBuf::from("a".repeat(300));
    assert_invalid(StackDecisionConfig::load(Some(&path)), "config path component too long")
}

#[test]
fn overlong_path_is_rejected() -> TestResult {
    let component = "b".repeat(200);
    let path: PathBuf = std::iter::repeat_n(component.as_str(), 30).collect();
    assert_invalid(StackDecisionConfig::load(Some(&path)), "config path exceeds max length")
}
