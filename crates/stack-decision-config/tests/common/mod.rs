// crates/stack-decision-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for stack-decision-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::fs;
use std::path::PathBuf;

use stack_decision_config::ConfigError;
use stack_decision_config::StackDecisionConfig;
use tempfile::TempDir;

/// Parses a TOML string into a `StackDecisionConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<StackDecisionConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<StackDecisionConfig, toml::de::Error> {
    config_from_toml("")
}

/// Writes `content` to a config file inside a fresh temporary directory.
pub fn write_config(content: &[u8]) -> Result<(TempDir, PathBuf), String> {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("stack-decision.toml");
    fs::write(&path, content).map_err(|err| err.to_string())?;
    Ok((dir, path))
}

/// Asserts that a result is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
