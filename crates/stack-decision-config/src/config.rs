// crates/stack-decision-config/src/config.rs
// ============================================================================
// Module: Stack Decision Configuration
// Description: Configuration loading and validation for the stack decision CLI.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: stack-decision-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The file is optional: when neither an explicit path nor the environment
//! override is given and `stack-decision.toml` does not exist, defaults apply.
//! A file that exists but fails to parse or validate is always an error.
//!
//! Security posture: config inputs are untrusted; unknown keys are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use stack_decision_core::EngineLimits;
use stack_decision_core::graph::DEFAULT_MAX_DESCRIPTION_BYTES;
use stack_decision_core::graph::DEFAULT_MAX_EDGES;
use stack_decision_core::graph::DEFAULT_MAX_NODES;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "stack-decision.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "STACK_DECISION_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default maximum size of one input file in bytes.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 4 * 1024 * 1024;
/// Upper bound for `input.max_input_bytes`.
pub const MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;
/// Upper bound for `input.max_nodes`.
pub const MAX_NODES_LIMIT: usize = 1_000_000;
/// Upper bound for `input.max_edges`.
pub const MAX_EDGES_LIMIT: usize = 5_000_000;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Validation error.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Config Root
// ============================================================================

/// Stack decision configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackDecisionConfig {
    /// Input size limits.
    pub input: InputConfig,
    /// Report rendering options.
    pub output: OutputConfig,
    /// Diagnostic logging options.
    pub logging: LoggingConfig,
}

impl StackDecisionConfig {
    /// Loads configuration using the default resolution rules.
    ///
    /// Resolution order: explicit `path`, then `STACK_DECISION_CONFIG`, then
    /// `stack-decision.toml` in the working directory. Only the last source
    /// may be absent, in which case defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved.path)?;
        if resolved.optional && !resolved.path.exists() {
            return Ok(Self::default());
        }
        let bytes = fs::read(&resolved.path).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()
    }

    /// Returns the engine limits described by the `[input]` section.
    #[must_use]
    pub const fn engine_limits(&self) -> EngineLimits {
        EngineLimits {
            max_nodes: self.input.max_nodes,
            max_edges: self.input.max_edges,
            max_description_bytes: self.input.max_description_bytes,
        }
    }
}

// ============================================================================
// SECTION: Input
// ============================================================================

/// Input size limits.
///
/// # Invariants
/// - Every limit is non-zero and below its upper bound.
/// - `max_description_bytes` never exceeds `max_input_bytes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Maximum size of one graph or descriptor file in bytes.
    pub max_input_bytes: usize,
    /// Maximum number of graph nodes.
    pub max_nodes: usize,
    /// Maximum number of graph edges.
    pub max_edges: usize,
    /// Maximum description length in bytes.
    pub max_description_bytes: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            max_description_bytes: DEFAULT_MAX_DESCRIPTION_BYTES,
        }
    }
}

impl InputConfig {
    /// Validates input limits.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_limit("input.max_input_bytes", self.max_input_bytes, MAX_INPUT_BYTES)?;
        validate_limit("input.max_nodes", self.max_nodes, MAX_NODES_LIMIT)?;
        validate_limit("input.max_edges", self.max_edges, MAX_EDGES_LIMIT)?;
        validate_limit(
            "input.max_description_bytes",
            self.max_description_bytes,
            self.max_input_bytes,
        )?;
        Ok(())
    }
}

/// Checks that a limit lies in `1..=max`.
fn validate_limit(field: &str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid(format!("{field} must be greater than zero")));
    }
    if value > max {
        return Err(ConfigError::Invalid(format!("{field} must be at most {max}")));
    }
    Ok(())
}

// ============================================================================
// SECTION: Output
// ============================================================================

/// Report rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Compact single-line JSON.
    Json,
    /// Indented JSON.
    #[default]
    Pretty,
    /// Human-readable text summary.
    Summary,
}

impl OutputFormat {
    /// Returns the config identifier for the format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
            Self::Summary => "summary",
        }
    }
}

/// Report rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Rendering format.
    pub format: OutputFormat,
    /// Attach the canonical report digest to JSON output.
    pub include_digest: bool,
    /// Keep per-decision candidate lists in JSON output.
    pub include_candidates: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            include_digest: true,
            include_candidates: true,
        }
    }
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    #[default]
    Warn,
    /// Informational events.
    Info,
    /// Per-evaluation pipeline events.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    /// Returns the filter directive for the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Diagnostic logging options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Minimum level written to stderr.
    pub level: LogLevel,
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Config path plus whether its absence is tolerated.
struct ResolvedPath {
    /// Candidate config path.
    path: PathBuf,
    /// True only for the implicit default filename.
    optional: bool,
}

/// Resolves the config path from CLI or environment.
fn resolve_path(path: Option<&Path>) -> Result<ResolvedPath, ConfigError> {
    if let Some(path) = path {
        return Ok(ResolvedPath {
            path: path.to_path_buf(),
            optional: false,
        });
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(ResolvedPath {
            path: PathBuf::from(env_path),
            optional: false,
        });
    }
    Ok(ResolvedPath {
        path: PathBuf::from(DEFAULT_CONFIG_NAME),
        optional: true,
    })
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
