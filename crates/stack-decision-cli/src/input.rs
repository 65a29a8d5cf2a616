// crates/stack-decision-cli/src/input.rs
// ============================================================================
// Module: CLI Input Files
// Description: Size-limited reads of JSON input files.
// Purpose: Fail closed on oversized or malformed graph and descriptor files.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Files are opened once, checked against the limit using metadata, then read
//! through a `take` adapter so a file that grows after the metadata check
//! still cannot exceed the limit.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors returned by bounded input reads.
#[derive(Debug, Error)]
pub enum InputFileError {
    /// File I/O failure.
    #[error("failed to read {kind} file {path}: {error}")]
    Io {
        /// Input kind label.
        kind: String,
        /// Input path.
        path: String,
        /// Underlying error text.
        error: String,
    },
    /// File size exceeds the configured limit.
    #[error("{kind} file {path} is too large ({size} bytes > {limit} bytes)")]
    TooLarge {
        /// Input kind label.
        kind: String,
        /// Input path.
        path: String,
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// File contents are not valid JSON.
    #[error("{kind} file {path} is not valid json: {error}")]
    Json {
        /// Input kind label.
        kind: String,
        /// Input path.
        path: String,
        /// Parser error text.
        error: String,
    },
}

/// Errors returned by [`read_bytes_with_limit`].
#[derive(Debug)]
pub enum ReadLimitError {
    /// File I/O failure.
    Io(std::io::Error),
    /// File size exceeds the configured limit.
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Allowed limit in bytes.
        limit: usize,
    },
}

// ============================================================================
// SECTION: Reads
// ============================================================================

/// Reads a file from disk while enforcing a hard size limit.
///
/// # Errors
///
/// Returns [`ReadLimitError`] when the file cannot be read or exceeds
/// `max_bytes`.
pub fn read_bytes_with_limit(path: &Path, max_bytes: usize) -> Result<Vec<u8>, ReadLimitError> {
    let file = File::open(path).map_err(ReadLimitError::Io)?;
    let metadata = file.metadata().map_err(ReadLimitError::Io)?;
    let size = metadata.len();
    let limit = u64::try_from(max_bytes).map_err(|_| ReadLimitError::TooLarge {
        size,
        limit: max_bytes,
    })?;
    if size > limit {
        return Err(ReadLimitError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let mut limited = file.take(limit.saturating_add(1));
    let mut bytes = Vec::new();
    limited.read_to_end(&mut bytes).map_err(ReadLimitError::Io)?;
    if bytes.len() > max_bytes {
        let actual = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
        return Err(ReadLimitError::TooLarge {
            size: actual,
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

/// Reads and parses a JSON input file under a size limit.
///
/// `kind` labels the input in error messages (for example `"graph"`).
///
/// # Errors
///
/// Returns [`InputFileError`] when the file cannot be read, is too large, or
/// is not valid JSON.
pub fn read_json_with_limit(
    path: &Path,
    kind: &str,
    max_bytes: usize,
) -> Result<Value, InputFileError> {
    let display = path.display().to_string();
    let bytes = read_bytes_with_limit(path, max_bytes).map_err(|err| match err {
        ReadLimitError::Io(error) => InputFileError::Io {
            kind: kind.to_string(),
            path: display.clone(),
            error: error.to_string(),
        },
        ReadLimitError::TooLarge {
            size,
            limit,
        } => InputFileError::TooLarge {
            kind: kind.to_string(),
            path: display.clone(),
            size,
            limit,
        },
    })?;
    serde_json::from_slice(&bytes).map_err(|err| InputFileError::Json {
        kind: kind.to_string(),
        path: display,
        error: err.to_string(),
    })
}
