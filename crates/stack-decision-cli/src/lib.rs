// crates/stack-decision-cli/src/lib.rs
// ============================================================================
// Module: Stack Decision CLI Library
// Description: Shared helpers for the stack decision command-line interface.
// Purpose: Keep bounded input reads and report rendering testable.
// Dependencies: serde_json, stack-decision-core, thiserror
// ============================================================================

//! ## Overview
//! The binary entry point (`src/main.rs`) handles argument parsing and
//! dispatch; this library holds the pieces it shares with tests: size-limited
//! JSON input reads and report rendering.
//!
//! Security posture: graph and descriptor files are untrusted and are read
//! under a hard size limit before parsing.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod input;
pub mod render;
