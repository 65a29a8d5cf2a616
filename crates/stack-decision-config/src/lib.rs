// crates/stack-decision-config/src/lib.rs
// ============================================================================
// Module: Stack Decision Config Library
// Description: Config model, validation, and example generation.
// Purpose: Single source of truth for stack-decision.toml semantics.
// Dependencies: stack-decision-core, serde, toml
// ============================================================================

//! ## Overview
//! `stack-decision-config` defines the configuration model for the stack
//! decision CLI. It loads `stack-decision.toml` under strict size and path
//! limits, validates every section, and renders a canonical example.
//!
//! Security posture: config inputs are untrusted and fail closed on any
//! validation error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::config_toml_example;
