// crates/stack-decision-core/src/lib.rs
// ============================================================================
// Module: Stack Decision Core Library
// Description: Public API surface for the stack decision engine.
// Purpose: Expose core types and the runtime decision pipeline.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Stack decision core turns an abstract architecture graph and a free-text
//! project description into a deterministic decision report: one selected
//! tool per infrastructure category, cost and timeline estimates, a phased
//! rollout plan, and a risk assessment. Evaluation is pure and synchronous;
//! the only shared state is the read-only built-in tool catalog.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::*;

pub use runtime::AnalyzerError;
pub use runtime::ContextAnalyzer;
pub use runtime::DecisionEngine;
pub use runtime::EngineError;
pub use runtime::ScoreFactor;
