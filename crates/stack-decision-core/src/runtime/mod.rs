// crates/stack-decision-core/src/runtime/mod.rs
// ============================================================================
// Module: Stack Decision Runtime
// Description: Context analysis, scoring, selection, and report assembly.
// Purpose: Execute the deterministic decision pipeline over core types.
// Dependencies: crate::core, regex, tracing
// ============================================================================

//! ## Overview
//! Runtime modules implement each pipeline stage as pure functions over core
//! types. [`DecisionEngine`] composes them; every external surface should call
//! through the engine so all callers observe identical decisions.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod analyzer;
pub mod classify;
pub mod engine;
pub mod estimate;
pub mod planner;
pub mod reasoning;
pub mod risk;
pub mod scoring;
pub mod selector;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use analyzer::AnalyzerError;
pub use analyzer::ContextAnalyzer;
pub use engine::DecisionEngine;
pub use engine::EngineError;
pub use estimate::estimate;
pub use planner::plan;
pub use reasoning::explain;
pub use risk::assess;
pub use scoring::ScoreFactor;
pub use scoring::score;
pub use selector::select_all;
