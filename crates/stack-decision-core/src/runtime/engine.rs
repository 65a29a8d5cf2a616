// crates/stack-decision-core/src/runtime/engine.rs
// ============================================================================
// Module: Stack Decision Engine
// Description: Evaluation entry point composing the decision pipeline.
// Purpose: Turn a graph and descriptor into a complete decision report.
// Dependencies: crate::core, crate::runtime, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! [`DecisionEngine`] validates inputs, derives the enterprise context,
//! selects tools, and runs the estimate, planning, and risk stages over the
//! resulting decisions. The engine holds only read-only state (the catalog,
//! compiled keyword patterns, and input limits), so one instance can serve
//! concurrent evaluations from many threads.
//!
//! Security posture: graph and descriptor payloads are untrusted; they are
//! checked for required fields and size limits before any analysis.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::graph::ArchitectureGraph;
use crate::core::graph::EngineLimits;
use crate::core::graph::InputError;
use crate::core::graph::ProjectDescriptor;
use crate::core::graph::validate_inputs;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::report::DecisionReport;
use crate::runtime::analyzer::AnalyzerError;
use crate::runtime::analyzer::ContextAnalyzer;
use crate::runtime::estimate::estimate;
use crate::runtime::estimate::timeline;
use crate::runtime::planner::plan;
use crate::runtime::risk::assess;
use crate::runtime::selector::select_all;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Decision engine failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Input payload was rejected.
    #[error("invalid input: {0}")]
    Input(#[from] InputError),
    /// Keyword detectors failed to build.
    #[error("context analyzer setup failed: {0}")]
    Analyzer(#[from] AnalyzerError),
    /// Report hashing failed.
    #[error("report hashing failed: {0}")]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Decision Engine
// ============================================================================

/// Stateless decision pipeline over a read-only catalog.
#[derive(Debug, Clone)]
pub struct DecisionEngine<'a> {
    /// Tool catalog consulted for candidates.
    catalog: &'a Catalog,
    /// Compiled context detectors.
    analyzer: ContextAnalyzer,
    /// Input size limits.
    limits: EngineLimits,
}

impl DecisionEngine<'static> {
    /// Builds an engine over the built-in catalog with default limits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Analyzer`] when keyword detectors fail to build.
    pub fn builtin() -> Result<Self, EngineError> {
        DecisionEngine::new(Catalog::builtin(), EngineLimits::default())
    }
}

impl<'a> DecisionEngine<'a> {
    /// Builds an engine over a catalog with explicit limits.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Analyzer`] when keyword detectors fail to build.
    pub fn new(catalog: &'a Catalog, limits: EngineLimits) -> Result<Self, EngineError> {
        Ok(Self {
            catalog,
            analyzer: ContextAnalyzer::new()?,
            limits,
        })
    }

    /// Returns the catalog used by this engine.
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Returns the input limits enforced by this engine.
    #[must_use]
    pub const fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    /// Evaluates typed inputs into a decision report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Input`] when an input exceeds the engine limits.
    pub fn evaluate(
        &self,
        graph: &ArchitectureGraph,
        descriptor: &ProjectDescriptor,
    ) -> Result<DecisionReport, EngineError> {
        validate_inputs(graph, descriptor, &self.limits)?;
        let component_count = graph.nodes.len();
        let complexity = graph.complexity();
        debug!(
            project = descriptor.project_name.as_str(),
            nodes = component_count,
            edges = graph.edges.len(),
            complexity = complexity.as_str(),
            "evaluating architecture"
        );

        let context = self.analyzer.analyze(graph, &descriptor.description);
        debug!(
            team_size = context.team_size.as_str(),
            scalability = context.scalability_needs.as_str(),
            compliance = context.compliance_label().as_str(),
            "derived enterprise context"
        );

        let decisions = select_all(graph, self.catalog, &context);
        let cost_estimate = estimate(&decisions, &context);
        let timeline = timeline(complexity, component_count, &context);
        let integration_plan = plan(&decisions);
        let risk_assessment = assess(&decisions, &context);
        debug!(decisions = decisions.len(), "evaluation complete");

        Ok(DecisionReport {
            project_name: descriptor.project_name.clone(),
            complexity,
            component_count,
            context,
            cost_estimate,
            timeline,
            decisions,
            integration_plan,
            risk_assessment,
        })
    }

    /// Evaluates untrusted JSON payloads into a decision report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Input`] when a payload is missing required
    /// fields, is malformed, or exceeds the engine limits.
    pub fn evaluate_json(
        &self,
        graph: Value,
        descriptor: Value,
    ) -> Result<DecisionReport, EngineError> {
        let graph = ArchitectureGraph::from_value(graph)?;
        let descriptor = ProjectDescriptor::from_value(descriptor)?;
        self.evaluate(&graph, &descriptor)
    }

    /// Evaluates typed inputs and hashes the resulting report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when evaluation or hashing fails.
    pub fn evaluate_with_digest(
        &self,
        graph: &ArchitectureGraph,
        descriptor: &ProjectDescriptor,
    ) -> Result<(DecisionReport, HashDigest), EngineError> {
        let report = self.evaluate(graph, descriptor)?;
        let digest = report.digest()?;
        Ok((report, digest))
    }
}
