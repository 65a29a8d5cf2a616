// crates/stack-decision-core/src/core/report.rs
// ============================================================================
// Module: Stack Decision Report
// Description: Aggregate engine output consumed by renderers.
// Purpose: Bundle decisions, estimates, rollout plan, and risks in one record.
// Dependencies: crate::core::{context, decision, graph, hashing}, serde
// ============================================================================

//! ## Overview
//! The [`DecisionReport`] is the single output of an evaluation. It is built
//! fresh per call and serialized as camelCase JSON for downstream UI code.
//! [`DecisionReport::digest`] hashes the canonical JSON form so identical
//! inputs can be checked for byte-identical output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::context::EnterpriseContext;
use crate::core::decision::Decision;
use crate::core::graph::ArchitectureComplexity;
use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;

// ============================================================================
// SECTION: Cost Estimate
// ============================================================================

/// Cost figures in currency-agnostic units, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    /// One-time development cost.
    pub development: f64,
    /// Recurring monthly operational cost.
    pub monthly_operational: f64,
    /// Annual operational cost after the annual discount.
    pub annual_operational: f64,
}

// ============================================================================
// SECTION: Timeline
// ============================================================================

/// Delivery horizons rendered as duration strings such as `"17 weeks"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Minimum viable product horizon.
    pub mvp: String,
    /// Production-ready horizon.
    pub production: String,
    /// Full-scale horizon.
    pub scale: String,
}

impl Timeline {
    /// Builds a timeline from week counts.
    #[must_use]
    pub fn from_weeks(mvp: u32, production: u32, scale: u32) -> Self {
        Self {
            mvp: format_weeks(mvp),
            production: format_weeks(production),
            scale: format_weeks(scale),
        }
    }
}

/// Formats a week count as a duration string.
#[must_use]
pub fn format_weeks(weeks: u32) -> String {
    if weeks == 1 { "1 week".to_string() } else { format!("{weeks} weeks") }
}

// ============================================================================
// SECTION: Integration Plan
// ============================================================================

/// Three-phase rollout plan listing decision titles.
///
/// # Invariants
/// - Every decision title appears in exactly one phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationPlan {
    /// Critical foundation work.
    pub phase1: Vec<String>,
    /// Recommended hardening work.
    pub phase2: Vec<String>,
    /// Remaining optional work.
    pub phase3: Vec<String>,
}

impl IntegrationPlan {
    /// Iterates titles across all phases in phase order.
    pub fn titles(&self) -> impl Iterator<Item = &String> {
        self.phase1.iter().chain(&self.phase2).chain(&self.phase3)
    }
}

// ============================================================================
// SECTION: Risk Assessment
// ============================================================================

/// Categorized risk statements; any bucket may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Technical risks.
    pub technical: Vec<String>,
    /// Operational risks.
    pub operational: Vec<String>,
    /// Financial risks.
    pub financial: Vec<String>,
}

impl RiskAssessment {
    /// Returns true when no rule produced a risk.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.operational.is_empty() && self.financial.is_empty()
    }
}

// ============================================================================
// SECTION: Decision Report
// ============================================================================

/// Aggregate output of one engine evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionReport {
    /// Project display name from the descriptor.
    pub project_name: String,
    /// Architecture complexity classification.
    pub complexity: ArchitectureComplexity,
    /// Number of graph nodes.
    pub component_count: usize,
    /// Derived enterprise context.
    pub context: EnterpriseContext,
    /// Development and operational cost estimate.
    pub cost_estimate: CostEstimate,
    /// Delivery horizons.
    pub timeline: Timeline,
    /// Per-category decisions in selection order.
    pub decisions: Vec<Decision>,
    /// Three-phase rollout plan.
    pub integration_plan: IntegrationPlan,
    /// Categorized risks.
    pub risk_assessment: RiskAssessment,
}

impl DecisionReport {
    /// Computes the SHA-256 digest of the canonical JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when canonicalization fails.
    pub fn digest(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, self)
    }
}

#[cfg(test)]
mod tests {
    use super::Timeline;

    #[test]
    fn week_strings_pluralize() {
        let timeline = Timeline::from_weeks(1, 2, 17);
        assert_eq!(timeline.mvp, "1 week");
        assert_eq!(timeline.production, "2 weeks");
        assert_eq!(timeline.scale, "17 weeks");
    }
}
