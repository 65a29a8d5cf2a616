// crates/stack-decision-core/src/runtime/analyzer.rs
// ============================================================================
// Module: Stack Decision Context Analyzer
// Description: Derives an enterprise context from graph size and free text.
// Purpose: Turn heuristic keyword signals into typed context dimensions.
// Dependencies: crate::core::{context, graph}, regex, thiserror
// ============================================================================

//! ## Overview
//! Each context dimension is an independent detector: a pure function of the
//! node count or of the description text. Keyword detectors run
//! case-insensitive regular expressions compiled once when the analyzer is
//! built. Detection never fails; a dimension with no matching keyword falls
//! back to a fixed default or to a node-count threshold.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use regex::Regex;
use regex::RegexBuilder;
use thiserror::Error;

use crate::core::context::BudgetTier;
use crate::core::context::ComplianceTag;
use crate::core::context::EnterpriseContext;
use crate::core::context::MaintenanceCapability;
use crate::core::context::Platform;
use crate::core::context::RiskTolerance;
use crate::core::context::ScalabilityNeeds;
use crate::core::context::TeamSize;
use crate::core::context::TimeToMarket;
use crate::core::graph::ArchitectureGraph;

// ============================================================================
// SECTION: Keyword Tables
// ============================================================================

/// Budget keywords in precedence order.
const BUDGET_PATTERNS: [(BudgetTier, &str); 4] = [
    (
        BudgetTier::Startup,
        r"startup|start-up|\bmvp\b|bootstrap|side project|limited budget|small budget|pre-seed|\bseed\b",
    ),
    (BudgetTier::Enterprise, r"enterprise|fortune 500|corporate|large organi[sz]ation|multinational"),
    (BudgetTier::Growth, r"growth|scale-?up|series [a-c]\b|venture|funded"),
    (BudgetTier::Established, r"established|mid-?size|mid-market|profitable|smb\b"),
];

/// Compliance keywords; every matching tag is reported.
const COMPLIANCE_PATTERNS: [(ComplianceTag, &str); 5] = [
    (ComplianceTag::Hipaa, r"hipaa"),
    (ComplianceTag::PciDss, r"\bpci\b|payment card"),
    (ComplianceTag::Soc2, r"soc ?2"),
    (ComplianceTag::Gdpr, r"gdpr"),
    (ComplianceTag::Iso27001, r"iso ?27001"),
];

/// Urgent delivery keywords.
const URGENT_PATTERN: &str = r"urgent|asap|quick|fast|rapid|tight deadline|\bmvp\b|launch soon";

/// Planned delivery keywords.
const PLANNED_PATTERN: &str = r"long-term|planned|roadmap|no rush|phased";

/// Scalability keywords in precedence order.
const SCALABILITY_PATTERNS: [(ScalabilityNeeds, &str); 3] = [
    (ScalabilityNeeds::Massive, r"millions of users|massive|hyperscale|global scale"),
    (
        ScalabilityNeeds::High,
        r"high traffic|scalab|thousands of users|high availability|rapid growth",
    ),
    (ScalabilityNeeds::Low, r"internal tool|prototype|small user base|low traffic"),
];

/// Low risk tolerance keywords.
const RISK_LOW_PATTERN: &str = r"mission-critical|\bbank|financial|healthcare|regulated|conservative";

/// High risk tolerance keywords.
const RISK_HIGH_PATTERN: &str = r"experimental|cutting-edge|hackathon|proof of concept";

/// Platform keywords; every matching platform is reported.
const PLATFORM_PATTERNS: [(Platform, &str); 5] = [
    (Platform::Aws, r"\baws\b|amazon web services"),
    (Platform::Azure, r"azure"),
    (Platform::Gcp, r"\bgcp\b|google cloud"),
    (Platform::Kubernetes, r"kubernetes|\bk8s\b"),
    (Platform::Docker, r"docker"),
];

// ============================================================================
// SECTION: Node Count Detectors
// ============================================================================

/// Buckets team size by node count.
#[must_use]
pub const fn team_size_for(node_count: usize) -> TeamSize {
    match node_count {
        0..=4 => TeamSize::Small,
        5..=8 => TeamSize::Medium,
        9..=15 => TeamSize::Large,
        _ => TeamSize::Enterprise,
    }
}

/// Buckets maintenance capability by node count.
#[must_use]
pub const fn maintenance_capability_for(node_count: usize) -> MaintenanceCapability {
    if node_count > 12 {
        MaintenanceCapability::Strong
    } else if node_count > 6 {
        MaintenanceCapability::Moderate
    } else {
        MaintenanceCapability::Limited
    }
}

/// Budget tier used when no budget keyword matches.
#[must_use]
pub const fn budget_fallback_for(node_count: usize) -> BudgetTier {
    match node_count {
        0..=4 => BudgetTier::Startup,
        5..=8 => BudgetTier::Growth,
        9..=15 => BudgetTier::Established,
        _ => BudgetTier::Enterprise,
    }
}

// ============================================================================
// SECTION: Context Analyzer
// ============================================================================

/// Keyword-driven context detector with precompiled patterns.
#[derive(Debug, Clone)]
pub struct ContextAnalyzer {
    /// Budget detectors in precedence order.
    budget: Vec<(BudgetTier, Regex)>,
    /// Compliance detectors.
    compliance: Vec<(ComplianceTag, Regex)>,
    /// Urgent delivery detector.
    urgent: Regex,
    /// Planned delivery detector.
    planned: Regex,
    /// Scalability detectors in precedence order.
    scalability: Vec<(ScalabilityNeeds, Regex)>,
    /// Low risk tolerance detector.
    risk_low: Regex,
    /// High risk tolerance detector.
    risk_high: Regex,
    /// Platform detectors.
    platforms: Vec<(Platform, Regex)>,
}

impl ContextAnalyzer {
    /// Compiles the keyword detectors.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Pattern`] when a keyword pattern fails to compile.
    pub fn new() -> Result<Self, AnalyzerError> {
        Ok(Self {
            budget: compile_table(&BUDGET_PATTERNS)?,
            compliance: compile_table(&COMPLIANCE_PATTERNS)?,
            urgent: compile(URGENT_PATTERN)?,
            planned: compile(PLANNED_PATTERN)?,
            scalability: compile_table(&SCALABILITY_PATTERNS)?,
            risk_low: compile(RISK_LOW_PATTERN)?,
            risk_high: compile(RISK_HIGH_PATTERN)?,
            platforms: compile_table(&PLATFORM_PATTERNS)?,
        })
    }

    /// Derives the enterprise context for a graph and description.
    #[must_use]
    pub fn analyze(&self, graph: &ArchitectureGraph, description: &str) -> EnterpriseContext {
        let node_count = graph.nodes.len();
        EnterpriseContext {
            team_size: team_size_for(node_count),
            budget_tier: self.budget_tier(description, node_count),
            compliance_needs: self.compliance_needs(description),
            time_to_market: self.time_to_market(description),
            scalability_needs: self.scalability_needs(description),
            maintenance_capability: maintenance_capability_for(node_count),
            risk_tolerance: self.risk_tolerance(description),
            existing_stack: self.existing_stack(description),
        }
    }

    /// Detects the budget tier, falling back to node-count thresholds.
    #[must_use]
    pub fn budget_tier(&self, description: &str, node_count: usize) -> BudgetTier {
        first_match(&self.budget, description).unwrap_or_else(|| budget_fallback_for(node_count))
    }

    /// Detects every compliance regime named in the description.
    #[must_use]
    pub fn compliance_needs(&self, description: &str) -> BTreeSet<ComplianceTag> {
        all_matches(&self.compliance, description)
    }

    /// Detects delivery pressure; urgent signals win over planned ones.
    #[must_use]
    pub fn time_to_market(&self, description: &str) -> TimeToMarket {
        if self.urgent.is_match(description) {
            TimeToMarket::Urgent
        } else if self.planned.is_match(description) {
            TimeToMarket::Planned
        } else {
            TimeToMarket::Standard
        }
    }

    /// Detects expected load growth.
    #[must_use]
    pub fn scalability_needs(&self, description: &str) -> ScalabilityNeeds {
        first_match(&self.scalability, description).unwrap_or(ScalabilityNeeds::Medium)
    }

    /// Detects risk appetite; conservative signals win.
    #[must_use]
    pub fn risk_tolerance(&self, description: &str) -> RiskTolerance {
        if self.risk_low.is_match(description) {
            RiskTolerance::Low
        } else if self.risk_high.is_match(description) {
            RiskTolerance::High
        } else {
            RiskTolerance::Medium
        }
    }

    /// Detects platforms already in use.
    #[must_use]
    pub fn existing_stack(&self, description: &str) -> BTreeSet<Platform> {
        all_matches(&self.platforms, description)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Compiles a case-insensitive pattern.
fn compile(pattern: &str) -> Result<Regex, AnalyzerError> {
    RegexBuilder::new(pattern).case_insensitive(true).build().map_err(|err| {
        AnalyzerError::Pattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        }
    })
}

/// Compiles a keyword table, keeping entry order.
fn compile_table<T: Copy>(table: &[(T, &str)]) -> Result<Vec<(T, Regex)>, AnalyzerError> {
    table.iter().map(|(value, pattern)| compile(pattern).map(|regex| (*value, regex))).collect()
}

/// Returns the value of the first matching detector.
fn first_match<T: Copy>(detectors: &[(T, Regex)], text: &str) -> Option<T> {
    detectors.iter().find(|(_, regex)| regex.is_match(text)).map(|(value, _)| *value)
}

/// Returns the values of every matching detector.
fn all_matches<T: Copy + Ord>(detectors: &[(T, Regex)], text: &str) -> BTreeSet<T> {
    detectors.iter().filter(|(_, regex)| regex.is_match(text)).map(|(value, _)| *value).collect()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Context analyzer construction failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// A keyword pattern failed to compile.
    #[error("invalid keyword pattern `{pattern}`: {message}")]
    Pattern {
        /// Offending pattern source.
        pattern: String,
        /// Compiler diagnostic.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::AnalyzerError;
    use super::compile;
    use super::team_size_for;
    use crate::core::context::TeamSize;

    #[test]
    fn team_size_thresholds() {
        assert_eq!(team_size_for(4), TeamSize::Small);
        assert_eq!(team_size_for(5), TeamSize::Medium);
        assert_eq!(team_size_for(8), TeamSize::Medium);
        assert_eq!(team_size_for(15), TeamSize::Large);
        assert_eq!(team_size_for(16), TeamSize::Enterprise);
    }

    #[test]
    fn invalid_pattern_reports_source() {
        assert!(matches!(
            compile("(unclosed"),
            Err(AnalyzerError::Pattern { pattern, .. }) if pattern == "(unclosed"
        ));
    }
}
