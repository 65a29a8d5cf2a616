// crates/stack-decision-core/src/core/decision.rs
// ============================================================================
// Module: Stack Decision Records
// Description: Per-category decision records with scored candidates.
// Purpose: Capture the selected tool, its alternatives, and classification.
// Dependencies: crate::core::{catalog, category}, serde
// ============================================================================

//! ## Overview
//! A [`Decision`] is emitted for each component category the engine
//! addresses. It keeps every candidate of the category with its computed
//! score so downstream consumers can show alternatives next to the pick.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::catalog::Level;
use crate::core::catalog::ToolCandidate;
use crate::core::category::ComponentCategory;

// ============================================================================
// SECTION: Urgency
// ============================================================================

/// Rollout urgency of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Nice to have.
    Optional,
    /// Should land before production.
    Recommended,
    /// Must land first.
    Critical,
}

impl Urgency {
    /// Returns the stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Optional => "optional",
            Self::Recommended => "recommended",
            Self::Critical => "critical",
        }
    }
}

// ============================================================================
// SECTION: Scored Candidate
// ============================================================================

/// Catalog candidate annotated with its context score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// Catalog entry.
    #[serde(flatten)]
    pub tool: ToolCandidate,
    /// Context-weighted score in `0..=100`.
    pub enterprise_score: u8,
}

// ============================================================================
// SECTION: Decision
// ============================================================================

/// Tool selection for one component category.
///
/// # Invariants
/// - `candidates` preserves catalog declaration order.
/// - `selected_tool_id` names the first candidate with the maximum score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Addressed component category.
    pub component: ComponentCategory,
    /// Display title, unique per category.
    pub title: String,
    /// Every category candidate with its score.
    pub candidates: Vec<ScoredCandidate>,
    /// Identifier of the selected tool.
    pub selected_tool_id: String,
    /// Display name of the selected tool.
    pub selected_tool_name: String,
    /// Explanation of the factors behind the selection.
    pub reasoning: String,
    /// Architectural impact of the category.
    pub impact: Level,
    /// Rollout urgency of the category.
    pub urgency: Urgency,
}

impl Decision {
    /// Returns the decision title for a category.
    #[must_use]
    pub fn title_for(category: ComponentCategory) -> String {
        format!("{} Selection", category.display_name())
    }

    /// Returns the selected candidate.
    #[must_use]
    pub fn selected(&self) -> Option<&ScoredCandidate> {
        self.candidates.iter().find(|candidate| candidate.tool.id == self.selected_tool_id)
    }

    /// Returns the selected tool.
    #[must_use]
    pub fn selected_tool(&self) -> Option<&ToolCandidate> {
        self.selected().map(|candidate| &candidate.tool)
    }
}
