// crates/stack-decision-core/src/runtime/planner.rs
// ============================================================================
// Module: Stack Decision Integration Planner
// Description: Partitions decisions into three rollout phases.
// Purpose: Order adoption from foundation work to optional additions.
// Dependencies: crate::core::{category, decision, report}
// ============================================================================

//! ## Overview
//! Phases are filled greedily in decision order. Phase 1 takes critical and
//! foundational decisions up to its cap; phase 2 takes recommended and
//! platform decisions from what remains, also capped; phase 3 receives the
//! rest, including anything a cap pushed out.
//!
//! # Invariants
//! - Every decision title lands in exactly one phase.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::category::ComponentCategory;
use crate::core::decision::Decision;
use crate::core::decision::Urgency;
use crate::core::report::IntegrationPlan;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of phase 1 decisions.
pub const PHASE1_CAP: usize = 5;
/// Maximum number of phase 2 decisions.
pub const PHASE2_CAP: usize = 6;

// ============================================================================
// SECTION: Planning
// ============================================================================

/// Returns true when a decision belongs to the foundation phase.
const fn is_foundation(decision: &Decision) -> bool {
    matches!(decision.urgency, Urgency::Critical)
        || matches!(
            decision.component,
            ComponentCategory::Database | ComponentCategory::CloudProvider | ComponentCategory::Security
        )
}

/// Returns true when a decision belongs to the hardening phase.
const fn is_hardening(decision: &Decision) -> bool {
    matches!(decision.urgency, Urgency::Recommended)
        || matches!(
            decision.component,
            ComponentCategory::Monitoring
                | ComponentCategory::CiCd
                | ComponentCategory::ContainerOrchestration
        )
}

/// Partitions decisions into three rollout phases of decision titles.
#[must_use]
pub fn plan(decisions: &[Decision]) -> IntegrationPlan {
    let mut placed = vec![false; decisions.len()];
    let phase1 = take_phase(decisions, &mut placed, PHASE1_CAP, is_foundation);
    let phase2 = take_phase(decisions, &mut placed, PHASE2_CAP, is_hardening);
    let phase3 = decisions
        .iter()
        .zip(&placed)
        .filter(|(_, done)| !**done)
        .map(|(decision, _)| decision.title.clone())
        .collect();
    IntegrationPlan {
        phase1,
        phase2,
        phase3,
    }
}

/// Takes up to `cap` unplaced decisions matching `eligible`, marking them placed.
fn take_phase(
    decisions: &[Decision],
    placed: &mut [bool],
    cap: usize,
    eligible: fn(&Decision) -> bool,
) -> Vec<String> {
    let mut phase = Vec::new();
    for (decision, done) in decisions.iter().zip(placed.iter_mut()) {
        if phase.len() == cap {
            break;
        }
        if !*done && eligible(decision) {
            *done = true;
            phase.push(decision.title.clone());
        }
    }
    phase
}
