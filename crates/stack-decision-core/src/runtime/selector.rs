// crates/stack-decision-core/src/runtime/selector.rs
// ============================================================================
// Module: Stack Decision Selector
// Description: Scores catalog candidates and picks one tool per category.
// Purpose: Build the ordered decision list for an evaluation.
// Dependencies: crate::core, crate::runtime::{classify, reasoning, scoring}, tracing
// ============================================================================

//! ## Overview
//! Categories are addressed in two passes: graph categories in node order,
//! then mandatory cross-cutting categories the graph does not contain. Each
//! candidate is scored and the first candidate with the maximum score wins,
//! so catalog declaration order settles ties. A category without catalog
//! candidates is skipped with a warning rather than failing the evaluation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use tracing::debug;
use tracing::warn;

use crate::core::catalog::Catalog;
use crate::core::catalog::ToolCandidate;
use crate::core::category::ComponentCategory;
use crate::core::context::EnterpriseContext;
use crate::core::decision::Decision;
use crate::core::decision::ScoredCandidate;
use crate::core::graph::ArchitectureGraph;
use crate::runtime::classify::impact;
use crate::runtime::classify::urgency;
use crate::runtime::reasoning::explain;
use crate::runtime::scoring::score;

// ============================================================================
// SECTION: Selection
// ============================================================================

/// Returns the categories to decide, graph categories first.
#[must_use]
pub fn target_categories(graph: &ArchitectureGraph) -> Vec<ComponentCategory> {
    let mut categories = graph.categories();
    for category in ComponentCategory::MANDATORY {
        if !categories.contains(&category) {
            categories.push(category);
        }
    }
    categories
}

/// Builds one decision per addressable category.
#[must_use]
pub fn select_all(
    graph: &ArchitectureGraph,
    catalog: &Catalog,
    ctx: &EnterpriseContext,
) -> Vec<Decision> {
    target_categories(graph)
        .into_iter()
        .filter_map(|category| select(category, catalog.candidates(category), ctx))
        .collect()
}

/// Builds the decision for one category, or `None` without candidates.
#[must_use]
pub fn select(
    category: ComponentCategory,
    candidates: &[ToolCandidate],
    ctx: &EnterpriseContext,
) -> Option<Decision> {
    let scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|tool| ScoredCandidate {
            tool: tool.clone(),
            enterprise_score: score(tool, ctx),
        })
        .collect();
    let Some(best) = best_index(&scored) else {
        warn!(category = category.as_str(), "no catalog candidates; skipping category");
        return None;
    };
    let selected = &scored[best].tool;
    debug!(
        category = category.as_str(),
        tool = selected.id.as_str(),
        score = scored[best].enterprise_score,
        "selected tool"
    );
    Some(Decision {
        component: category,
        title: Decision::title_for(category),
        selected_tool_id: selected.id.clone(),
        selected_tool_name: selected.name.clone(),
        reasoning: explain(selected, ctx),
        impact: impact(category),
        urgency: urgency(category, ctx),
        candidates: scored,
    })
}

/// Returns the index of the first candidate with the maximum score.
#[must_use]
pub fn best_index(scored: &[ScoredCandidate]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, candidate) in scored.iter().enumerate() {
        match best {
            Some((_, top)) if candidate.enterprise_score <= top => {}
            _ => best = Some((index, candidate.enterprise_score)),
        }
    }
    best.map(|(index, _)| index)
}
