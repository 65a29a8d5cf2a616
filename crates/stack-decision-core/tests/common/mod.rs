// crates/stack-decision-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared fixtures for stack decision core tests.
// Purpose: Reduce duplication across integration tests for stack-decision-core.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeSet;

use stack_decision_core::ArchitectureGraph;
use stack_decision_core::BudgetTier;
use stack_decision_core::ComponentCategory;
use stack_decision_core::Decision;
use stack_decision_core::DocumentationQuality;
use stack_decision_core::EnterpriseContext;
use stack_decision_core::GraphEdge;
use stack_decision_core::GraphNode;
use stack_decision_core::Level;
use stack_decision_core::MaintenanceCapability;
use stack_decision_core::PricingModel;
use stack_decision_core::ProjectDescriptor;
use stack_decision_core::RiskTolerance;
use stack_decision_core::ScalabilityNeeds;
use stack_decision_core::ScoredCandidate;
use stack_decision_core::TeamSize;
use stack_decision_core::TimeToMarket;
use stack_decision_core::ToolCandidate;
use stack_decision_core::ToolType;
use stack_decision_core::Urgency;

/// Returns a context where no scoring branch fires except the team branch.
pub fn neutral_context() -> EnterpriseContext {
    EnterpriseContext {
        team_size: TeamSize::Large,
        budget_tier: BudgetTier::Growth,
        compliance_needs: BTreeSet::new(),
        time_to_market: TimeToMarket::Standard,
        scalability_needs: ScalabilityNeeds::Medium,
        maintenance_capability: MaintenanceCapability::Moderate,
        risk_tolerance: RiskTolerance::Medium,
        existing_stack: BTreeSet::new(),
    }
}

/// Returns a commercial, medium-everything tool with the given popularity.
pub fn tool(id: &str, category: ComponentCategory, popularity: u8) -> ToolCandidate {
    ToolCandidate {
        id: id.to_string(),
        category,
        name: id.to_uppercase(),
        tool_type: ToolType::Commercial,
        pricing_model: PricingModel::UsageBased,
        cost: None,
        complexity: Level::Medium,
        popularity: Some(popularity),
        documentation_quality: DocumentationQuality::Good,
        integration_effort: Level::Medium,
        cloud_provider: None,
        support_level: None,
    }
}

/// Wraps a tool as the only, selected candidate of a decision.
pub fn decision_with(tool: ToolCandidate, urgency: Urgency) -> Decision {
    let category = tool.category;
    Decision {
        component: category,
        title: Decision::title_for(category),
        selected_tool_id: tool.id.clone(),
        selected_tool_name: tool.name.clone(),
        reasoning: String::new(),
        impact: Level::Low,
        urgency,
        candidates: vec![ScoredCandidate {
            tool,
            enterprise_score: 50,
        }],
    }
}

/// Builds a decision for a category with a placeholder tool.
pub fn decision(category: ComponentCategory, urgency: Urgency) -> Decision {
    decision_with(tool(category.as_str(), category, 50), urgency)
}

/// Builds a graph with one node per type and `edges` chained edges.
pub fn graph_of(types: &[&str], edges: usize) -> ArchitectureGraph {
    let nodes: Vec<GraphNode> = types
        .iter()
        .enumerate()
        .map(|(index, node_type)| GraphNode::new(format!("n{index}"), *node_type))
        .collect();
    let edges = (0..edges).map(|index| GraphEdge::new(format!("n{index}"), format!("n{}", index + 1))).collect();
    ArchitectureGraph {
        nodes,
        edges,
    }
}

/// Builds a graph of `count` generic service nodes.
pub fn service_graph(count: usize, edges: usize) -> ArchitectureGraph {
    let types = vec!["service"; count];
    graph_of(&types, edges)
}

/// Builds a descriptor with a fixed project name.
pub fn descriptor(description: &str) -> ProjectDescriptor {
    ProjectDescriptor::new("Test Project", description)
}
