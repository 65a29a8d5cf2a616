// crates/stack-decision-core/tests/context_analyzer.rs
// ============================================================================
// Module: Context Analyzer Tests
// Description: Keyword detection, fallbacks, and node-count thresholds.
// Purpose: Ensure each context dimension is detected independently.
// ============================================================================

//! ## Overview
//! Exercises each context detector on its own: node-count thresholds,
//! keyword precedence, and the defaults used when nothing matches.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;

use proptest::prelude::*;
use stack_decision_core::BudgetTier;
use stack_decision_core::ComplianceTag;
use stack_decision_core::ContextAnalyzer;
use stack_decision_core::MaintenanceCapability;
use stack_decision_core::Platform;
use stack_decision_core::RiskTolerance;
use stack_decision_core::ScalabilityNeeds;
use stack_decision_core::TeamSize;
use stack_decision_core::TimeToMarket;
use stack_decision_core::runtime::analyzer::maintenance_capability_for;
use stack_decision_core::runtime::analyzer::team_size_for;

mod common;
use crate::common::service_graph;

proptest! {
    #[test]
    fn node_count_thresholds_are_monotonic(a in 0_usize..64, b in 0_usize..64) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(team_size_for(low) <= team_size_for(high));
        prop_assert!(maintenance_capability_for(low) <= maintenance_capability_for(high));
    }
}

#[test]
fn growing_graph_moves_team_from_small_to_enterprise() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    let text = "Inventory service";
    let mut previous = MaintenanceCapability::Limited;
    for count in 4..=20 {
        let ctx = analyzer.analyze(&service_graph(count, 0), text);
        assert!(ctx.maintenance_capability >= previous);
        previous = ctx.maintenance_capability;
    }
    assert_eq!(analyzer.analyze(&service_graph(4, 0), text).team_size, TeamSize::Small);
    assert_eq!(analyzer.analyze(&service_graph(20, 0), text).team_size, TeamSize::Enterprise);
    assert_eq!(previous, MaintenanceCapability::Strong);
    Ok(())
}

#[test]
fn maintenance_thresholds() {
    assert_eq!(maintenance_capability_for(6), MaintenanceCapability::Limited);
    assert_eq!(maintenance_capability_for(7), MaintenanceCapability::Moderate);
    assert_eq!(maintenance_capability_for(12), MaintenanceCapability::Moderate);
    assert_eq!(maintenance_capability_for(13), MaintenanceCapability::Strong);
}

#[test]
fn budget_keywords_take_precedence_over_node_count() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    assert_eq!(analyzer.budget_tier("Seed-stage startup", 30), BudgetTier::Startup);
    assert_eq!(analyzer.budget_tier("Fortune 500 ENTERPRISE rollout", 2), BudgetTier::Enterprise);
    assert_eq!(analyzer.budget_tier("Series B company in growth mode", 2), BudgetTier::Growth);
    assert_eq!(analyzer.budget_tier("Established mid-size retailer", 2), BudgetTier::Established);
    assert_eq!(analyzer.budget_tier("startup selling to enterprise", 2), BudgetTier::Startup);
    assert_eq!(analyzer.budget_tier("Inventory service", 4), BudgetTier::Startup);
    assert_eq!(analyzer.budget_tier("Inventory service", 8), BudgetTier::Growth);
    assert_eq!(analyzer.budget_tier("Inventory service", 15), BudgetTier::Established);
    assert_eq!(analyzer.budget_tier("Inventory service", 16), BudgetTier::Enterprise);
    Ok(())
}

#[test]
fn compliance_tags_match_together() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    let found = analyzer.compliance_needs("HIPAA and gdpr, plus SOC2 and ISO 27001 and PCI DSS");
    let expected: BTreeSet<ComplianceTag> = [
        ComplianceTag::Hipaa,
        ComplianceTag::PciDss,
        ComplianceTag::Soc2,
        ComplianceTag::Gdpr,
        ComplianceTag::Iso27001,
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
    assert!(analyzer.compliance_needs("a specific capacity plan").is_empty());
    Ok(())
}

#[test]
fn delivery_scale_and_risk_keywords() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    assert_eq!(analyzer.time_to_market("Need it ASAP"), TimeToMarket::Urgent);
    assert_eq!(analyzer.time_to_market("phased roadmap but urgent"), TimeToMarket::Urgent);
    assert_eq!(analyzer.time_to_market("Long-term phased migration"), TimeToMarket::Planned);
    assert_eq!(analyzer.time_to_market("Inventory service"), TimeToMarket::Standard);

    assert_eq!(analyzer.scalability_needs("Millions of users worldwide"), ScalabilityNeeds::Massive);
    assert_eq!(analyzer.scalability_needs("High traffic API"), ScalabilityNeeds::High);
    assert_eq!(analyzer.scalability_needs("Internal tool for HR"), ScalabilityNeeds::Low);
    assert_eq!(analyzer.scalability_needs("Inventory service"), ScalabilityNeeds::Medium);

    assert_eq!(analyzer.risk_tolerance("Mission-critical banking core"), RiskTolerance::Low);
    assert_eq!(analyzer.risk_tolerance("Experimental hackathon build"), RiskTolerance::High);
    assert_eq!(analyzer.risk_tolerance("Experimental healthcare pilot"), RiskTolerance::Low);
    assert_eq!(analyzer.risk_tolerance("Inventory service"), RiskTolerance::Medium);
    Ok(())
}

#[test]
fn platforms_are_detected_on_word_boundaries() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    let found = analyzer.existing_stack("Runs on AWS with Docker images, evaluating k8s");
    let expected: BTreeSet<Platform> =
        [Platform::Aws, Platform::Kubernetes, Platform::Docker].into_iter().collect();
    assert_eq!(found, expected);
    assert!(analyzer.existing_stack("laws and paws").is_empty());
    assert_eq!(
        analyzer.existing_stack("Google Cloud and Azure"),
        [Platform::Azure, Platform::Gcp].into_iter().collect::<BTreeSet<_>>()
    );
    Ok(())
}

#[test]
fn empty_description_yields_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ContextAnalyzer::new()?;
    let ctx = analyzer.analyze(&service_graph(10, 0), "");
    assert_eq!(ctx.team_size, TeamSize::Large);
    assert_eq!(ctx.budget_tier, BudgetTier::Established);
    assert!(ctx.compliance_needs.is_empty());
    assert_eq!(ctx.time_to_market, TimeToMarket::Standard);
    assert_eq!(ctx.scalability_needs, ScalabilityNeeds::Medium);
    assert_eq!(ctx.maintenance_capability, MaintenanceCapability::Moderate);
    assert_eq!(ctx.risk_tolerance, RiskTolerance::Medium);
    assert!(ctx.existing_stack.is_empty());
    Ok(())
}
