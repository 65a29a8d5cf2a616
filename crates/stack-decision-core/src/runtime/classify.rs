// crates/stack-decision-core/src/runtime/classify.rs
// ============================================================================
// Module: Stack Decision Classifier
// Description: Static impact and urgency tables per component category.
// Purpose: Rank decisions for the rollout plan.
// Dependencies: crate::core::{catalog, category, context, decision}
// ============================================================================

//! ## Overview
//! Impact and urgency are exhaustive matches over [`ComponentCategory`].
//! Urgency has three context overrides that promote a category to critical.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::Level;
use crate::core::category::ComponentCategory;
use crate::core::context::EnterpriseContext;
use crate::core::context::ScalabilityNeeds;
use crate::core::context::TimeToMarket;
use crate::core::decision::Urgency;

// ============================================================================
// SECTION: Tables
// ============================================================================

/// Returns the architectural impact of a category.
#[must_use]
pub const fn impact(category: ComponentCategory) -> Level {
    match category {
        ComponentCategory::Database
        | ComponentCategory::ApiGateway
        | ComponentCategory::Monitoring
        | ComponentCategory::CloudProvider
        | ComponentCategory::Security => Level::High,
        ComponentCategory::Cache
        | ComponentCategory::CiCd
        | ComponentCategory::Logging
        | ComponentCategory::ContainerOrchestration
        | ComponentCategory::MessageQueue => Level::Medium,
        ComponentCategory::SearchEngine
        | ComponentCategory::Analytics
        | ComponentCategory::LoadBalancer
        | ComponentCategory::Cdn => Level::Low,
    }
}

/// Returns the static urgency of a category before context overrides.
#[must_use]
pub const fn base_urgency(category: ComponentCategory) -> Urgency {
    match category {
        ComponentCategory::Database | ComponentCategory::CloudProvider => Urgency::Critical,
        ComponentCategory::Monitoring
        | ComponentCategory::CiCd
        | ComponentCategory::Cache
        | ComponentCategory::Security
        | ComponentCategory::ApiGateway => Urgency::Recommended,
        ComponentCategory::MessageQueue
        | ComponentCategory::ContainerOrchestration
        | ComponentCategory::SearchEngine
        | ComponentCategory::Analytics
        | ComponentCategory::LoadBalancer
        | ComponentCategory::Cdn
        | ComponentCategory::Logging => Urgency::Optional,
    }
}

/// Returns the urgency of a category in a context.
#[must_use]
pub fn urgency(category: ComponentCategory, ctx: &EnterpriseContext) -> Urgency {
    let promoted = match category {
        ComponentCategory::Security => ctx.has_compliance_needs(),
        ComponentCategory::ContainerOrchestration => {
            ctx.scalability_needs == ScalabilityNeeds::High
        }
        ComponentCategory::CiCd => ctx.time_to_market == TimeToMarket::Urgent,
        _ => false,
    };
    if promoted { Urgency::Critical } else { base_urgency(category) }
}
