// crates/stack-decision-core/src/runtime/scoring.rs
// ============================================================================
// Module: Stack Decision Scoring
// Description: Additive point model rating a tool against a context.
// Purpose: Produce comparable 0-100 scores for candidate selection.
// Dependencies: crate::core::{catalog, context}
// ============================================================================

//! ## Overview
//! A score starts at the tool's popularity (50 when unknown) and adds the
//! points of every [`ScoreFactor`] that fires. All context branches are
//! evaluated; their contributions sum and the total is clamped to `0..=100`.
//! The reasoning generator consumes the same factor list, so every point
//! awarded has a matching explanation.
//!
//! Security posture: tool attributes come from the trusted catalog; the
//! context is derived from untrusted text but is already a closed enum set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::DocumentationQuality;
use crate::core::catalog::Level;
use crate::core::catalog::PricingModel;
use crate::core::catalog::SupportLevel;
use crate::core::catalog::ToolCandidate;
use crate::core::catalog::ToolType;
use crate::core::context::BudgetTier;
use crate::core::context::EnterpriseContext;
use crate::core::context::MaintenanceCapability;
use crate::core::context::RiskTolerance;
use crate::core::context::ScalabilityNeeds;
use crate::core::context::TeamSize;
use crate::core::context::TimeToMarket;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base score for tools without a popularity rating.
pub const DEFAULT_POPULARITY: u8 = 50;
/// Highest possible score.
pub const MAX_SCORE: u8 = 100;
/// Popularity above which a complex tool counts as proven for large teams.
const PROVEN_POPULARITY: u8 = 80;
/// Popularity above which a tool counts as safe for risk-averse teams.
const SAFE_POPULARITY: u8 = 85;

// ============================================================================
// SECTION: Score Factors
// ============================================================================

/// Context condition that adds points to a tool score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreFactor {
    /// Small or medium team, managed service.
    ManagedForSmallTeam,
    /// Small or medium team, low complexity.
    SimpleForSmallTeam,
    /// Large or enterprise team, open source.
    OpenSourceForLargeTeam,
    /// Large or enterprise team, complex but proven tool.
    ProvenForLargeTeam,
    /// Startup budget, free pricing.
    FreeForStartup,
    /// Startup budget, freemium pricing.
    FreemiumForStartup,
    /// Startup budget, open source.
    OpenSourceForStartup,
    /// Enterprise budget, commercial or managed tool.
    VendorBackedForEnterprise,
    /// Enterprise budget, enterprise support.
    EnterpriseSupport,
    /// Compliance needs, managed service.
    ManagedForCompliance,
    /// Compliance needs, cloud provider affinity.
    CloudForCompliance,
    /// Urgent delivery, low complexity.
    SimpleForUrgency,
    /// Urgent delivery, low integration effort.
    EasyIntegrationForUrgency,
    /// Urgent delivery, managed service.
    ManagedForUrgency,
    /// High or massive scale, managed service.
    ManagedForScale,
    /// High or massive scale, cloud provider affinity.
    CloudForScale,
    /// Limited maintenance capability, managed service.
    ManagedForLimitedOps,
    /// Limited maintenance capability, low complexity.
    SimpleForLimitedOps,
    /// Low risk tolerance, very popular tool.
    PopularForLowRisk,
    /// Low risk tolerance, managed service.
    ManagedForLowRisk,
    /// Low risk tolerance, excellent documentation.
    DocumentedForLowRisk,
}

impl ScoreFactor {
    /// Points awarded when the factor fires.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::SimpleForSmallTeam
            | Self::ProvenForLargeTeam
            | Self::FreemiumForStartup
            | Self::VendorBackedForEnterprise
            | Self::ManagedForCompliance
            | Self::EasyIntegrationForUrgency
            | Self::ManagedForUrgency
            | Self::ManagedForScale
            | Self::SimpleForLimitedOps
            | Self::PopularForLowRisk => 15,
            Self::ManagedForSmallTeam
            | Self::OpenSourceForStartup
            | Self::EnterpriseSupport
            | Self::SimpleForUrgency => 20,
            Self::FreeForStartup | Self::ManagedForLimitedOps => 25,
            Self::OpenSourceForLargeTeam
            | Self::CloudForCompliance
            | Self::CloudForScale
            | Self::ManagedForLowRisk
            | Self::DocumentedForLowRisk => 10,
        }
    }
}

// ============================================================================
// SECTION: Scoring
// ============================================================================

/// Returns the popularity used as the score baseline.
#[must_use]
pub fn base_popularity(tool: &ToolCandidate) -> u8 {
    tool.popularity.unwrap_or(DEFAULT_POPULARITY)
}

/// Returns every factor that fires for a tool in a context, in rule order.
#[must_use]
pub fn factors(tool: &ToolCandidate, ctx: &EnterpriseContext) -> Vec<ScoreFactor> {
    let managed = tool.tool_type == ToolType::ManagedService;
    let open_source = tool.tool_type == ToolType::OpenSource;
    let simple = tool.complexity == Level::Low;
    let has_cloud = tool.cloud_provider.is_some();
    let popularity = base_popularity(tool);
    let mut fired = Vec::new();
    let mut check = |condition: bool, factor: ScoreFactor| {
        if condition {
            fired.push(factor);
        }
    };

    match ctx.team_size {
        TeamSize::Small | TeamSize::Medium => {
            check(managed, ScoreFactor::ManagedForSmallTeam);
            check(simple, ScoreFactor::SimpleForSmallTeam);
        }
        TeamSize::Large | TeamSize::Enterprise => {
            check(open_source, ScoreFactor::OpenSourceForLargeTeam);
            check(
                tool.complexity == Level::High && popularity > PROVEN_POPULARITY,
                ScoreFactor::ProvenForLargeTeam,
            );
        }
    }

    match ctx.budget_tier {
        BudgetTier::Startup => {
            check(tool.pricing_model == PricingModel::Free, ScoreFactor::FreeForStartup);
            check(tool.pricing_model == PricingModel::Freemium, ScoreFactor::FreemiumForStartup);
            check(open_source, ScoreFactor::OpenSourceForStartup);
        }
        BudgetTier::Enterprise => {
            check(
                managed || tool.tool_type == ToolType::Commercial,
                ScoreFactor::VendorBackedForEnterprise,
            );
            check(
                tool.support_level == Some(SupportLevel::Enterprise),
                ScoreFactor::EnterpriseSupport,
            );
        }
        BudgetTier::Growth | BudgetTier::Established => {}
    }

    if ctx.has_compliance_needs() {
        check(managed, ScoreFactor::ManagedForCompliance);
        check(has_cloud, ScoreFactor::CloudForCompliance);
    }

    if ctx.time_to_market == TimeToMarket::Urgent {
        check(simple, ScoreFactor::SimpleForUrgency);
        check(tool.integration_effort == Level::Low, ScoreFactor::EasyIntegrationForUrgency);
        check(managed, ScoreFactor::ManagedForUrgency);
    }

    if matches!(ctx.scalability_needs, ScalabilityNeeds::High | ScalabilityNeeds::Massive) {
        check(managed, ScoreFactor::ManagedForScale);
        check(has_cloud, ScoreFactor::CloudForScale);
    }

    if ctx.maintenance_capability == MaintenanceCapability::Limited {
        check(managed, ScoreFactor::ManagedForLimitedOps);
        check(simple, ScoreFactor::SimpleForLimitedOps);
    }

    if ctx.risk_tolerance == RiskTolerance::Low {
        check(popularity > SAFE_POPULARITY, ScoreFactor::PopularForLowRisk);
        check(managed, ScoreFactor::ManagedForLowRisk);
        check(
            tool.documentation_quality == DocumentationQuality::Excellent,
            ScoreFactor::DocumentedForLowRisk,
        );
    }

    fired
}

/// Scores a tool against a context, clamped to `0..=100`.
#[must_use]
pub fn score(tool: &ToolCandidate, ctx: &EnterpriseContext) -> u8 {
    let bonus: u32 = factors(tool, ctx).into_iter().map(ScoreFactor::points).sum();
    let total = u32::from(base_popularity(tool)).saturating_add(bonus);
    u8::try_from(total.min(u32::from(MAX_SCORE))).unwrap_or(MAX_SCORE)
}
