// crates/stack-decision-core/src/runtime/estimate.rs
// ============================================================================
// Module: Stack Decision Estimates
// Description: Development cost, operational cost, and timeline estimates.
// Purpose: Aggregate selected tools into budget and delivery figures.
// Dependencies: crate::core::{catalog, context, decision, graph, report}
// ============================================================================

//! ## Overview
//! Development cost starts from a team-size base and is folded over the
//! decisions in order, multiplying by each selected tool's integration
//! effort. Monthly cost adds subscription and usage-based charges to a
//! budget-tier base. Money is rounded to two decimals only after all
//! arithmetic is done.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::Level;
use crate::core::catalog::PricingModel;
use crate::core::catalog::ToolCandidate;
use crate::core::context::BudgetTier;
use crate::core::context::EnterpriseContext;
use crate::core::context::ScalabilityNeeds;
use crate::core::context::TeamSize;
use crate::core::context::TimeToMarket;
use crate::core::decision::Decision;
use crate::core::graph::ArchitectureComplexity;
use crate::core::report::CostEstimate;
use crate::core::report::Timeline;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Discount applied to subscription list prices.
pub const SUBSCRIPTION_DISCOUNT: f64 = 0.8;
/// Discount applied when paying annually.
pub const ANNUAL_DISCOUNT: f64 = 0.9;
/// Months per year.
const MONTHS_PER_YEAR: f64 = 12.0;

// ============================================================================
// SECTION: Cost Tables
// ============================================================================

/// Development cost before effort multipliers.
#[must_use]
pub const fn development_base(team_size: TeamSize) -> f64 {
    match team_size {
        TeamSize::Enterprise => 50_000.0,
        TeamSize::Large => 30_000.0,
        TeamSize::Medium => 15_000.0,
        TeamSize::Small => 8_000.0,
    }
}

/// Development cost multiplier for an integration effort.
#[must_use]
pub const fn effort_multiplier(effort: Level) -> f64 {
    match effort {
        Level::High => 1.5,
        Level::Medium => 1.2,
        Level::Low => 1.0,
    }
}

/// Monthly operational cost before tool charges.
#[must_use]
pub const fn monthly_base(budget_tier: BudgetTier) -> f64 {
    match budget_tier {
        BudgetTier::Enterprise => 500.0,
        BudgetTier::Established => 200.0,
        BudgetTier::Growth => 100.0,
        BudgetTier::Startup => 50.0,
    }
}

/// Flat monthly charge for a usage-based tool.
#[must_use]
pub const fn usage_charge(scalability: ScalabilityNeeds) -> f64 {
    match scalability {
        ScalabilityNeeds::Massive => 200.0,
        ScalabilityNeeds::High => 100.0,
        ScalabilityNeeds::Low | ScalabilityNeeds::Medium => 30.0,
    }
}

// ============================================================================
// SECTION: Cost Estimate
// ============================================================================

/// Estimates development and operational cost for the selected tools.
#[must_use]
pub fn estimate(decisions: &[Decision], ctx: &EnterpriseContext) -> CostEstimate {
    let development = development_cost(decisions, ctx.team_size);
    let monthly = monthly_cost(decisions, ctx);
    CostEstimate {
        development: round_money(development),
        monthly_operational: round_money(monthly),
        annual_operational: round_money(monthly * MONTHS_PER_YEAR * ANNUAL_DISCOUNT),
    }
}

/// Folds effort multipliers over the decisions in order.
#[must_use]
pub fn development_cost(decisions: &[Decision], team_size: TeamSize) -> f64 {
    decisions
        .iter()
        .filter_map(Decision::selected_tool)
        .fold(development_base(team_size), |total, tool| {
            total * effort_multiplier(tool.integration_effort)
        })
}

/// Sums the monthly base and per-tool charges.
#[must_use]
pub fn monthly_cost(decisions: &[Decision], ctx: &EnterpriseContext) -> f64 {
    decisions
        .iter()
        .filter_map(Decision::selected_tool)
        .fold(monthly_base(ctx.budget_tier), |total, tool| total + tool_charge(tool, ctx))
}

/// Monthly charge contributed by one tool.
fn tool_charge(tool: &ToolCandidate, ctx: &EnterpriseContext) -> f64 {
    match tool.pricing_model {
        PricingModel::Subscription => {
            tool.cost.as_deref().map_or(0.0, parse_cost_hint) * SUBSCRIPTION_DISCOUNT
        }
        PricingModel::UsageBased => usage_charge(ctx.scalability_needs),
        PricingModel::Free | PricingModel::Freemium => 0.0,
    }
}

/// Extracts the first decimal number from a cost hint, ignoring commas.
///
/// Returns `0.0` when the hint contains no number.
#[must_use]
pub fn parse_cost_hint(hint: &str) -> f64 {
    let cleaned: String = hint.chars().filter(|ch| *ch != ',').collect();
    let Some(start) = cleaned.find(|ch: char| ch.is_ascii_digit()) else {
        return 0.0;
    };
    let tail = &cleaned[start..];
    let mut end = tail.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(tail.len());
    if tail[end..].starts_with('.') {
        let fraction = &tail[end + 1..];
        let digits = fraction.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(fraction.len());
        if digits > 0 {
            end += 1 + digits;
        }
    }
    tail[..end].parse().unwrap_or(0.0)
}

/// Rounds a money amount to two decimals.
#[must_use]
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// SECTION: Timeline
// ============================================================================

/// Timeline multiplier for a team size.
#[must_use]
pub const fn team_factor(team_size: TeamSize) -> f64 {
    match team_size {
        TeamSize::Enterprise => 0.7,
        TeamSize::Large => 0.8,
        TeamSize::Medium => 1.0,
        TeamSize::Small => 1.3,
    }
}

/// Timeline multiplier for delivery pressure.
#[must_use]
pub const fn urgency_factor(time_to_market: TimeToMarket) -> f64 {
    match time_to_market {
        TimeToMarket::Urgent => 0.8,
        TimeToMarket::Planned => 1.2,
        TimeToMarket::Standard => 1.0,
    }
}

/// Weeks until a minimum viable product, rounded to the nearest week.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Inputs are small positive constants; the rounded product fits in u32."
)]
pub fn mvp_weeks(complexity: ArchitectureComplexity, ctx: &EnterpriseContext) -> u32 {
    let weeks = f64::from(complexity.base_weeks())
        * team_factor(ctx.team_size)
        * urgency_factor(ctx.time_to_market);
    weeks.round() as u32
}

/// Builds the delivery timeline for an architecture.
#[must_use]
pub fn timeline(
    complexity: ArchitectureComplexity,
    component_count: usize,
    ctx: &EnterpriseContext,
) -> Timeline {
    let mvp = mvp_weeks(complexity, ctx);
    let components = u32::try_from(component_count).unwrap_or(u32::MAX);
    Timeline::from_weeks(mvp, mvp.saturating_add(components / 2), mvp.saturating_add(components))
}
