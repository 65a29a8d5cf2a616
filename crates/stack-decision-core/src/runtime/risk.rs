// crates/stack-decision-core/src/runtime/risk.rs
// ============================================================================
// Module: Stack Decision Risk Assessor
// Description: Rule-based risk statements over the selected tools.
// Purpose: Flag compliance gaps, vendor concentration, and capacity mismatch.
// Dependencies: crate::core::{catalog, context, decision, report}
// ============================================================================

//! ## Overview
//! Each rule inspects the full decision set independently and appends zero or
//! more statements to the technical, operational, or financial bucket.
//! Rules never read each other's output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use crate::core::catalog::Level;
use crate::core::catalog::ToolCandidate;
use crate::core::catalog::ToolType;
use crate::core::context::BudgetTier;
use crate::core::context::EnterpriseContext;
use crate::core::context::MaintenanceCapability;
use crate::core::context::ScalabilityNeeds;
use crate::core::context::TeamSize;
use crate::core::decision::Decision;
use crate::core::report::RiskAssessment;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// High-complexity selections tolerated before a capacity risk is raised.
pub const MAX_COMPLEX_TOOLS_FOR_SMALL_TEAMS: usize = 2;

// ============================================================================
// SECTION: Assessment
// ============================================================================

/// Runs every risk rule over the selected tools.
#[must_use]
pub fn assess(decisions: &[Decision], ctx: &EnterpriseContext) -> RiskAssessment {
    let selected: Vec<&ToolCandidate> = decisions.iter().filter_map(Decision::selected_tool).collect();
    let mut risks = RiskAssessment::default();
    compliance_rule(&selected, ctx, &mut risks);
    vendor_concentration_rule(&selected, &mut risks);
    team_capability_rule(&selected, ctx, &mut risks);
    budget_scale_rule(ctx, &mut risks);
    risks
}

/// Compliance needs without any managed service.
fn compliance_rule(selected: &[&ToolCandidate], ctx: &EnterpriseContext, risks: &mut RiskAssessment) {
    if !ctx.has_compliance_needs()
        || selected.iter().any(|tool| tool.tool_type == ToolType::ManagedService)
    {
        return;
    }
    let regimes = ctx.compliance_label();
    risks.technical.push(format!(
        "Self-managed tools may not meet {regimes} compliance requirements without additional controls"
    ));
    risks.operational.push(format!(
        "Audit evidence for {regimes} must be produced and maintained in-house"
    ));
}

/// Every cloud-affine selection shares one provider.
fn vendor_concentration_rule(selected: &[&ToolCandidate], risks: &mut RiskAssessment) {
    let providers: BTreeSet<&str> =
        selected.iter().filter_map(|tool| tool.cloud_provider.as_deref()).collect();
    if providers.len() != 1 {
        return;
    }
    let Some(provider) = providers.first() else {
        return;
    };
    risks.operational.push(format!(
        "Vendor lock-in: all cloud-specific tools depend on {provider}"
    ));
    risks.financial.push(format!(
        "Pricing changes from {provider} affect the entire stack with limited negotiating leverage"
    ));
}

/// Small or thinly staffed teams running several complex tools.
fn team_capability_rule(
    selected: &[&ToolCandidate],
    ctx: &EnterpriseContext,
    risks: &mut RiskAssessment,
) {
    if ctx.team_size != TeamSize::Small
        && ctx.maintenance_capability != MaintenanceCapability::Limited
    {
        return;
    }
    let complex = selected.iter().filter(|tool| tool.complexity == Level::High).count();
    if complex <= MAX_COMPLEX_TOOLS_FOR_SMALL_TEAMS {
        return;
    }
    risks.technical.push(format!(
        "{complex} high-complexity tools exceed the capacity of a {} team",
        ctx.team_size.as_str()
    ));
    risks.operational.push(
        "Consider managed alternatives to reduce the maintenance burden".to_string(),
    );
}

/// Startup budget facing high scalability needs.
fn budget_scale_rule(ctx: &EnterpriseContext, risks: &mut RiskAssessment) {
    if ctx.budget_tier != BudgetTier::Startup || ctx.scalability_needs != ScalabilityNeeds::High {
        return;
    }
    risks.financial.push(
        "Scaling costs may outgrow a startup budget as traffic increases".to_string(),
    );
    risks.operational.push(
        "Set up cost monitoring and budget alerts before traffic ramps up".to_string(),
    );
}
