// crates/stack-decision-core/src/runtime/reasoning.rs
// ============================================================================
// Module: Stack Decision Reasoning
// Description: Human-readable explanations for selected tools.
// Purpose: Explain a selection using the score factors that fired.
// Dependencies: crate::runtime::scoring
// ============================================================================

//! ## Overview
//! Explanations are derived from [`factors`], the same list the scorer sums,
//! so the reasoning can never cite a condition that did not contribute
//! points. One sentence is produced per factor, joined with `". "` and closed
//! with a period.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::ToolCandidate;
use crate::core::context::EnterpriseContext;
use crate::runtime::scoring::ScoreFactor;
use crate::runtime::scoring::factors;

// ============================================================================
// SECTION: Reasoning
// ============================================================================

/// Sentence used when no factor fired.
pub const GENERIC_REASONING: &str =
    "Selected as the strongest overall fit based on popularity and ecosystem maturity.";

/// Explains why a tool suits a context.
#[must_use]
pub fn explain(tool: &ToolCandidate, ctx: &EnterpriseContext) -> String {
    let sentences: Vec<String> =
        factors(tool, ctx).into_iter().map(|factor| sentence(factor, tool, ctx)).collect();
    if sentences.is_empty() {
        return GENERIC_REASONING.to_string();
    }
    format!("{}.", sentences.join(". "))
}

/// Renders the sentence for one factor.
fn sentence(factor: ScoreFactor, tool: &ToolCandidate, ctx: &EnterpriseContext) -> String {
    let team = ctx.team_size.as_str();
    match factor {
        ScoreFactor::ManagedForSmallTeam => {
            format!("Managed service reduces operational overhead for a {team} team")
        }
        ScoreFactor::SimpleForSmallTeam => {
            format!("Low complexity fits the capacity of a {team} team")
        }
        ScoreFactor::OpenSourceForLargeTeam => {
            format!("Open-source licensing gives a {team} team full control and customization")
        }
        ScoreFactor::ProvenForLargeTeam => {
            format!("Proven at scale and well suited to the depth of a {team} team")
        }
        ScoreFactor::FreeForStartup => "Free pricing keeps startup costs minimal".to_string(),
        ScoreFactor::FreemiumForStartup => {
            "Freemium tier lets a startup begin without upfront spend".to_string()
        }
        ScoreFactor::OpenSourceForStartup => {
            "Open-source licensing avoids vendor fees on a startup budget".to_string()
        }
        ScoreFactor::VendorBackedForEnterprise => {
            "Vendor-backed offering matches enterprise procurement expectations".to_string()
        }
        ScoreFactor::EnterpriseSupport => {
            "Enterprise support contracts are available for critical workloads".to_string()
        }
        ScoreFactor::ManagedForCompliance => format!(
            "Managed service simplifies {} compliance through shared responsibility",
            ctx.compliance_label()
        ),
        ScoreFactor::CloudForCompliance => format!(
            "Runs on {} with certified compliance controls",
            tool.cloud_provider.as_deref().unwrap_or("a major cloud")
        ),
        ScoreFactor::SimpleForUrgency => {
            "Low complexity supports an urgent time to market".to_string()
        }
        ScoreFactor::EasyIntegrationForUrgency => {
            "Low integration effort shortens delivery".to_string()
        }
        ScoreFactor::ManagedForUrgency => {
            "Managed service removes setup time from the critical path".to_string()
        }
        ScoreFactor::ManagedForScale => format!(
            "Managed service scales automatically for {} scalability needs",
            ctx.scalability_needs.as_str()
        ),
        ScoreFactor::CloudForScale => format!(
            "Native {} integration supports elastic growth",
            tool.cloud_provider.as_deref().unwrap_or("cloud")
        ),
        ScoreFactor::ManagedForLimitedOps => {
            "Managed service offsets limited maintenance capability".to_string()
        }
        ScoreFactor::SimpleForLimitedOps => {
            "Low complexity keeps ongoing maintenance light".to_string()
        }
        ScoreFactor::PopularForLowRisk => {
            "Wide adoption lowers risk for a conservative organization".to_string()
        }
        ScoreFactor::ManagedForLowRisk => {
            "Vendor-operated service reduces operational risk".to_string()
        }
        ScoreFactor::DocumentedForLowRisk => {
            "Excellent documentation reduces adoption risk".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::GENERIC_REASONING;
    use super::explain;
    use crate::core::catalog::DocumentationQuality;
    use crate::core::catalog::Level;
    use crate::core::catalog::PricingModel;
    use crate::core::catalog::ToolCandidate;
    use crate::core::catalog::ToolType;
    use crate::core::category::ComponentCategory;
    use crate::core::context::BudgetTier;
    use crate::core::context::EnterpriseContext;
    use crate::core::context::MaintenanceCapability;
    use crate::core::context::RiskTolerance;
    use crate::core::context::ScalabilityNeeds;
    use crate::core::context::TeamSize;
    use crate::core::context::TimeToMarket;

    fn context(budget_tier: BudgetTier) -> EnterpriseContext {
        EnterpriseContext {
            team_size: TeamSize::Large,
            budget_tier,
            compliance_needs: BTreeSet::new(),
            time_to_market: TimeToMarket::Standard,
            scalability_needs: ScalabilityNeeds::Medium,
            maintenance_capability: MaintenanceCapability::Moderate,
            risk_tolerance: RiskTolerance::Medium,
            existing_stack: BTreeSet::new(),
        }
    }

    fn commercial_tool(pricing_model: PricingModel) -> ToolCandidate {
        ToolCandidate {
            id: "c".to_string(),
            category: ComponentCategory::Monitoring,
            name: "C".to_string(),
            tool_type: ToolType::Commercial,
            pricing_model,
            cost: None,
            complexity: Level::Medium,
            popularity: Some(60),
            documentation_quality: DocumentationQuality::Good,
            integration_effort: Level::Medium,
            cloud_provider: None,
            support_level: None,
        }
    }

    #[test]
    fn no_factor_yields_generic_sentence() {
        let text = explain(&commercial_tool(PricingModel::Subscription), &context(BudgetTier::Growth));
        assert_eq!(text, GENERIC_REASONING);
    }

    #[test]
    fn sentences_join_with_trailing_period() {
        let text = explain(&commercial_tool(PricingModel::Freemium), &context(BudgetTier::Startup));
        assert_eq!(text, "Freemium tier lets a startup begin without upfront spend.");
        let text = explain(&commercial_tool(PricingModel::Free), &context(BudgetTier::Enterprise));
        assert_eq!(text, "Vendor-backed offering matches enterprise procurement expectations.");
    }
}
