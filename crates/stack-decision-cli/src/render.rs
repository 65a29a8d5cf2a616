// crates/stack-decision-cli/src/render.rs
// ============================================================================
// Module: Report Rendering
// Description: JSON and text renderings of decision reports.
// Purpose: Shape report output according to the configured output options.
// Dependencies: serde_json, stack-decision-core, thiserror
// ============================================================================

//! ## Overview
//! JSON output is the serialized [`DecisionReport`] with two optional edits:
//! candidate lists may be stripped from each decision, and the report digest
//! may be attached as a top-level `digest` field. The digest always covers
//! the full report, so stripping candidates does not change it.
//!
//! The summary rendering is a fixed-layout text view for terminals.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use stack_decision_core::DecisionReport;
use stack_decision_core::HashAlgorithm;
use stack_decision_core::HashDigest;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Report rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Report serialization failed.
    #[error("failed to serialize report: {0}")]
    Serialize(String),
}

// ============================================================================
// SECTION: JSON
// ============================================================================

/// Converts a report into its output JSON value.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] when the report cannot be serialized.
pub fn report_value(
    report: &DecisionReport,
    digest: Option<&HashDigest>,
    include_candidates: bool,
) -> Result<Value, RenderError> {
    let mut value =
        serde_json::to_value(report).map_err(|err| RenderError::Serialize(err.to_string()))?;
    if !include_candidates {
        strip_candidates(&mut value);
    }
    if let (Some(digest), Value::Object(fields)) = (digest, &mut value) {
        let digest =
            serde_json::to_value(digest).map_err(|err| RenderError::Serialize(err.to_string()))?;
        fields.insert("digest".to_string(), digest);
    }
    Ok(value)
}

/// Removes the `candidates` array from every decision.
fn strip_candidates(value: &mut Value) {
    let Some(Value::Array(decisions)) = value.get_mut("decisions") else {
        return;
    };
    for decision in decisions {
        if let Value::Object(fields) = decision {
            fields.remove("candidates");
        }
    }
}

/// Renders a JSON value compactly or indented.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] when serialization fails.
pub fn render_json(value: &Value, pretty: bool) -> Result<String, RenderError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|err| RenderError::Serialize(err.to_string()))
}

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Formats a digest as `algorithm:hex`.
#[must_use]
pub fn format_hash_digest(digest: &HashDigest) -> String {
    let algorithm = match digest.algorithm {
        HashAlgorithm::Sha256 => "sha256",
    };
    format!("{algorithm}:{}", digest.value)
}

/// Renders a human-readable summary of a report.
#[must_use]
pub fn render_summary(report: &DecisionReport, digest: Option<&HashDigest>) -> String {
    let context = &report.context;
    let compliance = if context.has_compliance_needs() {
        context.compliance_label()
    } else {
        "none".to_string()
    };
    let cost = &report.cost_estimate;
    let timeline = &report.timeline;

    let mut output = String::new();
    output.push_str(&format!("Project: {}\n", report.project_name));
    output.push_str(&format!(
        "Architecture: {} ({} components)\n",
        report.complexity.as_str(),
        report.component_count
    ));
    output.push_str(&format!(
        "Context: {} team, {} budget, {} scalability, compliance {compliance}\n",
        context.team_size.as_str(),
        context.budget_tier.as_str(),
        context.scalability_needs.as_str()
    ));
    output.push_str(&format!(
        "Cost: development {:.2}, monthly {:.2}, annual {:.2}\n",
        cost.development, cost.monthly_operational, cost.annual_operational
    ));
    output.push_str(&format!(
        "Timeline: MVP {}, production {}, scale {}\n",
        timeline.mvp, timeline.production, timeline.scale
    ));

    output.push_str("\nDecisions:\n");
    if report.decisions.is_empty() {
        output.push_str("  (none)\n");
    }
    for decision in &report.decisions {
        let score = decision.selected().map_or(0, |selected| selected.enterprise_score);
        output.push_str(&format!(
            "  - {}: {} (score {score}, {})\n",
            decision.title,
            decision.selected_tool_name,
            decision.urgency.as_str()
        ));
        output.push_str(&format!("    {}\n", decision.reasoning));
    }

    output.push_str("\nIntegration plan:\n");
    let phases = [
        &report.integration_plan.phase1,
        &report.integration_plan.phase2,
        &report.integration_plan.phase3,
    ];
    for (number, titles) in (1 ..).zip(phases) {
        let listed = if titles.is_empty() { "(none)".to_string() } else { titles.join(", ") };
        output.push_str(&format!("  Phase {number}: {listed}\n"));
    }

    output.push_str("\nRisks:\n");
    let risks = &report.risk_assessment;
    if risks.is_empty() {
        output.push_str("  (none)\n");
    }
    let buckets = [
        ("technical", &risks.technical),
        ("operational", &risks.operational),
        ("financial", &risks.financial),
    ];
    for (label, entries) in buckets {
        for entry in entries {
            output.push_str(&format!("  [{label}] {entry}\n"));
        }
    }

    if let Some(digest) = digest {
        output.push_str(&format!("\nDigest: {}\n", format_hash_digest(digest)));
    }
    output
}
