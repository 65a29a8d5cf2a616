// crates/stack-decision-core/src/core/context.rs
// ============================================================================
// Module: Stack Decision Enterprise Context
// Description: Derived organizational profile used to weight tool scoring.
// Purpose: Provide closed, serializable dimensions for context-aware scoring.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The enterprise context is derived fresh for every evaluation from the
//! architecture graph and the project description. Every dimension is a closed
//! enum so scoring, classification, and risk rules match exhaustively.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Context Dimensions
// ============================================================================

/// Team size bucket derived from architecture size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSize {
    /// A handful of engineers.
    Small,
    /// One or two product teams.
    Medium,
    /// Several coordinated teams.
    Large,
    /// Organization-wide engineering.
    Enterprise,
}

impl TeamSize {
    /// Returns the stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Budget tier of the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Early stage, cost sensitive.
    Startup,
    /// Funded and scaling.
    Growth,
    /// Stable mid-size business.
    Established,
    /// Large corporate budget.
    Enterprise,
}

impl BudgetTier {
    /// Returns the stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Growth => "growth",
            Self::Established => "established",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Regulatory regime detected in the description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComplianceTag {
    /// US health data regulation.
    #[serde(rename = "HIPAA")]
    Hipaa,
    /// Payment card industry standard.
    #[serde(rename = "PCI DSS")]
    PciDss,
    /// Service organization controls report.
    #[serde(rename = "SOC 2")]
    Soc2,
    /// EU data protection regulation.
    #[serde(rename = "GDPR")]
    Gdpr,
    /// Information security management standard.
    #[serde(rename = "ISO 27001")]
    Iso27001,
}

impl ComplianceTag {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hipaa => "HIPAA",
            Self::PciDss => "PCI DSS",
            Self::Soc2 => "SOC 2",
            Self::Gdpr => "GDPR",
            Self::Iso27001 => "ISO 27001",
        }
    }
}

impl fmt::Display for ComplianceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Delivery pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeToMarket {
    /// Ship as soon as possible.
    Urgent,
    /// Normal delivery cadence.
    Standard,
    /// Long-horizon, phased delivery.
    Planned,
}

/// Expected load growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalabilityNeeds {
    /// Small, stable audience.
    Low,
    /// Typical production load.
    Medium,
    /// Significant traffic growth.
    High,
    /// Internet-scale traffic.
    Massive,
}

impl ScalabilityNeeds {
    /// Returns the stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Massive => "massive",
        }
    }
}

/// Capacity to operate self-managed infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceCapability {
    /// Little operations capacity.
    Limited,
    /// Some dedicated operations capacity.
    Moderate,
    /// Dedicated platform teams.
    Strong,
}

/// Appetite for adopting less proven technology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    /// Prefer proven, supported tools.
    Low,
    /// Balanced.
    Medium,
    /// Comfortable with emerging tools.
    High,
}

/// Platform already in use by the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    /// Amazon Web Services.
    #[serde(rename = "AWS")]
    Aws,
    /// Microsoft Azure.
    Azure,
    /// Google Cloud Platform.
    #[serde(rename = "GCP")]
    Gcp,
    /// Kubernetes.
    Kubernetes,
    /// Docker.
    Docker,
}

// ============================================================================
// SECTION: Enterprise Context
// ============================================================================

/// Derived organizational profile for a single evaluation.
///
/// # Invariants
/// - Immutable once built; recomputed for every evaluation.
/// - Set-valued dimensions iterate in enum declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseContext {
    /// Team size bucket.
    pub team_size: TeamSize,
    /// Budget tier.
    pub budget_tier: BudgetTier,
    /// Detected compliance regimes (possibly empty).
    pub compliance_needs: BTreeSet<ComplianceTag>,
    /// Delivery pressure.
    pub time_to_market: TimeToMarket,
    /// Expected load growth.
    pub scalability_needs: ScalabilityNeeds,
    /// Operations capacity.
    pub maintenance_capability: MaintenanceCapability,
    /// Risk appetite.
    pub risk_tolerance: RiskTolerance,
    /// Platforms already in use.
    pub existing_stack: BTreeSet<Platform>,
}

impl EnterpriseContext {
    /// Returns true when any compliance regime was detected.
    #[must_use]
    pub fn has_compliance_needs(&self) -> bool {
        !self.compliance_needs.is_empty()
    }

    /// Returns compliance labels joined for display.
    #[must_use]
    pub fn compliance_label(&self) -> String {
        self.compliance_needs.iter().map(|tag| tag.as_str()).collect::<Vec<_>>().join(", ")
    }
}
