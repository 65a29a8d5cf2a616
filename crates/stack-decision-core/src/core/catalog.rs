// crates/stack-decision-core/src/core/catalog.rs
// ============================================================================
// Module: Stack Decision Tool Catalog
// Description: Tool candidate model and the read-only catalog lookup.
// Purpose: Provide immutable reference data keyed by component category.
// Dependencies: crate::core::category, serde, thiserror
// ============================================================================

//! ## Overview
//! The catalog holds every [`ToolCandidate`] grouped by
//! [`ComponentCategory`], preserving declaration order inside each group.
//! Declaration order is meaningful: the selector breaks score ties in favor of
//! the earliest candidate. The built-in catalog is materialized once per
//! process and shared read-only across evaluations.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::builtin_catalog::BUILTIN_TOOLS;
use crate::core::category::ComponentCategory;

// ============================================================================
// SECTION: Tool Attributes
// ============================================================================

/// Distribution model of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolType {
    /// Self-hosted open-source software.
    OpenSource,
    /// Vendor-operated hosted service.
    ManagedService,
    /// Licensed proprietary product.
    Commercial,
    /// Free tier with paid upgrades.
    Freemium,
}

/// Pricing model of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModel {
    /// No license or usage fees.
    Free,
    /// Free tier with paid plans.
    Freemium,
    /// Fixed recurring fee.
    Subscription,
    /// Metered billing.
    UsageBased,
}

/// Three-step ordinal rating used for complexity, effort, and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low rating.
    Low,
    /// Medium rating.
    Medium,
    /// High rating.
    High,
}

/// Documentation quality rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentationQuality {
    /// Sparse or outdated documentation.
    Poor,
    /// Usable documentation with gaps.
    Fair,
    /// Solid documentation.
    Good,
    /// Comprehensive documentation.
    Excellent,
}

/// Vendor support tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportLevel {
    /// Community forums only.
    Community,
    /// Paid vendor support.
    Commercial,
    /// Contracted enterprise support.
    Enterprise,
}

// ============================================================================
// SECTION: Tool Candidate
// ============================================================================

/// One catalog entry describing a concrete technology option.
///
/// # Invariants
/// - `id` is unique within a catalog.
/// - `popularity`, when present, is within `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCandidate {
    /// Unique tool identifier.
    pub id: String,
    /// Category the tool belongs to.
    pub category: ComponentCategory,
    /// Display name.
    pub name: String,
    /// Distribution model.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// Pricing model.
    pub pricing_model: PricingModel,
    /// Optional free-form cost hint (for example `"$15/host/month"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Operational complexity.
    pub complexity: Level,
    /// Adoption score in `0..=100`; unset tools score from a neutral baseline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u8>,
    /// Documentation quality.
    pub documentation_quality: DocumentationQuality,
    /// Effort required to integrate the tool.
    pub integration_effort: Level,
    /// Cloud vendor the tool is tied to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_provider: Option<String>,
    /// Vendor support tier, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_level: Option<SupportLevel>,
}

impl ToolCandidate {
    /// Returns true when the tool is a vendor-operated service.
    #[must_use]
    pub fn is_managed(&self) -> bool {
        self.tool_type == ToolType::ManagedService
    }
}

/// Static seed used to declare built-in catalog entries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToolSeed {
    /// Unique tool identifier.
    pub(crate) id: &'static str,
    /// Category the tool belongs to.
    pub(crate) category: ComponentCategory,
    /// Display name.
    pub(crate) name: &'static str,
    /// Distribution model.
    pub(crate) tool_type: ToolType,
    /// Pricing model.
    pub(crate) pricing: PricingModel,
    /// Optional cost hint.
    pub(crate) cost: Option<&'static str>,
    /// Operational complexity.
    pub(crate) complexity: Level,
    /// Optional popularity score.
    pub(crate) popularity: Option<u8>,
    /// Documentation quality.
    pub(crate) docs: DocumentationQuality,
    /// Integration effort.
    pub(crate) effort: Level,
    /// Optional cloud affinity.
    pub(crate) cloud: Option<&'static str>,
    /// Optional support tier.
    pub(crate) support: Option<SupportLevel>,
}

impl From<&ToolSeed> for ToolCandidate {
    fn from(seed: &ToolSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            category: seed.category,
            name: seed.name.to_string(),
            tool_type: seed.tool_type,
            pricing_model: seed.pricing,
            cost: seed.cost.map(str::to_string),
            complexity: seed.complexity,
            popularity: seed.popularity,
            documentation_quality: seed.docs,
            integration_effort: seed.effort,
            cloud_provider: seed.cloud.map(str::to_string),
            support_level: seed.support,
        }
    }
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Process-wide built-in catalog, materialized on first use.
static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::from_tools(BUILTIN_TOOLS.iter().map(ToolCandidate::from)));

/// Read-only tool catalog grouped by category.
///
/// # Invariants
/// - Candidates inside a category keep insertion order.
/// - Lookups for unknown categories return an empty slice, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Candidates keyed by category.
    groups: BTreeMap<ComponentCategory, Vec<ToolCandidate>>,
}

impl Catalog {
    /// Builds a catalog from tools, grouping by category in input order.
    #[must_use]
    pub fn from_tools(tools: impl IntoIterator<Item = ToolCandidate>) -> Self {
        let mut groups: BTreeMap<ComponentCategory, Vec<ToolCandidate>> = BTreeMap::new();
        for tool in tools {
            groups.entry(tool.category).or_default().push(tool);
        }
        Self {
            groups,
        }
    }

    /// Returns the shared built-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Replaces the candidate list for a category (an empty list is allowed).
    #[must_use]
    pub fn with_candidates(mut self, category: ComponentCategory, tools: Vec<ToolCandidate>) -> Self {
        self.groups.insert(category, tools);
        self
    }

    /// Returns candidates for a category in declaration order.
    #[must_use]
    pub fn candidates(&self, category: ComponentCategory) -> &[ToolCandidate] {
        self.groups.get(&category).map_or(&[][..], Vec::as_slice)
    }

    /// Iterates all tools in category order, then declaration order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolCandidate> {
        self.groups.values().flatten()
    }

    /// Looks up a tool by identifier.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&ToolCandidate> {
        self.tools().find(|tool| tool.id == id)
    }

    /// Returns the total number of tools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Returns true when the catalog holds no tools.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validates catalog coverage and entry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] when a category has no candidates, an id is
    /// duplicated, or a popularity score exceeds 100.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in ComponentCategory::ALL {
            if self.candidates(category).is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
        }
        let mut seen = BTreeSet::new();
        for tool in self.tools() {
            if !seen.insert(tool.id.as_str()) {
                return Err(CatalogError::DuplicateToolId(tool.id.clone()));
            }
            if let Some(value) = tool.popularity
                && value > 100
            {
                return Err(CatalogError::PopularityOutOfRange {
                    id: tool.id.clone(),
                    value,
                });
            }
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Catalog invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A category has no candidates.
    #[error("catalog has no candidates for category {0}")]
    EmptyCategory(ComponentCategory),
    /// A tool identifier appears more than once.
    #[error("duplicate tool id in catalog: {0}")]
    DuplicateToolId(String),
    /// A popularity score is outside `0..=100`.
    #[error("tool {id} popularity {value} exceeds 100")]
    PopularityOutOfRange {
        /// Offending tool identifier.
        id: String,
        /// Offending popularity value.
        value: u8,
    },
}
