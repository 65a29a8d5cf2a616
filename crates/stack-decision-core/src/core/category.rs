// crates/stack-decision-core/src/core/category.rs
// ============================================================================
// Module: Stack Decision Component Categories
// Description: Closed set of infrastructure component categories.
// Purpose: Classify graph nodes and catalog tools with a single typed tag.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Component categories are the shared vocabulary between the architecture
//! graph and the tool catalog. Every static lookup keyed by category is an
//! exhaustive `match`, so adding a variant forces every table to be revisited.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Component Category
// ============================================================================

/// Infrastructure component category.
///
/// # Invariants
/// - Wire form is the kebab-case identifier returned by [`ComponentCategory::as_str`].
/// - Declaration order is stable and used for deterministic iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentCategory {
    /// Primary data store.
    Database,
    /// In-memory cache.
    Cache,
    /// Asynchronous message broker.
    MessageQueue,
    /// Continuous integration and delivery.
    CiCd,
    /// Cloud hosting provider.
    CloudProvider,
    /// Container scheduling platform.
    ContainerOrchestration,
    /// Identity, secrets, and perimeter security.
    Security,
    /// Full-text search engine.
    SearchEngine,
    /// Product and business analytics.
    Analytics,
    /// Traffic distribution.
    LoadBalancer,
    /// Content delivery network.
    Cdn,
    /// Metrics and alerting.
    Monitoring,
    /// API ingress and policy enforcement.
    ApiGateway,
    /// Centralized log aggregation.
    Logging,
}

impl ComponentCategory {
    /// All categories in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Database,
        Self::Cache,
        Self::MessageQueue,
        Self::CiCd,
        Self::CloudProvider,
        Self::ContainerOrchestration,
        Self::Security,
        Self::SearchEngine,
        Self::Analytics,
        Self::LoadBalancer,
        Self::Cdn,
        Self::Monitoring,
        Self::ApiGateway,
        Self::Logging,
    ];

    /// Cross-cutting categories recommended even when absent from the graph.
    pub const MANDATORY: [Self; 5] = [
        Self::CloudProvider,
        Self::ContainerOrchestration,
        Self::Security,
        Self::MessageQueue,
        Self::Analytics,
    ];

    /// Returns the stable kebab-case identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Cache => "cache",
            Self::MessageQueue => "message-queue",
            Self::CiCd => "ci-cd",
            Self::CloudProvider => "cloud-provider",
            Self::ContainerOrchestration => "container-orchestration",
            Self::Security => "security",
            Self::SearchEngine => "search-engine",
            Self::Analytics => "analytics",
            Self::LoadBalancer => "load-balancer",
            Self::Cdn => "cdn",
            Self::Monitoring => "monitoring",
            Self::ApiGateway => "api-gateway",
            Self::Logging => "logging",
        }
    }

    /// Returns the human-readable label used in decision titles.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Database => "Database",
            Self::Cache => "Cache",
            Self::MessageQueue => "Message Queue",
            Self::CiCd => "CI/CD",
            Self::CloudProvider => "Cloud Provider",
            Self::ContainerOrchestration => "Container Orchestration",
            Self::Security => "Security",
            Self::SearchEngine => "Search Engine",
            Self::Analytics => "Analytics",
            Self::LoadBalancer => "Load Balancer",
            Self::Cdn => "CDN",
            Self::Monitoring => "Monitoring",
            Self::ApiGateway => "API Gateway",
            Self::Logging => "Logging",
        }
    }

    /// Parses a node type string into a category.
    ///
    /// Matching trims whitespace, ignores case, and treats `_` and spaces as
    /// `-`. Returns `None` for node types outside the category set.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|ch| if ch == '_' || ch == ' ' { '-' } else { ch.to_ascii_lowercase() })
            .collect();
        match normalized.as_str() {
            "cicd" => Some(Self::CiCd),
            other => Self::ALL.into_iter().find(|category| category.as_str() == other),
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
