// crates/stack-decision-core/src/core/mod.rs
// ============================================================================
// Module: Stack Decision Core Types
// Description: Canonical data model for stack decisions.
// Purpose: Provide stable, serializable inputs, reference data, and outputs.
// Dependencies: serde, serde_json, sha2
// ============================================================================

//! ## Overview
//! Core types define the architecture graph and project descriptor inputs, the
//! read-only tool catalog, the derived enterprise context, and the decision
//! report. They carry no evaluation logic beyond validation and lookups.

// ============================================================================
// SECTION: Submodules
// ============================================================================

mod builtin_catalog;
pub mod catalog;
pub mod category;
pub mod context;
pub mod decision;
pub mod graph;
pub mod hashing;
pub mod report;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Catalog;
pub use catalog::CatalogError;
pub use catalog::DocumentationQuality;
pub use catalog::Level;
pub use catalog::PricingModel;
pub use catalog::SupportLevel;
pub use catalog::ToolCandidate;
pub use catalog::ToolType;
pub use category::ComponentCategory;
pub use context::BudgetTier;
pub use context::ComplianceTag;
pub use context::EnterpriseContext;
pub use context::MaintenanceCapability;
pub use context::Platform;
pub use context::RiskTolerance;
pub use context::ScalabilityNeeds;
pub use context::TeamSize;
pub use context::TimeToMarket;
pub use decision::Decision;
pub use decision::ScoredCandidate;
pub use decision::Urgency;
pub use graph::ArchitectureComplexity;
pub use graph::ArchitectureGraph;
pub use graph::EngineLimits;
pub use graph::GraphEdge;
pub use graph::GraphNode;
pub use graph::InputError;
pub use graph::ProjectDescriptor;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use hashing::HashError;
pub use report::CostEstimate;
pub use report::DecisionReport;
pub use report::IntegrationPlan;
pub use report::RiskAssessment;
pub use report::Timeline;
