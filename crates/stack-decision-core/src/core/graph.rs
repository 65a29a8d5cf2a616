// crates/stack-decision-core/src/core/graph.rs
// ============================================================================
// Module: Stack Decision Inputs
// Description: Architecture graph, project descriptor, and input validation.
// Purpose: Accept upstream JSON payloads and reject malformed input early.
// Dependencies: crate::core::category, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The engine reads only node types and aggregate node/edge counts from the
//! architecture graph; every other node or edge field is carried through
//! untouched for other subsystems. Inputs arrive as untrusted JSON, so the
//! `from_value` constructors check required fields before deserializing and
//! [`EngineLimits`] bounds their size.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::core::category::ComponentCategory;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum number of graph nodes.
pub const DEFAULT_MAX_NODES: usize = 10_000;
/// Default maximum number of graph edges.
pub const DEFAULT_MAX_EDGES: usize = 50_000;
/// Default maximum description length in bytes.
pub const DEFAULT_MAX_DESCRIPTION_BYTES: usize = 64 * 1024;

/// Size limits applied to engine inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineLimits {
    /// Maximum number of graph nodes.
    pub max_nodes: usize,
    /// Maximum number of graph edges.
    pub max_edges: usize,
    /// Maximum description length in bytes.
    pub max_description_bytes: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_NODES,
            max_edges: DEFAULT_MAX_EDGES,
            max_description_bytes: DEFAULT_MAX_DESCRIPTION_BYTES,
        }
    }
}

// ============================================================================
// SECTION: Architecture Graph
// ============================================================================

/// Infrastructure component node.
///
/// Only `type` is interpreted; identifiers and every other field are kept
/// verbatim in `extra` whatever their JSON type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Node type; category nodes use a [`ComponentCategory`] identifier.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Opaque passthrough fields, including `id`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphNode {
    /// Creates a node carrying only a string `id` passthrough field.
    #[must_use]
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::String(id.into()));
        Self {
            node_type: node_type.into(),
            extra,
        }
    }

    /// Returns the opaque `id` field, if present.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.extra.get("id")
    }

    /// Returns the component category of the node, if it names one.
    #[must_use]
    pub fn category(&self) -> Option<ComponentCategory> {
        ComponentCategory::parse(&self.node_type)
    }
}

/// Relationship between two nodes.
///
/// Edges only contribute to counts, so the whole object is passthrough.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Opaque passthrough fields such as `source` and `target`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GraphEdge {
    /// Creates an edge carrying string `source` and `target` fields.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let mut extra = Map::new();
        extra.insert("source".to_string(), Value::String(source.into()));
        extra.insert("target".to_string(), Value::String(target.into()));
        Self {
            extra,
        }
    }
}

/// Architecture graph produced upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureGraph {
    /// Component nodes in upstream order.
    pub nodes: Vec<GraphNode>,
    /// Relationships between nodes.
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl ArchitectureGraph {
    /// Parses a graph from an untrusted JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when `nodes` is missing or not an array, or when
    /// the payload does not match the graph shape.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value.get("nodes") {
            None => return Err(InputError::MissingNodes),
            Some(Value::Array(_)) => {}
            Some(_) => return Err(InputError::NodesNotArray),
        }
        serde_json::from_value(value).map_err(|err| InputError::Malformed(err.to_string()))
    }

    /// Returns the distinct categories present among nodes, in node order.
    #[must_use]
    pub fn categories(&self) -> Vec<ComponentCategory> {
        let mut out = Vec::new();
        for category in self.nodes.iter().filter_map(GraphNode::category) {
            if !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }

    /// Classifies architecture complexity from node and edge counts.
    #[must_use]
    pub fn complexity(&self) -> ArchitectureComplexity {
        ArchitectureComplexity::classify(self.nodes.len(), self.edges.len())
    }
}

/// Architecture complexity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchitectureComplexity {
    /// At most 6 nodes and 8 edges.
    Simple,
    /// At most 12 nodes and 18 edges.
    Moderate,
    /// Anything larger.
    Complex,
}

impl ArchitectureComplexity {
    /// Classifies a graph by node and edge counts.
    #[must_use]
    pub const fn classify(nodes: usize, edges: usize) -> Self {
        if nodes <= 6 && edges <= 8 {
            Self::Simple
        } else if nodes <= 12 && edges <= 18 {
            Self::Moderate
        } else {
            Self::Complex
        }
    }

    /// Returns the stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }

    /// Base implementation weeks before team and urgency factors.
    #[must_use]
    pub const fn base_weeks(self) -> u32 {
        match self {
            Self::Simple => 6,
            Self::Moderate => 12,
            Self::Complex => 24,
        }
    }
}

// ============================================================================
// SECTION: Project Descriptor
// ============================================================================

/// Free-text project description produced upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    /// Project display name.
    #[serde(default)]
    pub project_name: String,
    /// Free-text description scanned by the context analyzer.
    pub description: String,
}

impl ProjectDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(project_name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            description: description.into(),
        }
    }

    /// Parses a descriptor from an untrusted JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`InputError`] when `description` is missing or not a string.
    pub fn from_value(value: Value) -> Result<Self, InputError> {
        match value.get("description") {
            None => return Err(InputError::MissingDescription),
            Some(Value::String(_)) => {}
            Some(_) => return Err(InputError::DescriptionNotString),
        }
        serde_json::from_value(value).map_err(|err| InputError::Malformed(err.to_string()))
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Checks typed inputs against engine limits.
///
/// # Errors
///
/// Returns [`InputError::LimitExceeded`] when any input exceeds its limit.
pub fn validate_inputs(
    graph: &ArchitectureGraph,
    descriptor: &ProjectDescriptor,
    limits: &EngineLimits,
) -> Result<(), InputError> {
    check_limit("nodes", graph.nodes.len(), limits.max_nodes)?;
    check_limit("edges", graph.edges.len(), limits.max_edges)?;
    check_limit("description", descriptor.description.len(), limits.max_description_bytes)
}

/// Returns an error when `actual` exceeds `limit`.
const fn check_limit(field: &'static str, actual: usize, limit: usize) -> Result<(), InputError> {
    if actual > limit {
        return Err(InputError::LimitExceeded {
            field,
            actual,
            limit,
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Rejected engine input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The graph has no `nodes` field.
    #[error("architecture graph is missing the required `nodes` array")]
    MissingNodes,
    /// The graph `nodes` field is not an array.
    #[error("architecture graph `nodes` must be an array")]
    NodesNotArray,
    /// The descriptor has no `description` field.
    #[error("project descriptor is missing the required `description` field")]
    MissingDescription,
    /// The descriptor `description` field is not a string.
    #[error("project descriptor `description` must be a string")]
    DescriptionNotString,
    /// The payload does not match the expected shape.
    #[error("malformed input: {0}")]
    Malformed(String),
    /// An input exceeds a configured limit.
    #[error("input {field} count {actual} exceeds limit {limit}")]
    LimitExceeded {
        /// Limited input field.
        field: &'static str,
        /// Observed size.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },
}
