//! Concept-map data model.
//!
//! A [`ConceptGraph`] is the document produced by the upstream content
//! service: an ordered list of concept nodes and an undirected edge list.
//! The graph is owned by the caller; the layout engine only reads it.
//!
//! Fields the service emits beyond the ones modelled here are preserved
//! verbatim in each node's and edge's passthrough map.

use std::collections::HashSet;

use log::trace;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::CorollaError;

/// Importance weight assumed when a node carries none (or an explicit zero).
pub const DEFAULT_IMPORTANCE: f32 = 5.0;

/// A concept node in the map.
///
/// `id` is unique within a graph by convention; the library performs no
/// deduplication. `importance` is an integer-like weight, roughly 1-10.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    id: String,

    #[serde(default)]
    label: Option<String>,

    #[serde(default)]
    importance: Option<f32>,

    /// Fields the upstream service emits that this library passes through.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Node {
    /// Creates a new node with the given identifier and no importance weight.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            importance: None,
            extra: Map::new(),
        }
    }

    /// Sets the display label, returning the node.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the importance weight, returning the node.
    pub fn with_importance(mut self, importance: f32) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Returns the node identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the text to display for this node, falling back to its id.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }

    /// Returns the importance weight.
    ///
    /// Absent and zero weights both resolve to [`DEFAULT_IMPORTANCE`],
    /// matching the upstream producer's contract.
    pub fn importance(&self) -> f32 {
        match self.importance {
            Some(importance) if importance != 0.0 => importance,
            _ => DEFAULT_IMPORTANCE,
        }
    }

    /// Returns the passthrough fields preserved from the source document.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }
}

/// An undirected relationship between two concepts.
#[derive(Debug, Clone, Deserialize)]
pub struct Edge {
    source: String,
    target: String,

    #[serde(default)]
    label: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Edge {
    /// Creates a new edge between the given node identifiers.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
            extra: Map::new(),
        }
    }

    /// Sets the edge label, returning the edge.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Returns the source node identifier.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the target node identifier.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the passthrough fields preserved from the source document.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Checks whether this edge connects the two given nodes, in either
    /// direction.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// A concept map: ordered nodes plus an undirected edge list.
///
/// Node order is significant: the layout engine places the node at index 0
/// at the canvas center, so the producer emits the central concept first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConceptGraph {
    #[serde(default)]
    nodes: Vec<Node>,

    #[serde(default)]
    edges: Vec<Edge>,
}

impl ConceptGraph {
    /// Creates a new graph from the given nodes and edges.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Deserializes a graph from the upstream service's JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CorollaError::Json`] when the document is malformed.
    pub fn from_json(source: &str) -> Result<Self, CorollaError> {
        let graph: Self = serde_json::from_str(source)?;
        trace!(graph:?; "Deserialized concept graph");
        Ok(graph)
    }

    /// Returns the nodes in document order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in document order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks whether any edge connects the two given nodes, in either
    /// direction.
    pub fn are_adjacent(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Verifies that every edge endpoint names an existing node.
    ///
    /// The layout engine itself never validates its input; callers that rely
    /// on correct positions should run this once after deserializing.
    ///
    /// # Errors
    ///
    /// Returns [`CorollaError::Graph`] naming the first dangling edge.
    pub fn validate(&self) -> Result<(), CorollaError> {
        let ids: HashSet<&str> = self.nodes.iter().map(Node::id).collect();

        for edge in &self.edges {
            if !ids.contains(edge.source()) || !ids.contains(edge.target()) {
                return Err(CorollaError::Graph(format!(
                    "Edge refers to undefined nodes: {} -> {}",
                    edge.source(),
                    edge.target()
                )));
            }
        }

        Ok(())
    }
}
