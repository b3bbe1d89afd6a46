//! Radial layout engine for concept maps.
//!
//! This engine places the central concept at the canvas center and
//! distributes the remaining nodes around a full circle, with each node's
//! ring radius weighted by its importance. The placement is a closed-form
//! function of the input graph: no simulation, no randomness, identical
//! input always yields identical coordinates.

use std::f32::consts::TAU;

use log::debug;

use crate::{
    config::LayoutConfig,
    geometry::{Point, Size},
    graph::ConceptGraph,
    layout::{Layout, PlacedNode},
};

/// Radial layout engine.
///
/// The node at index 0 of the input graph is treated as the central concept
/// and placed at the canvas center. This is a precondition on the input
/// order, not a property the engine derives: the upstream producer emits
/// the central concept first.
pub struct Engine {
    canvas_width: f32,
    base_height: f32,
    height_step: f32,
    baseline_node_count: u32,
    base_radius: f32,
    importance_weight: f32,
    hover_offset: f32,
}

impl Engine {
    /// Create a new radial layout engine with the default canvas and radii.
    pub fn new() -> Self {
        Self::from_config(&LayoutConfig::default())
    }

    /// Create an engine from a layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            canvas_width: config.canvas_width(),
            base_height: config.base_height(),
            height_step: config.height_step(),
            baseline_node_count: config.baseline_node_count(),
            base_radius: config.base_radius(),
            importance_weight: config.importance_weight(),
            hover_offset: config.hover_offset(),
        }
    }

    /// Set the base ring radius
    pub fn set_base_radius(&mut self, radius: f32) -> &mut Self {
        self.base_radius = radius;
        self
    }

    /// Set the radius added per unit of node importance
    pub fn set_importance_weight(&mut self, weight: f32) -> &mut Self {
        self.importance_weight = weight;
        self
    }

    /// Set the hover repulsion offset
    pub fn set_hover_offset(&mut self, offset: f32) -> &mut Self {
        self.hover_offset = offset;
        self
    }

    /// Returns the canvas size for a graph with the given node count.
    ///
    /// The width is fixed; the height grows (or shrinks) by the configured
    /// step for every node away from the baseline count. It is not clamped.
    pub fn canvas_size(&self, node_count: usize) -> Size {
        let extra_nodes = node_count as f32 - self.baseline_node_count as f32;
        Size::new(
            self.canvas_width,
            self.base_height + extra_nodes * self.height_step,
        )
    }

    /// Calculate the layout for a concept graph.
    ///
    /// An empty node list yields an empty layout; the canvas size still
    /// follows the height formula. No validation is performed here; see
    /// [`ConceptGraph::validate`].
    pub fn calculate<'a>(&self, graph: &'a ConceptGraph) -> Layout<'a> {
        let canvas = self.canvas_size(graph.node_count());

        if graph.nodes().is_empty() {
            return Layout::new(graph, Vec::new(), canvas, self.hover_offset);
        }

        let center = canvas.center();
        // Nodes after the central one share the full circle evenly. When the
        // graph has a single node this denominator is never read.
        let ring_count = graph.node_count().saturating_sub(1);

        let placements = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| {
                let position = if i == 0 {
                    center
                } else {
                    let angle = ((i - 1) as f32 / ring_count as f32) * TAU;
                    let radius = self.base_radius + node.importance() * self.importance_weight;
                    center.add_point(Point::new(angle.cos() * radius, angle.sin() * radius))
                };

                PlacedNode::new(node, position)
            })
            .collect();

        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count(),
            canvas_height = canvas.height();
            "Radial layout calculated"
        );

        Layout::new(graph, placements, canvas, self.hover_offset)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
