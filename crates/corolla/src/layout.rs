//! Layout types and position queries for concept maps.
//!
//! A [`Layout`] is a derived value: it is recomputed from a graph on demand
//! (see [`Engine`]) and never mutated in place. Callers that want caching
//! keep the `Layout` around and recompute when their graph changes.
//!
//! Position queries never fail. Unknown identifiers resolve to the origin
//! and degenerate hover states resolve to the base position, so rendering
//! code can call into this module without an error path.

mod radial;

pub use radial::Engine;

use std::collections::HashMap;

use crate::{
    geometry::{Point, Size},
    graph::{ConceptGraph, Node},
};

/// A node together with its computed canvas position.
#[derive(Debug, Clone)]
pub struct PlacedNode<'a> {
    node: &'a Node,
    position: Point,
}

impl<'a> PlacedNode<'a> {
    pub(crate) fn new(node: &'a Node, position: Point) -> Self {
        Self { node, position }
    }

    /// Returns the underlying graph node.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    /// Returns the computed base position, before any hover adjustment.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// The computed placement of every node in a graph, in input order.
#[derive(Debug)]
pub struct Layout<'a> {
    graph: &'a ConceptGraph,
    placements: Vec<PlacedNode<'a>>,
    // First placement wins for a duplicate id, matching a linear search.
    index: HashMap<&'a str, usize>,
    canvas: Size,
    hover_offset: f32,
}

impl<'a> Layout<'a> {
    pub(crate) fn new(
        graph: &'a ConceptGraph,
        placements: Vec<PlacedNode<'a>>,
        canvas: Size,
        hover_offset: f32,
    ) -> Self {
        let mut index = HashMap::with_capacity(placements.len());
        for (i, placement) in placements.iter().enumerate() {
            index.entry(placement.node().id()).or_insert(i);
        }

        Self {
            graph,
            placements,
            index,
            canvas,
            hover_offset,
        }
    }

    /// Returns the graph this layout was computed from.
    pub fn graph(&self) -> &'a ConceptGraph {
        self.graph
    }

    /// Returns the placements in the same order as the input node list.
    pub fn placements(&self) -> &[PlacedNode<'a>] {
        &self.placements
    }

    /// Returns the canvas size the placements were computed for.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Returns true when the layout contains no placements.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    fn base_position(&self, id: &str) -> Option<Point> {
        self.index.get(id).map(|&i| self.placements[i].position())
    }

    /// Returns the current position of a node, with hover repulsion applied.
    ///
    /// A node adjacent to the hovered node is pushed away from it along the
    /// line between their base positions, by the configured hover offset.
    /// The hovered node itself never moves. Unknown ids resolve to the
    /// origin, and an unknown hovered id leaves every node at its base
    /// position; this query has no error path.
    pub fn node_position(&self, id: &str, hovered: Option<&str>) -> Point {
        let Some(base) = self.base_position(id) else {
            return Point::default();
        };

        let Some(hovered_id) = hovered else {
            return base;
        };
        if hovered_id == id {
            return base;
        }

        if !self.graph.are_adjacent(id, hovered_id) {
            return base;
        }

        let Some(hovered_base) = self.base_position(hovered_id) else {
            return base;
        };

        let delta = base.sub_point(hovered_base);
        // Coincident positions would divide by zero; the guard keeps the
        // offset finite (and zero) in that case.
        let distance = delta.hypot().max(1.0);

        base.add_point(delta.scale(self.hover_offset / distance))
    }
}
