//! SVG rendering for concept-map layouts.
//!
//! Nodes are drawn as importance-sized circles with centered labels; edges
//! as lines with optional midpoint labels. Every element is positioned
//! through [`Layout::node_position`], so rendering with a hovered node
//! produces the repulsed scene the interactive viewer shows.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{Circle, Line, Text},
};

use crate::{
    color::Color,
    export,
    geometry::Point,
    graph::Node,
    layout::Layout,
};

// Palette of the map view, default and hover-active variants.
const EDGE_COLOR: &str = "#cbd5e1";
const EDGE_ACTIVE_COLOR: &str = "#4f46e5";
const EDGE_LABEL_COLOR: &str = "#64748b";
const NODE_STROKE_COLOR: &str = "#94a3b8";
const NODE_STROKE_ACTIVE_COLOR: &str = "#4f46e5";
const NODE_FILL_COLOR: &str = "#f8fafc";
const NODE_FILL_ACTIVE_COLOR: &str = "#eef2ff";
const LABEL_COLOR: &str = "#334155";
const LABEL_ACTIVE_COLOR: &str = "#312e81";

/// Circle radius for a node with zero importance.
const BASE_NODE_RADIUS: f32 = 25.0;

/// Circle radius added per unit of node importance.
const RADIUS_PER_IMPORTANCE: f32 = 2.5;

const LABEL_FONT_SIZE: u32 = 13;
const EDGE_LABEL_FONT_SIZE: u32 = 11;

/// SVG exporter writing a rendered concept map to a file.
pub struct Svg {
    file_name: String,
    background_color: Option<Color>,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            background_color: None,
        }
    }

    /// Set the background color painted behind the map.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background_color = color;
        self
    }

    /// Display radius of a node's circle.
    fn node_radius(node: &Node) -> f32 {
        BASE_NODE_RADIUS + node.importance() * RADIUS_PER_IMPORTANCE
    }

    fn render_edge(from: Point, to: Point, active: bool) -> Line {
        let color = if active { EDGE_ACTIVE_COLOR } else { EDGE_COLOR };

        Line::new()
            .set("x1", from.x())
            .set("y1", from.y())
            .set("x2", to.x())
            .set("y2", to.y())
            .set("stroke", color)
            .set("stroke-width", if active { 2.5 } else { 1.5 })
    }

    fn render_edge_label(label: &str, from: Point, to: Point) -> Text {
        let midpoint = from.midpoint(to);

        Text::new(label)
            .set("x", midpoint.x())
            .set("y", midpoint.y())
            .set("fill", EDGE_LABEL_COLOR)
            .set("font-size", EDGE_LABEL_FONT_SIZE)
            .set("text-anchor", "middle")
    }

    fn render_node(node: &Node, position: Point, active: bool) -> (Circle, Text) {
        let (stroke, fill, label_color) = if active {
            (NODE_STROKE_ACTIVE_COLOR, NODE_FILL_ACTIVE_COLOR, LABEL_ACTIVE_COLOR)
        } else {
            (NODE_STROKE_COLOR, NODE_FILL_COLOR, LABEL_COLOR)
        };

        let circle = Circle::new()
            .set("cx", position.x())
            .set("cy", position.y())
            .set("r", Self::node_radius(node))
            .set("fill", fill)
            .set("stroke", stroke)
            .set("stroke-width", 2);

        let label = Text::new(node.display_text())
            .set("x", position.x())
            .set("y", position.y())
            .set("fill", label_color)
            .set("font-size", LABEL_FONT_SIZE)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle");

        (circle, label)
    }

    /// Render a layout into an SVG document.
    ///
    /// `hovered` switches the hovered node, and every node and edge adjacent
    /// to it, to the active palette, with adjacent nodes drawn at their
    /// repulsed positions.
    pub fn render_document(&self, layout: &Layout<'_>, hovered: Option<&str>) -> Document {
        let canvas = layout.canvas();
        let mut document = Document::new()
            .set("width", canvas.width())
            .set("height", canvas.height())
            .set("viewBox", (0.0, 0.0, canvas.width(), canvas.height()));

        if let Some(background) = &self.background_color {
            let backdrop = svg::node::element::Rectangle::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("fill", background);
            document = document.add(backdrop);
        }

        // Edges first so node circles paint over the line ends.
        for edge in layout.graph().edges() {
            let from = layout.node_position(edge.source(), hovered);
            let to = layout.node_position(edge.target(), hovered);
            let active = hovered
                .map(|id| edge.source() == id || edge.target() == id)
                .unwrap_or(false);

            document = document.add(Self::render_edge(from, to, active));
            if let Some(label) = edge.label() {
                document = document.add(Self::render_edge_label(label, from, to));
            }
        }

        for placement in layout.placements() {
            let node = placement.node();
            let position = layout.node_position(node.id(), hovered);
            let active = hovered
                .map(|id| node.id() == id || layout.graph().are_adjacent(node.id(), id))
                .unwrap_or(false);

            let (circle, label) = Self::render_node(node, position, active);
            document = document.add(circle).add(label);
        }

        document
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(export::Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }

        Ok(())
    }
}

impl export::Exporter for Svg {
    fn export_map(&self, layout: &Layout<'_>, hovered: Option<&str>) -> Result<(), export::Error> {
        let doc = self.render_document(layout, hovered);
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
