//! Corolla - radial layout and grading for AI-generated concept maps.
//!
//! Parsing, layout, position queries, assessment grading, and SVG rendering
//! for the concept-map documents an upstream content service generates. The
//! layout is a deterministic radial placement: the central concept sits at
//! the canvas center and the remaining concepts ring it, with hover
//! repulsion available as a pure per-query adjustment.

pub mod assessment;
pub mod config;

mod color;
mod error;
mod export;
mod geometry;
mod graph;
mod layout;

pub use color::Color;
pub use error::CorollaError;
pub use geometry::{Point, Size};
pub use graph::{ConceptGraph, DEFAULT_IMPORTANCE, Edge, Node};
pub use layout::{Engine, Layout, PlacedNode};

use std::fs;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;

/// Builder for parsing and rendering concept maps.
///
/// This provides an API for processing a concept-map document through
/// parsing, layout, and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use corolla::{MapBuilder, config::AppConfig};
///
/// let source = r#"{
///     "nodes": [{"id": "water"}, {"id": "ice"}],
///     "edges": [{"source": "water", "target": "ice"}]
/// }"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = MapBuilder::new(config);
///
/// // Parse source into a validated graph
/// let graph = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the graph to SVG, with no node hovered
/// let svg = builder.render_svg(&graph, None)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = MapBuilder::default();
/// ```
#[derive(Default)]
pub struct MapBuilder {
    config: AppConfig,
}

impl MapBuilder {
    /// Create a new map builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a JSON document into a validated concept graph.
    ///
    /// # Arguments
    ///
    /// * `source` - The concept-map document as a JSON string
    ///
    /// # Errors
    ///
    /// Returns `CorollaError` when the document is malformed or an edge
    /// names a node that does not exist.
    pub fn parse(&self, source: &str) -> Result<ConceptGraph, CorollaError> {
        info!("Parsing concept map");

        let graph = ConceptGraph::from_json(source)?;
        graph.validate()?;

        debug!(
            nodes_count = graph.node_count(),
            edges_count = graph.edge_count();
            "Concept map parsed"
        );
        trace!(graph:?; "Parsed graph");

        Ok(graph)
    }

    /// Compute the radial layout for a graph using the configured constants.
    ///
    /// The returned [`Layout`] is a plain derived value; recompute it when
    /// the graph changes. Layout computation never fails.
    pub fn layout<'a>(&self, graph: &'a ConceptGraph) -> Layout<'a> {
        let engine = Engine::from_config(self.config.layout());
        engine.calculate(graph)
    }

    /// Render a concept graph to an SVG string.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to lay out and render
    /// * `hovered` - Optional id of a node to render with hover emphasis
    ///
    /// # Errors
    ///
    /// Returns `CorollaError` for styling or rendering errors.
    pub fn render_svg(
        &self,
        graph: &ConceptGraph,
        hovered: Option<&str>,
    ) -> Result<String, CorollaError> {
        info!("Calculating radial layout");
        let layout = self.layout(graph);
        info!(placements_len = layout.placements().len(); "Layout calculated");

        let background = self
            .config
            .style()
            .background_color()
            .map_err(export::Error::Render)?;

        // Render to SVG using a temporary file
        // TODO: In the future, modify the Svg exporter to support in-memory rendering
        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| CorollaError::Export(Box::new(err)))?;
        let temp_path = temp_file.path().to_string_lossy().to_string();

        let exporter = export::svg::Svg::new(&temp_path).with_background(background);
        exporter.export_map(&layout, hovered)?;

        let svg_string = fs::read_to_string(&temp_path).map_err(CorollaError::Io)?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
