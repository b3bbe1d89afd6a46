//! Example: Rendering a concept map built in code
//!
//! This example demonstrates how to programmatically build a concept graph
//! using the model types directly, without a JSON document from the
//! content service.

use corolla::{ConceptGraph, Edge, MapBuilder, Node};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building concept map from model types...\n");

    // The first node is the central concept; the engine places it at the
    // canvas center and rings the rest around it.
    let nodes = vec![
        Node::new("water").with_label("Water").with_importance(10.0),
        Node::new("ice").with_label("Ice").with_importance(6.0),
        Node::new("steam").with_label("Steam").with_importance(6.0),
        Node::new("cloud").with_label("Cloud").with_importance(4.0),
        Node::new("rain").with_label("Rain").with_importance(4.0),
    ];

    let edges = vec![
        Edge::new("water", "ice").with_label("freezes into"),
        Edge::new("water", "steam").with_label("evaporates into"),
        Edge::new("steam", "cloud").with_label("condenses into"),
        Edge::new("cloud", "rain").with_label("falls as"),
    ];

    let graph = ConceptGraph::new(nodes, edges);

    // Print graph info
    println!("Created concept map:");
    println!("  Nodes: {}", graph.node_count());
    println!("  Edges: {}", graph.edge_count());
    println!();

    // Inspect the computed layout
    let builder = MapBuilder::default();
    let layout = builder.layout(&graph);
    for placement in layout.placements() {
        let position = placement.position();
        println!(
            "  {:<8} at ({:.1}, {:.1})",
            placement.node().id(),
            position.x(),
            position.y()
        );
    }
    println!();

    // Render the map to SVG, emphasizing the central concept
    println!("Rendering to SVG...");
    let svg = builder.render_svg(&graph, Some("water"))?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_nodes_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
