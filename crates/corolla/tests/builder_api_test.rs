//! Integration tests for the MapBuilder API
//!
//! These tests verify that the public API works and is usable.

use corolla::{MapBuilder, Point, config::AppConfig};

const SIMPLE_MAP: &str = r#"{
    "nodes": [
        {"id": "water", "label": "Water", "importance": 10},
        {"id": "ice", "label": "Ice", "importance": 5},
        {"id": "steam", "label": "Steam", "importance": 5}
    ],
    "edges": [
        {"source": "water", "target": "ice", "label": "freezes into"},
        {"source": "water", "target": "steam", "label": "evaporates into"}
    ]
}"#;

#[test]
fn test_builder_api_exists() {
    // Just verify the API compiles and can be constructed
    let _builder = MapBuilder::default();
}

#[test]
fn test_parse_simple_map() {
    let builder = MapBuilder::default();
    let result = builder.parse(SIMPLE_MAP);
    assert!(
        result.is_ok(),
        "Should parse valid map: {:?}",
        result.err()
    );

    let graph = result.unwrap();
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_parse_invalid_json_returns_error() {
    let builder = MapBuilder::default();
    let result = builder.parse("this is not valid JSON!!!");
    assert!(result.is_err(), "Should return error for invalid JSON");
}

#[test]
fn test_parse_dangling_edge_returns_error() {
    let source = r#"{
        "nodes": [{"id": "water"}],
        "edges": [{"source": "water", "target": "ghost"}]
    }"#;

    let builder = MapBuilder::default();
    let result = builder.parse(source);
    assert!(result.is_err(), "Should reject edges naming unknown nodes");
}

#[test]
fn test_layout_places_central_concept_at_canvas_center() {
    let builder = MapBuilder::default();
    let graph = builder.parse(SIMPLE_MAP).expect("Failed to parse map");
    let layout = builder.layout(&graph);

    // Three nodes: height = 550 + (3 - 5) * 10.
    assert_eq!(layout.canvas().height(), 530.0);
    assert_eq!(
        layout.node_position("water", None),
        Point::new(400.0, 265.0)
    );
}

#[test]
fn test_render_simple_map() {
    let builder = MapBuilder::default();
    let graph = builder.parse(SIMPLE_MAP).expect("Failed to parse map");
    let result = builder.render_svg(&graph, None);

    if let Ok(svg) = result {
        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
        assert!(svg.contains("Water"), "Output should contain node labels");
        assert!(
            svg.contains("freezes into"),
            "Output should contain edge labels"
        );
    } else {
        panic!("Failed to render: {:?}", result.err());
    }
}

#[test]
fn test_render_with_hover_moves_adjacent_nodes() {
    let builder = MapBuilder::default();
    let graph = builder.parse(SIMPLE_MAP).expect("Failed to parse map");

    let plain = builder
        .render_svg(&graph, None)
        .expect("Failed to render without hover");
    let hovered = builder
        .render_svg(&graph, Some("water"))
        .expect("Failed to render with hover");

    assert!(hovered.contains("<svg"), "Hovered SVG should be valid");
    assert_ne!(
        plain, hovered,
        "Hover emphasis should change the rendered scene"
    );
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::default();

    // Just verify the API works with config
    let builder = MapBuilder::new(config);
    let _result = builder.parse(SIMPLE_MAP);

    // If it compiles and doesn't panic, the API works
}

#[test]
fn test_builder_reusability() {
    let second_map = r#"{
        "nodes": [{"id": "sun"}, {"id": "earth"}],
        "edges": [{"source": "sun", "target": "earth"}]
    }"#;

    let builder = MapBuilder::default();

    // Parse and render first map
    let graph1 = builder.parse(SIMPLE_MAP).expect("Failed to parse map 1");
    let svg1 = builder
        .render_svg(&graph1, None)
        .expect("Failed to render map 1");

    // Reuse same builder for second map
    let graph2 = builder.parse(second_map).expect("Failed to parse map 2");
    let svg2 = builder
        .render_svg(&graph2, None)
        .expect("Failed to render map 2");

    assert!(svg1.contains("<svg"), "First SVG should be valid");
    assert!(svg2.contains("<svg"), "Second SVG should be valid");
}
