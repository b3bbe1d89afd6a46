//! CLI logic for the corolla concept-map tool.
//!
//! This module contains the core CLI logic for the corolla concept-map tool.

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use corolla::{CorollaError, MapBuilder};

/// Run the corolla CLI application
///
/// This function processes the input concept-map file through the corolla
/// pipeline and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CorollaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing or validation errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), CorollaError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing concept map"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the map using the MapBuilder API
    let builder = MapBuilder::new(app_config);
    let graph = builder.parse(&source)?;
    let svg = builder.render_svg(&graph, args.hover.as_deref())?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
