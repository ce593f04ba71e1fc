//! CLI logic for the Radiant diagram tool.
//!
//! Reads a diagram description, lays it out, replays any scripted drag
//! gestures and writes the result as SVG.

pub mod error_adapter;

mod args;
mod config;
mod input;

pub use args::Args;

use std::path::Path;

use log::{info, warn};

use radiant::{DiagramBuilder, RadiantError};

/// Run the Radiant CLI application
///
/// # Errors
///
/// Returns `RadiantError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed diagram input
/// - Layout errors (undersized canvas, duplicate ids)
/// - Export errors
pub fn run(args: &Args) -> Result<(), RadiantError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let input = input::load(Path::new(&args.input))?;
    let size = input.canvas_size(args.width, args.height);

    let builder = DiagramBuilder::new(app_config);
    let mut canvas = builder.build(input.spec(), size)?;

    for &(dx, dy) in &args.drags {
        canvas.drag_start();
        canvas.drag_move(dx, dy);
        canvas.drag_end();
    }

    if let Some(diagram) = canvas.diagram() {
        for connection in diagram.warnings() {
            warn!(
                from = connection.from().to_string(),
                to = connection.to().to_string();
                "Connector drawn center to center, nodes overlap"
            );
        }
    }

    canvas.write_svg(Path::new(&args.output))?;
    canvas.teardown();

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
