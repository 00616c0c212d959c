//! CLI logic for the Canvasmark outline tool.
//!
//! This module contains the core CLI logic: it reads a canvas file, renders
//! its outline and writes the Markdown to a file or to standard output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use canvasmark::{CanvasmarkError, OutlineBuilder};

/// Run the Canvasmark CLI application
///
/// This function processes the input canvas through the Canvasmark pipeline
/// and writes the resulting Markdown to the output file, or to standard
/// output when no output file is given.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CanvasmarkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Canvas loading errors
pub fn run(args: &Args) -> Result<(), CanvasmarkError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing canvas"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = OutlineBuilder::new(app_config);
    let canvas = builder.parse(&source)?;
    let outline = builder.render_outline(&canvas);

    match &args.output {
        Some(path) => {
            fs::write(path, outline)?;
            info!(output_file = path.as_str(); "Outline exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(outline.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
