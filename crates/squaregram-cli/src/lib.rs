//! CLI logic for the Squaregram diagram tool.
//!
//! This module contains the core CLI logic for the Squaregram diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use squaregram::{DiagramBuilder, SquaregramError};

/// Run the Squaregram CLI application
///
/// This function reads the input file, renders it with the selected backend
/// and writes the result to the output file, or to stdout for TikZ without
/// an explicit output path.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SquaregramError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Colors the plot backend cannot parse
pub fn run(args: &Args) -> Result<(), SquaregramError> {
    info!(
        input_path = args.input,
        output_path = args.output_path(),
        format:? = args.format;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let mut diagram = builder.parse(&source)?;
    if let Some(special) = &args.special {
        diagram.set_special_label(Some(special.clone()));
    }

    let output = match args.format {
        Format::Tikz => builder.render_markup(&diagram),
        Format::Svg => builder.render_svg(&diagram)?,
    };

    match args.output_path() {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path; "Diagram exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
