//! Command-line argument definitions for the Squaregram CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input file, output format and path,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

/// Output backend selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// TikZ instructions for LaTeX
    Tikz,
    /// SVG export of the plotted figure
    Svg,
}

/// Command-line arguments for the Squaregram diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram file (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Tikz)]
    pub format: Format,

    /// Path to the output file; TikZ goes to stdout and SVG to out.svg when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rectangle label to keep opaque, overriding the input file
    #[arg(long)]
    pub special: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The output path, if the output goes to a file.
    pub fn output_path(&self) -> Option<&str> {
        match (&self.output, self.format) {
            (Some(path), _) => Some(path),
            (None, Format::Svg) => Some("out.svg"),
            (None, Format::Tikz) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["squaregram", "diagram.toml"]);
        assert_eq!(args.input, "diagram.toml");
        assert_eq!(args.format, Format::Tikz);
        assert_eq!(args.output_path(), None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_svg_defaults_to_out_svg() {
        let args = Args::parse_from(["squaregram", "d.toml", "--format", "svg"]);
        assert_eq!(args.output_path(), Some("out.svg"));
    }

    #[test]
    fn test_explicit_output_and_special() {
        let args = Args::parse_from(["squaregram", "d.toml", "-o", "d.tex", "--special", "3"]);
        assert_eq!(args.output_path(), Some("d.tex"));
        assert_eq!(args.special.as_deref(), Some("3"));
    }
}
