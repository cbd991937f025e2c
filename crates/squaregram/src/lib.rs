//! Squaregram - square diagrams for Bayesian reasoning.
//!
//! A square diagram divides the unit square into columns whose widths are
//! prior probabilities, and each column into stacked rectangles whose
//! heights are likelihoods. Highlighting one outcome across all columns
//! while fading the rest makes the posterior visible at a glance.
//!
//! Two backends are provided: [`markup`] writes TikZ for LaTeX documents,
//! [`plot`] draws onto an in-memory [`plot::Figure`] that can be exported to
//! SVG.

pub mod config;
pub mod defaults;
pub mod markup;
pub mod plot;

mod error;
mod export;

pub use squaregram_core::{color, diagram, geometry, layout, steps};

pub use error::SquaregramError;

use log::{debug, info, trace};

use config::AppConfig;
use diagram::DiagramSpec;
use plot::Figure;

/// Builder for parsing and rendering square diagrams.
///
/// # Examples
///
/// ```rust
/// use squaregram::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     widths = [0.5, 0.5]
///     heights = [[0.2, 0.8], [0.6, 0.4]]
///     special_label = "1"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
///
/// let tikz = builder.render_markup(&diagram);
/// assert!(tikz.contains("opacity=0.15"));
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Backend constants for both renderers
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a TOML diagram description.
    ///
    /// # Arguments
    ///
    /// * `source` - TOML with `widths`, `heights` and the optional
    ///   `col_labels`, `rect_labels`, `colors` and `special_label` keys
    ///
    /// # Errors
    ///
    /// Returns [`SquaregramError::Parse`] with the offending span when the
    /// source is not valid TOML or does not describe a diagram.
    pub fn parse(&self, source: &str) -> Result<DiagramSpec, SquaregramError> {
        info!("Parsing diagram");

        let diagram: DiagramSpec = toml::from_str(source)
            .map_err(|err| SquaregramError::new_parse_error(&err, source))?;

        debug!(
            columns = diagram.widths().len(),
            rectangles = diagram.rect_count();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a diagram as TikZ text.
    pub fn render_markup(&self, diagram: &DiagramSpec) -> String {
        info!("Rendering TikZ picture");
        markup::render_markup(diagram, self.config.markup()).to_string()
    }

    /// Draw a diagram on a new figure.
    ///
    /// # Errors
    ///
    /// Returns [`SquaregramError::Color`] for colors the plot cannot parse.
    pub fn render_plot(&self, diagram: &DiagramSpec) -> Result<Figure, SquaregramError> {
        info!("Rendering plot");
        plot::render_plot(diagram, self.config.plot())
    }

    /// Draw a diagram and export the figure as an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`SquaregramError::Color`] for colors the plot cannot parse.
    pub fn render_svg(&self, diagram: &DiagramSpec) -> Result<String, SquaregramError> {
        let figure = self.render_plot(diagram)?;
        let svg = figure.to_svg();
        info!("SVG rendered successfully");
        Ok(svg)
    }
}
