//! Configuration types for Squaregram rendering.
//!
//! This module provides configuration structures that control the fixed
//! constants of each backend. All types implement [`serde::Deserialize`] for
//! loading from external sources, and every field falls back to its default
//! when omitted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining both backends.
//! - [`MarkupConfig`] - TikZ scale, tint and dimming.
//! - [`PlotConfig`] - Plot alphas, label placement and figure size.
//!
//! # Example
//!
//! ```
//! # use squaregram::config::AppConfig;
//! let config: AppConfig = toml::from_str("[plot]\ndim_alpha = 0.2").unwrap();
//! assert_eq!(config.plot().dim_alpha(), 0.2);
//! assert_eq!(config.markup().scale(), 8.0);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// TikZ backend section.
    #[serde(default)]
    markup: MarkupConfig,

    /// Plot backend section.
    #[serde(default)]
    plot: PlotConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from both backend sections.
    pub fn new(markup: MarkupConfig, plot: PlotConfig) -> Self {
        Self { markup, plot }
    }

    pub fn markup(&self) -> &MarkupConfig {
        &self.markup
    }

    pub fn plot(&self) -> &PlotConfig {
        &self.plot
    }
}

/// Constants of the TikZ backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkupConfig {
    /// `scale` option of the `tikzpicture` environment.
    scale: f64,

    /// Percentage of the fill color mixed with white (`red!50`).
    tint: u8,

    /// Opacity of rectangles that are not the special label.
    dim_opacity: f64,

    /// Vertical position of the column labels.
    column_label_y: f64,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            scale: 8.0,
            tint: 50,
            dim_opacity: 0.15,
            column_label_y: -1.0 / 16.0,
        }
    }
}

impl MarkupConfig {
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn tint(&self) -> u8 {
        self.tint
    }

    pub fn dim_opacity(&self) -> f64 {
        self.dim_opacity
    }

    pub fn column_label_y(&self) -> f64 {
        self.column_label_y
    }
}

/// Constants of the plot backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// Fill alpha of fully emphasized rectangles.
    alpha: f32,

    /// Fill alpha of dimmed rectangles.
    dim_alpha: f32,

    /// Vertical position of the column labels.
    column_label_y: f64,

    /// Font size of the column labels, in points.
    column_font_size: f32,

    /// Font size of the rectangle labels, in points.
    font_size: f32,

    /// Figure width in pixels.
    width: f64,

    /// Figure height in pixels.
    height: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            alpha: 0.8,
            dim_alpha: 0.1,
            column_label_y: -0.2,
            column_font_size: 14.0,
            font_size: 10.0,
            width: 640.0,
            height: 480.0,
        }
    }
}

impl PlotConfig {
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn dim_alpha(&self) -> f32 {
        self.dim_alpha
    }

    pub fn column_label_y(&self) -> f64 {
        self.column_label_y
    }

    pub fn column_font_size(&self) -> f32 {
        self.column_font_size
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.markup().scale(), 8.0);
        assert_eq!(config.markup().tint(), 50);
        assert_eq!(config.markup().dim_opacity(), 0.15);
        assert_eq!(config.markup().column_label_y(), -0.0625);
        assert_eq!(config.plot().alpha(), 0.8);
        assert_eq!(config.plot().dim_alpha(), 0.1);
        assert_eq!(config.plot().column_label_y(), -0.2);
        assert_eq!(config.plot().column_font_size(), 14.0);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [markup]
            scale = 4

            [plot]
            width = 800
            "#,
        )
        .unwrap();

        assert_eq!(config.markup().scale(), 4.0);
        assert_eq!(config.markup().dim_opacity(), 0.15);
        assert_eq!(config.plot().width(), 800.0);
        assert_eq!(config.plot().height(), 480.0);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[markup]\nopacity = 0.5");
        assert!(result.is_err());
    }
}
