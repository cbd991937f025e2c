//! The in-memory plotting surface: a [`Figure`] holding one [`Axes`].
//!
//! Drawing calls are recorded as [`Artist`]s in call order. Nothing is
//! rasterized or written anywhere until the caller exports the figure, e.g.
//! with [`Figure::to_svg`].

use log::debug;

use squaregram_core::geometry::Bounds;

use super::artist::{Artist, FillBetween, Text};
use crate::export::svg;

/// Fraction of the data extent added on every side by a non-tight autoscale.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// How data units map to display units on each axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Aspect {
    /// Fill the axes box, scaling x and y independently.
    #[default]
    Auto,
    /// One data unit has the same length on both axes.
    Equal,
}

/// A single set of axes: recorded artists plus view limits.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    artists: Vec<Artist>,
    aspect: Aspect,
    view: Bounds,
}

impl Default for Axes {
    fn default() -> Self {
        Self {
            artists: Vec::new(),
            aspect: Aspect::default(),
            view: Bounds::new(0.0, 0.0, 1.0, 1.0),
        }
    }
}

impl Axes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a filled region.
    pub fn fill_between(&mut self, fill: FillBetween) {
        self.artists.push(Artist::Fill(fill));
    }

    /// Records a text label.
    pub fn text(&mut self, text: Text) {
        self.artists.push(Artist::Text(text));
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    /// Sets the view limits explicitly.
    pub fn set_view_limits(&mut self, view: Bounds) {
        self.view = view;
    }

    /// Current view limits in data coordinates.
    pub fn view_limits(&self) -> Bounds {
        self.view
    }

    /// Bounds of all filled regions, `None` when nothing is filled.
    ///
    /// Text does not contribute to the data limits.
    pub fn data_limits(&self) -> Option<Bounds> {
        self.fills()
            .map(FillBetween::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Fits the view limits to the data limits.
    ///
    /// With `tight` the view matches the data exactly; otherwise a margin of
    /// 5% of the extent is added on every side. Without data the limits are
    /// left unchanged.
    pub fn autoscale(&mut self, tight: bool) {
        let Some(limits) = self.data_limits() else {
            debug!("No data to autoscale to");
            return;
        };

        self.view = if tight {
            limits
        } else {
            limits.expand_by_fraction(AUTOSCALE_MARGIN)
        };
        debug!(
            min_x = self.view.min_x(),
            min_y = self.view.min_y(),
            max_x = self.view.max_x(),
            max_y = self.view.max_y(),
            tight;
            "Autoscaled view limits"
        );
    }

    /// All artists in drawing order.
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn fills(&self) -> impl Iterator<Item = &FillBetween> {
        self.artists.iter().filter_map(Artist::as_fill)
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.artists.iter().filter_map(Artist::as_text)
    }
}

/// A figure of a fixed pixel size owning one [`Axes`].
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width: f64,
    height: f64,
    axes: Axes,
}

impl Figure {
    /// Creates an empty figure of `width × height` pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            axes: Axes::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Mutable access for further annotation by the caller.
    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Renders the figure as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        svg::render_figure(self)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use squaregram_core::{color::Color, geometry::Point, steps::Interval};

    use super::*;

    fn fill(x: (f64, f64), y: (f64, f64)) -> FillBetween {
        FillBetween::new(x.into(), y.into(), Color::new("orange").unwrap(), 0.8)
    }

    #[test]
    fn test_default_view_is_unit_square() {
        assert_eq!(Axes::new().view_limits(), Bounds::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_data_limits_ignore_text() {
        let mut axes = Axes::new();
        axes.text(Text::new(Point::new(0.5, -0.2), "1", 14.0));
        assert_eq!(axes.data_limits(), None);

        axes.fill_between(fill((0.0, 0.5), (0.0, 0.3)));
        axes.fill_between(fill((0.5, 1.0), (0.2, 1.0)));
        assert_eq!(axes.data_limits(), Some(Bounds::new(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_autoscale_tight() {
        let mut axes = Axes::new();
        axes.fill_between(fill((0.0, 2.0), (0.0, 1.0)));
        axes.autoscale(true);
        assert_eq!(axes.view_limits(), Bounds::new(0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn test_autoscale_with_margin() {
        let mut axes = Axes::new();
        axes.fill_between(fill((0.0, 2.0), (0.0, 1.0)));
        axes.autoscale(false);

        let view = axes.view_limits();
        assert_approx_eq!(f64, view.min_x(), -0.1);
        assert_approx_eq!(f64, view.max_x(), 2.1);
        assert_approx_eq!(f64, view.min_y(), -0.05);
        assert_approx_eq!(f64, view.max_y(), 1.05);
    }

    #[test]
    fn test_autoscale_without_data_keeps_view() {
        let mut axes = Axes::new();
        axes.set_view_limits(Bounds::new(-1.0, -1.0, 1.0, 1.0));
        axes.autoscale(true);
        assert_eq!(axes.view_limits(), Bounds::new(-1.0, -1.0, 1.0, 1.0));
    }

    #[test]
    fn test_artists_keep_call_order() {
        let mut figure = Figure::new(640.0, 480.0);
        let axes = figure.axes_mut();
        axes.text(Text::new(Point::new(0.0, 0.0), "a", 10.0));
        axes.fill_between(fill((0.0, 1.0), (0.0, 1.0)));
        axes.text(Text::new(Point::new(0.0, 0.0), "b", 10.0));

        let kinds: Vec<_> = figure
            .axes()
            .artists()
            .iter()
            .map(|artist| artist.as_fill().is_some())
            .collect();
        assert_eq!(kinds, vec![false, true, false]);
        assert_eq!(figure.axes().fills().count(), 1);
        assert_eq!(
            figure.axes().fills().next().map(FillBetween::x),
            Some(Interval::new(0.0, 1.0))
        );
    }
}
