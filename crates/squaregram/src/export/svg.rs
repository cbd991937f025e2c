//! SVG export of plot figures.
//!
//! The axes box follows the usual subplot margins (left 12.5%, right 90%,
//! bottom 11%, top 88% of the figure). With [`Aspect::Equal`] the box is
//! shrunk and centred so one data unit has the same pixel length on both
//! axes. Data y points up; SVG y points down, so y is flipped here.
//!
//! Text is not clipped to the axes box: column labels live below the data.

use ::svg::{Document, node::element as svg_element};
use log::{debug, info};

use squaregram_core::geometry::{Bounds, Point};

use super::layer::{LayeredOutput, RenderLayer};
use crate::plot::{Artist, Aspect, FillBetween, Figure, Text};

/// Screen pixels per typographic point at 100 dpi.
const PIXELS_PER_POINT: f64 = 100.0 / 72.0;

const SUBPLOT_LEFT: f64 = 0.125;
const SUBPLOT_RIGHT: f64 = 0.9;
const SUBPLOT_BOTTOM: f64 = 0.11;
const SUBPLOT_TOP: f64 = 0.88;

/// Maps data coordinates to SVG pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    view: Bounds,
    /// Pixel position of the view's lower-left corner.
    origin: Point,
    scale_x: f64,
    scale_y: f64,
}

impl Transform {
    fn new(figure: &Figure) -> Self {
        let axes = figure.axes();
        let view = axes.view_limits();

        let box_left = SUBPLOT_LEFT * figure.width();
        let box_width = (SUBPLOT_RIGHT - SUBPLOT_LEFT) * figure.width();
        let box_bottom = (1.0 - SUBPLOT_BOTTOM) * figure.height();
        let box_height = (SUBPLOT_TOP - SUBPLOT_BOTTOM) * figure.height();

        let view_width = non_zero(view.width());
        let view_height = non_zero(view.height());

        let (scale_x, scale_y) = match axes.aspect() {
            Aspect::Auto => (box_width / view_width, box_height / view_height),
            Aspect::Equal => {
                let scale = (box_width / view_width).min(box_height / view_height);
                (scale, scale)
            }
        };

        // Centre the shrunk box inside the available one
        let slack_x = box_width - view_width * scale_x;
        let slack_y = box_height - view_height * scale_y;
        let origin = Point::new(box_left + slack_x / 2.0, box_bottom - slack_y / 2.0);

        Self {
            view,
            origin,
            scale_x,
            scale_y,
        }
    }

    fn apply(&self, point: Point) -> Point {
        Point::new(
            self.origin.x() + (point.x() - self.view.min_x()) * self.scale_x,
            self.origin.y() - (point.y() - self.view.min_y()) * self.scale_y,
        )
    }

    /// Pixel rectangle `(x, y, width, height)` of a data-space bounds.
    fn rect(&self, bounds: Bounds) -> (f64, f64, f64, f64) {
        let top_left = self.apply(Point::new(bounds.min_x(), bounds.max_y()));
        let bottom_right = self.apply(Point::new(bounds.max_x(), bounds.min_y()));
        (
            top_left.x(),
            top_left.y(),
            bottom_right.x() - top_left.x(),
            bottom_right.y() - top_left.y(),
        )
    }
}

fn non_zero(extent: f64) -> f64 {
    if extent > 0.0 { extent } else { 1.0 }
}

/// Renders `figure` as a standalone SVG document string.
pub(crate) fn render_figure(figure: &Figure) -> String {
    let transform = Transform::new(figure);
    debug!(
        scale_x = transform.scale_x,
        scale_y = transform.scale_y;
        "Computed figure transform"
    );

    let mut output = LayeredOutput::new();

    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", figure.width())
        .set("height", figure.height())
        .set("fill", "white");
    output.add_to_layer(RenderLayer::Background, Box::new(background));

    let (x, y, width, height) = transform.rect(figure.axes().view_limits());
    let frame = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 0.8);
    output.add_to_layer(RenderLayer::Frame, Box::new(frame));

    for artist in figure.axes().artists() {
        match artist {
            Artist::Fill(fill) => {
                output.add_to_layer(RenderLayer::Fill, render_fill(fill, &transform));
            }
            Artist::Text(text) => {
                output.add_to_layer(RenderLayer::Text, render_text(text, &transform));
            }
        }
    }

    let mut document = Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", figure.width(), figure.height()),
        )
        .set("width", figure.width())
        .set("height", figure.height());

    for node in output.render() {
        document = document.add(node);
    }

    info!(
        artists = figure.axes().artists().len();
        "Figure exported to SVG"
    );
    document.to_string()
}

fn render_fill(fill: &FillBetween, transform: &Transform) -> Box<dyn ::svg::Node> {
    let (x, y, width, height) = transform.rect(fill.bounds());
    let rect = svg_element::Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height)
        .set("fill", &fill.color())
        .set("fill-opacity", fill.alpha())
        .set("stroke", &fill.edge_color())
        .set("stroke-opacity", fill.alpha());
    Box::new(rect)
}

fn render_text(text: &Text, transform: &Transform) -> Box<dyn ::svg::Node> {
    let position = transform.apply(text.position());
    let mut element = svg_element::Text::new(text.content())
        .set("x", position.x())
        .set("y", position.y())
        .set("font-family", "sans-serif")
        .set("font-size", f64::from(text.font_size()) * PIXELS_PER_POINT)
        .set("text-anchor", text.horizontal_alignment().text_anchor());

    if let Some(baseline) = text.vertical_alignment().dominant_baseline() {
        element = element.set("dominant-baseline", baseline);
    }

    Box::new(element)
}
