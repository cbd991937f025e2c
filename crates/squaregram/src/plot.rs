//! Plot output for square diagrams.
//!
//! The plot backend draws a [`DiagramSpec`] onto a fresh [`Figure`] and
//! returns it, so the caller can annotate it further or export it. Each
//! column gets a centred label below the square; each rectangle with a
//! positive height gets a fill with a black edge and a centred label.

mod artist;
mod figure;

pub use artist::{Artist, FillBetween, HorizontalAlignment, Text, VerticalAlignment};
pub use figure::{Aspect, Axes, Figure};

use log::{debug, info, trace};

use squaregram_core::{
    color::Color,
    diagram::DiagramSpec,
    geometry::Point,
    layout::{Cell, Column, Emphasis},
};

use crate::{SquaregramError, config::PlotConfig, defaults::PlotDefaults};

/// Draws `spec` on a new figure.
///
/// Omitted lists fall back to [`PlotDefaults`]. Lists shorter than the
/// geometry truncate the drawing silently.
///
/// # Errors
///
/// Returns [`SquaregramError::Color`] if a color of a drawn rectangle is not
/// a valid CSS color.
///
/// # Examples
///
/// ```
/// # use squaregram::{config::PlotConfig, plot::render_plot};
/// # use squaregram_core::diagram::DiagramSpec;
/// let spec = DiagramSpec::new(vec![0.5, 0.5], vec![vec![0.2, 0.8], vec![0.6, 0.4]]);
/// let figure = render_plot(&spec, &PlotConfig::default()).unwrap();
///
/// assert_eq!(figure.axes().fills().count(), 4);
/// assert_eq!(figure.axes().texts().count(), 6);
/// ```
pub fn render_plot(spec: &DiagramSpec, config: &PlotConfig) -> Result<Figure, SquaregramError> {
    let resolved = spec.resolve(&PlotDefaults);
    debug!(
        columns = resolved.col_labels().len(),
        rect_labels = resolved.rect_labels().len(),
        colors = resolved.colors().len();
        "Resolved plot defaults"
    );

    let mut figure = Figure::new(config.width(), config.height());
    let axes = figure.axes_mut();

    for column in resolved.columns() {
        axes.text(column_label(&column, config));

        for cell in column.non_degenerate() {
            let fill = rectangle(&cell, config)?;
            trace!(
                column = column.index(),
                position = cell.position(),
                alpha = fill.alpha();
                "Filling cell"
            );
            axes.fill_between(fill);
            axes.text(cell_label(&cell, config));
        }
    }

    axes.set_aspect(Aspect::Equal);
    axes.autoscale(true);

    info!(rectangles = figure.axes().fills().count(); "Plot rendered");
    Ok(figure)
}

fn column_label(column: &Column<'_>, config: &PlotConfig) -> Text {
    Text::new(
        Point::new(column.x().midpoint(), config.column_label_y()),
        column.label(),
        config.column_font_size(),
    )
    .with_horizontal_alignment(HorizontalAlignment::Center)
}

fn rectangle(cell: &Cell<'_>, config: &PlotConfig) -> Result<FillBetween, SquaregramError> {
    let color = Color::new(cell.color()).map_err(SquaregramError::Color)?;
    let alpha = match cell.emphasis() {
        Emphasis::Full => config.alpha(),
        Emphasis::Dimmed => config.dim_alpha(),
    };

    Ok(FillBetween::new(cell.x(), cell.y(), color, alpha).with_edge_color(Color::default()))
}

fn cell_label(cell: &Cell<'_>, config: &PlotConfig) -> Text {
    Text::new(
        Point::new(cell.x().midpoint(), cell.y().midpoint()),
        cell.label(),
        config.font_size(),
    )
    .with_horizontal_alignment(HorizontalAlignment::Center)
    .with_vertical_alignment(VerticalAlignment::Center)
}
