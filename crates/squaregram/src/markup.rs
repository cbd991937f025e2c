//! TikZ output for square diagrams.
//!
//! The markup backend turns a [`DiagramSpec`] into a [`Picture`], an ordered
//! list of [`Directive`]s that reads as a complete `tikzpicture` environment
//! once displayed. Pasting it into a LaTeX document that loads the `tikz`
//! package draws the diagram.
//!
//! # Output
//!
//! ```text
//! \begin{tikzpicture}[scale=8]
//!
//!     \filldraw[draw=black, fill=red!50](0,0) rectangle (0.5,0.092) node[midway] {1};
//!     …
//!     \node at (0.25,-0.0625) {$h_{1}$};
//!
//!     …
//! \end{tikzpicture}
//! ```
//!
//! Each column contributes its rectangles bottom to top, then its label,
//! then a blank line. Zero-height rectangles produce nothing.

mod directive;
mod number;

pub use directive::Directive;
pub use number::Number;

use std::fmt;

use log::{debug, info, trace};

use squaregram_core::{
    diagram::DiagramSpec,
    layout::{Cell, Column},
    steps::Interval,
};

use crate::{config::MarkupConfig, defaults::MarkupDefaults};

/// A rendered `tikzpicture`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Picture {
    directives: Vec<Directive>,
}

impl Picture {
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    fn push(&mut self, directive: Directive) {
        trace!(directive:% = directive; "Emitting directive");
        self.directives.push(directive);
    }
}

impl fmt::Display for Picture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for directive in &self.directives {
            writeln!(f, "{directive}")?;
        }
        Ok(())
    }
}

/// Renders `spec` as TikZ.
///
/// Omitted lists fall back to [`MarkupDefaults`]. Lists shorter than the
/// geometry truncate the output silently.
///
/// # Examples
///
/// ```
/// # use squaregram::{config::MarkupConfig, markup::render_markup};
/// # use squaregram_core::diagram::DiagramSpec;
/// let spec = DiagramSpec::new(vec![1.0], vec![vec![0.25, 0.75]]);
/// let picture = render_markup(&spec, &MarkupConfig::default());
///
/// let text = picture.to_string();
/// assert!(text.starts_with("\\begin{tikzpicture}[scale=8]\n\n"));
/// assert!(text.contains("(0,0.25) rectangle (1.0,1.0) node[midway] {2};"));
/// assert!(text.ends_with("\\end{tikzpicture}\n"));
/// ```
pub fn render_markup(spec: &DiagramSpec, config: &MarkupConfig) -> Picture {
    let resolved = spec.resolve(&MarkupDefaults);
    debug!(
        columns = resolved.col_labels().len(),
        rect_labels = resolved.rect_labels().len(),
        colors = resolved.colors().len();
        "Resolved markup defaults"
    );

    let mut picture = Picture::default();
    picture.push(Directive::BeginPicture {
        scale: config.scale(),
    });
    picture.push(Directive::Blank);

    for column in resolved.columns() {
        for cell in column.non_degenerate() {
            picture.push(rectangle(&column, &cell, config));
        }
        picture.push(column_label(&column, config));
        picture.push(Directive::Blank);
    }

    picture.push(Directive::EndPicture);

    info!(
        rectangles = picture.directives().iter().filter(|d| d.is_fill_draw()).count();
        "TikZ picture rendered"
    );
    picture
}

fn rectangle(column: &Column<'_>, cell: &Cell<'_>, config: &MarkupConfig) -> Directive {
    let (x1, x2) = coords(column.x(), column.index() == 0);
    let (y1, y2) = coords(cell.y(), cell.position() == 0);

    let opacity = cell.emphasis().is_dimmed().then_some(config.dim_opacity());

    Directive::FillDraw {
        bottom_left: (x1, y1),
        top_right: (x2, y2),
        label: cell.label().to_string(),
        color: cell.color().to_string(),
        tint: config.tint(),
        opacity,
    }
}

fn column_label(column: &Column<'_>, config: &MarkupConfig) -> Directive {
    Directive::Node {
        at: (
            Number::Float(column.x().midpoint()),
            Number::Float(config.column_label_y()),
        ),
        label: column.label().to_string(),
    }
}

/// End points of a step; the first step of a sequence starts at the origin.
fn coords(interval: Interval, first: bool) -> (Number, Number) {
    let start = if first {
        Number::Origin
    } else {
        Number::Float(interval.start())
    };
    (start, Number::Float(interval.end()))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::defaults::MARKUP_PALETTE;

    fn height_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0), 0.01f64..1.0]
    }

    fn diagram_strategy() -> impl Strategy<Value = DiagramSpec> {
        (
            prop::collection::vec(0.01f64..1.0, 0..6),
            prop::collection::vec(prop::collection::vec(height_strategy(), 0..16), 0..6),
        )
            .prop_map(|(widths, heights)| DiagramSpec::new(widths, heights))
    }

    /// Cells with a positive height that survive every positional zip.
    fn drawable_cells(spec: &DiagramSpec) -> usize {
        let positions = spec.rect_count().min(MARKUP_PALETTE.len());
        spec.widths()
            .iter()
            .zip(spec.heights())
            .map(|(_, row)| row.iter().take(positions).filter(|h| **h > 0.0).count())
            .sum()
    }

    fn check_one_fill_draw_per_drawable_cell(spec: &DiagramSpec) -> Result<(), TestCaseError> {
        let picture = render_markup(spec, &MarkupConfig::default());
        let fill_draws = picture.directives().iter().filter(|d| d.is_fill_draw()).count();
        prop_assert_eq!(fill_draws, drawable_cells(spec));

        let columns = spec.widths().len().min(spec.heights().len());
        let nodes = picture.directives().iter().filter(|d| d.is_node()).count();
        prop_assert_eq!(nodes, columns);
        Ok(())
    }

    fn check_only_special_label_is_opaque(spec: &DiagramSpec) -> Result<(), TestCaseError> {
        let spec = spec.clone().with_special_label("1");
        let picture = render_markup(&spec, &MarkupConfig::default());

        for directive in picture.directives() {
            if let Directive::FillDraw { label, opacity, .. } = directive {
                prop_assert_eq!(opacity.is_none(), label == "1");
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn one_fill_draw_per_drawable_cell(spec in diagram_strategy()) {
            check_one_fill_draw_per_drawable_cell(&spec)?;
        }

        #[test]
        fn only_special_label_is_opaque(spec in diagram_strategy()) {
            check_only_special_label_is_opaque(&spec)?;
        }
    }
}
