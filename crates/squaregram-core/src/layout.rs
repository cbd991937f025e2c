//! Column and cell traversal shared by every backend.
//!
//! Both backends draw a square diagram the same way: columns left to right,
//! and inside each column the rectangles bottom to top. Every list involved
//! (widths, height rows, labels, colors) is zipped positionally, so a short
//! list silently truncates the walk. In particular, rectangle positions past
//! the end of the color list are never drawn.

use log::trace;

use crate::steps::{CumSteps, Interval, cum_steps};

/// How strongly a rectangle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Drawn at the backend's normal opacity.
    Full,
    /// Faded so that the special label stands out.
    Dimmed,
}

impl Emphasis {
    /// Decides the emphasis of a rectangle labelled `label`.
    ///
    /// An unset or empty special label keeps everything at full emphasis;
    /// otherwise only rectangles whose label equals it stay full.
    ///
    /// ```
    /// # use squaregram_core::layout::Emphasis;
    /// assert_eq!(Emphasis::for_label(None, "1"), Emphasis::Full);
    /// assert_eq!(Emphasis::for_label(Some("1"), "1"), Emphasis::Full);
    /// assert_eq!(Emphasis::for_label(Some("1"), "2"), Emphasis::Dimmed);
    /// ```
    pub fn for_label(special: Option<&str>, label: &str) -> Self {
        match special {
            Some(special) if !special.is_empty() && special != label => Self::Dimmed,
            _ => Self::Full,
        }
    }

    pub fn is_dimmed(self) -> bool {
        self == Self::Dimmed
    }
}

/// One column of the diagram.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    index: usize,
    x: Interval,
    label: &'a str,
    heights: &'a [f64],
    rect_labels: &'a [String],
    colors: &'a [String],
    special: Option<&'a str>,
}

impl<'a> Column<'a> {
    pub(crate) fn walk(
        widths: &'a [f64],
        heights: &'a [Vec<f64>],
        col_labels: &'a [String],
        rect_labels: &'a [String],
        colors: &'a [String],
        special: Option<&'a str>,
    ) -> impl Iterator<Item = Column<'a>> + 'a {
        cum_steps(widths)
            .zip(heights)
            .zip(col_labels)
            .enumerate()
            .map(move |(index, ((x, heights), label))| Column {
                index,
                x,
                label,
                heights,
                rect_labels,
                colors,
                special,
            })
    }

    /// Zero-based position of the column, left to right.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Horizontal extent of the column.
    pub fn x(&self) -> Interval {
        self.x
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Every cell of the column, degenerate ones included.
    pub fn cells(&self) -> Cells<'a> {
        Cells {
            steps: cum_steps(self.heights),
            x: self.x,
            position: 0,
            rect_labels: self.rect_labels.iter(),
            colors: self.colors.iter(),
            special: self.special,
        }
    }

    /// Cells with a strictly positive height, the ones that get drawn.
    pub fn non_degenerate(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let column = self.index;
        self.cells().filter(move |cell| {
            let keep = !cell.is_degenerate();
            if !keep {
                trace!(column, position = cell.position(); "Skipping degenerate cell");
            }
            keep
        })
    }
}

/// Iterator over the cells of one column, created by [`Column::cells`].
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    steps: CumSteps<'a>,
    x: Interval,
    position: usize,
    rect_labels: std::slice::Iter<'a, String>,
    colors: std::slice::Iter<'a, String>,
    special: Option<&'a str>,
}

impl<'a> Iterator for Cells<'a> {
    type Item = Cell<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let y = self.steps.next()?;
        let label = self.rect_labels.next()?;
        let color = self.colors.next()?;

        let cell = Cell {
            position: self.position,
            x: self.x,
            y,
            label,
            color,
            emphasis: Emphasis::for_label(self.special, label),
        };
        self.position += 1;
        Some(cell)
    }
}

/// One rectangle inside a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell<'a> {
    position: usize,
    x: Interval,
    y: Interval,
    label: &'a str,
    color: &'a str,
    emphasis: Emphasis,
}

impl<'a> Cell<'a> {
    /// Zero-based rectangle position inside the column, bottom to top.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn x(&self) -> Interval {
        self.x
    }

    pub fn y(&self) -> Interval {
        self.y
    }

    pub fn label(&self) -> &'a str {
        self.label
    }

    pub fn color(&self) -> &'a str {
        self.color
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    /// True when the cell has no positive height.
    pub fn is_degenerate(&self) -> bool {
        self.y.is_degenerate()
    }
}
