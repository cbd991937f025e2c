//! The square diagram input model.
//!
//! A [`DiagramSpec`] carries the geometry of a diagram (column widths and the
//! per-column heights matrix) together with optional labels, colors and a
//! special label. Optional lists distinguish "absent" (`None`, the backend
//! substitutes its own default) from "explicitly empty" (`Some(vec![])`).
//!
//! Backends describe their defaults through the [`DefaultScheme`] trait and
//! obtain a [`ResolvedSpec`] with every optional list filled in.
//!
//! # Example
//!
//! ```
//! # use squaregram_core::diagram::{DefaultScheme, DiagramSpec};
//! struct Numbered;
//!
//! impl DefaultScheme for Numbered {
//!     fn column_labels(&self, count: usize) -> Vec<String> {
//!         (1..=count).map(|i| i.to_string()).collect()
//!     }
//!
//!     fn rect_labels(&self, count: usize) -> Vec<String> {
//!         (1..=count).map(|i| i.to_string()).collect()
//!     }
//!
//!     fn palette(&self) -> &'static [&'static str] {
//!         &["red", "blue"]
//!     }
//! }
//!
//! let spec = DiagramSpec::new(vec![0.5, 0.5], vec![vec![0.3, 0.7], vec![0.6, 0.4]])
//!     .with_special_label("2");
//! let resolved = spec.resolve(&Numbered);
//! assert_eq!(resolved.col_labels(), ["1", "2"]);
//! assert_eq!(resolved.colors(), ["red", "blue"]);
//! ```

use std::borrow::Cow;

use serde::Deserialize;

use crate::layout::Column;

/// Backend-specific substitutes for omitted optional lists.
pub trait DefaultScheme {
    /// Default labels for `count` columns.
    fn column_labels(&self, count: usize) -> Vec<String>;

    /// Default labels for `count` rectangle positions.
    fn rect_labels(&self, count: usize) -> Vec<String>;

    /// Fallback palette, indexed by rectangle position.
    fn palette(&self) -> &'static [&'static str];
}

/// Input description of a square diagram.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiagramSpec {
    /// Column widths, left to right.
    widths: Vec<f64>,

    /// Row `i` holds the heights of column `i`'s rectangles, bottom to top.
    #[serde(alias = "heights_matrix")]
    heights: Vec<Vec<f64>>,

    #[serde(default)]
    col_labels: Option<Vec<String>>,

    /// Labels per rectangle position, shared by all columns.
    #[serde(default)]
    rect_labels: Option<Vec<String>>,

    /// Colors per rectangle position, shared by all columns.
    #[serde(default)]
    colors: Option<Vec<String>>,

    #[serde(default)]
    special_label: Option<String>,
}

impl DiagramSpec {
    /// Creates a new diagram from column widths and the heights matrix.
    ///
    /// # Arguments
    ///
    /// * `widths` - Column widths, typically summing to 1.
    /// * `heights` - One row of rectangle heights per column.
    pub fn new(widths: Vec<f64>, heights: Vec<Vec<f64>>) -> Self {
        Self {
            widths,
            heights,
            ..Self::default()
        }
    }

    pub fn with_col_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.col_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_rect_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.rect_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_special_label(mut self, label: impl Into<String>) -> Self {
        self.special_label = Some(label.into());
        self
    }

    /// Replaces the special label, or clears it with `None`.
    pub fn set_special_label(&mut self, label: Option<String>) {
        self.special_label = label;
    }

    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    pub fn heights(&self) -> &[Vec<f64>] {
        &self.heights
    }

    pub fn col_labels(&self) -> Option<&[String]> {
        self.col_labels.as_deref()
    }

    pub fn rect_labels(&self) -> Option<&[String]> {
        self.rect_labels.as_deref()
    }

    pub fn colors(&self) -> Option<&[String]> {
        self.colors.as_deref()
    }

    pub fn special_label(&self) -> Option<&str> {
        self.special_label.as_deref()
    }

    /// Number of rectangle positions, taken from the first heights row.
    ///
    /// Returns 0 when the heights matrix is empty.
    pub fn rect_count(&self) -> usize {
        self.heights.first().map_or(0, Vec::len)
    }

    /// Fills in every omitted list from `scheme`.
    ///
    /// Lists that were given explicitly are borrowed unchanged, even when
    /// empty or shorter than the geometry.
    pub fn resolve(&self, scheme: &dyn DefaultScheme) -> ResolvedSpec<'_> {
        let col_labels = match &self.col_labels {
            Some(labels) => Cow::Borrowed(labels.as_slice()),
            None => Cow::Owned(scheme.column_labels(self.widths.len())),
        };

        let rect_labels = match &self.rect_labels {
            Some(labels) => Cow::Borrowed(labels.as_slice()),
            None => Cow::Owned(scheme.rect_labels(self.rect_count())),
        };

        let colors = match &self.colors {
            Some(colors) => Cow::Borrowed(colors.as_slice()),
            None => Cow::Owned(scheme.palette().iter().map(|c| c.to_string()).collect()),
        };

        ResolvedSpec {
            spec: self,
            col_labels,
            rect_labels,
            colors,
        }
    }
}

/// A [`DiagramSpec`] with every optional list resolved.
#[derive(Debug, Clone)]
pub struct ResolvedSpec<'a> {
    spec: &'a DiagramSpec,
    col_labels: Cow<'a, [String]>,
    rect_labels: Cow<'a, [String]>,
    colors: Cow<'a, [String]>,
}

impl ResolvedSpec<'_> {
    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    pub fn rect_labels(&self) -> &[String] {
        &self.rect_labels
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn special_label(&self) -> Option<&str> {
        self.spec.special_label()
    }

    /// Walks the columns left to right.
    ///
    /// Widths, height rows and column labels are zipped positionally; the
    /// walk stops at the shortest of the three.
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> + '_ {
        Column::walk(
            self.spec.widths(),
            self.spec.heights(),
            &self.col_labels,
            &self.rect_labels,
            &self.colors,
            self.special_label(),
        )
    }
}
