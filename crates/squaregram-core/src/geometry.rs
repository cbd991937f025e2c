//! Geometric primitives in diagram space.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Diagram space is the mathematical one, matching the TikZ and plotting
//! conventions the backends target:
//!
//! ```text
//!    +Y
//!     ▲
//!     │
//!     │
//!   (0,0) ────────► +X
//! ```
//!
//! The unit square spans `(0,0)` to `(1,1)`. Column labels sit below it at
//! negative y. Conversion to the downward-pointing SVG y-axis happens only
//! in the SVG exporter.

use crate::steps::Interval;

/// A 2D point in diagram coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// An axis-aligned bounding box.
///
/// # Examples
///
/// ```
/// # use squaregram_core::{geometry::Bounds, steps::Interval};
/// let a = Bounds::from_intervals(Interval::new(0.0, 0.5), Interval::new(0.0, 1.0));
/// let b = Bounds::from_intervals(Interval::new(0.5, 1.0), Interval::new(0.2, 0.4));
/// let merged = a.merge(&b);
/// assert_eq!(merged.width(), 1.0);
/// assert_eq!(merged.height(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates bounds from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Creates bounds spanning an x interval and a y interval.
    pub fn from_intervals(x: Interval, y: Interval) -> Self {
        Self::new(
            x.start().min(x.end()),
            y.start().min(y.end()),
            x.start().max(x.end()),
            y.start().max(y.end()),
        )
    }

    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            self.min_x.min(other.min_x),
            self.min_y.min(other.min_y),
            self.max_x.max(other.max_x),
            self.max_y.max(other.max_y),
        )
    }

    /// Grows each side by `fraction` of the corresponding extent.
    pub fn expand_by_fraction(&self, fraction: f64) -> Bounds {
        let dx = self.width() * fraction;
        let dy = self.height() * fraction;
        Bounds::new(
            self.min_x - dx,
            self.min_y - dy,
            self.max_x + dx,
            self.max_y + dy,
        )
    }
}
