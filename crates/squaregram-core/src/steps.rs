//! The layout kernel.
//!
//! A square diagram is built from two nested partitions of the unit square:
//! column widths along x, then per-column rectangle heights along y. Both are
//! turned into coordinates the same way, by accumulating a running sum and
//! emitting each consecutive pair of partial sums as an [`Interval`].
//!
//! ```
//! # use squaregram_core::steps::{Interval, cum_steps};
//! let steps: Vec<Interval> = cum_steps(&[1.0, 2.0, 3.0, 4.0]).collect();
//! assert_eq!(
//!     steps,
//!     vec![
//!         Interval::new(0.0, 1.0),
//!         Interval::new(1.0, 3.0),
//!         Interval::new(3.0, 6.0),
//!         Interval::new(6.0, 10.0),
//!     ]
//! );
//! ```

use std::{cmp::Ordering, iter::FusedIterator, slice};

/// A `(start, end)` coordinate pair along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    /// Creates a new interval from its two end points.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Returns the start of the interval.
    pub fn start(self) -> f64 {
        self.start
    }

    /// Returns the end of the interval.
    pub fn end(self) -> f64 {
        self.end
    }

    /// Returns the midpoint, computed as `0.5 * (start + end)`.
    pub fn midpoint(self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Returns true unless the interval strictly increases.
    ///
    /// Zero-height and inverted intervals are degenerate; NaN end points are
    /// degenerate as well.
    pub fn is_degenerate(self) -> bool {
        self.end.partial_cmp(&self.start) != Some(Ordering::Greater)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

/// Lazy iterator over the overlapping prefix-sum pairs of a sequence.
///
/// Created by [`cum_steps`].
#[derive(Debug, Clone)]
pub struct CumSteps<'a> {
    values: slice::Iter<'a, f64>,
    acc: f64,
}

impl Iterator for CumSteps<'_> {
    type Item = Interval;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.values.next()?;
        let start = self.acc;
        self.acc = start + value;
        Some(Interval::new(start, self.acc))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for CumSteps<'_> {}

impl FusedIterator for CumSteps<'_> {}

/// Returns the stream of overlapping pairs in the accumulated sequence.
///
/// For `N` input values this yields `N` intervals
/// `(prefix[i], prefix[i + 1])` where `prefix[0] = 0` and every following
/// prefix adds the next value, left to right. Each call starts a fresh
/// iterator.
pub fn cum_steps(values: &[f64]) -> CumSteps<'_> {
    CumSteps {
        values: values.iter(),
        acc: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_cum_steps_integers() {
        let steps: Vec<_> = cum_steps(&[1.0, 2.0, 3.0, 4.0])
            .map(|step| (step.start(), step.end()))
            .collect();

        assert_eq!(steps, vec![(0.0, 1.0), (1.0, 3.0), (3.0, 6.0), (6.0, 10.0)]);
    }

    #[test]
    fn test_cum_steps_empty() {
        assert_eq!(cum_steps(&[]).count(), 0);
    }

    #[test]
    fn test_cum_steps_priors() {
        let steps: Vec<_> = cum_steps(&[0.5, 0.125, 0.375]).collect();

        assert_eq!(
            steps,
            vec![
                Interval::new(0.0, 0.5),
                Interval::new(0.5, 0.625),
                Interval::new(0.625, 1.0),
            ]
        );
    }

    #[test]
    fn test_cum_steps_is_restartable() {
        let values = [0.25, 0.75];
        let first: Vec<_> = cum_steps(&values).collect();
        let second: Vec<_> = cum_steps(&values).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cum_steps_exact_size() {
        let mut steps = cum_steps(&[1.0, 1.0, 1.0]);
        assert_eq!(steps.len(), 3);
        steps.next();
        assert_eq!(steps.len(), 2);
    }

    #[test]
    fn test_cum_steps_zero_value_gives_degenerate_interval() {
        let steps: Vec<_> = cum_steps(&[0.5, 0.0, 0.5]).collect();
        assert!(!steps[0].is_degenerate());
        assert!(steps[1].is_degenerate());
        assert!(!steps[2].is_degenerate());
    }

    #[test]
    fn test_interval_midpoint() {
        let interval = Interval::new(0.5, 0.625);
        assert_approx_eq!(f64, interval.midpoint(), 0.5625);
    }

    #[test]
    fn test_interval_negative_is_degenerate() {
        assert!(Interval::new(1.0, 0.5).is_degenerate());
        assert!(Interval::new(f64::NAN, 1.0).is_degenerate());
    }
}
