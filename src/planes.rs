//! Contains the GridParams struct, which describes a rectangular
//! lattice laid over the complex plane: an interval for each axis and
//! the distance between neighbouring sample points.  Maps integral
//! lattice coordinates to points on the complex plane.
use num::Complex;

use crate::error::RenderError;

/// A point on the complex plane.  The real part is the x-component
/// and the imaginary part the y-component.
pub type Point = Complex<f64>;

/// A closed range along one axis of the complex plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Constructor.
    pub fn new(min: f64, max: f64) -> Self {
        Interval { min, max }
    }

    /// The number of whole steps that fit inside the interval.  Counts
    /// that come out negative, NaN, or infinite collapse to zero.
    pub fn steps(&self, step: f64) -> usize {
        let steps = ((self.max - self.min) / step).floor();
        if steps.is_finite() && steps > 0.0 {
            steps as usize
        } else {
            0
        }
    }
}

/// Describes the region to sample: one interval per axis and the
/// lattice step shared by both.  'x' is the real axis, 'y' the
/// imaginary one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridParams {
    /// The real-axis interval.
    pub x: Interval,
    /// The imaginary-axis interval.
    pub y: Interval,
    /// Distance between adjacent sample points on either axis.
    pub step: f64,
}

impl GridParams {
    /// Constructor.  Takes the two intervals and the step as they
    /// come; use `validate` to find out whether they make sense.
    pub fn new(x: Interval, y: Interval, step: f64) -> Self {
        GridParams { x, y, step }
    }

    /// The shape of the lattice as (columns, rows): the number of
    /// x-steps and the number of y-steps.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.x.steps(self.step), self.y.steps(self.step))
    }

    /// The total number of sample points in the lattice.
    pub fn len(&self) -> usize {
        let (columns, rows) = self.dimensions();
        columns * rows
    }

    /// Describes that the lattice holds no points at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given the column and row of a lattice position, return the
    /// point on the complex plane it samples.
    pub fn point_at(&self, column: usize, row: usize) -> Point {
        Complex::new(
            (column as f64) * self.step + self.x.min,
            (row as f64) * self.step + self.y.min,
        )
    }

    /// Checks the invariants the sampler silently assumes.  The sampler
    /// never calls this; a degenerate region just produces an empty
    /// grid there.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Err(RenderError::InvalidStep(self.step));
        }

        for &(axis, interval) in &[("x", self.x), ("y", self.y)] {
            if interval.max < interval.min {
                return Err(RenderError::InvertedRange {
                    axis,
                    min: interval.min,
                    max: interval.max,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64, step: f64) -> GridParams {
        GridParams::new(Interval::new(min, max), Interval::new(min, max), step)
    }

    #[test]
    fn gridparams_fails_on_inverted_range() {
        let gp = GridParams::new(Interval::new(-1.0, 1.0), Interval::new(1.0, -1.0), 0.5);
        assert_eq!(
            gp.validate(),
            Err(RenderError::InvertedRange {
                axis: "y",
                min: 1.0,
                max: -1.0
            })
        );
    }

    #[test]
    fn gridparams_fails_on_bad_step() {
        assert_eq!(square(-1.0, 1.0, 0.0).validate(), Err(RenderError::InvalidStep(0.0)));
        assert_eq!(square(-1.0, 1.0, -0.5).validate(), Err(RenderError::InvalidStep(-0.5)));
        assert!(square(-1.0, 1.0, std::f64::NAN).validate().is_err());
    }

    #[test]
    fn gridparams_passes_on_good_shape() {
        assert!(square(-1.0, 1.0, 0.25).validate().is_ok());
    }

    #[test]
    fn dimensions_floor_partial_steps() {
        assert_eq!(square(-1.0, 1.0, 1.0).dimensions(), (2, 2));
        assert_eq!(square(0.0, 2.5, 1.0).dimensions(), (2, 2));
        let gp = GridParams::new(Interval::new(0.0, 3.0), Interval::new(0.0, 1.0), 1.0);
        assert_eq!(gp.dimensions(), (3, 1));
        assert_eq!(gp.len(), 3);
    }

    #[test]
    fn dimensions_collapse_on_degenerate_regions() {
        assert_eq!(square(1.0, -1.0, 1.0).dimensions(), (0, 0));
        assert_eq!(square(-1.0, 1.0, 0.0).dimensions(), (0, 0));
        assert_eq!(square(-1.0, 1.0, -1.0).dimensions(), (0, 0));
        assert!(square(0.0, 0.0, 1.0).is_empty());

        let gp = GridParams::new(Interval::new(-1.0, 1.0), Interval::new(0.0, 0.0), 1.0);
        assert_eq!(gp.dimensions(), (2, 0));
        assert!(gp.is_empty());
    }

    #[test]
    fn point_at_on_mixed_planes() {
        let gp = square(-1.0, 1.0, 1.0);
        assert_eq!(gp.point_at(0, 0), Complex::new(-1.0, -1.0));
        assert_eq!(gp.point_at(1, 0), Complex::new(0.0, -1.0));
        assert_eq!(gp.point_at(0, 1), Complex::new(-1.0, 0.0));
        assert_eq!(gp.point_at(1, 1), Complex::new(0.0, 0.0));
    }

    #[test]
    fn point_at_on_positive_planes() {
        let gp = square(0.0, 5.0, 0.5);
        assert_eq!(gp.point_at(0, 0), Complex::new(0.0, 0.0));
        assert_eq!(gp.point_at(4, 2), Complex::new(2.0, 1.0));
        assert_eq!(gp.point_at(9, 9), Complex::new(4.5, 4.5));
    }
}
