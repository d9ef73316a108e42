// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time iteration.  Both functions here walk the same
//! recurrence, z' = z^2 + c, starting from z = c.

use crate::planes::Point;
use num::Complex;

/// The result of iterating a single point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Escape {
    /// The orbit left the box |re| < 2, |im| < 2 at this iteration
    /// index.  Index 0 means the starting point was already outside.
    Escaped(usize),
    /// The orbit stayed inside the box for every iteration allowed.
    Unbounded,
}

impl Escape {
    /// The escape index, if there was one.
    pub fn index(self) -> Option<usize> {
        match self {
            Escape::Escaped(i) => Some(i),
            Escape::Unbounded => None,
        }
    }
}

#[inline]
fn step(z: Point, c: Point) -> Point {
    Complex::new(z.re * z.re - z.im * z.im + c.re, 2.0 * z.re * z.im + c.im)
}

#[inline]
fn outside(z: Point) -> bool {
    z.re.abs() >= 2.0 || z.im.abs() >= 2.0
}

/// This is our classic iterator function, which either returns the
/// iteration at which the orbit of `point` left the box, or
/// `Unbounded`.  The test comes before the step, so the point itself
/// is checked first.
pub fn escape_index(point: Point, max_iterations: usize) -> Escape {
    let mut z = point;
    for i in 0..max_iterations {
        if outside(z) {
            return Escape::Escaped(i);
        }
        z = step(z, point);
    }
    Escape::Unbounded
}

/// Plots the full orbit of a point rather than just its escape time.
/// Element 0 is the point itself; there are `iterations + 1` entries
/// and no escape test, so values may run off to infinity or NaN.
pub fn compute_orbit(point: Point, iterations: usize) -> Vec<Point> {
    let mut orbit = Vec::with_capacity(iterations + 1);
    orbit.push(point);
    let mut z = point;
    for _ in 0..iterations {
        z = step(z, point);
        orbit.push(z);
    }
    orbit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_outside_the_box_escape_immediately() {
        for p in &[
            Complex::new(2.0, 0.0),
            Complex::new(-2.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(0.5, -3.0),
            Complex::new(10.0, 10.0),
        ] {
            assert_eq!(escape_index(*p, 1), Escape::Escaped(0));
            assert_eq!(escape_index(*p, 500), Escape::Escaped(0));
        }
    }

    #[test]
    fn origin_never_escapes() {
        for n in &[0, 1, 10, 10_000] {
            assert_eq!(escape_index(Complex::new(0.0, 0.0), *n), Escape::Unbounded);
        }
    }

    #[test]
    fn zero_cap_is_unbounded() {
        assert_eq!(escape_index(Complex::new(5.0, 5.0), 0), Escape::Unbounded);
        assert_eq!(escape_index(Complex::new(0.3, 0.3), 0), Escape::Unbounded);
    }

    #[test]
    fn escape_counts_along_the_real_axis() {
        // 1 -> 2
        assert_eq!(escape_index(Complex::new(1.0, 0.0), 10), Escape::Escaped(1));
        // .5 -> .75 -> 1.0625 -> 1.62890625 -> 3.15...
        assert_eq!(escape_index(Complex::new(0.5, 0.0), 10), Escape::Escaped(4));
        assert_eq!(escape_index(Complex::new(0.5, 0.0), 4), Escape::Unbounded);
        // -1 -> 0 -> -1, a 2-cycle
        assert_eq!(escape_index(Complex::new(-1.0, 0.0), 1000), Escape::Unbounded);
    }

    #[test]
    fn escape_off_the_real_axis() {
        // (-1,-1) -> (-1,1) -> (-1,-3)
        assert_eq!(escape_index(Complex::new(-1.0, -1.0), 10), Escape::Escaped(2));
        // (0,-1) -> (-1,-1) -> (0,1) -> (-1,-1), cycling
        assert_eq!(escape_index(Complex::new(0.0, -1.0), 1000), Escape::Unbounded);
    }

    #[test]
    fn escape_index_unwraps() {
        assert_eq!(Escape::Escaped(7).index(), Some(7));
        assert_eq!(Escape::Unbounded.index(), None);
    }

    #[test]
    fn orbit_starts_at_the_point() {
        let p = Complex::new(0.25, -0.5);
        let orbit = compute_orbit(p, 6);
        assert_eq!(orbit.len(), 7);
        assert_eq!(orbit[0], p);
        assert_eq!(compute_orbit(p, 0), vec![p]);
    }

    #[test]
    fn orbit_follows_the_recurrence() {
        let orbit = compute_orbit(Complex::new(0.5, 0.0), 4);
        assert_eq!(
            orbit,
            vec![
                Complex::new(0.5, 0.0),
                Complex::new(0.75, 0.0),
                Complex::new(1.0625, 0.0),
                Complex::new(1.62890625, 0.0),
                Complex::new(1.62890625 * 1.62890625 + 0.5, 0.0),
            ]
        );
    }

    #[test]
    fn orbit_agrees_with_escape_index() {
        let p = Complex::new(-0.75, 0.3);
        let orbit = compute_orbit(p, 200);
        let first_out = orbit
            .iter()
            .position(|z| z.re.abs() >= 2.0 || z.im.abs() >= 2.0);
        assert_eq!(escape_index(p, 200).index(), first_out);
    }
}
