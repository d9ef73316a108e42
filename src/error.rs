// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Failures that can be reported by the fallible corners of the
//! crate.  The core pipeline itself never fails; these come from
//! parameter validation and from the threaded sampler.

use failure::Fail;

/// Everything that can go wrong on the way from a region description
/// to a colored grid.
#[derive(Debug, Fail, PartialEq)]
pub enum RenderError {
    /// The lattice step was zero, negative, or not a number.
    #[fail(display = "Step must be a positive number, got {}", _0)]
    InvalidStep(f64),

    /// An axis interval had its maximum below its minimum.
    #[fail(
        display = "The {} axis maximum ({}) is less than its minimum ({})",
        axis, max, min
    )]
    InvertedRange {
        /// Which axis, "x" or "y".
        axis: &'static str,
        /// The interval's lower bound.
        min: f64,
        /// The interval's upper bound.
        max: f64,
    },

    /// The region is valid but too small to hold a single sample.
    #[fail(display = "The region does not contain any sample points")]
    EmptyGrid,

    /// One of the sampling threads died before handing back its band.
    #[fail(display = "A sampling thread panicked")]
    WorkerPanicked,
}
