#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Mandelbrot escape-time grids
//!
//! The Mandelbrot set is the set of points c on the complex plane for
//! which the orbit z -> z^2 + c never runs off to infinity.  For each
//! point of a regular lattice laid over some region of the plane we
//! count how many steps its orbit takes to leave the box
//! |re| < 2, |im| < 2.  That count, its "escape index", is what gets
//! rendered; points that never leave within the iteration cap are
//! "unbounded" and render black.
//!
//! The pipeline is four steps, each feeding the next:
//!
//! 1. `escape_index` iterates a single point.
//! 2. `sample_grid` (or `sample_grid_threaded`) runs it across a
//!    `GridParams` lattice, producing a `RawGrid` and its maximum
//!    escape index.
//! 3. `colorize_grid` consumes the `RawGrid`, normalizes each escape
//!    index by the maximum and produces a `ColorGrid`.
//! 4. `color_curve` is the scalar curve used for that last step.
//!
//! `compute_orbit` exposes the whole orbit of a point instead of only
//! its escape time.

pub mod color;
pub mod error;
pub mod escape;
pub mod planes;
pub mod sample;

pub use color::{color_curve, colorize_grid, curve_channels, ColorGrid};
pub use error::RenderError;
pub use escape::{compute_orbit, escape_index, Escape};
pub use planes::{GridParams, Interval, Point};
pub use sample::{sample_grid, sample_grid_threaded, RawGrid};
