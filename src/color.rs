// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Color mapping.  Turns a RawGrid of escape results into a ColorGrid
//! of packed 0xRRGGBB values.

use itertools::iproduct;
use log::debug;

use crate::escape::Escape;
use crate::sample::RawGrid;

/// Rounds half-way cases up, towards positive infinity, for positive
/// and negative values alike.  `v - floor(v)` is exact, so there is no
/// double rounding.
fn round_half_up(v: f64) -> i64 {
    let f = v.floor();
    (if v - f >= 0.5 { f + 1.0 } else { f }) as i64
}

/// The three channel curves, unpacked and unclamped.  For `x` in
/// [0, 1] every channel lands in [0, 255]; outside that range the
/// polynomials extrapolate freely.
pub fn curve_channels(x: f64) -> (i64, i64, i64) {
    let red = round_half_up(255.0 * (1.0 - 2.5 * (x.powf(1.0 / 3.0) - x)));
    let green = round_half_up(255.0 * (1.0 - x.powf(0.25)));
    let blue = round_half_up(255.0 * (1.0 - 1.8 * (x - x.powf(5.0))));
    (red, green, blue)
}

/// Maps a normalized escape fraction to a packed color, red in bits
/// 16-23, green in 8-15 and blue in 0-7.  The channels are shifted
/// and summed without clamping, so an out-of-range channel bleeds into
/// its neighbours.  Each channel is truncated to 32 bits before the
/// shift and the sum wraps, so any input packs to some value.
pub fn color_curve(x: f64) -> u32 {
    let (red, green, blue) = curve_channels(x);
    ((red as u32) << 16)
        .wrapping_add((green as u32) << 8)
        .wrapping_add(blue as u32)
}

/// A grid of packed colors, the same shape as the RawGrid it was made
/// from: `cells[i][j]` is the color for x-step `i`, y-step `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorGrid {
    /// Packed 0xRRGGBB colors, indexed by column then row.
    pub cells: Vec<Vec<u32>>,
}

impl ColorGrid {
    /// Number of columns (x-steps).
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows (y-steps).
    pub fn height(&self) -> usize {
        self.cells.first().map_or(0, |column| column.len())
    }

    /// Flattens the grid into 8-bit RGB triples, one image row at a
    /// time.  The first row is the top of the imaginary range, so the
    /// imaginary axis points up in the picture.  The first column sets
    /// the image height; cells missing from a shorter column come out
    /// black and extra cells in a longer one are dropped.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let (width, height) = (self.width(), self.height());
        let mut pixels = Vec::with_capacity(width * height * 3);
        for (row, column) in iproduct!((0..height).rev(), 0..width) {
            let color = self.cells[column].get(row).copied().unwrap_or(0);
            pixels.push((color >> 16) as u8);
            pixels.push((color >> 8) as u8);
            pixels.push(color as u8);
        }
        pixels
    }
}

impl RawGrid {
    /// Consumes the grid and produces its colored counterpart.
    /// Unbounded cells are black.  Escaped cells go through
    /// `color_curve` after being divided by the grid's maximum; when
    /// that maximum is 0 every cell is black.
    pub fn colorize(self) -> ColorGrid {
        let max = self.max;
        let cells = self
            .cells
            .into_iter()
            .map(|column| {
                column
                    .into_iter()
                    .map(|cell| match cell {
                        Escape::Unbounded => 0,
                        Escape::Escaped(_) if max == 0 => 0,
                        Escape::Escaped(i) => color_curve(i as f64 / max as f64),
                    })
                    .collect()
            })
            .collect();
        debug!("Colorized grid against max escape index {}", max);
        ColorGrid { cells }
    }
}

/// Free-function form of `RawGrid::colorize`.
pub fn colorize_grid(grid: RawGrid) -> ColorGrid {
    grid.colorize()
}
