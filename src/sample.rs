// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grid sampling.  Runs the escape-time evaluator over every point of
//! a GridParams lattice and records the largest finite escape index
//! seen, which the colorizer later uses to normalize.

use crossbeam::thread::ScopedJoinHandle;
use log::{debug, trace};

use crate::error::RenderError;
use crate::escape::{escape_index, Escape};
use crate::planes::GridParams;

/// The raw result of a sampling pass.  `cells[i][j]` holds the escape
/// result for the point at x-step `i`, y-step `j`.
#[derive(Clone, Debug, PartialEq)]
pub struct RawGrid {
    /// Escape results, indexed by column (x-step) then row (y-step).
    pub cells: Vec<Vec<Escape>>,
    /// The largest finite escape index in `cells`, or 0 if there is
    /// none greater than 0.
    pub max: usize,
}

impl RawGrid {
    /// Number of columns (x-steps).
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows (y-steps).  Every column has the same length.
    pub fn height(&self) -> usize {
        self.cells.first().map_or(0, |column| column.len())
    }
}

/// Samples one column of the lattice.  `max` is only raised by an
/// escape index strictly greater than its current value.
fn sample_column(
    params: &GridParams,
    column: usize,
    rows: usize,
    max_iterations: usize,
    max: &mut usize,
) -> Vec<Escape> {
    (0..rows)
        .map(|row| {
            let escape = escape_index(params.point_at(column, row), max_iterations);
            if let Escape::Escaped(i) = escape {
                if i > *max {
                    *max = i;
                }
            }
            escape
        })
        .collect()
}

/// The main function for single-threaded sampling.  A degenerate
/// region (inverted interval, non-positive step) gives an empty or
/// partially empty grid rather than an error.
pub fn sample_grid(params: &GridParams, max_iterations: usize) -> RawGrid {
    let (columns, rows) = params.dimensions();
    let mut max = 0;
    let cells: Vec<Vec<Escape>> = (0..columns)
        .map(|column| sample_column(params, column, rows, max_iterations, &mut max))
        .collect();
    debug!("Sampled a {}x{} grid, max escape index {}", columns, rows, max);
    RawGrid { cells, max }
}

/// A multi-threaded version of `sample_grid` that takes a thread
/// count.  The columns are split into contiguous bands, one per
/// thread; each thread keeps its own maximum and the maxima are
/// merged once every band has been joined.  The result is identical
/// to `sample_grid`.
pub fn sample_grid_threaded(
    params: &GridParams,
    max_iterations: usize,
    threads: usize,
) -> Result<RawGrid, RenderError> {
    let (columns, rows) = params.dimensions();
    let mut cells: Vec<Vec<Escape>> = vec![Vec::new(); columns];
    if columns == 0 {
        return Ok(RawGrid { cells, max: 0 });
    }

    let threads = threads.max(1).min(columns);
    let band = (columns + threads - 1) / threads;

    let maxima = crossbeam::scope(|spawner| {
        let handles: Vec<ScopedJoinHandle<usize>> = cells
            .chunks_mut(band)
            .enumerate()
            .map(|(n, region)| {
                spawner.spawn(move |_| {
                    let first = n * band;
                    let mut max = 0;
                    for (offset, column) in region.iter_mut().enumerate() {
                        *column =
                            sample_column(params, first + offset, rows, max_iterations, &mut max);
                    }
                    trace!(
                        "Band {} (columns {}..{}) done, local max {}",
                        n,
                        first,
                        first + region.len(),
                        max
                    );
                    max
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Result<Vec<usize>, _>>()
    });

    let max = match maxima {
        Ok(Ok(maxima)) => maxima.into_iter().max().unwrap_or(0),
        _ => return Err(RenderError::WorkerPanicked),
    };

    debug!(
        "Sampled a {}x{} grid on {} threads, max escape index {}",
        columns, rows, threads, max
    );
    Ok(RawGrid { cells, max })
}
