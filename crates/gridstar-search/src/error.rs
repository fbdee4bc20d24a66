//! This module defines the error types used by the `gridstar-search` crate.

#![warn(missing_docs)]

use crate::map::GridPos;
use thiserror::Error;

/// Error type for grid construction and search operations.
///
/// A search that simply fails to reach its destination is *not* an error;
/// that outcome is reported through [`crate::astar::PathResult`]. Every variant
/// here is a precondition violation that is rejected before any work is done.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A coordinate lies outside the grid extent.
    #[error("Grid access out of bounds: ({row},{col}) is outside a {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
    /// The passability input is malformed (zero dimensions, ragged rows, ...).
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
    /// The start cell is impassable, so no search can be seeded from it.
    #[error("Start cell {0} is not passable")]
    StartBlocked(GridPos),
}

impl SearchError {
    pub(crate) fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        SearchError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }
}
