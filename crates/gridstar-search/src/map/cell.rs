//! Per-cell search state.
//!
//! A [`Cell`] carries the static description of one grid position (its
//! coordinates and whether it can be traversed) together with the scalars the
//! A* search mutates while it runs: accumulated cost `g`, heuristic `h`, total
//! estimate `f = g + h`, the visited flag and a back-pointer to the predecessor
//! on the best known path.

#![warn(missing_docs)]

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer coordinates of a cell, addressed as `(row, col)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl GridPos {
    /// Creates a new grid position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev (king-move) distance to `other`.
    pub fn chebyshev(&self, other: &GridPos) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Euclidean distance between the centers of two cells.
///
/// Axis-aligned neighbours are `1.0` apart and diagonal neighbours `sqrt(2)`.
/// This is the only edge cost used by the search, and it doubles as the
/// heuristic, which keeps it admissible and consistent on an 8-connected grid.
pub fn edge_cost(a: GridPos, b: GridPos) -> f64 {
    let dr = a.row.abs_diff(b.row) as f64;
    let dc = a.col.abs_diff(b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

/// One grid position and its search bookkeeping.
///
/// Position and passability are fixed at creation. The remaining fields start
/// at their "unreached" values (`+inf` costs, no back-pointer, not visited) and
/// are only written by the search engine during a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pos: GridPos,
    passable: bool,
    pub(crate) visited: bool,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    pub(crate) back: Option<GridPos>,
}

impl Cell {
    /// Creates an unreached cell at `(row, col)`.
    pub fn new(row: usize, col: usize, passable: bool) -> Self {
        Self {
            pos: GridPos::new(row, col),
            passable,
            visited: false,
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
            back: None,
        }
    }

    /// Restores the mutable search state to its initial values.
    pub fn reset(&mut self) {
        self.visited = false;
        self.g = f64::INFINITY;
        self.h = f64::INFINITY;
        self.f = f64::INFINITY;
        self.back = None;
    }

    /// Cost of reaching this cell through `predecessor`.
    pub fn tentative_g(&self, predecessor: &Cell) -> f64 {
        predecessor.g + edge_cost(predecessor.pos, self.pos)
    }

    /// Estimated remaining cost from this cell to `dest`.
    pub fn heuristic(&self, dest: GridPos) -> f64 {
        edge_cost(self.pos, dest)
    }

    /// Grid coordinates of this cell.
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Row index of this cell.
    pub fn row(&self) -> usize {
        self.pos.row
    }

    /// Column index of this cell.
    pub fn col(&self) -> usize {
        self.pos.col
    }

    /// Whether the cell can be traversed.
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    /// Whether the cell has been finalized by the current search.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Accumulated cost from the start, `+inf` if unreached.
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Heuristic estimate to the destination, `+inf` if unreached.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Total estimate `g + h`, `+inf` if unreached.
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Predecessor on the best known path.
    ///
    /// `None` for the start cell and for cells the search has not reached.
    pub fn back_pointer(&self) -> Option<GridPos> {
        self.back
    }

    /// Whether the search has assigned this cell a finite cost.
    pub fn is_reached(&self) -> bool {
        self.g.is_finite()
    }
}
