//! Dense 2D grid of search cells.
//!
//! The grid owns one [`Cell`] per coordinate in a row-major vector. Its
//! dimensions and the passability of every cell are fixed at construction;
//! only the per-cell search state changes afterwards, and [`Grid::reset`]
//! clears that state so the same grid can be searched again.

#![warn(missing_docs)]

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::map::cell::{Cell, GridPos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Neighbour offsets in expansion order: N, S, W, E, NW, NE, SW, SE.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Row-major grid of [`Cell`]s with fixed dimensions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of [`Grid`]; converted through [`Grid::from_fn`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    cells: Vec<CellRepr>,
}

/// Only the static part of a serialized [`Cell`] is read back.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CellRepr {
    pos: GridPos,
    passable: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = SearchError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { rows, cols, cells } = repr;
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(SearchError::InvalidGrid(format!(
                "{} cells do not fill a {}x{} grid",
                cells.len(),
                rows,
                cols
            )));
        }
        for (index, cell) in cells.iter().enumerate() {
            let expected = GridPos::new(index / cols, index % cols);
            if cell.pos != expected {
                return Err(SearchError::InvalidGrid(format!(
                    "cell {} is stored at {}",
                    cell.pos,
                    expected
                )));
            }
        }

        // Search state is dropped; cells come back unreached.
        Grid::from_fn(rows, cols, |pos| cells[pos.row * cols + pos.col].passable)
    }
}

impl Grid {
    /// Builds a grid from a passability matrix, one slice per row.
    ///
    /// # Arguments
    /// * `rows` - Number of rows, must be non-zero
    /// * `cols` - Number of columns, must be non-zero
    /// * `passability` - `rows` slices of `cols` flags, `true` meaning traversable
    ///
    /// # Returns
    /// * `Result<Self, SearchError>` - The grid, or `InvalidGrid` if the matrix is malformed
    pub fn new<R: AsRef<[bool]>>(
        rows: usize,
        cols: usize,
        passability: &[R],
    ) -> Result<Self, SearchError> {
        if passability.len() != rows {
            return Err(SearchError::InvalidGrid(format!(
                "expected {} rows, got {}",
                rows,
                passability.len()
            )));
        }
        for (row, flags) in passability.iter().enumerate() {
            let len = flags.as_ref().len();
            if len != cols {
                return Err(SearchError::InvalidGrid(format!(
                    "row {} has {} columns, expected {}",
                    row, len, cols
                )));
            }
        }

        Self::from_fn(rows, cols, |pos| passability[pos.row].as_ref()[pos.col])
    }

    /// Builds a grid whose passability is computed per coordinate.
    pub fn from_fn<F>(rows: usize, cols: usize, mut passable: F) -> Result<Self, SearchError>
    where
        F: FnMut(GridPos) -> bool,
    {
        if rows == 0 || cols == 0 {
            return Err(SearchError::InvalidGrid(
                "all dimensions must be non-zero".into(),
            ));
        }
        let total_cells = rows.checked_mul(cols).ok_or_else(|| {
            SearchError::InvalidGrid("grid dimensions too large, would cause overflow".into())
        })?;

        let mut cells = Vec::with_capacity(total_cells);
        for row in 0..rows {
            for col in 0..cols {
                let pos = GridPos::new(row, col);
                cells.push(Cell::new(row, col, passable(pos)));
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Builds a grid with every cell passable.
    pub fn open(rows: usize, cols: usize) -> Result<Self, SearchError> {
        Self::from_fn(rows, cols, |_| true)
    }

    /// Parses an ASCII layout: one line per row, `#` or `X` for blocked cells
    /// and any other character for passable ones. Blank lines are skipped and
    /// surrounding whitespace on each line is ignored.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let passability: Vec<Vec<bool>> = lines
            .iter()
            .map(|line| line.chars().map(|c| !matches!(c, '#' | 'X')).collect())
            .collect();

        let rows = passability.len();
        let cols = passability.first().map_or(0, Vec::len);
        Self::new(rows, cols, &passability)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether signed coordinates fall inside the grid.
    pub fn contains(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    /// Returns `pos` unchanged if it lies inside the grid.
    pub fn check(&self, pos: GridPos) -> Result<GridPos, SearchError> {
        if pos.row < self.rows && pos.col < self.cols {
            Ok(pos)
        } else {
            Err(SearchError::out_of_bounds(
                pos.row, pos.col, self.rows, self.cols,
            ))
        }
    }

    /// Gets the cell at `pos`.
    pub fn cell(&self, pos: GridPos) -> Result<&Cell, SearchError> {
        let pos = self.check(pos)?;
        Ok(self.at(pos))
    }

    /// Gets a mutable reference to the cell at `pos`.
    pub fn cell_mut(&mut self, pos: GridPos) -> Result<&mut Cell, SearchError> {
        let pos = self.check(pos)?;
        Ok(self.at_mut(pos))
    }

    /// Whether the cell at `pos` exists and can be traversed.
    pub fn is_passable(&self, pos: GridPos) -> bool {
        self.cell(pos).is_ok_and(Cell::is_passable)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major index of an in-bounds position.
    pub(crate) fn index(&self, pos: GridPos) -> usize {
        pos.row * self.cols + pos.col
    }

    pub(crate) fn at(&self, pos: GridPos) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub(crate) fn at_mut(&mut self, pos: GridPos) -> &mut Cell {
        let index = self.index(pos);
        &mut self.cells[index]
    }

    /// In-bounds neighbours of `pos`, in [`DIRECTIONS`] order.
    ///
    /// Passability and visited state are not filtered here.
    pub fn neighbors(&self, pos: GridPos) -> impl Iterator<Item = GridPos> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row as isize + dr;
            let col = pos.col as isize + dc;
            self.contains(row, col)
                .then(|| GridPos::new(row as usize, col as usize))
        })
    }

    /// Clears the search state of every cell.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Follows back-pointers from `dest` and returns the chain in start-to-`dest`
    /// order.
    ///
    /// The walk stops at the first cell without a back-pointer. For a cell the
    /// search never reached this is just `[dest]`.
    pub fn trace_path(&self, dest: GridPos) -> Result<Vec<GridPos>, SearchError> {
        let dest = self.check(dest)?;
        Ok(self.trace_from(dest))
    }

    pub(crate) fn trace_from(&self, dest: GridPos) -> Vec<GridPos> {
        let mut path = vec![dest];
        let mut current = dest;
        // A well-formed chain never repeats a cell.
        while let Some(previous) = self.at(current).back {
            if path.len() > self.cells.len() {
                break;
            }
            path.push(previous);
            current = previous;
        }
        path.reverse();
        path
    }
}

impl FromStr for Grid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, "{}", if cell.is_passable() { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
