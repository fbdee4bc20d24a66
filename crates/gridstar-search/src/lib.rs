//! A* shortest-path search on uniform 2D grids.
//!
//! Cells are either passable or blocked. Movement is 8-directional and every
//! move costs the Euclidean distance between cell centers (`1` straight,
//! `sqrt(2)` diagonal). The Euclidean heuristic is admissible and consistent
//! for these costs, so returned paths are optimal.
//!
//! ```
//! use gridstar_search::{Grid, GridPos, search};
//!
//! let mut grid: Grid = "...\n.#.\n...".parse()?;
//! let result = search(&mut grid, GridPos::new(0, 0), GridPos::new(2, 2))?;
//! assert!(result.is_success());
//! assert_eq!(result.path.first(), Some(&GridPos::new(0, 0)));
//! assert_eq!(result.path.last(), Some(&GridPos::new(2, 2)));
//! # Ok::<(), gridstar_search::SearchError>(())
//! ```

pub mod astar;
pub mod error;
pub mod map;

pub use astar::{AStarSearch, PathResult, SearchStatus, StepResult, find_path, path_cost, search};
pub use error::SearchError;
pub use map::{Cell, Grid, GridPos, edge_cost};

/// Builds a grid from a passability matrix. Alias of [`Grid::new`].
pub fn build_grid<R: AsRef<[bool]>>(
    rows: usize,
    cols: usize,
    passability: &[R],
) -> Result<Grid, SearchError> {
    Grid::new(rows, cols, passability)
}

/// Clears the per-cell search state of `grid` so it can be searched again.
pub fn reset(grid: &mut Grid) {
    grid.reset();
}
