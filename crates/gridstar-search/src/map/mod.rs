//! Grid-related functionality for path search.
//!
//! This module provides the per-cell search record ([`Cell`]), the dense
//! row-major [`Grid`] that owns those cells, and the coordinate type used to
//! address them.

pub mod cell;
pub mod grid;

pub use cell::{Cell, GridPos, edge_cost};
pub use grid::Grid;
