//! Grid generators for demo and stress runs.
//!
//! All scenarios are meant to be searched from the top-left to the
//! bottom-right corner.

use gridstar_search::{Grid, GridPos, SearchError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// No obstacles.
    #[default]
    Open,
    /// Column `cols - 2` blocked except in row 0, forcing a long detour.
    Wall,
    /// Each cell blocked independently with probability `density`.
    Random,
}

pub fn generate(
    kind: ScenarioKind,
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
) -> Result<Grid, SearchError> {
    match kind {
        ScenarioKind::Open => Grid::open(rows, cols),
        ScenarioKind::Wall => wall(rows, cols),
        ScenarioKind::Random => random(rows, cols, density, seed),
    }
}

fn wall(rows: usize, cols: usize) -> Result<Grid, SearchError> {
    Grid::from_fn(rows, cols, |pos| {
        !(cols >= 2 && pos.col == cols - 2 && pos.row != 0)
    })
}

fn random(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid, SearchError> {
    if !(0.0..=1.0).contains(&density) {
        return Err(SearchError::InvalidGrid(format!(
            "obstacle density {} is outside [0, 1]",
            density
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let last = GridPos::new(rows.saturating_sub(1), cols.saturating_sub(1));
    // Corners stay open so start and destination are always passable
    Grid::from_fn(rows, cols, |pos| {
        pos == GridPos::new(0, 0) || pos == last || !rng.random_bool(density)
    })
}
