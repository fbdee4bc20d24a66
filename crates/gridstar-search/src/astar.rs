/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the grid
    g(n) = actual cost from the start cell to n
    h(n) = Euclidean distance from n to the destination (heuristic)
    f(n) = total estimated cost of the cheapest path through n

Initialize:
    - reset every cell, g(start) = 0, f(start) = h(start)
    - frontier = { start }

Loop (one iteration per `step`):
    - pop the frontier entry with the lowest f(n), mark n visited
    - if n is the destination, stop: the path is the back-pointer chain
    - for each of the 8 neighbours that is in bounds, passable and not visited:
        - g' = g(n) + cost(n, neighbour), f' = g' + h(neighbour)
        - if f' < f(neighbour): record g', h, f', back-pointer = n and
          (re)insert the neighbour, superseding any older frontier entry
    - if the frontier is empty, stop: no path

*/

use crate::error::SearchError;
use crate::map::{Grid, GridPos, edge_cost};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use tracing::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the result of an A* search with metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// Whether the destination was reached.
    pub found: bool,
    /// Start-to-destination path, inclusive. Empty when nothing was found.
    pub path: Vec<GridPos>,
    /// Final `g` of the destination when found.
    pub total_cost: Option<f64>,
    /// The number of cells popped from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Cells in the order they were expanded.
    pub expanded: Vec<GridPos>,
    /// Set when a caller-imposed step limit ended the search early.
    pub budget_exhausted: bool,
}

impl PathResult {
    /// Creates a new PathResult for a successful search.
    pub fn success(path: Vec<GridPos>, total_cost: f64, expanded: Vec<GridPos>) -> Self {
        Self {
            found: true,
            path,
            total_cost: Some(total_cost),
            nodes_expanded: expanded.len(),
            expanded,
            budget_exhausted: false,
        }
    }

    /// Creates a new PathResult for a failed search.
    pub fn failure(expanded: Vec<GridPos>, budget_exhausted: bool) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            total_cost: None,
            nodes_expanded: expanded.len(),
            expanded,
            budget_exhausted,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.found
    }

    /// Number of waypoints on the path, both endpoints included.
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Number of moves on the path.
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns the path if one was found.
    pub fn into_path(self) -> Option<Vec<GridPos>> {
        self.found.then_some(self.path)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.total_cost {
            Some(cost) if self.found => write!(
                f,
                "PathResult {{ success: true, path_length: {}, total_cost: {:.3}, nodes_expanded: {} }}",
                self.path_length(),
                cost,
                self.nodes_expanded
            ),
            _ => write!(
                f,
                "PathResult {{ success: false, nodes_expanded: {}, budget_exhausted: {} }}",
                self.nodes_expanded, self.budget_exhausted
            ),
        }
    }
}

/// Outcome of a single [`AStarSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepResult {
    /// Cell expanded by this step, `None` if the search had already ended or
    /// ended without expanding anything.
    pub expanded: Option<GridPos>,
    /// Whether the search is over.
    pub is_terminal: bool,
    /// Whether the destination has been reached.
    pub found: bool,
}

/// Where a search currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchStatus {
    /// The frontier still has work.
    Running,
    /// The destination was finalized.
    Found,
    /// The frontier emptied without reaching the destination.
    Exhausted,
    /// The step limit was hit first.
    BudgetExhausted,
}

#[derive(Copy, Clone, Debug)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    index: usize,
    pos: GridPos,
}

// The priority queue depends on `Ord`. Both keys are flipped so the heap pops
// the lowest `f` first and, among equal `f`, the earliest insertion.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Open set with at most one live entry per cell.
///
/// Re-inserting a cell bumps its live sequence number; heap entries whose
/// sequence no longer matches are stale and are dropped when popped.
#[derive(Debug)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    live: Vec<Option<u64>>,
    next_seq: u64,
    len: usize,
}

impl Frontier {
    fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: vec![None; cells],
            next_seq: 0,
            len: 0,
        }
    }

    fn push(&mut self, index: usize, pos: GridPos, f: f64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        if self.live[index].replace(seq).is_none() {
            self.len += 1;
        }
        self.heap.push(FrontierEntry { f, seq, index, pos });
    }

    fn pop(&mut self) -> Option<GridPos> {
        while let Some(entry) = self.heap.pop() {
            if self.live[entry.index] == Some(entry.seq) {
                self.live[entry.index] = None;
                self.len -= 1;
                return Some(entry.pos);
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Resumable A* search over a borrowed [`Grid`].
///
/// The search holds the grid exclusively for its lifetime and mutates cell
/// state in place. Each [`step`](Self::step) pops and expands exactly one
/// frontier cell, so callers can animate or budget the search; [`run`](Self::run)
/// drives it to completion.
pub struct AStarSearch<'g> {
    grid: &'g mut Grid,
    start: GridPos,
    dest: GridPos,
    frontier: Frontier,
    expanded: Vec<GridPos>,
    step_limit: Option<usize>,
    status: SearchStatus,
}

impl<'g> AStarSearch<'g> {
    /// Prepares a search from `start` to `dest`.
    ///
    /// The grid's search state is reset first, so a grid can be searched any
    /// number of times.
    ///
    /// # Errors
    /// * `OutOfBounds` - `start` or `dest` is outside the grid
    /// * `StartBlocked` - `start` is impassable
    pub fn new(grid: &'g mut Grid, start: GridPos, dest: GridPos) -> Result<Self, SearchError> {
        grid.check(start)?;
        grid.check(dest)?;
        if !grid.at(start).is_passable() {
            return Err(SearchError::StartBlocked(start));
        }

        grid.reset();
        let mut frontier = Frontier::new(grid.len());

        let start_index = grid.index(start);
        let cell = grid.at_mut(start);
        cell.g = 0.0;
        cell.h = cell.heuristic(dest);
        cell.f = cell.g + cell.h;
        frontier.push(start_index, start, cell.f);

        debug!(%start, %dest, rows = grid.rows(), cols = grid.cols(), "A* search initialized");

        Ok(Self {
            grid,
            start,
            dest,
            frontier,
            expanded: Vec::new(),
            step_limit: None,
            status: SearchStatus::Running,
        })
    }

    /// Caps the number of expansions. Hitting the cap ends the search as
    /// "not found" with [`PathResult::budget_exhausted`] set.
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Pops the most promising frontier cell and expands it.
    pub fn step(&mut self) -> StepResult {
        if self.status != SearchStatus::Running {
            return self.terminal(None);
        }

        if let Some(limit) = self.step_limit {
            if self.expanded.len() >= limit {
                warn!(limit, frontier = self.frontier.len(), "A* step limit reached");
                self.status = SearchStatus::BudgetExhausted;
                return self.terminal(None);
            }
        }

        let Some(current) = self.frontier.pop() else {
            self.finish(SearchStatus::Exhausted);
            return self.terminal(None);
        };

        self.grid.at_mut(current).visited = true;
        self.expanded.push(current);
        trace!(cell = %current, f = self.grid.at(current).f, "Expanding cell");

        if current == self.dest {
            self.finish(SearchStatus::Found);
            return self.terminal(Some(current));
        }

        self.relax_neighbors(current);

        if self.frontier.is_empty() {
            self.finish(SearchStatus::Exhausted);
            return self.terminal(Some(current));
        }

        StepResult {
            expanded: Some(current),
            is_terminal: false,
            found: false,
        }
    }

    /// Runs the search to completion and collects the result.
    pub fn run(&mut self) -> PathResult {
        while !self.step().is_terminal {}
        self.result()
    }

    /// Snapshot of the outcome so far. Only meaningful once the search is
    /// finished; a running search reports "not found".
    pub fn result(&self) -> PathResult {
        match self.status {
            SearchStatus::Found => {
                let path = self.grid.trace_from(self.dest);
                let total_cost = self.grid.at(self.dest).g;
                PathResult::success(path, total_cost, self.expanded.clone())
            }
            SearchStatus::BudgetExhausted => PathResult::failure(self.expanded.clone(), true),
            SearchStatus::Running | SearchStatus::Exhausted => {
                PathResult::failure(self.expanded.clone(), false)
            }
        }
    }

    /// Relaxes every eligible neighbour of `current`.
    fn relax_neighbors(&mut self, current: GridPos) {
        let predecessor = *self.grid.at(current);
        let neighbors: Vec<GridPos> = self.grid.neighbors(current).collect();

        for neighbor in neighbors {
            let index = self.grid.index(neighbor);
            let cell = self.grid.at_mut(neighbor);
            if cell.visited || !cell.is_passable() {
                continue;
            }

            let g = cell.tentative_g(&predecessor);
            let h = cell.heuristic(self.dest);
            let f = g + h;
            // Comparing f instead of g is equivalent here: h depends only on
            // the cell and the fixed destination.
            if f < cell.f {
                cell.g = g;
                cell.h = h;
                cell.f = f;
                cell.back = Some(current);
                self.frontier.push(index, neighbor, f);
                trace!(cell = %neighbor, from = %current, g, f, "Relaxed neighbor");
            }
        }
    }

    fn finish(&mut self, status: SearchStatus) {
        self.status = status;
        match status {
            SearchStatus::Found => debug!(
                start = %self.start,
                dest = %self.dest,
                nodes_expanded = self.expanded.len(),
                cost = self.grid.at(self.dest).g,
                "A* search reached destination"
            ),
            _ => debug!(
                start = %self.start,
                dest = %self.dest,
                nodes_expanded = self.expanded.len(),
                "A* search exhausted the frontier without a path"
            ),
        }
    }

    fn terminal(&self, expanded: Option<GridPos>) -> StepResult {
        StepResult {
            expanded,
            is_terminal: true,
            found: self.status == SearchStatus::Found,
        }
    }

    /// Current status of the search.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether the search has ended.
    pub fn is_finished(&self) -> bool {
        self.status != SearchStatus::Running
    }

    /// Number of cells expanded so far.
    pub fn nodes_expanded(&self) -> usize {
        self.expanded.len()
    }

    /// Cells expanded so far, in order.
    pub fn expanded(&self) -> &[GridPos] {
        &self.expanded
    }

    /// Number of live frontier entries.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Read-only view of the grid being searched.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Start coordinates.
    pub fn start(&self) -> GridPos {
        self.start
    }

    /// Destination coordinates.
    pub fn dest(&self) -> GridPos {
        self.dest
    }
}

/// Finds a path from `start` to `dest` with detailed results.
///
/// # Arguments
/// * `grid` - The grid to search. Its cell state is reset and then left
///   holding this run's costs and back-pointers.
/// * `start` - Starting cell.
/// * `dest` - Destination cell.
///
/// # Returns
/// * `Result<PathResult, SearchError>` - The outcome, or an error if the
///   inputs violate the search preconditions. "No path" is an `Ok` result.
pub fn search(grid: &mut Grid, start: GridPos, dest: GridPos) -> Result<PathResult, SearchError> {
    let mut search = AStarSearch::new(grid, start, dest)?;
    Ok(search.run())
}

/// Finds a path from `start` to `dest` using the A* algorithm.
///
/// # Returns
/// * `Result<Option<Vec<GridPos>>, SearchError>` - The path if found, `None` otherwise.
pub fn find_path(
    grid: &mut Grid,
    start: GridPos,
    dest: GridPos,
) -> Result<Option<Vec<GridPos>>, SearchError> {
    Ok(search(grid, start, dest)?.into_path())
}

/// Sum of Euclidean edge costs along `path`.
pub fn path_cost(path: &[GridPos]) -> f64 {
    path.windows(2).map(|w| edge_cost(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::f64::consts::SQRT_2;

    const EPS: f64 = 1e-9;

    fn pos(row: usize, col: usize) -> GridPos {
        GridPos::new(row, col)
    }

    /// Optimal 8-directional cost between two cells on an open grid.
    fn octile(a: GridPos, b: GridPos) -> f64 {
        let dr = a.row.abs_diff(b.row);
        let dc = a.col.abs_diff(b.col);
        let diag = dr.min(dc) as f64;
        let straight = dr.max(dc) as f64 - diag;
        straight + diag * SQRT_2
    }

    #[test]
    fn test_astar_open_diagonal() {
        let mut grid = Grid::open(3, 3).unwrap();
        let result = search(&mut grid, pos(0, 0), pos(2, 2)).unwrap();

        assert!(result.is_success(), "Path should be found on an open grid");
        assert_eq!(result.path, vec![pos(0, 0), pos(1, 1), pos(2, 2)]);
        assert_eq!(result.path_length(), 3);
        assert_eq!(result.step_count(), 2);
        let cost = result.total_cost.unwrap();
        assert!((cost - 2.0 * SQRT_2).abs() < EPS, "cost was {}", cost);
    }

    #[test]
    fn test_astar_detour_through_gap() {
        // Column 1 is blocked except in row 0.
        let mut grid: Grid = "...\n.#.\n.#.".parse().unwrap();
        let result = search(&mut grid, pos(2, 0), pos(2, 2)).unwrap();

        assert!(result.is_success());
        assert!(
            result.path.contains(&pos(0, 1)),
            "Path must squeeze through (0,1): {:?}",
            result.path
        );
        assert_eq!(
            result.path,
            vec![pos(2, 0), pos(1, 0), pos(0, 1), pos(1, 2), pos(2, 2)]
        );
        let cost = result.total_cost.unwrap();
        assert!((cost - (2.0 + 2.0 * SQRT_2)).abs() < EPS);
        assert!((path_cost(&result.path) - cost).abs() < EPS);
    }

    #[test]
    fn test_astar_simple_path() {
        let layout = [
            [true, true, true, true, false],
            [false, false, true, false, true],
            [true, true, true, true, true],
            [true, false, false, false, false],
            [true, true, true, true, true],
        ];
        let mut grid = Grid::new(5, 5, &layout).unwrap();
        let start = pos(0, 0);
        let goal = pos(4, 4);

        let path = find_path(&mut grid, start, goal).unwrap();
        let p = path.expect("Path should be found around the walls");
        assert_eq!(p[0], start);
        assert_eq!(*p.last().unwrap(), goal);
        for cell in &p {
            assert!(grid.is_passable(*cell), "{} is blocked", cell);
        }
        for w in p.windows(2) {
            assert_eq!(w[0].chebyshev(&w[1]), 1, "Path must move one cell at a time");
        }
    }

    #[test]
    fn test_astar_destination_blocked() {
        let mut grid: Grid = "...\n...\n..#".parse().unwrap();
        let mut search = AStarSearch::new(&mut grid, pos(0, 0), pos(2, 2)).unwrap();
        let result = search.run();

        assert!(!result.is_success());
        assert!(result.path.is_empty());
        assert!(result.total_cost.is_none());
        assert!(!result.budget_exhausted);
        assert_eq!(search.status(), SearchStatus::Exhausted);
        assert_eq!(search.frontier_len(), 0);
        // Every passable cell gets expanded before giving up
        assert_eq!(result.nodes_expanded, 8);
    }

    #[test]
    fn test_astar_enclosed_destination() {
        let mut grid: Grid = "
            .....
            .###.
            .#.#.
            .###.
            .....
        "
        .parse()
        .unwrap();
        let mut search = AStarSearch::new(&mut grid, pos(0, 0), pos(2, 2)).unwrap();
        let result = search.run();

        assert!(!result.is_success(), "Enclosed destination is unreachable");
        assert_eq!(search.frontier_len(), 0);
        assert_eq!(result.into_path(), None);
        assert!(!grid.cell(pos(2, 2)).unwrap().is_reached());
    }

    #[test]
    fn test_astar_start_equals_goal() {
        let mut grid = Grid::open(3, 3).unwrap();
        let result = search(&mut grid, pos(1, 1), pos(1, 1)).unwrap();

        assert!(result.is_success());
        assert_eq!(result.path, vec![pos(1, 1)]);
        assert_eq!(result.total_cost, Some(0.0));
        assert_eq!(result.nodes_expanded, 1);
    }

    #[test]
    fn test_astar_rejects_bad_endpoints() {
        let mut grid: Grid = "#..\n...".parse().unwrap();

        assert!(matches!(
            search(&mut grid, pos(2, 0), pos(0, 2)),
            Err(SearchError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(matches!(
            search(&mut grid, pos(1, 0), pos(0, 3)),
            Err(SearchError::OutOfBounds { row: 0, col: 3, .. })
        ));
        assert_eq!(
            search(&mut grid, pos(0, 0), pos(1, 2)),
            Err(SearchError::StartBlocked(pos(0, 0)))
        );
    }

    #[test]
    fn test_open_grid_path_is_optimal() {
        let mut grid = Grid::open(6, 7).unwrap();
        let pairs = [
            (pos(0, 0), pos(5, 6)),
            (pos(5, 0), pos(0, 6)),
            (pos(2, 3), pos(2, 0)),
            (pos(0, 6), pos(3, 6)),
            (pos(4, 1), pos(1, 5)),
        ];

        for (start, dest) in pairs {
            let result = search(&mut grid, start, dest).unwrap();
            assert!(result.is_success());
            assert_eq!(
                result.step_count(),
                start.chebyshev(&dest),
                "{} -> {} took {:?}",
                start,
                dest,
                result.path
            );
            let cost = result.total_cost.unwrap();
            assert!((cost - octile(start, dest)).abs() < EPS);
            assert!((cost - path_cost(&result.path)).abs() < EPS);
        }

        // Straight diagonal: cost is the Euclidean distance
        let result = search(&mut grid, pos(0, 0), pos(4, 4)).unwrap();
        let cost = result.total_cost.unwrap();
        assert!((cost - edge_cost(pos(0, 0), pos(4, 4))).abs() < EPS);
    }

    #[test]
    fn test_never_reexpands_cells() {
        let mut grid: Grid = "
            ..........
            .########.
            .#......#.
            .#.####.#.
            ...#..#...
            ####..###.
            ..........
        "
        .parse()
        .unwrap();
        let result = search(&mut grid, pos(0, 0), pos(6, 9)).unwrap();
        assert!(result.is_success());

        let unique: HashSet<GridPos> = result.expanded.iter().copied().collect();
        assert_eq!(unique.len(), result.expanded.len(), "A cell was expanded twice");
        for cell in &result.expanded {
            assert!(grid.cell(*cell).unwrap().is_visited());
        }
    }

    #[test]
    fn test_back_pointers_follow_path() {
        let mut grid: Grid = "
            ......
            ..##..
            ..#...
            ......
        "
        .parse()
        .unwrap();
        let result = search(&mut grid, pos(2, 0), pos(1, 5)).unwrap();
        assert!(result.is_success());

        let path = &result.path;
        assert_eq!(grid.cell(path[0]).unwrap().back_pointer(), None);
        for w in path.windows(2) {
            assert_eq!(grid.cell(w[1]).unwrap().back_pointer(), Some(w[0]));
        }

        // Walking back from the destination takes exactly len - 1 hops
        let mut hops = 0;
        let mut current = *path.last().unwrap();
        while let Some(prev) = grid.cell(current).unwrap().back_pointer() {
            current = prev;
            hops += 1;
        }
        assert_eq!(current, path[0]);
        assert_eq!(hops, path.len() - 1);
        assert_eq!(grid.trace_path(path[path.len() - 1]).unwrap(), *path);
    }

    #[test]
    fn test_f_equals_g_plus_h() {
        let mut grid: Grid = "....\n.##.\n....".parse().unwrap();
        search(&mut grid, pos(0, 0), pos(2, 3)).unwrap();

        for cell in grid.cells().iter().filter(|c| c.is_reached()) {
            assert!((cell.f() - (cell.g() + cell.h())).abs() < EPS);
            assert!((cell.h() - cell.heuristic(pos(2, 3))).abs() < EPS);
        }
    }

    #[test]
    fn test_reset_then_search_is_idempotent() {
        let mut grid: Grid = "
            .....#....
            .###.#.##.
            ...#...#..
            .#.#####..
            .#........
        "
        .parse()
        .unwrap();
        let first = search(&mut grid, pos(0, 0), pos(0, 9)).unwrap();
        assert!(first.is_success());

        grid.reset();
        let second = search(&mut grid, pos(0, 0), pos(0, 9)).unwrap();
        assert_eq!(first, second);

        // Searching again without an explicit reset behaves the same
        let third = search(&mut grid, pos(0, 0), pos(0, 9)).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn test_stepwise_matches_run() {
        let layout = "
            .......
            ...#...
            ...#...
            ...#...
            .......
        ";
        let mut grid: Grid = layout.parse().unwrap();
        let expected = search(&mut grid, pos(2, 0), pos(2, 6)).unwrap();

        let mut grid: Grid = layout.parse().unwrap();
        let mut stepper = AStarSearch::new(&mut grid, pos(2, 0), pos(2, 6)).unwrap();
        let mut visited = Vec::new();
        let last = loop {
            let step = stepper.step();
            if let Some(cell) = step.expanded {
                visited.push(cell);
            }
            if step.is_terminal {
                break step;
            }
            assert!(!stepper.is_finished());
        };

        assert!(last.found);
        assert_eq!(last.expanded, Some(pos(2, 6)));
        assert_eq!(visited, expected.expanded);
        assert_eq!(stepper.result(), expected);

        // Further steps are no-ops
        let again = stepper.step();
        assert_eq!(
            again,
            StepResult {
                expanded: None,
                is_terminal: true,
                found: true
            }
        );
        assert_eq!(stepper.nodes_expanded(), expected.nodes_expanded);
    }

    #[test]
    fn test_step_limit() {
        let mut grid = Grid::open(20, 20).unwrap();
        let mut search = AStarSearch::new(&mut grid, pos(0, 0), pos(19, 19))
            .unwrap()
            .with_step_limit(3);
        let result = search.run();

        assert!(!result.is_success());
        assert!(result.budget_exhausted);
        assert_eq!(result.nodes_expanded, 3);
        assert_eq!(search.status(), SearchStatus::BudgetExhausted);
        assert!(search.frontier_len() > 0);
    }

    #[test]
    fn test_frontier_ordering() {
        let mut frontier = Frontier::new(4);
        frontier.push(0, pos(0, 0), 3.0);
        frontier.push(1, pos(0, 1), 1.0);
        frontier.push(2, pos(1, 0), 1.0);
        frontier.push(3, pos(1, 1), 2.0);
        assert_eq!(frontier.len(), 4);

        // Ties go to the earliest insertion
        assert_eq!(frontier.pop(), Some(pos(0, 1)));
        assert_eq!(frontier.pop(), Some(pos(1, 0)));
        assert_eq!(frontier.pop(), Some(pos(1, 1)));
        assert_eq!(frontier.pop(), Some(pos(0, 0)));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_frontier_reinsert_supersedes() {
        let mut frontier = Frontier::new(2);
        frontier.push(0, pos(0, 0), 5.0);
        frontier.push(1, pos(0, 1), 4.0);
        frontier.push(0, pos(0, 0), 3.0);
        assert_eq!(frontier.len(), 2, "Re-insert must not add a second live entry");

        assert_eq!(frontier.pop(), Some(pos(0, 0)));
        assert_eq!(frontier.pop(), Some(pos(0, 1)));
        // The stale f = 5.0 entry is discarded
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_path_result_display() {
        let mut grid: Grid = "...\n.#.\n...".parse().unwrap();
        let result = search(&mut grid, pos(0, 0), pos(2, 2)).unwrap();
        let display_str = format!("{}", result);
        assert!(display_str.contains("success: true"));
        assert!(display_str.contains("nodes_expanded"));

        let mut blocked: Grid = ".#.\n##.\n...".parse().unwrap();
        let result = search(&mut blocked, pos(0, 0), pos(2, 2)).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.path_length(), 0);
        assert_eq!(result.step_count(), 0);
        let display_str = format!("{}", result);
        assert!(display_str.contains("success: false"));
    }
}
