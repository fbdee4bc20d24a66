use gridstar_search::{AStarSearch, Grid, GridPos};
use std::collections::HashSet;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10x10 grid, '#' marks blocked cells
    let mut grid: Grid = "
        ..........
        .#.....#..
        ....#.....
        ..####.#..
        .....#.#..
        .#.#.#.##.
        ...#......
        .#.#.###..
        .#......#.
        ...###....
    "
    .parse()?;

    let start = GridPos::new(0, 0);
    let goal = GridPos::new(9, 9);

    println!("Grid:");
    print_grid(&grid, start, goal, &HashSet::new());
    println!("\nStart: {}", start);
    println!("Goal: {}", goal);

    let mut search = AStarSearch::new(&mut grid, start, goal)?;
    while !search.step().is_terminal {}
    println!("\nExpanded {} cells", search.nodes_expanded());
    let result = search.result();

    if result.is_success() {
        println!("\n{}", result);
        let path_set: HashSet<GridPos> = result.path.iter().copied().collect();
        println!("\nGrid with path:");
        print_grid(&grid, start, goal, &path_set);
    } else {
        println!("\nNo path found.");
    }

    Ok(())
}

fn print_grid(grid: &Grid, start: GridPos, goal: GridPos, path: &HashSet<GridPos>) {
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = GridPos::new(row, col);
            let glyph = if pos == start {
                'S'
            } else if pos == goal {
                'G'
            } else if path.contains(&pos) {
                '*'
            } else if grid.is_passable(pos) {
                '.'
            } else {
                'X'
            };
            print!("{} ", glyph);
        }
        println!();
    }
}
