use gridstar_search::{Grid, GridPos};
use std::collections::HashSet;

/// ASCII view of `grid`: `S`/`G` for the endpoints, `*` for path cells,
/// `o` for expanded cells off the path, `.` free and `X` blocked.
pub fn render(grid: &Grid, start: GridPos, dest: GridPos, path: &[GridPos]) -> String {
    let on_path: HashSet<GridPos> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() * 2 + grid.rows());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let pos = GridPos::new(row, col);
            let glyph = if pos == start {
                'S'
            } else if pos == dest {
                'G'
            } else if on_path.contains(&pos) {
                '*'
            } else {
                match grid.cell(pos) {
                    Ok(cell) if !cell.is_passable() => 'X',
                    Ok(cell) if cell.is_visited() => 'o',
                    Ok(_) => '.',
                    Err(_) => '?',
                }
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
