//! Text rendering of a grid with a set of highlighted tiles.

use std::collections::BTreeSet;

use crate::geom::Cell;
use crate::grid::Grid;

/// Rune drawn over every highlighted tile.
pub const TILE_RUNE: char = 'O';

/// Render `grid` as text, drawing [`TILE_RUNE`] over every cell in `tiles`.
///
/// Tiles outside the grid are ignored. Lines are separated by `'\n'` with
/// no trailing newline.
pub fn render_with_tiles(grid: &Grid, tiles: &BTreeSet<Cell>) -> String {
    let mut out = String::with_capacity(grid.bounds().len() + grid.height().max(0) as usize);
    for (c, t) in grid.iter() {
        if c.col == grid.bounds().min.col && c.row != grid.bounds().min.row {
            out.push('\n');
        }
        if tiles.contains(&c) {
            out.push(TILE_RUNE);
        } else {
            out.push(t.rune());
        }
    }
    out
}
