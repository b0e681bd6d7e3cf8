//! # Wall Derivation
//!
//! Surrounds the carved floor with a one-cell wall ring.

use crate::map::{CellState, Grid, Position, Rect};
use log::debug;

/// Marks every `Empty` cell with at least one cardinal `Floor` neighbour as
/// `Wall`, scanning `floor_bounds` grown by one cell and clipped to the grid.
///
/// The rule only reads floor/empty state, so scan order is irrelevant and a
/// second run over the same floor adds nothing. Cells touching floor only
/// diagonally stay `Empty`. Returns the number of walls added.
pub fn derive_walls(grid: &mut Grid, floor_bounds: Rect) -> usize {
    let Some(scan) = floor_bounds.expanded(1).intersection(&grid.bounds()) else {
        return 0;
    };

    let candidates: Vec<Position> = scan
        .cells()
        .filter(|&pos| grid.is_empty_cell(pos) && has_floor_neighbour(grid, pos))
        .collect();

    for &pos in &candidates {
        grid.set(pos, CellState::Wall);
    }

    debug!("Derived {} wall cells around {}", candidates.len(), floor_bounds);
    candidates.len()
}

/// Derives walls around all floor currently on the grid.
pub fn derive_walls_around_floor(grid: &mut Grid) -> usize {
    match grid.floor_bounds() {
        Some(bounds) => derive_walls(grid, bounds),
        None => 0,
    }
}

fn has_floor_neighbour(grid: &Grid, pos: Position) -> bool {
    pos.cardinal_adjacent_positions()
        .into_iter()
        .any(|next| grid.is_floor(next))
}
