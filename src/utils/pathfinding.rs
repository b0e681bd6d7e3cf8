//! # Floor Reachability
//!
//! Breadth-first reachability over floor cells with 4-neighbour adjacency.

use crate::{Grid, Position};
use ::pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// All floor cells reachable from `start` through cardinal floor steps.
///
/// Returns an empty set when `start` is not itself a floor cell.
pub fn reachable_floor(grid: &Grid, start: Position) -> HashSet<Position> {
    if !grid.is_floor(start) {
        return HashSet::new();
    }

    bfs_reach(start, |&pos| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|&next| grid.is_floor(next))
            .collect::<Vec<_>>()
    })
    .collect()
}

/// Number of 4-connected floor components in the grid.
pub fn floor_component_count(grid: &Grid) -> usize {
    let mut seen: HashSet<Position> = HashSet::new();
    let mut components = 0;

    for pos in grid.bounds().cells() {
        if !grid.is_floor(pos) || seen.contains(&pos) {
            continue;
        }
        components += 1;
        seen.extend(reachable_floor(grid, pos));
    }

    components
}

/// True when every cell in `targets` can be reached from the first one.
pub fn all_reachable(grid: &Grid, targets: &[Position]) -> bool {
    let Some(&first) = targets.first() else {
        return true;
    };
    let reached = reachable_floor(grid, first);
    targets.iter().all(|pos| reached.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, Rect};

    fn grid_with_floor(rects: &[Rect]) -> Grid {
        let mut grid = Grid::new(12, 8);
        for rect in rects {
            grid.fill_floor(rect);
        }
        grid
    }

    #[test]
    fn test_reachable_floor_stops_at_gaps() {
        let grid = grid_with_floor(&[Rect::new(0, 0, 3, 3), Rect::new(5, 0, 3, 3)]);
        let reached = reachable_floor(&grid, Position::new(1, 1));
        assert_eq!(reached.len(), 9);
        assert!(!reached.contains(&Position::new(5, 0)));
        assert_eq!(floor_component_count(&grid), 2);
    }

    #[test]
    fn test_diagonal_contact_does_not_connect() {
        let grid = grid_with_floor(&[Rect::new(0, 0, 2, 2), Rect::new(2, 2, 2, 2)]);
        assert_eq!(floor_component_count(&grid), 2);
        assert!(!all_reachable(&grid, &[Position::new(0, 0), Position::new(3, 3)]));
    }

    #[test]
    fn test_non_floor_start_reaches_nothing() {
        let mut grid = grid_with_floor(&[Rect::new(0, 0, 3, 3)]);
        grid.set(Position::new(6, 6), CellState::Wall);
        assert!(reachable_floor(&grid, Position::new(6, 6)).is_empty());
        assert!(all_reachable(&grid, &[]));
    }
}
