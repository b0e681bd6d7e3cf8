//! # Corridor Routing
//!
//! Joins rooms with L-shaped corridors between their centers.
//!
//! Rooms are chained in list order: room `i - 1` connects to room `i`. The
//! chain keeps every room reachable but makes no attempt at short paths, so
//! corridors can be long and can cross other rooms.

use crate::map::{CellState, Grid, Position, Rect};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which leg of an L-shaped corridor is carved first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorridorShape {
    /// Horizontal leg along the start row, then vertical leg along the end column
    HorizontalFirst,
    /// Vertical leg along the start column, then horizontal leg along the end row
    VerticalFirst,
}

/// Record of one carved corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corridor {
    /// Center of the room the corridor leaves from
    pub start: Position,
    /// Corner cell where the two legs meet
    pub elbow: Position,
    /// Center of the room the corridor arrives at
    pub end: Position,
    /// Leg order
    pub shape: CorridorShape,
    /// Width in cells
    pub width: u32,
}

impl Corridor {
    /// Builds the corridor record between two centers for the given leg order.
    pub fn new(start: Position, end: Position, shape: CorridorShape, width: u32) -> Self {
        let elbow = match shape {
            CorridorShape::HorizontalFirst => Position::new(end.x, start.y),
            CorridorShape::VerticalFirst => Position::new(start.x, end.y),
        };
        Self {
            start,
            elbow,
            end,
            shape,
            width,
        }
    }

    /// Paints both legs of the corridor onto the grid.
    pub fn carve(&self, grid: &mut Grid) {
        match self.shape {
            CorridorShape::HorizontalFirst => {
                carve_horizontal(grid, self.start.x, self.end.x, self.start.y, self.width);
                carve_vertical(grid, self.start.y, self.end.y, self.end.x, self.width);
            }
            CorridorShape::VerticalFirst => {
                carve_vertical(grid, self.start.y, self.end.y, self.start.x, self.width);
                carve_horizontal(grid, self.start.x, self.end.x, self.end.y, self.width);
            }
        }
    }
}

/// Connects consecutive rooms with L-shaped corridors of `width` cells,
/// choosing the leg order of each corridor with a fair coin flip.
///
/// Returns one corridor per adjacent pair, so `rooms.len() - 1` corridors for
/// a non-empty list.
pub fn connect_rooms<R: Rng + ?Sized>(
    grid: &mut Grid,
    rooms: &[Rect],
    width: u32,
    rng: &mut R,
) -> Vec<Corridor> {
    let width = width.max(1);
    let corridors: Vec<Corridor> = rooms
        .windows(2)
        .map(|pair| {
            let shape = if rng.gen_bool(0.5) {
                CorridorShape::HorizontalFirst
            } else {
                CorridorShape::VerticalFirst
            };
            let corridor = Corridor::new(pair[0].center(), pair[1].center(), shape, width);
            corridor.carve(grid);
            corridor
        })
        .collect();

    debug!("Carved {} corridors of width {}", corridors.len(), width);
    corridors
}

/// Paints a horizontal corridor covering columns `[min(x_start, x_end),
/// max(x_start, x_end)]` and rows `y ± width / 2`. Cells outside the grid are
/// skipped.
pub fn carve_horizontal(grid: &mut Grid, x_start: i32, x_end: i32, y: i32, width: u32) {
    let half = (width.max(1) / 2) as i32;
    for x in x_start.min(x_end)..=x_start.max(x_end) {
        for dy in -half..=half {
            grid.set(Position::new(x, y + dy), CellState::Floor);
        }
    }
}

/// Paints a vertical corridor covering rows `[min(y_start, y_end),
/// max(y_start, y_end)]` and columns `x ± width / 2`. Cells outside the grid
/// are skipped.
pub fn carve_vertical(grid: &mut Grid, y_start: i32, y_end: i32, x: i32, width: u32) {
    let half = (width.max(1) / 2) as i32;
    for y in y_start.min(y_end)..=y_start.max(y_end) {
        for dx in -half..=half {
            grid.set(Position::new(x + dx, y), CellState::Floor);
        }
    }
}
