//! # Cell Grid
//!
//! Dense storage for the three cell states a generated dungeon is made of.

use super::{Position, Rect};
use serde::{Deserialize, Serialize};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    /// Nothing carved and not adjacent to anything carved
    #[default]
    Empty,
    /// Walkable room or corridor cell
    Floor,
    /// Derived border cell touching a floor cell along a cardinal direction
    Wall,
}

impl CellState {
    /// Character used by text renderings of the grid.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Floor => '.',
            CellState::Wall => '#',
        }
    }
}

/// Dense 2D array of cells over `[0, width) × [0, height)`.
///
/// Only the generation stages in this crate write to a grid. Writes outside
/// the bounds are rejected rather than wrapped or panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid with every cell `Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{CellState, Grid, Position};
    ///
    /// let grid = Grid::new(10, 4);
    /// assert_eq!(grid.get(Position::new(9, 3)), Some(CellState::Empty));
    /// assert_eq!(grid.get(Position::new(10, 0)), None);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The full grid area as a rectangle anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Checks if a cell address lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Gets the state of a cell, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// True when the cell exists and is `Floor`.
    pub fn is_floor(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellState::Floor)
    }

    /// True when the cell exists and is `Empty`.
    pub fn is_empty_cell(&self, pos: Position) -> bool {
        self.get(pos) == Some(CellState::Empty)
    }

    /// Sets a cell. Returns `false` and leaves the grid untouched when the
    /// address is out of bounds.
    pub(crate) fn set(&mut self, pos: Position, state: CellState) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = state;
                true
            }
            None => false,
        }
    }

    /// Paints every in-bounds cell of `rect` as floor. Returns the number of
    /// cells written.
    pub(crate) fn fill_floor(&mut self, rect: &Rect) -> usize {
        let mut painted = 0;
        for pos in rect.cells() {
            if self.set(pos, CellState::Floor) {
                painted += 1;
            }
        }
        painted
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// All cells currently in `state`, row-major.
    pub fn positions_of(&self, state: CellState) -> Vec<Position> {
        self.bounds()
            .cells()
            .filter(|&pos| self.get(pos) == Some(state))
            .collect()
    }

    /// Smallest rectangle containing every floor cell, or `None` when there
    /// is no floor at all.
    pub fn floor_bounds(&self) -> Option<Rect> {
        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for pos in self.bounds().cells() {
            if !self.is_floor(pos) {
                continue;
            }
            bounds = Some(match bounds {
                None => (pos.x, pos.y, pos.x, pos.y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(pos.x),
                    y0.min(pos.y),
                    x1.max(pos.x),
                    y1.max(pos.y),
                ),
            });
        }
        bounds.map(|(x0, y0, x1, y1)| Rect::new(x0, y0, x1 - x0 + 1, y1 - y0 + 1))
    }

    /// Text rows (top row first) using [`CellState::glyph`].
    pub fn rows(&self) -> Vec<String> {
        (0..self.height as i32)
            .map(|y| {
                (0..self.width as i32)
                    .map(|x| self.get(Position::new(x, y)).unwrap_or_default().glyph())
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
