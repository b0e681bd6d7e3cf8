//! # Map Module
//!
//! Integer grid geometry shared by every generation stage and query:
//! - Cell addresses ([`Position`])
//! - Axis-aligned rectangles for partition regions and rooms ([`Rect`])
//! - The dense cell grid itself ([`Grid`])

pub mod grid;

pub use grid::*;

use serde::{Deserialize, Serialize};

/// Represents a 2D cell address on the dungeon grid.
///
/// # Examples
///
/// ```
/// use delve::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let neighbours = pos.cardinal_adjacent_positions();
/// assert_eq!(neighbours.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the 4 cardinal neighbours (no diagonals): right, left, up, down.
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        [
            Position::new(self.x + 1, self.y),
            Position::new(self.x - 1, self.y),
            Position::new(self.x, self.y + 1),
            Position::new(self.x, self.y - 1),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned integer rectangle covering `[x, x + width) × [y, y + height)`.
///
/// Used both for partition regions and for rooms. `x_max`/`y_max` are
/// exclusive, matching half-open cell ranges.
///
/// # Examples
///
/// ```
/// use delve::{Position, Rect};
///
/// let room = Rect::new(5, 5, 10, 8);
/// assert_eq!(room.center(), Position::new(10, 9));
/// assert!(room.contains(Position::new(14, 12)));
/// assert!(!room.contains(Position::new(15, 12)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn x_min(&self) -> i32 {
        self.x
    }

    pub fn y_min(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge.
    pub fn x_max(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn y_max(&self) -> i32 {
        self.y + self.height
    }

    /// Gets the center cell, rounding toward the top-left.
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Gets the area of the rectangle in cells.
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// True when width or height is not positive.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Checks if a cell lies inside this rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.y >= self.y && pos.x < self.x_max() && pos.y < self.y_max()
    }

    /// Checks if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x_max() <= self.x_max()
            && other.y_max() <= self.y_max()
    }

    /// Checks if this rectangle shares at least one cell with another.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x >= other.x_max()
            || other.x >= self.x_max()
            || self.y >= other.y_max()
            || other.y >= self.y_max())
    }

    /// Grows the rectangle by `amount` cells on every side.
    pub fn expanded(&self, amount: i32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2 * amount,
            self.height + 2 * amount,
        )
    }

    /// Intersection of two rectangles, or `None` when they are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let x_max = self.x_max().min(other.x_max());
        let y_max = self.y_max().min(other.y_max());
        let clipped = Rect::new(x, y, x_max - x, y_max - y);
        (!clipped.is_empty()).then_some(clipped)
    }

    /// Iterates every cell in row-major order (y outer, x inner).
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (x_min, x_max) = (self.x, self.x_max());
        (self.y..self.y_max()).flat_map(move |y| (x_min..x_max).map(move |x| Position::new(x, y)))
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
