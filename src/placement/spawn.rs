//! # Player Spawn
//!
//! Deterministic search for a spawn cell with clearance from non-floor cells.

use crate::map::{Grid, Position, Rect};
use crate::utils::clamp_low_first;
use log::debug;

/// First cell of the padded interior of `room`, scanning rows top to bottom,
/// that is floor and has floor on all 4 cardinal sides.
///
/// The padded interior is `[x_min + padding, x_max - 1 - padding] ×
/// [y_min + padding, y_max - 1 - padding]`. Returns `None` when that interior
/// is empty or holds no such cell.
pub fn find_padded_floor_cell(grid: &Grid, room: &Rect, padding: u32) -> Option<Position> {
    let padding = padding.min(u16::MAX as u32) as i32;
    let interior = Rect::new(
        room.x_min() + padding,
        room.y_min() + padding,
        room.width - 2 * padding,
        room.height - 2 * padding,
    );
    if interior.is_empty() {
        return None;
    }

    interior.cells().find(|&pos| {
        grid.is_floor(pos)
            && pos
                .cardinal_adjacent_positions()
                .into_iter()
                .all(|next| grid.is_floor(next))
    })
}

/// Center of `room` clamped into its padded interior.
///
/// An axis where the padded interior is empty collapses onto one of its
/// boundaries, which is then pulled back into the room. The result is always
/// a cell of the room.
pub fn fallback_spawn_cell(room: &Rect, padding: u32) -> Position {
    let padding = padding.min(u16::MAX as u32) as i32;
    let center = room.center();

    let x = clamp_low_first(center.x, room.x_min() + padding, room.x_max() - 1 - padding);
    let y = clamp_low_first(center.y, room.y_min() + padding, room.y_max() - 1 - padding);

    Position::new(
        clamp_low_first(x, room.x_min(), room.x_max() - 1),
        clamp_low_first(y, room.y_min(), room.y_max() - 1),
    )
}

/// Best spawn cell inside `room`: the padded floor cell when one exists,
/// otherwise the clamped center.
pub fn spawn_in_room(grid: &Grid, room: &Rect, padding: u32) -> Position {
    find_padded_floor_cell(grid, room, padding).unwrap_or_else(|| {
        debug!("No padded floor cell in room {}, using center fallback", room);
        fallback_spawn_cell(room, padding)
    })
}

/// The room with the largest area; the earliest one wins ties.
pub fn largest_room(rooms: &[Rect]) -> Option<(usize, &Rect)> {
    rooms
        .iter()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.area() > best.1.area() {
                candidate
            } else {
                best
            }
        })
}

/// Player spawn cell in the largest room. `None` only when `rooms` is empty.
///
/// # Examples
///
/// ```
/// use delve::{generate, spawn_position, GenerationConfig};
///
/// let layout = generate(&GenerationConfig::new(4)).unwrap();
/// let spawn = spawn_position(layout.rooms(), layout.grid(), 1).unwrap();
/// assert!(layout.grid().is_floor(spawn));
/// assert_eq!(spawn_position(&[], layout.grid(), 1), None);
/// ```
pub fn spawn_position(rooms: &[Rect], grid: &Grid, padding: u32) -> Option<Position> {
    largest_room(rooms).map(|(_, room)| spawn_in_room(grid, room, padding))
}
