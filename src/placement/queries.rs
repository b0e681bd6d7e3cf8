//! # Room Queries
//!
//! Random room and floor-cell selection for placing things in a finished
//! dungeon.

use crate::map::{Grid, Position, Rect};
use crate::utils::sample_half_open;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell chosen for spawning, together with the room it was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Index into the room list
    pub room_index: usize,
    /// Chosen cell inside that room
    pub cell: Position,
}

/// Index of the first room whose rectangle contains `cell`.
///
/// # Examples
///
/// ```
/// use delve::{find_room_containing, Position, Rect};
///
/// let rooms = [Rect::new(0, 0, 4, 4), Rect::new(10, 10, 4, 4)];
/// assert_eq!(find_room_containing(&rooms, Position::new(11, 12)), Some(1));
/// assert_eq!(find_room_containing(&rooms, Position::new(6, 6)), None);
/// ```
pub fn find_room_containing(rooms: &[Rect], cell: Position) -> Option<usize> {
    rooms.iter().position(|room| room.contains(cell))
}

/// Uniformly random room index other than `exclude`.
///
/// With at most one room, or nothing to exclude, every room is a candidate.
/// Otherwise indices are redrawn until one differs from `exclude`. Returns
/// `None` only when `room_count` is 0.
pub fn random_room_excluding<R: Rng + ?Sized>(
    room_count: usize,
    exclude: Option<usize>,
    rng: &mut R,
) -> Option<usize> {
    if room_count == 0 {
        return None;
    }

    match exclude {
        Some(excluded) if room_count > 1 && excluded < room_count => loop {
            let idx = rng.gen_range(0..room_count);
            if idx != excluded {
                return Some(idx);
            }
        },
        _ => Some(rng.gen_range(0..room_count)),
    }
}

/// Up to `max_tries` uniformly random interior cells of `room` (one cell in
/// from every edge); returns the first that is floor.
pub fn try_random_floor_cell<R: Rng + ?Sized>(
    grid: &Grid,
    room: &Rect,
    max_tries: u32,
    rng: &mut R,
) -> Option<Position> {
    let (x_low, x_high) = (room.x_min() + 1, room.x_max() - 1);
    let (y_low, y_high) = (room.y_min() + 1, room.y_max() - 1);
    if x_low >= x_high || y_low >= y_high {
        return None;
    }

    (0..max_tries)
        .map(|_| {
            let x = sample_half_open(rng, x_low, x_high);
            let y = sample_half_open(rng, y_low, y_high);
            Position::new(x, y)
        })
        .find(|&cell| grid.is_floor(cell))
}

/// Like [`try_random_floor_cell`], but falls back to the room's center when
/// every attempt misses. The center always lies in the room but is not
/// guaranteed to be floor.
pub fn random_floor_cell<R: Rng + ?Sized>(
    grid: &Grid,
    room: &Rect,
    max_tries: u32,
    rng: &mut R,
) -> Position {
    try_random_floor_cell(grid, room, max_tries, rng).unwrap_or_else(|| room.center())
}

/// Picks `count` spawn cells, each in a random room other than `exclude`.
///
/// This is only the repeated application of [`random_room_excluding`] and
/// [`random_floor_cell`]; how many cells to ask for is the caller's policy.
pub fn select_spawn_cells<R: Rng + ?Sized>(
    rooms: &[Rect],
    grid: &Grid,
    exclude: Option<usize>,
    count: usize,
    max_tries: u32,
    rng: &mut R,
) -> Vec<SpawnPoint> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let Some(room_index) = random_room_excluding(rooms.len(), exclude, rng) else {
            break;
        };
        let cell = random_floor_cell(grid, &rooms[room_index], max_tries, rng);
        points.push(SpawnPoint { room_index, cell });
    }
    points
}
