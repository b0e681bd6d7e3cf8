//! # Room Placement
//!
//! Carves one rectangular room inside every partition leaf.

use crate::generation::PartitionNode;
use crate::map::{Grid, Rect};
use crate::utils::sample_inclusive;
use crate::GenerationConfig;
use log::debug;
use rand::Rng;

/// Places one room in every leaf of `tree`, visiting the left subtree before
/// the right one. Returns the rooms in visiting order.
///
/// Each room keeps at least one cell of margin from every side of its leaf,
/// so rooms from distinct leaves never overlap or touch.
pub fn place_rooms<R: Rng + ?Sized>(
    tree: &mut PartitionNode,
    config: &GenerationConfig,
    rng: &mut R,
) -> Vec<Rect> {
    let mut rooms = Vec::new();
    place_rooms_in(tree, config, rng, &mut rooms);
    rooms
}

fn place_rooms_in<R: Rng + ?Sized>(
    node: &mut PartitionNode,
    config: &GenerationConfig,
    rng: &mut R,
    rooms: &mut Vec<Rect>,
) {
    if let Some((left, right)) = node.children_mut() {
        place_rooms_in(left, config, rng, rooms);
        place_rooms_in(right, config, rng, rooms);
        return;
    }

    let room = room_in_leaf(node.rect(), config, rng);
    node.set_room(room);
    rooms.push(room);
}

/// Picks a room rectangle strictly inside `leaf` with a 1-cell margin.
pub fn room_in_leaf<R: Rng + ?Sized>(leaf: Rect, config: &GenerationConfig, rng: &mut R) -> Rect {
    let width = room_extent(leaf.width, config, rng);
    let height = room_extent(leaf.height, config, rng);

    let x = sample_inclusive(rng, leaf.x_min() + 1, leaf.x_max() - width - 1);
    let y = sample_inclusive(rng, leaf.y_min() + 1, leaf.y_max() - height - 1);

    Rect::new(x, y, width, height)
}

/// Room edge length for a leaf edge of `leaf_extent` cells.
///
/// The upper bound leaves room for the margin on both sides. When the leaf is
/// too narrow for `min_room_size`, the lower bound shrinks to match rather
/// than producing an inverted range.
fn room_extent<R: Rng + ?Sized>(leaf_extent: i32, config: &GenerationConfig, rng: &mut R) -> i32 {
    let high = (config.max_room_size as i32).min(leaf_extent - 2).max(1);
    let low = (config.min_room_size as i32).min(high);
    if low < config.min_room_size as i32 {
        debug!(
            "Leaf edge {} too small for min_room_size {}, room edge capped at {}",
            leaf_extent, config.min_room_size, high
        );
    }
    sample_inclusive(rng, low, high)
}

/// Paints every room as floor.
pub fn carve_rooms(grid: &mut Grid, rooms: &[Rect]) -> usize {
    rooms.iter().map(|room| grid.fill_floor(room)).sum()
}
