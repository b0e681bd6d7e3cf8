//! # Rendering Module
//!
//! Text output of finished dungeons: an ASCII map for terminals and a JSON
//! report for other tools.

use crate::generation::{Corridor, DungeonLayout, GenerationConfig};
use crate::map::{Position, Rect};
use crate::placement::SpawnPoint;
use crate::DelveResult;
use serde::Serialize;

/// Glyph for the player spawn cell.
pub const PLAYER_GLYPH: char = '@';

/// Glyph for an enemy spawn cell.
pub const ENEMY_GLYPH: char = 'e';

/// Renders the grid as text rows with spawn markers drawn on top.
///
/// Enemies are drawn first, so the player marker wins on a shared cell.
/// Markers outside the grid are ignored.
///
/// # Examples
///
/// ```
/// use delve::{generate, render_ascii, GenerationConfig};
///
/// let layout = generate(&GenerationConfig::for_testing(2)).unwrap();
/// let text = render_ascii(&layout, layout.spawn_position(1), &[]);
/// assert_eq!(text.lines().count(), layout.grid().height() as usize);
/// assert_eq!(text.matches('@').count(), 1);
/// ```
pub fn render_ascii(
    layout: &DungeonLayout,
    player: Option<Position>,
    enemies: &[Position],
) -> String {
    let grid = layout.grid();
    let mut rows: Vec<Vec<char>> = grid.rows().iter().map(|row| row.chars().collect()).collect();

    let markers = enemies
        .iter()
        .map(|&pos| (pos, ENEMY_GLYPH))
        .chain(player.map(|pos| (pos, PLAYER_GLYPH)));
    for (pos, glyph) in markers {
        if grid.in_bounds(pos) {
            rows[pos.y as usize][pos.x as usize] = glyph;
        }
    }

    let mut out = String::with_capacity(rows.len() * (grid.width() as usize + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Serializable summary of a generated dungeon and its spawns.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport<'a> {
    pub version: &'static str,
    pub config: &'a GenerationConfig,
    pub rooms: &'a [Rect],
    pub corridors: &'a [Corridor],
    pub rows: Vec<String>,
    pub player_spawn: Option<Position>,
    pub enemy_spawns: &'a [SpawnPoint],
}

impl<'a> LayoutReport<'a> {
    pub fn new(
        layout: &'a DungeonLayout,
        player_spawn: Option<Position>,
        enemy_spawns: &'a [SpawnPoint],
    ) -> Self {
        Self {
            version: crate::VERSION,
            config: layout.config(),
            rooms: layout.rooms(),
            corridors: layout.corridors(),
            rows: layout.grid().rows(),
            player_spawn,
            enemy_spawns,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> DelveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
