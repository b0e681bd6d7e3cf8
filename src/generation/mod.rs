//! # Generation Module
//!
//! Procedural dungeon layout generation by binary space partitioning.
//!
//! Generation is a fixed pipeline of stages, each in its own submodule:
//! partition the map ([`partition`]), place one room per leaf ([`rooms`]),
//! chain the rooms with corridors ([`corridors`]) and finally derive the wall
//! ring around all floor ([`walls`]). [`dungeon::BspDungeonGenerator`] runs
//! the stages in order over a single owned grid.

pub mod corridors;
pub mod dungeon;
pub mod partition;
pub mod rooms;
pub mod walls;

pub use corridors::*;
pub use dungeon::*;
pub use partition::*;
pub use rooms::*;
pub use walls::*;

use crate::map::{Grid, Position, Rect};
use crate::placement;
use crate::{config, DelveError, DelveResult};
use log::warn;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for dungeon generation.
///
/// Every field has a default, so partial JSON documents deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width in cells
    pub width: u32,
    /// Map height in cells
    pub height: u32,
    /// Minimum room edge length; partition leaves never go below 3 cells
    pub min_room_size: u32,
    /// Maximum room edge length
    pub max_room_size: u32,
    /// Maximum partition depth; 0 means the whole map is one leaf
    pub max_depth: u32,
    /// Corridor width in cells; 0 is treated as 1
    pub corridor_width: u32,
}

impl GenerationConfig {
    /// Creates a default generation configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert!(config.max_room_size >= config.min_room_size);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: config::DEFAULT_DUNGEON_WIDTH,
            height: config::DEFAULT_DUNGEON_HEIGHT,
            min_room_size: config::DEFAULT_MIN_ROOM_SIZE,
            max_room_size: config::DEFAULT_MAX_ROOM_SIZE,
            max_depth: config::DEFAULT_MAX_DEPTH,
            corridor_width: config::DEFAULT_CORRIDOR_WIDTH,
        }
    }

    /// Creates a configuration for testing with smaller, simpler maps.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 30,
            height: 20,
            min_room_size: 4,
            max_room_size: 8,
            max_depth: 3,
            corridor_width: 1,
        }
    }

    /// Sets the map size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the room size limits.
    pub fn with_room_sizes(mut self, min_room_size: u32, max_room_size: u32) -> Self {
        self.min_room_size = min_room_size;
        self.max_room_size = max_room_size;
        self
    }

    /// Sets the partition depth limit.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the corridor width.
    pub fn with_corridor_width(mut self, corridor_width: u32) -> Self {
        self.corridor_width = corridor_width;
        self
    }

    /// Checks the configuration before generation starts.
    ///
    /// Rejects inverted or zero room size limits, limits too large to
    /// partition with, and maps smaller than the smallest leaf.
    pub fn validate(&self) -> DelveResult<()> {
        if self.min_room_size > self.max_room_size {
            return Err(DelveError::InvalidConfig(format!(
                "min_room_size ({}) exceeds max_room_size ({})",
                self.min_room_size, self.max_room_size
            )));
        }

        if self.min_room_size == 0 {
            return Err(DelveError::InvalidConfig(
                "min_room_size must be positive".to_string(),
            ));
        }

        if self.max_room_size > config::MAX_ROOM_EDGE {
            return Err(DelveError::InvalidConfig(format!(
                "max_room_size must be at most {}, got {}",
                config::MAX_ROOM_EDGE,
                self.max_room_size
            )));
        }

        if self.width < config::MIN_LEAF_EDGE || self.height < config::MIN_LEAF_EDGE {
            return Err(DelveError::InvalidConfig(format!(
                "map must be at least {0}x{0}, got {1}x{2}",
                config::MIN_LEAF_EDGE,
                self.width,
                self.height
            )));
        }

        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(DelveError::InvalidConfig(format!(
                "map size {}x{} exceeds the addressable grid",
                self.width, self.height
            )));
        }

        Ok(())
    }

    /// Smallest leaf edge the partition may produce.
    ///
    /// Room sizes below [`config::MIN_LEAF_EDGE`] are kept for room placement,
    /// but leaves never shrink past that edge.
    pub fn min_leaf_edge(&self) -> i32 {
        self.min_room_size.max(config::MIN_LEAF_EDGE) as i32
    }

    /// Corridor width actually carved; a width of 0 is clamped to 1.
    pub fn effective_corridor_width(&self) -> u32 {
        if self.corridor_width == 0 {
            warn!("corridor_width of 0 clamped to 1");
            1
        } else {
            self.corridor_width
        }
    }

    /// The rectangle covering the whole map.
    pub fn map_rect(&self) -> Rect {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Parses a configuration from JSON. Missing fields take default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::from_json_str(r#"{ "seed": 9, "width": 64 }"#).unwrap();
    /// assert_eq!(config.seed, 9);
    /// assert_eq!(config.width, 64);
    /// assert_eq!(config.height, GenerationConfig::default().height);
    /// ```
    pub fn from_json_str(json: &str) -> DelveResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> DelveResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> DelveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_SEED)
    }
}

/// The finished output of one generation pass.
///
/// A layout is immutable: consumers read rooms and cells through the
/// accessors, and a new dungeon replaces the whole layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonLayout {
    config: GenerationConfig,
    rooms: Vec<Rect>,
    corridors: Vec<Corridor>,
    grid: Grid,
}

impl DungeonLayout {
    pub(crate) fn new(
        config: GenerationConfig,
        rooms: Vec<Rect>,
        corridors: Vec<Corridor>,
        grid: Grid,
    ) -> Self {
        Self {
            config,
            rooms,
            corridors,
            grid,
        }
    }

    /// Configuration this layout was generated from.
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Rooms in placement order (left subtree before right subtree).
    pub fn rooms(&self) -> &[Rect] {
        &self.rooms
    }

    /// Corridors in carving order; corridor `i` joins rooms `i` and `i + 1`.
    pub fn corridors(&self) -> &[Corridor] {
        &self.corridors
    }

    /// Read-only view of the cell grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Player spawn cell in the largest room; `None` only when there are no
    /// rooms.
    pub fn spawn_position(&self, padding: u32) -> Option<Position> {
        placement::spawn_position(&self.rooms, &self.grid, padding)
    }

    /// Index of the first room containing `cell`.
    pub fn find_room_containing(&self, cell: Position) -> Option<usize> {
        placement::find_room_containing(&self.rooms, cell)
    }
}

/// Trait for procedural generators.
///
/// Generators draw every random decision from the caller's RNG, so the same
/// seed and configuration always produce the same output.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Generates a dungeon with the default generator, seeded from `config.seed`.
pub fn generate(config: &GenerationConfig) -> DelveResult<DungeonLayout> {
    let mut rng = utils::create_rng(config);
    BspDungeonGenerator::new().generate(config, &mut rng)
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use crate::map::CellState;
    use crate::utils::all_reachable;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Validates that a layout meets basic requirements: it has floor, its
    /// rooms are pairwise disjoint, and every room center is reachable from
    /// the first room.
    pub fn validate_layout(layout: &DungeonLayout) -> DelveResult<()> {
        if layout.grid().count(CellState::Floor) == 0 {
            return Err(DelveError::GenerationFailed(
                "Layout has no floor cells".to_string(),
            ));
        }

        let rooms = layout.rooms();
        for (i, room) in rooms.iter().enumerate() {
            if let Some(j) = rooms[i + 1..].iter().position(|other| room.overlaps(other)) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} overlaps room {}",
                    i,
                    i + 1 + j
                )));
            }
        }

        let centers: Vec<Position> = rooms.iter().map(Rect::center).collect();
        if !all_reachable(layout.grid(), &centers) {
            return Err(DelveError::GenerationFailed(
                "Rooms are not all connected".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_config_creation() {
        let config = GenerationConfig::new(12345);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.width, 50);
        assert_eq!(config.height, 50);
        assert_eq!(config.corridor_width, 3);
        assert!(config.validate().is_ok());
        assert!(GenerationConfig::for_testing(1).validate().is_ok());
    }

    #[test]
    fn test_inverted_room_sizes_rejected() {
        let config = GenerationConfig::new(1).with_room_sizes(9, 5);
        assert!(matches!(config.validate(), Err(DelveError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_rooms_and_tiny_maps_rejected() {
        let config = GenerationConfig::new(1).with_room_sizes(0, 5);
        assert!(matches!(config.validate(), Err(DelveError::InvalidConfig(_))));

        let config = GenerationConfig::new(1).with_size(2, 40);
        assert!(matches!(config.validate(), Err(DelveError::InvalidConfig(_))));
    }

    #[test]
    fn test_small_room_sizes_keep_leaf_minimum() {
        let config = GenerationConfig::new(1).with_room_sizes(2, 5);
        assert!(config.validate().is_ok());
        assert_eq!(config.min_leaf_edge(), 3);
        assert_eq!(config.with_room_sizes(7, 9).min_leaf_edge(), 7);
    }

    #[test]
    fn test_oversized_room_sizes_rejected() {
        let config = GenerationConfig::new(1)
            .with_size(100, 100)
            .with_room_sizes(1_500_000_000, 1_500_000_000);
        assert!(matches!(config.validate(), Err(DelveError::InvalidConfig(_))));

        let limit = config::MAX_ROOM_EDGE;
        let config = GenerationConfig::new(1).with_room_sizes(limit, limit);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_corridor_width_clamped() {
        let config = GenerationConfig::new(1).with_corridor_width(0);
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_corridor_width(), 1);
        assert_eq!(config.with_corridor_width(5).effective_corridor_width(), 5);
    }

    #[test]
    fn test_config_json_roundtrip_with_defaults() {
        let config = GenerationConfig::from_json_str(r#"{ "max_depth": 2 }"#).unwrap();
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.min_room_size, 6);

        let json = config.to_json().unwrap();
        assert_eq!(GenerationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json_is_serde_error() {
        let result = GenerationConfig::from_json_str("{ width: ");
        assert!(matches!(result, Err(DelveError::Serde(_))));
    }

    #[test]
    fn test_validate_layout_detects_disconnected_rooms() {
        let mut grid = Grid::new(20, 10);
        let rooms = vec![Rect::new(1, 1, 4, 4), Rect::new(10, 1, 4, 4)];
        for room in &rooms {
            grid.fill_floor(room);
        }
        let layout = DungeonLayout::new(GenerationConfig::default(), rooms, Vec::new(), grid);
        assert!(matches!(
            utils::validate_layout(&layout),
            Err(DelveError::GenerationFailed(_))
        ));
    }

    #[test]
    fn test_validate_layout_rejects_empty_grid() {
        let layout = DungeonLayout::new(
            GenerationConfig::default(),
            Vec::new(),
            Vec::new(),
            Grid::new(5, 5),
        );
        assert!(utils::validate_layout(&layout).is_err());
    }
}
