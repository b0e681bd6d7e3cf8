//! # Dungeon Generation
//!
//! The BSP dungeon pipeline.
//!
//! The generator runs four stages over one exclusively owned grid:
//! 1. Partition the map into leaves
//! 2. Place one room per leaf and paint it as floor
//! 3. Chain the rooms with corridors
//! 4. Derive the wall ring around all floor
//!
//! The random stream is consumed in exactly that order, so a seed and a
//! configuration fully determine the result.

use crate::generation::{
    carve_rooms, connect_rooms, derive_walls_around_floor, place_rooms, utils, DungeonLayout,
    GenerationConfig, Generator, PartitionNode,
};
use crate::map::{CellState, Grid};
use crate::DelveResult;
use log::{debug, info};
use rand::rngs::StdRng;

/// Dungeon generator built on binary space partitioning.
#[derive(Debug, Clone)]
pub struct BspDungeonGenerator {
    /// Whether to fail generation when the rooms are not all connected
    pub ensure_connectivity: bool,
}

impl BspDungeonGenerator {
    /// Creates a new dungeon generator with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{generation::utils, BspDungeonGenerator, GenerationConfig, Generator};
    ///
    /// let generator = BspDungeonGenerator::new();
    /// let config = GenerationConfig::for_testing(3);
    /// let mut rng = utils::create_rng(&config);
    /// let layout = generator.generate(&config, &mut rng).unwrap();
    /// assert_eq!(layout.corridors().len(), layout.rooms().len() - 1);
    /// ```
    pub fn new() -> Self {
        Self {
            ensure_connectivity: true,
        }
    }

    /// Runs all stages and also returns the partition tree, which is
    /// otherwise discarded.
    pub fn generate_with_tree(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> DelveResult<(DungeonLayout, PartitionNode)> {
        config.validate()?;

        let mut tree = PartitionNode::build(config.map_rect(), config, rng);
        let rooms = place_rooms(&mut tree, config, rng);

        let mut grid = Grid::new(config.width, config.height);
        let room_cells = carve_rooms(&mut grid, &rooms);
        debug!("Placed {} rooms covering {} cells", rooms.len(), room_cells);

        let corridors = connect_rooms(&mut grid, &rooms, config.effective_corridor_width(), rng);
        derive_walls_around_floor(&mut grid);

        let layout = DungeonLayout::new(config.clone(), rooms, corridors, grid);

        if self.ensure_connectivity {
            self.validate(&layout, config)?;
        }

        info!(
            "Generated {}x{} dungeon (seed {}): {} rooms, {} corridors, {} floor, {} wall",
            config.width,
            config.height,
            config.seed,
            layout.rooms().len(),
            layout.corridors().len(),
            layout.grid().count(CellState::Floor),
            layout.grid().count(CellState::Wall)
        );

        Ok((layout, tree))
    }
}

impl Generator<DungeonLayout> for BspDungeonGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<DungeonLayout> {
        self.generate_with_tree(config, rng).map(|(layout, _)| layout)
    }

    fn validate(&self, layout: &DungeonLayout, _config: &GenerationConfig) -> DelveResult<()> {
        utils::validate_layout(layout)
    }

    fn generator_type(&self) -> &'static str {
        "BspDungeonGenerator"
    }
}

impl Default for BspDungeonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Position, Rect};
    use crate::utils::floor_component_count;
    use crate::DelveError;

    fn generate(config: &GenerationConfig) -> DelveResult<(DungeonLayout, PartitionNode)> {
        let mut rng = utils::create_rng(config);
        BspDungeonGenerator::new().generate_with_tree(config, &mut rng)
    }

    #[test]
    fn test_generator_creation() {
        let generator = BspDungeonGenerator::default();
        assert!(generator.ensure_connectivity);
        assert_eq!(generator.generator_type(), "BspDungeonGenerator");
    }

    #[test]
    fn test_generation_with_small_level() {
        let config = GenerationConfig::for_testing(12345);
        let (layout, tree) = generate(&config).unwrap();

        assert_eq!(layout.grid().width(), config.width);
        assert_eq!(layout.grid().height(), config.height);
        assert_eq!(layout.rooms().len(), tree.leaf_count());
        assert!(layout.grid().count(CellState::Floor) > 0);
        assert!(layout.grid().count(CellState::Wall) > 0);
        assert_eq!(floor_component_count(layout.grid()), 1);
    }

    #[test]
    fn test_rooms_are_painted_floor() {
        let config = GenerationConfig::new(99);
        let (layout, _) = generate(&config).unwrap();
        for room in layout.rooms() {
            assert!(room.cells().all(|pos| layout.grid().is_floor(pos)));
        }
    }

    #[test]
    fn test_invalid_config_fails_before_generation() {
        let config = GenerationConfig::new(1).with_room_sizes(10, 4);
        assert!(matches!(generate(&config), Err(DelveError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_corridor_width_generates() {
        let config = GenerationConfig::new(8).with_corridor_width(0);
        let (layout, _) = generate(&config).unwrap();
        assert!(layout.corridors().iter().all(|c| c.width == 1));
    }

    #[test]
    fn test_layout_queries() {
        let config = GenerationConfig::for_testing(21);
        let (layout, _) = generate(&config).unwrap();

        let first = layout.rooms()[0];
        assert_eq!(layout.find_room_containing(first.center()), Some(0));
        assert_eq!(layout.find_room_containing(Position::new(-5, -5)), None);

        let spawn = layout.spawn_position(1).unwrap();
        let largest: Rect = *layout
            .rooms()
            .iter()
            .reduce(|best, room| if room.area() > best.area() { room } else { best })
            .unwrap();
        assert!(largest.contains(spawn));
    }
}
