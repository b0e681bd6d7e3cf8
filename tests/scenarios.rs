//! Integration tests for concrete generation scenarios.

use delve::{
    carve_horizontal, generation::utils, utils::floor_component_count, BspDungeonGenerator,
    CellState, DelveError, DelveResult, GenerationConfig, Generator, Grid, Position,
};

fn generate(config: &GenerationConfig) -> DelveResult<delve::DungeonLayout> {
    let mut rng = utils::create_rng(config);
    BspDungeonGenerator::new().generate(config, &mut rng)
}

/// A 10x10 map with depth 1 splits exactly once.
#[test]
fn test_single_split_two_rooms_one_corridor() -> DelveResult<()> {
    for seed in 0..20 {
        let config = GenerationConfig::new(seed)
            .with_size(10, 10)
            .with_room_sizes(4, 8)
            .with_max_depth(1);
        let mut rng = utils::create_rng(&config);
        let (layout, tree) = BspDungeonGenerator::new().generate_with_tree(&config, &mut rng)?;

        assert_eq!(tree.leaf_count(), 2, "seed {}", seed);
        assert_eq!(layout.rooms().len(), 2);
        assert_eq!(layout.corridors().len(), 1);
        assert_eq!(floor_component_count(layout.grid()), 1);
    }
    Ok(())
}

/// A map smaller than two minimum rooms is a single leaf with one clamped room.
#[test]
fn test_small_map_never_splits() -> DelveResult<()> {
    let config = GenerationConfig::new(3)
        .with_size(6, 6)
        .with_room_sizes(4, 15)
        .with_max_depth(5);
    let layout = generate(&config)?;

    assert_eq!(layout.rooms().len(), 1);
    assert!(layout.corridors().is_empty());

    // Room edges clamp to the leaf minus its one-cell margin.
    assert_eq!(layout.rooms()[0], delve::Rect::new(1, 1, 4, 4));
    Ok(())
}

/// A width-3 horizontal corridor covers the row above and below its center row.
#[test]
fn test_wide_corridor_paints_three_rows() {
    let mut grid = Grid::new(16, 8);
    carve_horizontal(&mut grid, 2, 10, 2, 3);

    for x in 2..=10 {
        for y in [1, 2, 3] {
            assert!(grid.is_floor(Position::new(x, y)));
        }
    }
    assert_eq!(grid.count(CellState::Floor), 27);
}

/// Same seed and config give identical rooms and grids.
#[test]
fn test_generation_is_deterministic() -> DelveResult<()> {
    let config = GenerationConfig::new(2024);
    let first = generate(&config)?;
    let second = generate(&config)?;

    assert_eq!(first.rooms(), second.rooms());
    assert_eq!(first.grid(), second.grid());
    assert_eq!(first, second);

    let other = generate(&GenerationConfig::new(2025))?;
    assert_ne!(first.grid(), other.grid());
    Ok(())
}

/// Regenerating replaces the layout wholesale rather than patching it.
#[test]
fn test_regeneration_replaces_layout() -> DelveResult<()> {
    let mut layout = generate(&GenerationConfig::new(1))?;
    let old_rooms = layout.rooms().to_vec();
    layout = generate(&GenerationConfig::new(1).with_size(80, 40))?;

    assert_eq!(layout.grid().width(), 80);
    assert_ne!(layout.rooms(), old_rooms.as_slice());
    Ok(())
}

#[test]
fn test_invalid_configs_rejected() {
    let inverted = GenerationConfig::new(1).with_room_sizes(8, 4);
    assert!(matches!(generate(&inverted), Err(DelveError::InvalidConfig(_))));

    let too_small = GenerationConfig::new(1).with_size(2, 2);
    assert!(matches!(generate(&too_small), Err(DelveError::InvalidConfig(_))));

    let huge_rooms = GenerationConfig::new(1)
        .with_size(100, 100)
        .with_room_sizes(1_500_000_000, 1_500_000_000);
    assert!(matches!(generate(&huge_rooms), Err(DelveError::InvalidConfig(_))));
}

/// Room sizes below the smallest leaf edge still generate a connected dungeon.
#[test]
fn test_small_room_sizes_generate() -> DelveResult<()> {
    let config = GenerationConfig::new(8).with_room_sizes(2, 5);
    let layout = generate(&config)?;

    assert!(layout.rooms().len() > 1);
    for room in layout.rooms() {
        assert!(room.width <= 5 && room.height <= 5);
    }
    assert_eq!(floor_component_count(layout.grid()), 1);
    Ok(())
}

#[test]
fn test_spawn_is_padded_floor_in_default_dungeon() -> DelveResult<()> {
    let layout = generate(&GenerationConfig::new(77))?;
    let spawn = layout.spawn_position(1).expect("dungeon has rooms");
    let grid = layout.grid();

    assert!(grid.is_floor(spawn));
    for next in spawn.cardinal_adjacent_positions() {
        assert!(grid.is_floor(next));
    }
    Ok(())
}

#[test]
fn test_spawn_with_oversized_padding_stays_in_room() -> DelveResult<()> {
    let layout = generate(&GenerationConfig::new(77))?;
    let spawn = layout.spawn_position(100).expect("dungeon has rooms");
    let room = layout.find_room_containing(spawn).map(|idx| layout.rooms()[idx]);
    assert!(room.is_some());
    Ok(())
}
