//! # Delve
//!
//! Procedural dungeon layouts built by binary space partitioning.
//!
//! ## Architecture Overview
//!
//! Generation runs as a fixed sequence of stages over a single owned grid:
//!
//! - **Partition**: recursive splitting of the map rectangle into leaves
//! - **Rooms**: one rectangular room carved inside every leaf, with margin
//! - **Corridors**: L-shaped floor paths chaining rooms in placement order
//! - **Walls**: a one-cell ring derived around every floor cell
//!
//! The finished [`DungeonLayout`] is read-only. Spawn and placement queries in
//! [`placement`] read it to find safe player cells and random enemy cells.
//!
//! ```
//! use delve::{generate, GenerationConfig};
//!
//! let layout = generate(&GenerationConfig::for_testing(7)).unwrap();
//! assert!(!layout.rooms().is_empty());
//! assert!(layout.spawn_position(1).is_some());
//! ```

pub mod generation;
pub mod map;
pub mod placement;
pub mod rendering;
pub mod utils;

pub use generation::*;
pub use map::*;
pub use placement::*;
pub use rendering::*;

pub use generation::{
    BspDungeonGenerator, Corridor, DungeonLayout, GenerationConfig, Generator, PartitionNode,
};
pub use map::{CellState, Grid, Position, Rect};

/// Core error type for the Delve dungeon generator.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration rejected before generation started
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation defaults.
pub mod config {
    /// Default dungeon width in cells
    pub const DEFAULT_DUNGEON_WIDTH: u32 = 50;

    /// Default dungeon height in cells
    pub const DEFAULT_DUNGEON_HEIGHT: u32 = 50;

    /// Default minimum room edge length
    pub const DEFAULT_MIN_ROOM_SIZE: u32 = 6;

    /// Default maximum room edge length
    pub const DEFAULT_MAX_ROOM_SIZE: u32 = 15;

    /// Default partition depth limit
    pub const DEFAULT_MAX_DEPTH: u32 = 5;

    /// Default corridor width in cells
    pub const DEFAULT_CORRIDOR_WIDTH: u32 = 3;

    /// Default random seed
    pub const DEFAULT_SEED: u64 = 42;

    /// Smallest leaf edge that still holds a room with a 1-cell margin
    pub const MIN_LEAF_EDGE: u32 = 3;

    /// Largest accepted room size limit; partitioning doubles it as an `i32`
    pub const MAX_ROOM_EDGE: u32 = i32::MAX as u32 / 2;

    /// Clearance used when looking for a player spawn cell
    pub const DEFAULT_SPAWN_PADDING: u32 = 1;

    /// Attempts made when sampling a random floor cell inside a room
    pub const DEFAULT_PLACEMENT_TRIES: u32 = 25;
}
