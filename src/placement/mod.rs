//! # Placement Module
//!
//! Read-only queries over a finished dungeon for placing the player and
//! other spawns:
//! - Deterministic padded spawn search in the largest room ([`spawn`])
//! - Room lookup and random room / floor-cell selection ([`queries`])
//!
//! None of these queries fail: when a preferred cell cannot be found they
//! fall back to a cell inside the room, and only an empty room list yields
//! `None`.

pub mod queries;
pub mod spawn;

pub use queries::*;
pub use spawn::*;
