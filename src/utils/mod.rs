//! # Utilities Module
//!
//! Range sampling helpers and floor reachability used by generation and validation.

pub mod math;
pub mod pathfinding;

pub use self::math::*;
pub use self::pathfinding::*;
