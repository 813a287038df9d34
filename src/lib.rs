//! Maze Adventure
//!
//! Steer a wireframe cube around wall cubes and pick up the green ones
//! before the 60 second clock runs out. Clearing every pickup starts the
//! next level: a faster cube, more pickups, a fresh set of walls.
//!
//! Controls: arrow keys (or gamepad d-pad / left stick).

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod collision;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod intro;
pub mod logging;
pub mod pacing;
