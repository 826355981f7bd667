//! # Gallery Common Library
//!
//! Shared code for the gallery workspace:
//! - Room geometry constants and per-wall capacities
//! - Wall layout generator (artwork count → placements)
//! - First-person navigation clamping
//! - Configuration loading
//! - Error types

pub mod config;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod room;

pub use error::{Error, Result};
pub use layout::{assign, checked_count, generate_wall_positions, Assignment, PlacedItem, Placement, WallCounts};
pub use room::{Room, Wall};
