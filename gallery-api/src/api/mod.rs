//! HTTP API handlers for gallery-api

pub mod health;
pub mod layout;
pub mod navigation;
pub mod room;

pub use health::{health_routes, welcome};
pub use layout::{assign_layout, get_layout};
pub use navigation::navigation_step;
pub use room::get_room;
