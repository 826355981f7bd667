//! Room geometry
//!
//! The gallery is a fixed-size rectangular room centred on the origin. Width
//! runs along the x axis, depth along z, height along y. All values are
//! compile-time constants; nothing here is configurable at runtime.

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Room width (x axis)
pub const GALLERY_WIDTH: f64 = 40.0;
/// Room depth (z axis)
pub const GALLERY_DEPTH: f64 = 30.0;
/// Room height (y axis)
pub const GALLERY_HEIGHT: f64 = 6.0;
/// Vertical coordinate at which every artwork is hung
pub const ARTWORK_HEIGHT: f64 = 3.0;

/// Distance between neighbouring artwork slots on a wall
pub const WALL_SPACING: f64 = 6.0;
/// Distance from the wall plane to the artwork plane
pub const WALL_OFFSET: f64 = 3.0;
/// Length excluded at each end of a wall
pub const CORNER_MARGIN: f64 = 4.0;

/// Camera walking speed in units per second
pub const MOVE_SPEED: f64 = 5.0;
/// Minimum distance the camera keeps from any wall
pub const COLLISION_MARGIN: f64 = 2.0;
/// Largest frame delta applied in one movement step (seconds)
pub const MAX_DELTA_TIME: f64 = 0.1;

/// One of the four interior walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    North,
    South,
    East,
    West,
}

impl Wall {
    /// Fixed wall-visiting order used by the layout generator
    pub const ORDER: [Wall; 4] = [Wall::North, Wall::South, Wall::East, Wall::West];

    /// Whether the wall spans the room's width (as opposed to its depth)
    pub fn spans_width(self) -> bool {
        matches!(self, Wall::North | Wall::South)
    }

    /// Euler rotation (radians) that turns artwork on this wall to face inward
    pub fn rotation(self) -> [f64; 3] {
        match self {
            Wall::North => [0.0, 0.0, 0.0],
            Wall::South => [0.0, PI, 0.0],
            Wall::East => [0.0, -FRAC_PI_2, 0.0],
            Wall::West => [0.0, FRAC_PI_2, 0.0],
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Wall::North => "north",
            Wall::South => "south",
            Wall::East => "east",
            Wall::West => "west",
        };
        f.write_str(name)
    }
}

/// Immutable room dimensions and wall-layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub artwork_height: f64,
    pub wall_spacing: f64,
    pub wall_offset: f64,
    pub corner_margin: f64,
}

impl Room {
    /// The gallery room every consumer renders
    pub const REFERENCE: Room = Room {
        width: GALLERY_WIDTH,
        depth: GALLERY_DEPTH,
        height: GALLERY_HEIGHT,
        artwork_height: ARTWORK_HEIGHT,
        wall_spacing: WALL_SPACING,
        wall_offset: WALL_OFFSET,
        corner_margin: CORNER_MARGIN,
    };

    /// Wall length available for artwork once both corner margins are removed
    pub fn usable_length(&self, wall: Wall) -> f64 {
        let span = if wall.spans_width() { self.width } else { self.depth };
        span - 2.0 * self.corner_margin
    }

    /// Number of evenly spaced artwork slots the wall can hold
    ///
    /// Zero when the spacing is not positive or the slot count is not finite
    /// (infinite or NaN room dimensions); such a room holds no artwork.
    pub fn capacity(&self, wall: Wall) -> usize {
        if self.wall_spacing <= 0.0 {
            return 0;
        }
        let slots = (self.usable_length(wall) / self.wall_spacing).floor();
        if slots.is_finite() && slots > 0.0 {
            slots as usize
        } else {
            0
        }
    }

    /// Sum of all four wall capacities
    pub fn total_capacity(&self) -> usize {
        Wall::ORDER.iter().map(|&wall| self.capacity(wall)).sum()
    }

    /// Artwork position on `wall` at `offset` along the wall's long axis.
    ///
    /// East and West walls sit at `±(depth/2 − wall_offset)` on the x axis.
    pub fn mount_point(&self, wall: Wall, offset: f64) -> [f64; 3] {
        let y = self.artwork_height;
        let inset = self.depth / 2.0 - self.wall_offset;
        match wall {
            Wall::North => [offset, y, -inset],
            Wall::South => [offset, y, inset],
            Wall::East => [inset, y, offset],
            Wall::West => [-inset, y, offset],
        }
    }
}

impl Default for Room {
    fn default() -> Self {
        Room::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_capacities() {
        let room = Room::REFERENCE;
        assert_eq!(room.usable_length(Wall::North), 32.0);
        assert_eq!(room.usable_length(Wall::East), 22.0);
        assert_eq!(room.capacity(Wall::North), 5);
        assert_eq!(room.capacity(Wall::South), 5);
        assert_eq!(room.capacity(Wall::East), 3);
        assert_eq!(room.capacity(Wall::West), 3);
        assert_eq!(room.total_capacity(), 16);
    }

    #[test]
    fn test_capacity_never_negative() {
        let room = Room {
            corner_margin: 50.0,
            ..Room::REFERENCE
        };
        assert_eq!(room.capacity(Wall::North), 0);
        assert_eq!(room.total_capacity(), 0);

        let room = Room {
            wall_spacing: 0.0,
            ..Room::REFERENCE
        };
        assert_eq!(room.total_capacity(), 0);
    }

    #[test]
    fn test_capacity_non_finite_room() {
        let room = Room {
            width: f64::INFINITY,
            depth: f64::NAN,
            ..Room::REFERENCE
        };
        assert_eq!(room.capacity(Wall::North), 0);
        assert_eq!(room.capacity(Wall::East), 0);
        assert_eq!(room.total_capacity(), 0);
    }

    #[test]
    fn test_rotations_face_inward() {
        assert_eq!(Wall::North.rotation(), [0.0, 0.0, 0.0]);
        assert_eq!(Wall::South.rotation(), [0.0, PI, 0.0]);
        assert_eq!(Wall::East.rotation(), [0.0, -FRAC_PI_2, 0.0]);
        assert_eq!(Wall::West.rotation(), [0.0, FRAC_PI_2, 0.0]);
    }

    #[test]
    fn test_mount_points() {
        let room = Room::REFERENCE;
        assert_eq!(room.mount_point(Wall::North, 6.0), [6.0, 3.0, -12.0]);
        assert_eq!(room.mount_point(Wall::South, -6.0), [-6.0, 3.0, 12.0]);
        assert_eq!(room.mount_point(Wall::East, 3.0), [12.0, 3.0, 3.0]);
        assert_eq!(room.mount_point(Wall::West, -3.0), [-12.0, 3.0, -3.0]);
    }

    #[test]
    fn test_wall_display() {
        let names: Vec<String> = Wall::ORDER.iter().map(|w| w.to_string()).collect();
        assert_eq!(names, vec!["north", "south", "east", "west"]);
    }
}
