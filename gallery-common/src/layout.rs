//! Wall layout generator
//!
//! Maps an artwork count to an ordered list of placements spread evenly over
//! the four interior walls. Walls are filled one at a time in
//! [`Wall::ORDER`]; a wall is full before anything spills onto the next.
//! Items beyond the room's total capacity receive no placement.
//!
//! Every consumer (scene renderer, list view, HTTP service) goes through
//! [`generate_wall_positions`] or [`Room::wall_positions`].

use serde::Serialize;
use tracing::debug;

use crate::room::{Room, Wall};
use crate::{Error, Result};

/// Position and orientation assigned to one artwork item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    /// Wall the item hangs on
    pub wall: Wall,
    /// World-space position `(x, y, z)`
    pub position: [f64; 3],
    /// Euler rotation `(rx, ry, rz)` in radians
    pub rotation: [f64; 3],
}

/// Number of items each wall receives for a given count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WallCounts {
    pub north: usize,
    pub south: usize,
    pub east: usize,
    pub west: usize,
    /// Items that did not fit on any wall
    pub dropped: usize,
}

impl WallCounts {
    pub fn get(&self, wall: Wall) -> usize {
        match wall {
            Wall::North => self.north,
            Wall::South => self.south,
            Wall::East => self.east,
            Wall::West => self.west,
        }
    }

    fn set(&mut self, wall: Wall, n: usize) {
        match wall {
            Wall::North => self.north = n,
            Wall::South => self.south = n,
            Wall::East => self.east = n,
            Wall::West => self.west = n,
        }
    }

    /// Total number of items that received a placement
    pub fn placed(&self) -> usize {
        self.north + self.south + self.east + self.west
    }
}

impl Room {
    /// Distribute `count` items over the walls without computing positions
    pub fn wall_counts(&self, count: usize) -> WallCounts {
        let mut counts = WallCounts::default();
        let mut remaining = count;

        for wall in Wall::ORDER {
            let n = remaining.min(self.capacity(wall));
            counts.set(wall, n);
            remaining -= n;
        }

        counts.dropped = remaining;
        counts
    }

    /// Compute placements for `count` artwork items.
    ///
    /// Returns at most `min(count, total_capacity())` placements, in wall
    /// order. Within a wall the items are centred: item `i` of `n` sits at
    /// `(i - (n - 1) / 2) * wall_spacing` along the wall.
    pub fn wall_positions(&self, count: usize) -> Vec<Placement> {
        let counts = self.wall_counts(count);
        let mut placements = Vec::with_capacity(counts.placed());

        for wall in Wall::ORDER {
            let n = counts.get(wall);
            let centre = (n as f64 - 1.0) / 2.0;
            let rotation = wall.rotation();

            placements.extend((0..n).map(|i| Placement {
                wall,
                position: self.mount_point(wall, (i as f64 - centre) * self.wall_spacing),
                rotation,
            }));
        }

        if counts.dropped > 0 {
            debug!(
                requested = count,
                placed = placements.len(),
                dropped = counts.dropped,
                "Artwork count exceeds wall capacity; surplus left unplaced"
            );
        }

        placements
    }
}

/// Placements for `count` items in the reference gallery room
pub fn generate_wall_positions(count: usize) -> Vec<Placement> {
    Room::REFERENCE.wall_positions(count)
}

/// Validate an externally supplied artwork count.
///
/// Negative counts violate the generator's precondition and are rejected
/// here, before any layout work happens.
pub fn checked_count(raw: i64) -> Result<usize> {
    usize::try_from(raw)
        .map_err(|_| Error::InvalidInput(format!("count must be a non-negative integer, got {}", raw)))
}

/// An item paired with the placement it was given
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem<T> {
    /// Position of the item in the input sequence
    pub index: usize,
    pub item: T,
    pub placement: Placement,
}

/// Result of pairing an ordered item sequence with generated placements
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment<T> {
    pub placed: Vec<PlacedItem<T>>,
    /// Items beyond wall capacity; they were not placed
    pub dropped: usize,
}

impl Room {
    /// Pair `items` positionally with this room's placements.
    ///
    /// Surplus items are discarded and only counted.
    pub fn assign<T>(&self, items: Vec<T>) -> Assignment<T> {
        let total = items.len();
        let placements = self.wall_positions(total);
        let dropped = total - placements.len();

        let placed = items
            .into_iter()
            .zip(placements)
            .enumerate()
            .map(|(index, (item, placement))| PlacedItem {
                index,
                item,
                placement,
            })
            .collect();

        Assignment { placed, dropped }
    }
}

/// Pair `items` with placements in the reference gallery room
pub fn assign<T>(items: Vec<T>) -> Assignment<T> {
    Room::REFERENCE.assign(items)
}
