//! Layout generator properties
//!
//! Covers:
//! - Empty output for a zero count
//! - Exact output length up to total capacity, truncation beyond it
//! - Determinism
//! - Wall fill order and per-wall coordinates
//! - Centering of items along each wall
//! - Reference scenarios for 3, 12 and 20 items

use gallery_common::room::{Room, Wall};
use gallery_common::{generate_wall_positions, Placement};
use std::f64::consts::{FRAC_PI_2, PI};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// Coordinate along the wall's long axis
fn along_wall(p: &Placement) -> f64 {
    if p.wall.spans_width() {
        p.position[0]
    } else {
        p.position[2]
    }
}

fn on_wall(placements: &[Placement], wall: Wall) -> Vec<Placement> {
    placements.iter().copied().filter(|p| p.wall == wall).collect()
}

#[test]
fn test_zero_count_yields_nothing() {
    assert!(generate_wall_positions(0).is_empty());
}

#[test]
fn test_length_matches_count_up_to_capacity() {
    let total = Room::REFERENCE.total_capacity();
    assert_eq!(total, 16);

    for count in 0..=total {
        assert_eq!(
            generate_wall_positions(count).len(),
            count,
            "count {} should be fully placed",
            count
        );
    }
}

#[test]
fn test_overflow_truncates_to_capacity() {
    for count in [17, 20, 64, 1000] {
        assert_eq!(generate_wall_positions(count).len(), 16);
    }
}

#[test]
fn test_deterministic() {
    for count in [0, 1, 7, 16, 25] {
        let first = generate_wall_positions(count);
        let second = generate_wall_positions(count);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            for axis in 0..3 {
                assert_eq!(a.position[axis].to_bits(), b.position[axis].to_bits());
                assert_eq!(a.rotation[axis].to_bits(), b.rotation[axis].to_bits());
            }
        }
    }
}

#[test]
fn test_fill_order_by_coordinate() {
    let placements = generate_wall_positions(16);

    for p in &placements[0..5] {
        assert!(close(p.position[2], -12.0), "north item off wall: {:?}", p);
    }
    for p in &placements[5..10] {
        assert!(close(p.position[2], 12.0), "south item off wall: {:?}", p);
    }
    for p in &placements[10..13] {
        assert!(close(p.position[0], 12.0), "east item off wall: {:?}", p);
    }
    for p in &placements[13..16] {
        assert!(close(p.position[0], -12.0), "west item off wall: {:?}", p);
    }
}

#[test]
fn test_walls_are_centred() {
    for count in 1..=16 {
        let placements = generate_wall_positions(count);
        for wall in Wall::ORDER {
            let items = on_wall(&placements, wall);
            if items.is_empty() {
                continue;
            }
            let mean: f64 = items.iter().map(along_wall).sum::<f64>() / items.len() as f64;
            assert!(close(mean, 0.0), "{} wall not centred for count {}", wall, count);
        }
    }
}

#[test]
fn test_all_items_hang_at_mount_height() {
    for p in generate_wall_positions(16) {
        assert!(close(p.position[1], 3.0));
    }
}

#[test]
fn test_three_items_on_north_wall() {
    let placements = generate_wall_positions(3);
    assert_eq!(placements.len(), 3);

    let xs: Vec<f64> = placements.iter().map(|p| p.position[0]).collect();
    assert!(close(xs[0], -6.0));
    assert!(close(xs[1], 0.0));
    assert!(close(xs[2], 6.0));

    for p in &placements {
        assert_eq!(p.wall, Wall::North);
        assert!(close(p.position[1], 3.0));
        assert!(close(p.position[2], -12.0));
        assert_eq!(p.rotation, [0.0, 0.0, 0.0]);
    }
}

#[test]
fn test_twelve_items_spill_onto_east_wall() {
    let placements = generate_wall_positions(12);
    assert_eq!(placements.len(), 12);

    assert_eq!(on_wall(&placements, Wall::North).len(), 5);
    assert_eq!(on_wall(&placements, Wall::South).len(), 5);
    assert!(on_wall(&placements, Wall::West).is_empty());

    let east = on_wall(&placements, Wall::East);
    assert_eq!(east.len(), 2);
    assert!(close(east[0].position[2], -3.0));
    assert!(close(east[1].position[2], 3.0));
    for p in &east {
        assert!(close(p.position[0], 12.0));
        assert_eq!(p.rotation, [0.0, -FRAC_PI_2, 0.0]);
    }

    for p in on_wall(&placements, Wall::South) {
        assert_eq!(p.rotation, [0.0, PI, 0.0]);
    }
}

#[test]
fn test_twenty_items_fill_every_wall() {
    let placements = generate_wall_positions(20);
    assert_eq!(placements.len(), 16);

    assert_eq!(on_wall(&placements, Wall::North).len(), 5);
    assert_eq!(on_wall(&placements, Wall::South).len(), 5);
    assert_eq!(on_wall(&placements, Wall::East).len(), 3);

    let west = on_wall(&placements, Wall::West);
    assert_eq!(west.len(), 3);
    let zs: Vec<f64> = west.iter().map(|p| p.position[2]).collect();
    assert!(close(zs[0], -6.0) && close(zs[1], 0.0) && close(zs[2], 6.0));
    for p in &west {
        assert!(close(p.position[0], -12.0));
        assert_eq!(p.rotation, [0.0, FRAC_PI_2, 0.0]);
    }
}

#[test]
fn test_custom_room_uses_its_own_constants() {
    let room = Room {
        width: 20.0,
        depth: 20.0,
        corner_margin: 1.0,
        wall_spacing: 6.0,
        ..Room::REFERENCE
    };
    // usable 18 on every wall → 3 slots each
    assert_eq!(room.total_capacity(), 12);
    let placements = room.wall_positions(4);
    assert_eq!(placements.len(), 4);
    assert_eq!(placements[3].wall, Wall::South);
    assert!(close(placements[3].position[2], 10.0 - 3.0));
}
