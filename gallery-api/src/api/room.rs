//! Room geometry endpoint

use axum::{extract::State, Json};
use gallery_common::{Room, Wall};
use serde::Serialize;

use crate::AppState;

/// Artwork slots per wall
#[derive(Debug, Serialize)]
pub struct Capacities {
    pub north: usize,
    pub south: usize,
    pub east: usize,
    pub west: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub room: Room,
    pub capacities: Capacities,
}

/// GET /api/room
pub async fn get_room(State(state): State<AppState>) -> Json<RoomResponse> {
    let room = state.room;
    Json(RoomResponse {
        room,
        capacities: Capacities {
            north: room.capacity(Wall::North),
            south: room.capacity(Wall::South),
            east: room.capacity(Wall::East),
            west: room.capacity(Wall::West),
            total: room.total_capacity(),
        },
    })
}
