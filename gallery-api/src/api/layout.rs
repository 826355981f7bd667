//! Wall layout endpoints
//!
//! `GET /api/layout?count=N` returns bare placements; `POST /api/layout/assign`
//! pairs a caller-supplied artwork list with placements so clients never
//! repeat the layout arithmetic.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};
use gallery_common::{checked_count, Assignment, Placement, WallCounts};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Query parameters for layout generation
#[derive(Debug, Deserialize)]
pub struct LayoutQuery {
    /// Artwork count; signed so negative input can be rejected explicitly
    pub count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub requested: usize,
    pub walls: WallCounts,
    pub placements: Vec<Placement>,
}

/// GET /api/layout?count=N
pub async fn get_layout(
    State(state): State<AppState>,
    query: Result<Query<LayoutQuery>, QueryRejection>,
) -> ApiResult<Json<LayoutResponse>> {
    let Query(query) = query?;
    let raw = query
        .count
        .ok_or_else(|| ApiError::BadRequest("Missing required query parameter: count".to_string()))?;
    let count = checked_count(raw)?;

    let walls = state.room.wall_counts(count);
    let placements = state.room.wall_positions(count);
    debug!(count, placed = placements.len(), "Generated layout");

    Ok(Json(LayoutResponse {
        requested: count,
        walls,
        placements,
    }))
}

/// Artwork list to lay out; items are opaque and only their order matters
#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub items: Vec<Value>,
}

/// POST /api/layout/assign
pub async fn assign_layout(
    State(state): State<AppState>,
    body: Result<Json<AssignRequest>, JsonRejection>,
) -> ApiResult<Json<Assignment<Value>>> {
    let Json(request) = body?;
    let assignment = state.room.assign(request.items);
    debug!(
        placed = assignment.placed.len(),
        dropped = assignment.dropped,
        "Assigned artwork to walls"
    );
    Ok(Json(assignment))
}
