//! First-person movement endpoint

use axum::{extract::rejection::JsonRejection, Json};
use gallery_common::navigation::{step, CameraPose, MoveInput};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub position: [f64; 3],
    #[serde(default)]
    pub yaw: f64,
    #[serde(default)]
    pub input: MoveInput,
    /// Frame time in seconds
    pub delta: f64,
}

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub position: [f64; 3],
}

/// POST /api/navigation/step
pub async fn navigation_step(
    body: Result<Json<StepRequest>, JsonRejection>,
) -> ApiResult<Json<StepResponse>> {
    let Json(request) = body?;

    if request.position.iter().any(|v| !v.is_finite()) || !request.yaw.is_finite() {
        return Err(ApiError::BadRequest(
            "position and yaw must be finite numbers".to_string(),
        ));
    }

    let pose = CameraPose {
        position: request.position,
        yaw: request.yaw,
    };

    Ok(Json(StepResponse {
        position: step(pose, request.input, request.delta),
    }))
}
