//! First-person movement inside the gallery
//!
//! Keyboard movement on the floor plane followed by axis-aligned clamping to
//! the room interior. Pure functions; the caller owns camera state.

use serde::{Deserialize, Serialize};

use crate::room::{COLLISION_MARGIN, GALLERY_DEPTH, GALLERY_HEIGHT, GALLERY_WIDTH, MAX_DELTA_TIME, MOVE_SPEED};

/// Lowest camera height
const MIN_EYE_HEIGHT: f64 = 1.0;

/// Movement keys held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveInput {
    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Camera position plus heading around the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: [f64; 3],
    /// Radians; 0 looks down the negative z axis
    #[serde(default)]
    pub yaw: f64,
}

/// Unit facing vector projected onto the floor
fn floor_direction(yaw: f64) -> (f64, f64) {
    (-yaw.sin(), -yaw.cos())
}

/// Clamp a position to the walkable interior of the room
pub fn clamp_to_room(position: [f64; 3]) -> [f64; 3] {
    let half_w = GALLERY_WIDTH / 2.0 - COLLISION_MARGIN;
    let half_d = GALLERY_DEPTH / 2.0 - COLLISION_MARGIN;
    [
        position[0].clamp(-half_w, half_w),
        position[1].clamp(MIN_EYE_HEIGHT, GALLERY_HEIGHT - MIN_EYE_HEIGHT),
        position[2].clamp(-half_d, half_d),
    ]
}

/// Advance the camera by one frame.
///
/// `delta_seconds` is capped at [`MAX_DELTA_TIME`] so a stalled frame cannot
/// teleport the camera. Clamping is applied only when the camera moved; an
/// idle frame returns the position untouched.
pub fn step(pose: CameraPose, input: MoveInput, delta_seconds: f64) -> [f64; 3] {
    if input.is_idle() {
        return pose.position;
    }

    let delta = if delta_seconds.is_finite() {
        delta_seconds.clamp(0.0, MAX_DELTA_TIME)
    } else {
        0.0
    };
    let distance = MOVE_SPEED * delta;
    let (dx, dz) = floor_direction(pose.yaw);

    let mut move_x = 0.0;
    let mut move_z = 0.0;

    if input.forward {
        move_x += dx;
        move_z += dz;
    }
    if input.backward {
        move_x -= dx;
        move_z -= dz;
    }
    // Strafe vectors are the facing vector rotated a quarter turn
    if input.left {
        move_x += dz;
        move_z -= dx;
    }
    if input.right {
        move_x -= dz;
        move_z += dx;
    }

    let [x, y, z] = pose.position;
    clamp_to_room([x + move_x * distance, y, z + move_z * distance])
}
