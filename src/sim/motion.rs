//! Player motion integration
//!
//! Turning is applied first; the step then follows the *new* heading.

use serde::{Deserialize, Serialize};

use super::input::{Action, InputState};
use super::state::Position;
use crate::consts::*;
use crate::deg_to_rad;
use crate::tuning::Tuning;

/// Advance the player one step from held input
pub fn integrate_player(pos: Position, input: &InputState, dt: f32, tuning: &Tuning) -> Position {
    let mut rotation_delta = 0.0;
    if input.is_held(Action::TurnLeft) {
        rotation_delta += tuning.rot_speed;
    }
    if input.is_held(Action::TurnRight) {
        rotation_delta -= tuning.rot_speed;
    }

    // Negative z is "ahead" at heading 0
    let mut forward_speed = 0.0;
    if input.is_held(Action::Forward) {
        forward_speed -= tuning.move_speed;
    }
    if input.is_held(Action::Backward) {
        forward_speed += tuning.move_speed;
    }

    let rotation = pos.rotation + rotation_delta * dt;
    let radians = deg_to_rad(rotation);
    let dx = forward_speed * radians.sin() * dt;
    let dz = forward_speed * radians.cos() * dt;

    Position {
        x: pos.x + dx,
        y: pos.y,
        z: pos.z + dz,
        rotation,
    }
}

/// Walkable corridor footprint on the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corridor {
    pub width: f32,
    pub length: f32,
    pub height: f32,
    /// z of the entrance; the corridor runs toward negative z
    pub near_z: f32,
}

impl Default for Corridor {
    fn default() -> Self {
        Self {
            width: CORRIDOR_WIDTH,
            length: CORRIDOR_LENGTH,
            height: CORRIDOR_HEIGHT,
            near_z: CORRIDOR_NEAR_Z,
        }
    }
}

impl Corridor {
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn far_z(&self) -> f32 {
        self.near_z - self.length
    }

    /// z of the corridor midpoint (where the floor is centered)
    pub fn center_z(&self) -> f32 {
        self.near_z - self.length / 2.0
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x.abs() <= self.half_width() && pos.z <= self.near_z && pos.z >= self.far_z()
    }

    /// Clamp a position onto the corridor floor (heading untouched)
    pub fn confine(&self, pos: Position) -> Position {
        let hw = self.half_width();
        Position {
            x: pos.x.clamp(-hw, hw),
            z: pos.z.clamp(self.far_z(), self.near_z),
            ..pos
        }
    }
}
