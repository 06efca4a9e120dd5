//! Data-driven chase balance
//!
//! Every gameplay number the tick reads lives here so a level can ship its own
//! JSON without touching code. Missing fields fall back to `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Corridor, Position};

/// Chase balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player turn rate (degrees/sec)
    pub rot_speed: f32,
    /// Player walk speed (units/sec)
    pub move_speed: f32,
    /// Shadow approach speed (units/sec)
    pub pursuit_speed: f32,
    /// Shadow lurks at or below this distance
    pub chase_threshold: f32,
    /// Catch distance (exclusive)
    pub catch_radius: f32,
    /// Frame delta cap (seconds)
    pub max_frame_dt: f32,
    /// Player spawn
    pub player_spawn: Position,
    /// Shadow spawn
    pub shadow_spawn: Position,
    /// Clamp the player into this corridor after each step
    pub confine_to: Option<Corridor>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            rot_speed: ROT_SPEED,
            move_speed: MOVE_SPEED,
            pursuit_speed: PURSUIT_SPEED,
            chase_threshold: CHASE_THRESHOLD,
            catch_radius: CATCH_RADIUS,
            max_frame_dt: MAX_FRAME_DT,
            player_spawn: Position::from_tuple(PLAYER_SPAWN),
            shadow_spawn: Position::from_tuple(SHADOW_SPAWN),
            confine_to: None,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON (unspecified fields keep their defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Tuning>(json).map(Tuning::validated)
    }

    /// Replace values that would break the chase with their defaults
    pub fn validated(mut self) -> Self {
        let defaults = Tuning::default();

        fn fix(name: &str, value: &mut f32, fallback: f32) {
            if !value.is_finite() || *value < 0.0 {
                log::warn!("Tuning `{}` = {} is invalid, using {}", name, value, fallback);
                *value = fallback;
            }
        }

        fix("rot_speed", &mut self.rot_speed, defaults.rot_speed);
        fix("move_speed", &mut self.move_speed, defaults.move_speed);
        fix("pursuit_speed", &mut self.pursuit_speed, defaults.pursuit_speed);
        fix("chase_threshold", &mut self.chase_threshold, defaults.chase_threshold);
        fix("catch_radius", &mut self.catch_radius, defaults.catch_radius);
        fix("max_frame_dt", &mut self.max_frame_dt, defaults.max_frame_dt);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let t = Tuning::default();
        assert_eq!(t.rot_speed, 2.0);
        assert_eq!(t.move_speed, 2.0);
        assert_eq!(t.pursuit_speed, 1.2);
        assert_eq!(t.chase_threshold, 5.0);
        assert_eq!(t.catch_radius, 1.5);
        assert_eq!(t.shadow_spawn.z, -15.0);
        assert!(t.confine_to.is_none());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let t = Tuning::from_json(r#"{ "pursuit_speed": 3.0 }"#).unwrap();
        assert_eq!(t.pursuit_speed, 3.0);
        assert_eq!(t.catch_radius, CATCH_RADIUS);
    }

    #[test]
    fn test_negative_values_are_replaced() {
        let t = Tuning::from_json(r#"{ "catch_radius": -1.0, "move_speed": -4 }"#).unwrap();
        assert_eq!(t.catch_radius, CATCH_RADIUS);
        assert_eq!(t.move_speed, MOVE_SPEED);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
    }
}
