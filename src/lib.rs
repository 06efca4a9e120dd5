//! Shadows of Silence - a corridor chase horror minigame
//!
//! Core modules:
//! - `sim`: Frame-stepped chase simulation (input, clock, motion, pursuit, catch)
//! - `prep`: Preparation phase (item catalog, loadout, countdown)
//! - `flow`: Screen flow between landing, preparation and the complex
//! - `scene`: Render adapter contract and presentation-only ambience
//! - `session`: Chase session runner (frame loop, start/stop/reset)
//! - `platform`: Browser/native platform abstraction (time, frame scheduling)
//! - `tuning`: Data-driven chase balance
//! - `settings`: Player preferences

pub mod flow;
pub mod platform;
pub mod prep;
pub mod scene;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use session::ChaseSession;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player turn rate (degrees per second)
    pub const ROT_SPEED: f32 = 2.0;
    /// Player walk speed (units per second)
    pub const MOVE_SPEED: f32 = 2.0;

    /// Shadow approach speed (units per second)
    pub const PURSUIT_SPEED: f32 = 1.2;
    /// Shadow stops closing in at or below this distance
    pub const CHASE_THRESHOLD: f32 = 5.0;
    /// Player is caught strictly inside this distance
    pub const CATCH_RADIUS: f32 = 1.5;

    /// Largest frame delta fed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Spawn points (x, y, z, rotation degrees)
    pub const PLAYER_SPAWN: (f32, f32, f32, f32) = (0.0, 0.0, 0.0, 0.0);
    pub const SHADOW_SPAWN: (f32, f32, f32, f32) = (0.0, 0.0, -15.0, 0.0);

    /// Corridor geometry - the far end sits at z = 2 - length
    pub const CORRIDOR_WIDTH: f32 = 3.0;
    pub const CORRIDOR_LENGTH: f32 = 20.0;
    pub const CORRIDOR_HEIGHT: f32 = 3.0;
    pub const CORRIDOR_NEAR_Z: f32 = 2.0;

    /// Preparation phase
    pub const PREPARATION_SECONDS: u32 = 60;
    pub const MAX_LOADOUT_ITEMS: usize = 3;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees.to_radians()
}

/// Heading (degrees) of a planar direction, measured from +z toward +x
#[inline]
pub fn heading_degrees(dir: Vec2) -> f32 {
    dir.x.atan2(dir.y).to_degrees()
}

/// Distance between two points on the xz-plane
#[inline]
pub fn planar_distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_degrees_axes() {
        assert!(heading_degrees(Vec2::new(0.0, 1.0)).abs() < 1e-5);
        assert!((heading_degrees(Vec2::new(1.0, 0.0)) - 90.0).abs() < 1e-4);
        assert!((heading_degrees(Vec2::new(-1.0, 0.0)) + 90.0).abs() < 1e-4);
        assert!((heading_degrees(Vec2::new(0.0, -1.0)).abs() - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_planar_distance() {
        let d = planar_distance(Vec2::new(3.0, 0.0), Vec2::new(0.0, 4.0));
        assert!((d - 5.0).abs() < 1e-6);
    }
}
