//! Chase state and core simulation types
//!
//! Everything the tick reads or writes lives in `ChaseState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a chase session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the start control
    #[default]
    Idle,
    /// Chase running
    Active,
    /// Player was caught (terminal for this session)
    Over,
}

/// Entity placement: `y` is carried along but never integrated
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Heading in degrees, unnormalized
    pub rotation: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32, rotation: f32) -> Self {
        Self { x, y, z, rotation }
    }

    pub const fn from_tuple((x, y, z, rotation): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, z, rotation)
    }

    /// Ground-plane coordinates as (x, z)
    #[inline]
    pub fn planar(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Distance to another position on the ground plane
    #[inline]
    pub fn distance_to(&self, other: &Position) -> f32 {
        crate::planar_distance(self.planar(), other.planar())
    }
}

/// Events produced by a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The shadow reached the player; emitted once per session
    Caught {
        /// Distance at the moment of the catch
        distance: f32,
        /// Tick on which it happened
        tick: u64,
    },
}

/// Complete chase state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaseState {
    pub player: Position,
    pub shadow: Position,
    pub phase: SessionPhase,
    /// Ticks advanced while Active
    pub time_ticks: u64,
    /// Simulated seconds while Active
    pub elapsed: f32,
}

impl ChaseState {
    /// Fresh, idle state at the tuning's spawn points
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            player: tuning.player_spawn,
            shadow: tuning.shadow_spawn,
            phase: SessionPhase::Idle,
            time_ticks: 0,
            elapsed: 0.0,
        }
    }

    /// Idle → Active. Returns false from any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::Idle {
            return false;
        }
        self.phase = SessionPhase::Active;
        true
    }

    /// Reinitialize positions and re-enter Active
    pub fn reset(&mut self, tuning: &Tuning) {
        *self = Self::new(tuning);
        self.phase = SessionPhase::Active;
    }

    pub fn distance_to_shadow(&self) -> f32 {
        self.player.distance_to(&self.shadow)
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_from_idle() {
        let tuning = Tuning::default();
        let mut state = ChaseState::new(&tuning);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert!(state.start());
        assert_eq!(state.phase, SessionPhase::Active);
        assert!(!state.start());

        state.phase = SessionPhase::Over;
        assert!(!state.start());
        assert_eq!(state.phase, SessionPhase::Over);
    }

    #[test]
    fn test_reset_restores_spawns() {
        let tuning = Tuning::default();
        let mut state = ChaseState::new(&tuning);
        state.start();
        state.player = Position::new(1.0, 0.0, -7.0, 45.0);
        state.shadow = Position::new(1.0, 0.0, -8.0, 10.0);
        state.phase = SessionPhase::Over;
        state.time_ticks = 42;

        state.reset(&tuning);
        assert_eq!(state.phase, SessionPhase::Active);
        assert_eq!(state.player, tuning.player_spawn);
        assert_eq!(state.shadow, tuning.shadow_spawn);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_distance_ignores_height() {
        let a = Position::new(0.0, 10.0, 0.0, 0.0);
        let b = Position::new(3.0, -2.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
    }
}
