//! Render adapter contract
//!
//! The page draws the corridor; the crate hands it a `RenderFrame` per tick.
//! Ambience is presentation only and never reaches the simulation.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{ChaseState, Corridor, Position, SessionPhase};

/// Shadow hover height above the floor
pub const SHADOW_HOVER: f32 = 0.5;

/// Cosmetic animation values for the current instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ambience {
    /// Offset added to the drawn shadow: x sideways, y vertical bob
    pub shadow_sway: Vec2,
    /// Corridor point-light intensity
    pub light_intensity: f32,
}

impl Ambience {
    /// Ambience at `time` seconds
    pub fn at(time: f32, reduced_motion: bool) -> Self {
        if reduced_motion {
            return Self::still();
        }
        Self {
            shadow_sway: Vec2::new(time.sin() * 1.2, (time * 0.7).sin() * 0.3),
            light_intensity: 1.0 + (time * 2.0).sin() * 0.3,
        }
    }

    pub fn still() -> Self {
        Self {
            shadow_sway: Vec2::ZERO,
            light_intensity: 1.0,
        }
    }
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderFrame {
    pub player: Position,
    pub shadow: Position,
    pub phase: SessionPhase,
    /// Player-shadow separation on the ground plane
    pub distance: f32,
    pub ambience: Ambience,
}

impl RenderFrame {
    pub fn capture(state: &ChaseState, ambience: Ambience) -> Self {
        Self {
            player: state.player,
            shadow: state.shadow,
            phase: state.phase,
            distance: state.distance_to_shadow(),
            ambience,
        }
    }

    /// Where to draw the shadow (sim position, hover height and sway)
    pub fn shadow_draw_position(&self) -> (f32, f32, f32) {
        (
            self.shadow.x + self.ambience.shadow_sway.x,
            self.shadow.y + SHADOW_HOVER + self.ambience.shadow_sway.y,
            self.shadow.z,
        )
    }
}

/// Consumer of per-tick frames. Nothing flows back into the simulation.
pub trait RenderAdapter {
    fn present(&mut self, frame: &RenderFrame);

    /// Static scene geometry, sent once when a session begins
    fn build_corridor(&mut self, _corridor: &Corridor) {}
}

/// Recording adapter (tests, headless runs)
impl RenderAdapter for Vec<RenderFrame> {
    fn present(&mut self, frame: &RenderFrame) {
        self.push(*frame);
    }
}

/// Logs a line every `every` frames
#[derive(Debug)]
pub struct LogRenderer {
    every: u64,
    frames: u64,
}

impl LogRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }
}

impl RenderAdapter for LogRenderer {
    fn present(&mut self, frame: &RenderFrame) {
        if self.frames % self.every == 0 || frame.phase == SessionPhase::Over {
            log::info!(
                "frame {}: player ({:.2}, {:.2}) @ {:.1}° | shadow ({:.2}, {:.2}) | gap {:.2} | {:?}",
                self.frames,
                frame.player.x,
                frame.player.z,
                frame.player.rotation,
                frame.shadow.x,
                frame.shadow.z,
                frame.distance,
                frame.phase
            );
        }
        self.frames += 1;
    }

    fn build_corridor(&mut self, corridor: &Corridor) {
        log::info!(
            "Corridor {}x{}x{} from z={} to z={}",
            corridor.width,
            corridor.height,
            corridor.length,
            corridor.near_z,
            corridor.far_z()
        );
    }
}
