//! Chase simulation tick
//!
//! One call per frame: player step, shadow step, catch check.

use super::collision::check_catch;
use super::input::InputState;
use super::motion::integrate_player;
use super::pursuit::pursue;
use super::state::{ChaseState, GameEvent, SessionPhase};
use crate::tuning::Tuning;

/// Advance the chase by `dt` seconds.
///
/// Only an Active session moves. Returns `GameEvent::Caught` on the tick that
/// ends the session; later calls are no-ops.
pub fn tick(state: &mut ChaseState, input: &InputState, dt: f32, tuning: &Tuning) -> Option<GameEvent> {
    if state.phase != SessionPhase::Active {
        return None;
    }

    let dt = dt.max(0.0);
    let input = input.snapshot();

    state.time_ticks += 1;
    state.elapsed += dt;

    // The shadow chases where the player stood when the frame began
    let prev_player = state.player;

    let mut player = integrate_player(state.player, &input, dt, tuning);
    if let Some(corridor) = &tuning.confine_to {
        player = corridor.confine(player);
    }
    state.player = player;

    state.shadow = pursue(state.shadow, &prev_player, dt, tuning);

    let check = check_catch(&state.player, &state.shadow, tuning.catch_radius);
    if check.caught {
        state.phase = SessionPhase::Over;
        log::info!(
            "Caught by the shadow at distance {:.2} after {:.1}s",
            check.distance,
            state.elapsed
        );
        return Some(GameEvent::Caught {
            distance: check.distance,
            tick: state.time_ticks,
        });
    }

    None
}
