//! Shadow pursuit policy
//!
//! The shadow walks straight at the player while it is farther than the chase
//! threshold. Inside the threshold it lurks: position and heading are held.
//! A player who keeps still out of catch range is therefore never reached;
//! only walking into the shadow ends the chase.

use super::state::Position;
use crate::heading_degrees;
use crate::tuning::Tuning;

/// What the shadow decided this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PursuitMode {
    /// Closing in
    Approach,
    /// Inside the threshold, holding still
    Lurk,
}

/// Pick the shadow's behavior for the current separation
pub fn pursuit_mode(shadow: &Position, player: &Position, tuning: &Tuning) -> PursuitMode {
    if shadow.distance_to(player) > tuning.chase_threshold {
        PursuitMode::Approach
    } else {
        PursuitMode::Lurk
    }
}

/// Advance the shadow one step toward `player`
pub fn pursue(shadow: Position, player: &Position, dt: f32, tuning: &Tuning) -> Position {
    match pursuit_mode(&shadow, player, tuning) {
        PursuitMode::Lurk => shadow,
        PursuitMode::Approach => {
            // distance > threshold >= 0, so the direction is never zero
            let dir = (player.planar() - shadow.planar()).normalize_or_zero();
            let step = dir * tuning.pursuit_speed * dt;
            Position {
                x: shadow.x + step.x,
                y: shadow.y,
                z: shadow.z + step.y,
                rotation: heading_degrees(dir),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_approach_along_z() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(0.0, 0.0, -15.0, 0.0);
        let next = pursue(shadow, &player, 1.0, &tuning);
        assert!(next.x.abs() < 1e-6);
        assert!((next.z - -13.8).abs() < 1e-5);
        assert!(next.rotation.abs() < 1e-5);
    }

    #[test]
    fn test_heading_faces_player() {
        let tuning = Tuning::default();
        let player = Position::new(10.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(0.0, 0.0, 0.0, 0.0);
        let next = pursue(shadow, &player, 0.5, &tuning);
        assert!((next.rotation - 90.0).abs() < 1e-4);
        assert!((next.x - 0.6).abs() < 1e-5);
    }

    /// The shadow never closes the last few units on its own.
    #[test]
    fn test_lurking_quirk_holds_inside_threshold() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(0.0, 0.7, -4.0, 33.0);
        for _ in 0..1000 {
            assert_eq!(pursue(shadow, &player, 0.1, &tuning), shadow);
        }
    }

    #[test]
    fn test_exactly_at_threshold_lurks() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(3.0, 0.0, 4.0, 0.0);
        assert_eq!(pursuit_mode(&shadow, &player, &tuning), PursuitMode::Lurk);
        assert_eq!(pursue(shadow, &player, 1.0, &tuning), shadow);
    }

    #[test]
    fn test_zero_dt_keeps_position_but_turns() {
        let tuning = Tuning::default();
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(-10.0, 0.0, 0.0, 0.0);
        let next = pursue(shadow, &player, 0.0, &tuning);
        assert_eq!(next.x, -10.0);
        assert!((next.rotation - 90.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_holds_within_threshold(
            angle in 0.0f32..std::f32::consts::TAU,
            dist in 0.0f32..=5.0,
            dt in 0.0f32..1.0,
        ) {
            let tuning = Tuning::default();
            let player = Position::new(0.0, 0.0, 0.0, 0.0);
            let shadow = Position::new(angle.cos() * dist, 0.0, angle.sin() * dist, 7.0);
            prop_assume!(shadow.distance_to(&player) <= tuning.chase_threshold);
            prop_assert_eq!(pursue(shadow, &player, dt, &tuning), shadow);
        }

        #[test]
        fn prop_closes_distance_outside_threshold(
            angle in 0.0f32..std::f32::consts::TAU,
            dist in 5.01f32..100.0,
            dt in 0.01f32..1.0,
        ) {
            let tuning = Tuning::default();
            let player = Position::new(0.0, 0.0, 0.0, 0.0);
            let shadow = Position::new(angle.cos() * dist, 0.0, angle.sin() * dist, 0.0);
            prop_assume!(shadow.distance_to(&player) > tuning.chase_threshold);
            let before = shadow.distance_to(&player);
            let after = pursue(shadow, &player, dt, &tuning).distance_to(&player);
            prop_assert!(after < before);
        }
    }
}
