//! Catch detection
//!
//! The only collision in the complex: the shadow touching the player.

use super::state::Position;

/// Result of a catch check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchCheck {
    /// Whether the player is inside the catch radius
    pub caught: bool,
    /// Ground-plane separation
    pub distance: f32,
}

/// Check whether `shadow` has caught `player`.
///
/// The radius is exclusive: standing exactly `catch_radius` away is safe.
pub fn check_catch(player: &Position, shadow: &Position, catch_radius: f32) -> CatchCheck {
    let distance = player.distance_to(shadow);
    CatchCheck {
        caught: distance < catch_radius,
        distance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inside_radius_is_caught() {
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(1.0, 0.0, 0.0, 0.0);
        let check = check_catch(&player, &shadow, 1.5);
        assert!(check.caught);
        assert!((check.distance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_on_radius_is_safe() {
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(0.0, 0.0, -1.5, 0.0);
        assert!(!check_catch(&player, &shadow, 1.5).caught);
    }

    #[test]
    fn test_height_does_not_matter() {
        let player = Position::new(0.0, 0.0, 0.0, 0.0);
        let shadow = Position::new(0.5, 3.0, 0.5, 0.0);
        assert!(check_catch(&player, &shadow, 1.5).caught);
    }

    proptest! {
        #[test]
        fn prop_catch_iff_inside_radius(
            gap in 0.0f32..3.0,
            angle in 0.0f32..360.0,
            px in -20.0f32..20.0,
            pz in -20.0f32..20.0,
        ) {
            let player = Position::new(px, 0.0, pz, 0.0);
            let (sin, cos) = angle.to_radians().sin_cos();
            let shadow = Position::new(px + gap * sin, 0.0, pz + gap * cos, 0.0);
            let check = check_catch(&player, &shadow, 1.5);
            prop_assert_eq!(check.caught, check.distance < 1.5);
            // Well clear of the boundary the rounding cannot flip the answer
            if gap < 1.49 {
                prop_assert!(check.caught);
            }
            if gap > 1.51 {
                prop_assert!(!check.caught);
            }
        }
    }
}
