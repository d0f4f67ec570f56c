//! Vertical physics: gravity integration and the variable-height jump
//!
//! Semi-implicit Euler with a predictive floor clamp. The floor check uses
//! the velocity the player already has, so a landing resolves exactly within
//! the tick it would otherwise cross the floor.

use super::state::Player;
use crate::consts::JUMP_BOOST_DIVISOR;

/// Advance the player's vertical position by one tick.
///
/// Airborne: accelerate by `gravity`, then move by the new velocity.
/// At or past the floor: zero the velocity and snap the feet onto the floor.
pub fn apply_gravity(player: &mut Player, gravity: f32, floor_y: f32) {
    if player.y + player.current_height + player.dy < floor_y {
        player.dy += gravity;
        player.y += player.dy;
        player.grounded = false;
    } else {
        player.dy = 0.0;
        player.y = floor_y - player.current_height;
        player.grounded = true;
    }
}

/// Apply the jump input for this tick.
///
/// A grounded press begins a jump at full impulse. While the input stays
/// held and `jump_hold_frames` has not exceeded the impulse, each tick adds
/// a small boost on top of the impulse, so longer holds jump higher within
/// a bounded window. Releasing closes the window without cancelling upward
/// velocity; holding past the window does nothing further. The counter only
/// resets on release, so a fresh jump requires letting go of the key first.
pub fn apply_jump(player: &mut Player, held: bool) {
    if held && player.grounded && player.jump_hold_frames == 0 {
        player.jump_hold_frames = 1;
        player.dy = -player.jump_impulse;
    } else if held
        && player.jump_hold_frames > 0
        && player.jump_hold_frames as f32 <= player.jump_impulse
    {
        player.jump_hold_frames += 1;
        player.dy = -player.jump_impulse - player.jump_hold_frames as f32 / JUMP_BOOST_DIVISOR;
    } else if !held {
        player.jump_hold_frames = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 600.0;

    fn airborne_player() -> Player {
        let mut p = Player::new(FLOOR);
        p.y = 0.0;
        p.dy = 0.0;
        p.grounded = false;
        p
    }

    #[test]
    fn test_gravity_first_tick_from_rest() {
        let mut p = airborne_player();
        apply_gravity(&mut p, 2.0, FLOOR);
        assert_eq!(p.dy, 2.0);
        assert_eq!(p.y, 2.0);
        assert!(!p.grounded);
    }

    #[test]
    fn test_gravity_accelerates_monotonically_while_airborne() {
        let mut p = airborne_player();
        let mut prev_dy = p.dy;
        for _ in 0..10 {
            apply_gravity(&mut p, 2.0, FLOOR);
            assert_eq!(p.dy, prev_dy + 2.0);
            prev_dy = p.dy;
        }
    }

    #[test]
    fn test_fall_snaps_onto_floor() {
        // From y=0 with h=64 and g=2: airborne through tick 22 (y=506,
        // dy=44), then 506+64+44 >= 600 snaps on tick 23.
        let mut p = airborne_player();
        let mut ticks = 0;
        while !p.grounded {
            apply_gravity(&mut p, 2.0, FLOOR);
            ticks += 1;
            assert!(ticks < 100, "never landed");
        }
        assert_eq!(ticks, 23);
        assert_eq!(p.y, 536.0);
        assert_eq!(p.dy, 0.0);
    }

    #[test]
    fn test_landing_is_idempotent() {
        let mut p = Player::new(FLOOR);
        for _ in 0..10 {
            apply_gravity(&mut p, 2.0, FLOOR);
            apply_jump(&mut p, false);
            assert_eq!(p.y, FLOOR - p.current_height);
            assert_eq!(p.dy, 0.0);
            assert!(p.grounded);
        }
    }

    #[test]
    fn test_tap_jump_sets_impulse_then_coasts() {
        let mut p = Player::new(FLOOR);

        // Held for one tick: takeoff velocity set, no movement yet
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.dy, -16.0);
        assert_eq!(p.jump_hold_frames, 1);
        assert_eq!(p.y, 536.0);

        // Released: window closes, motion is gravity only
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, false);
        assert_eq!(p.jump_hold_frames, 0);
        assert_eq!(p.dy, -14.0);
        assert_eq!(p.y, 522.0);

        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, false);
        assert_eq!(p.dy, -12.0);
        assert_eq!(p.y, 510.0);
    }

    #[test]
    fn test_hold_boosts_velocity_each_frame() {
        let mut p = Player::new(FLOOR);

        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.dy, -16.0);

        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.jump_hold_frames, 2);
        assert!((p.dy - (-16.0 - 2.0 / 75.0)).abs() < 1e-6);

        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.jump_hold_frames, 3);
        assert!((p.dy - (-16.0 - 3.0 / 75.0)).abs() < 1e-6);
    }

    #[test]
    fn test_boost_window_closes_after_impulse_frames() {
        let mut p = Player::new(FLOOR);
        for _ in 0..40 {
            apply_gravity(&mut p, 2.0, FLOOR);
            apply_jump(&mut p, true);
        }
        // Window: counter stops one past the impulse and stays there
        assert_eq!(p.jump_hold_frames, 17);

        // With the window closed, holding no longer overwrites dy
        let dy_before = p.dy;
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.dy, dy_before + 2.0);
        assert_eq!(p.jump_hold_frames, 17);
    }

    #[test]
    fn test_no_rejump_until_release() {
        let mut p = Player::new(FLOOR);
        // Hold through a full jump until landing
        let mut ticks = 0;
        loop {
            apply_gravity(&mut p, 2.0, FLOOR);
            apply_jump(&mut p, true);
            ticks += 1;
            if ticks > 2 && p.grounded {
                break;
            }
            assert!(ticks < 1000, "never landed");
        }

        // Still holding on the ground: nothing happens
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert!(p.grounded);
        assert_eq!(p.dy, 0.0);

        // Release, then press again: a new jump begins
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, false);
        assert_eq!(p.jump_hold_frames, 0);
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        assert_eq!(p.dy, -16.0);
        assert_eq!(p.jump_hold_frames, 1);
    }

    #[test]
    fn test_holding_while_airborne_after_window_does_not_restart_jump() {
        let mut p = airborne_player();
        p.y = 300.0;
        apply_gravity(&mut p, 2.0, FLOOR);
        apply_jump(&mut p, true);
        // Airborne with frames at 0: neither branch fires
        assert_eq!(p.jump_hold_frames, 0);
        assert_eq!(p.dy, 2.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        /// Lowest y reached over a jump holding the input for `hold_ticks`
        fn jump_peak(gravity: f32, impulse: f32, hold_ticks: u32) -> f32 {
            let mut p = Player::new(FLOOR);
            p.jump_impulse = impulse;
            let mut min_y = p.y;
            for t in 0..600u32 {
                apply_gravity(&mut p, gravity, FLOOR);
                apply_jump(&mut p, t < hold_ticks);
                min_y = min_y.min(p.y);
                if t > hold_ticks && p.grounded {
                    break;
                }
            }
            min_y
        }

        proptest! {
            /// A held jump always peaks strictly above an immediately
            /// released one, for any reasonable gravity/impulse pair
            #[test]
            fn prop_held_jump_outpeaks_tap(
                gravity in 1.0f32..4.0,
                impulse in 8.0f32..24.0,
            ) {
                let tap = jump_peak(gravity, impulse, 1);
                let held = jump_peak(gravity, impulse, 40);
                prop_assert!(held < tap);
            }

            /// Airborne velocity grows by exactly the gravity constant
            #[test]
            fn prop_airborne_acceleration_is_gravity(gravity in 0.5f32..8.0) {
                let mut p = Player::new(FLOOR);
                p.y = 0.0;
                p.grounded = false;
                let mut prev_dy = p.dy;
                for _ in 0..5 {
                    apply_gravity(&mut p, gravity, FLOOR);
                    prop_assert!((p.dy - (prev_dy + gravity)).abs() < 1e-4);
                    prev_dy = p.dy;
                }
            }
        }
    }
}
