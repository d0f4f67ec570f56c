//! Ducking: hitbox height changes while grounded
//!
//! Runs before the physics step each tick so gravity and landing use the
//! already-updated hitbox height.

use super::state::Player;

/// Apply the duck input for this tick.
///
/// Held while grounded: halve the hitbox and keep the feet on the floor.
/// Released: restore full height anywhere (physics re-snaps a grounded
/// player on the same tick). Held while airborne: ignored.
pub fn apply_duck(player: &mut Player, held: bool, floor_y: f32) {
    if held && player.grounded {
        player.current_height = player.height / 2.0;
        player.y = floor_y - player.current_height;
    } else if !held {
        player.current_height = player.height;
    }
}
