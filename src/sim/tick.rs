//! One simulation step: posture, physics, scroll, scoring, collision
//!
//! The driver calls `tick` once per animation frame with a snapshot of the
//! held inputs, and stops scheduling frames when it returns `Halt`. Restart
//! goes through `RunState::restart`, never through `tick`.

use super::physics;
use super::posture;
use super::state::{RunPhase, RunState};
use crate::consts::*;

/// Held-input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump action currently held
    pub jump: bool,
    /// Duck action currently held
    pub duck: bool,
}

/// What the driver should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Schedule the next frame
    Continue,
    /// The run is over; stop scheduling frames until a restart
    Halt,
}

/// Advance the run by one tick.
///
/// Order per tick: duck, gravity, jump, then scroll the obstacle, accrue
/// score, ramp speed, test for a collision, and recycle the obstacle once
/// it has fully left the screen. Ticking a dead run is a gameplay no-op.
pub fn tick(state: &mut RunState, input: &TickInput) -> TickResult {
    if state.phase == RunPhase::Dead {
        return TickResult::Halt;
    }

    state.time_ticks += 1;
    let floor_y = state.view.floor_y();

    posture::apply_duck(&mut state.player, input.duck, floor_y);
    physics::apply_gravity(&mut state.player, state.configs.gravity, floor_y);
    physics::apply_jump(&mut state.player, input.jump);

    state.obstacle.x -= state.configs.speed;
    state.stats.score += SCORE_PER_TICK;
    if state.configs.speed < state.configs.max_speed {
        state.configs.speed =
            (state.configs.speed + SPEED_RAMP_PER_TICK).min(state.configs.max_speed);
    }

    if state.player.hitbox().overlaps(&state.obstacle.hitbox()) {
        if state.stats.score > state.stats.high_score {
            state.stats.high_score = state.stats.score;
        }
        state.phase = RunPhase::Dead;
        log::info!(
            "Run over after {} ticks: score {:.1}, best {:.1}",
            state.time_ticks,
            state.stats.score,
            state.stats.high_score
        );
        return TickResult::Halt;
    }

    // A near miss is always survivable: recycling touches neither score
    // nor speed.
    if state.obstacle.x + state.obstacle.width < 0.0 {
        state.respawn_obstacle();
    }

    TickResult::Continue
}
