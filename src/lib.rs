//! Hurdler - a single-lane endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, posture, spawning, collision, scoring)
//! - `input`: Logical actions, held-key state, and rebindable key mappings
//! - `highscore`: Best-score persistence
//! - `renderer`: Canvas 2D drawing (wasm only)
//!
//! The simulation is a library invoked by a thin host: one `tick` per
//! animation frame, with the host deciding whether to schedule the next one.

pub mod highscore;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;

pub use input::{Action, Bindings, InputState};

/// Game configuration constants
pub mod consts {
    /// Player geometry - horizontally pinned at the left edge
    pub const PLAYER_X: f32 = 0.0;
    pub const PLAYER_WIDTH: f32 = 64.0;
    pub const PLAYER_HEIGHT: f32 = 64.0;
    /// Fill color for the player rectangle
    pub const PLAYER_COLOR: &str = "black";

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 2.0;
    /// Upward takeoff speed (pixels/tick)
    pub const JUMP_IMPULSE: f32 = 16.0;
    /// Hold boost per frame is `jump_hold_frames / JUMP_BOOST_DIVISOR`
    pub const JUMP_BOOST_DIVISOR: f32 = 75.0;

    /// World scroll speed at the start of a run (pixels/tick)
    pub const START_SPEED: f32 = 5.0;
    /// Scroll speed cap
    pub const MAX_SPEED: f32 = 50.0;
    /// Linear speed ramp per tick until the cap
    pub const SPEED_RAMP_PER_TICK: f32 = 0.001;

    /// Score accrued per tick while running
    pub const SCORE_PER_TICK: f32 = 0.1;

    /// Canvas is inset from the window edges by this many pixels
    pub const CANVAS_MARGIN: f32 = 10.0;
}
