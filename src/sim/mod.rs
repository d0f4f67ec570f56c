//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed logical step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod posture;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use physics::{apply_gravity, apply_jump};
pub use posture::apply_duck;
pub use spawn::{LANES, OBSTACLE_SIZES, PALETTE, lane_y, spawn_obstacle};
pub use state::{Configs, Obstacle, Player, RunPhase, RunState, Stats, Viewport};
pub use tick::{TickInput, TickResult, tick};
