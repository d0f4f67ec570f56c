//! Run state and core simulation types
//!
//! Everything a tick mutates lives here; no ambient globals. The run state
//! machine (`RunPhase` transitions) is owned by `tick` and `restart` only.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Rect;
use super::spawn;
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunPhase {
    /// Active gameplay
    Running,
    /// Run ended by a collision, waiting for a restart
    Dead,
}

/// The player rectangle. Horizontally pinned; the world scrolls past instead.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    /// Full standing height
    pub height: f32,
    /// Hitbox height this tick (half of `height` while ducking)
    pub current_height: f32,
    /// Vertical velocity, positive points down
    pub dy: f32,
    /// Ticks the jump input has been held since takeoff (0 = window closed)
    pub jump_hold_frames: u32,
    /// Takeoff speed magnitude
    pub jump_impulse: f32,
    pub grounded: bool,
}

impl Player {
    /// Create a player standing on the floor at full height
    pub fn new(floor_y: f32) -> Self {
        Self {
            x: PLAYER_X,
            y: floor_y - PLAYER_HEIGHT,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            current_height: PLAYER_HEIGHT,
            dy: 0.0,
            jump_hold_frames: 0,
            jump_impulse: JUMP_IMPULSE,
            grounded: true,
        }
    }

    /// Put the player back on the floor at full height with zero velocity
    pub fn reset(&mut self, floor_y: f32) {
        self.current_height = self.height;
        self.y = floor_y - self.current_height;
        self.dy = 0.0;
        self.jump_hold_frames = 0;
        self.grounded = true;
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(
            Vec2::new(self.x, self.y),
            Vec2::new(self.width, self.current_height),
        )
    }
}

/// A scrolling obstacle. Shape and lane are fixed at spawn; only `x` moves.
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// CSS color name drawn from the spawn palette
    pub color: &'static str,
}

impl Obstacle {
    pub fn hitbox(&self) -> Rect {
        Rect::new(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

/// Tunable run parameters
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Configs {
    /// Current scroll speed (pixels/tick), ramps up to `max_speed`
    pub speed: f32,
    pub max_speed: f32,
    pub gravity: f32,
}

impl Default for Configs {
    fn default() -> Self {
        Self {
            speed: START_SPEED,
            max_speed: MAX_SPEED,
            gravity: GRAVITY,
        }
    }
}

/// Score bookkeeping
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Stats {
    /// Score of the current run
    pub score: f32,
    /// Best score across runs; loaded/persisted by the host
    pub high_score: f32,
}

/// Logical screen dimensions; the floor is the bottom edge
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height
    }
}

/// Complete state of one run (deterministic for a given seed and input trace)
#[derive(Debug, Clone, Serialize)]
pub struct RunState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    pub view: Viewport,
    pub phase: RunPhase,
    pub player: Player,
    pub obstacle: Obstacle,
    pub configs: Configs,
    pub stats: Stats,
    /// Ticks elapsed in the current run
    pub time_ticks: u64,
}

impl RunState {
    /// Create a new run with the given seed: player grounded at the left
    /// edge, first obstacle spawned at the right edge.
    pub fn new(seed: u64, view: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let player = Player::new(view.floor_y());
        let obstacle = spawn::spawn_obstacle(&mut rng, &view);

        Self {
            seed,
            rng,
            view,
            phase: RunPhase::Running,
            player,
            obstacle,
            configs: Configs::default(),
            stats: Stats::default(),
            time_ticks: 0,
        }
    }

    /// Replace the obstacle with a freshly sampled one at the right edge
    pub fn respawn_obstacle(&mut self) {
        self.obstacle = spawn::spawn_obstacle(&mut self.rng, &self.view);
    }

    /// Begin a new run after death. Keeps the session high score; resets
    /// player, obstacle, speed, score, and the tick counter. Does nothing
    /// unless the run is over.
    pub fn restart(&mut self) {
        if self.phase != RunPhase::Dead {
            return;
        }
        self.player.reset(self.view.floor_y());
        self.respawn_obstacle();
        self.configs.speed = START_SPEED;
        self.stats.score = 0.0;
        self.time_ticks = 0;
        self.phase = RunPhase::Running;
    }
}
