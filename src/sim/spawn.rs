//! Obstacle generation: lanes, sizes, palette, and seedable sampling
//!
//! Sampling goes through `&mut impl Rng` so hosts run a seeded `Pcg32` and
//! tests can replay exact sequences.

use rand::Rng;

use super::state::{Obstacle, Viewport};

/// Obstacle lane y-values. The last entry is the ground lane; the others
/// are elevated "air" lanes.
pub const LANES: [f32; 4] = [360.0, 400.0, 440.0, 480.0];

/// Discrete obstacle widths and heights, sampled independently
pub const OBSTACLE_SIZES: [f32; 5] = [16.0, 24.0, 32.0, 48.0, 64.0];

/// Obstacle fill colors (CSS color names)
pub const PALETTE: [&str; 11] = [
    "crimson",
    "tomato",
    "orangered",
    "goldenrod",
    "seagreen",
    "teal",
    "steelblue",
    "slateblue",
    "rebeccapurple",
    "palevioletred",
    "sienna",
];

/// Resolve a sampled lane to a spawn y.
///
/// The ground lane anchors the obstacle's base to the floor so the tallest
/// size never clips below it; elevated lanes sit one pixel above the raw
/// lane value.
pub fn lane_y(lane_index: usize, height: f32, floor_y: f32) -> f32 {
    if lane_index == LANES.len() - 1 {
        floor_y - height
    } else {
        LANES[lane_index] - 1.0
    }
}

/// Sample a fresh obstacle at the viewport's right edge.
pub fn spawn_obstacle(rng: &mut impl Rng, view: &Viewport) -> Obstacle {
    let lane = rng.random_range(0..LANES.len());
    let width = OBSTACLE_SIZES[rng.random_range(0..OBSTACLE_SIZES.len())];
    let height = OBSTACLE_SIZES[rng.random_range(0..OBSTACLE_SIZES.len())];
    let color = PALETTE[rng.random_range(0..PALETTE.len())];

    let obstacle = Obstacle {
        x: view.width,
        y: lane_y(lane, height, view.floor_y()),
        width,
        height,
        color,
    };
    log::debug!(
        "Spawned {}x{} {} obstacle in lane {} at y={}",
        obstacle.width,
        obstacle.height,
        obstacle.color,
        lane,
        obstacle.y
    );
    obstacle
}
