//! Canvas 2D rendering
//!
//! Draws straight from the simulation state each frame: obstacle, player,
//! score line, and the death overlay. All coordinates are canvas pixels
//! with the origin at the top left.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{RunPhase, RunState};

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d, width: f32, height: f32) -> Self {
        Self {
            ctx,
            width: width as f64,
            height: height as f64,
        }
    }

    /// Draw one frame of the run
    pub fn draw(&self, state: &RunState) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);

        let obstacle = &state.obstacle;
        self.ctx.set_fill_style_str(obstacle.color);
        self.ctx.fill_rect(
            obstacle.x as f64,
            obstacle.y as f64,
            obstacle.width as f64,
            obstacle.height as f64,
        );

        // The drawn player shrinks with the hitbox while ducking
        let player = &state.player;
        self.ctx.set_fill_style_str(PLAYER_COLOR);
        self.ctx.fill_rect(
            player.x as f64,
            player.y as f64,
            player.width as f64,
            player.current_height as f64,
        );

        self.draw_hud(state);

        if state.phase == RunPhase::Dead {
            self.draw_death_screen(state);
        }
    }

    fn draw_hud(&self, state: &RunState) {
        self.ctx.set_fill_style_str("black");
        self.ctx.set_font("20px monospace");
        self.ctx.set_text_align("left");
        let line = format!(
            "Score: {}  Best: {}",
            state.stats.score.floor() as u32,
            state.stats.high_score.floor() as u32
        );
        let _ = self.ctx.fill_text(&line, 10.0, 30.0);
    }

    fn draw_death_screen(&self, state: &RunState) {
        let cx = self.width / 2.0;
        let cy = self.height / 2.0;

        self.ctx.set_fill_style_str("black");
        self.ctx.set_text_align("center");
        self.ctx.set_font("48px monospace");
        let _ = self.ctx.fill_text("Game over", cx, cy - 20.0);

        self.ctx.set_font("20px monospace");
        let line = format!(
            "Score {:.1} - press Enter to run again",
            state.stats.score
        );
        let _ = self.ctx.fill_text(&line, cx, cy + 24.0);
    }
}
