//! Axis-aligned hitboxes and the overlap test
//!
//! Screen coordinates: x grows rightward, y grows downward, so a rectangle's
//! bottom edge is `pos.y + size.y`.

use glam::Vec2;
use serde::Serialize;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Edge-inclusive overlap test: rectangles touching exactly at an edge
    /// or corner count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.left()
            && self.left() <= other.right()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}
