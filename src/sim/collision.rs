//! Axis-aligned rectangle collision
//!
//! Every hitbox in the game is an axis-aligned rectangle. Two rectangles only
//! collide when they overlap by a nonzero amount on both axes, so edges that
//! merely touch do not count, and an empty rectangle never collides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True if the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap test
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (a_min, a_max) = (self.min, self.max());
        let (b_min, b_max) = (other.min, other.max());

        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Check if a point lies inside the rectangle (half-open on the far edges)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}
