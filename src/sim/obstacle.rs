//! Obstacles and the live obstacle set
//!
//! An obstacle is a pair of barriers spanning the full playfield height with a
//! single vertical gap. The set spawns them at the right edge, scrolls them
//! left and retires them once they are fully off the left edge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::settings::Playfield;

/// A gated obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Assigned when inserted into an [`ObstacleSet`]
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the gap (height of the top segment)
    pub gap_y: f32,
    pub gap_height: f32,
    /// Set once the avatar has cleared this obstacle
    pub passed: bool,
}

impl Obstacle {
    /// Roll a new obstacle at the right edge of the playfield.
    ///
    /// The gap top is `GAP_MIN_Y + rand(height - GAP_MARGIN)`, so the playfield
    /// must have been validated (height > `GAP_MARGIN`). An unvalidated
    /// playfield degrades to a fixed gap at `GAP_MIN_Y` instead of panicking.
    pub fn spawn<R: Rng>(playfield: &Playfield, rng: &mut R) -> Self {
        let span = playfield.height.saturating_sub(GAP_MARGIN).max(1);
        let gap_y = GAP_MIN_Y + rng.random_range(0..span);
        Self {
            id: 0,
            x: playfield.width_f32(),
            width: OBSTACLE_WIDTH,
            gap_y: gap_y as f32,
            gap_height: GAP_HEIGHT,
            passed: false,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Scroll left by `dx`
    #[inline]
    pub fn advance(&mut self, dx: f32) {
        self.x -= dx;
    }

    /// Fully past the left edge of the playfield
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    /// Top barrier, from the ceiling down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_y)
    }

    /// Bottom barrier, from the gap down to the floor
    pub fn bottom_rect(&self, playfield_height: f32) -> Rect {
        let top = self.gap_y + self.gap_height;
        Rect::new(self.x, top, self.width, playfield_height - top)
    }

    /// Check whether a hitbox overlaps either barrier
    pub fn check_collision(&self, hitbox: &Rect, playfield_height: f32) -> bool {
        hitbox.intersects(&self.top_rect()) || hitbox.intersects(&self.bottom_rect(playfield_height))
    }

    /// Returns true exactly once: the first call after the trailing edge has
    /// moved left of `avatar_x`.
    pub fn check_passed(&mut self, avatar_x: f32) -> bool {
        if !self.passed && self.right() < avatar_x {
            self.passed = true;
            return true;
        }
        false
    }
}

/// Live obstacles, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an obstacle, assigning it the next id
    pub fn insert(&mut self, mut obstacle: Obstacle) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        obstacle.id = id;
        self.obstacles.push(obstacle);
        id
    }

    /// Scroll every obstacle left by `dx`
    pub fn advance(&mut self, dx: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(dx);
        }
    }

    /// Remove and return every obstacle that is fully off screen
    pub fn reap(&mut self) -> Vec<Obstacle> {
        if !self.obstacles.iter().any(Obstacle::is_off_screen) {
            return Vec::new();
        }
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.obstacles)
            .into_iter()
            .partition(Obstacle::is_off_screen);
        self.obstacles = kept;
        removed
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}
