//! Game state and core simulation types
//!
//! A `GameState` is one session: the avatar, the live obstacles, the score and
//! the phase. Restarting rebuilds everything except the playfield and the RNG
//! stream.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::obstacle::ObstacleSet;
use crate::consts::*;
use crate::error::Result;
use crate::settings::{Playfield, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Session ended, waiting for restart
    GameOver,
}

/// Something that happened during a tick, for host feedback (sound, effects)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    Restarted,
    HitCeiling,
    HitGround,
    /// Avatar overlapped an obstacle barrier
    Collided { obstacle_id: u32 },
    ObstacleSpawned { obstacle_id: u32, gap_y: f32 },
    /// Avatar cleared an obstacle; `score` is the new total
    ObstaclePassed { obstacle_id: u32, score: u32 },
    ObstacleRetired { obstacle_id: u32 },
    /// Session ended this tick
    GameOver { score: u32 },
}

/// The player's avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner of the hitbox; x never changes
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel: f32,
    /// Side of the square hitbox
    pub size: f32,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            pos: Vec2::new(AVATAR_START_X, AVATAR_START_Y),
            vel: 0.0,
            size: AVATAR_SIZE,
        }
    }
}

impl Avatar {
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Lowest y the avatar can occupy on this playfield
    #[inline]
    pub fn max_y(&self, playfield_height: f32) -> f32 {
        playfield_height - self.size
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub playfield: Playfield,
    pub avatar: Avatar,
    pub obstacles: ObstacleSet,
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
    /// Ticks simulated this session (drives the flap animation)
    pub frame: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Start a session. Fails if the playfield cannot host one.
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        log::info!(
            "New session on {}x{} playfield (seed {})",
            settings.playfield.width,
            settings.playfield.height,
            settings.seed
        );
        Ok(Self {
            seed: settings.seed,
            playfield: settings.playfield,
            avatar: Avatar::default(),
            obstacles: ObstacleSet::new(),
            score: 0,
            phase: GamePhase::Running,
            spawn_timer: 0,
            frame: 0,
            rng: Pcg32::seed_from_u64(settings.seed),
        })
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Advance one step; see [`super::tick::advance`]
    pub fn advance(&mut self) -> Vec<GameEvent> {
        super::tick::advance(self)
    }

    /// Upward impulse. Overwrites the velocity, so repeated calls between
    /// ticks are equivalent to one. Ignored after game over.
    pub fn jump(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Running {
            return None;
        }
        self.avatar.vel = JUMP_VELOCITY;
        Some(GameEvent::Jumped)
    }

    /// Reset to a fresh session. Only valid after game over.
    pub fn restart(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::GameOver {
            return None;
        }
        log::info!("Restarting session (previous score {})", self.score);
        self.avatar = Avatar::default();
        self.obstacles.clear();
        self.score = 0;
        self.spawn_timer = 0;
        self.frame = 0;
        self.phase = GamePhase::Running;
        Some(GameEvent::Restarted)
    }

    /// Which wing frame the avatar sprite should show
    pub fn wing_frame(&self) -> u64 {
        (self.frame / FLAP_FRAME_TICKS) % FLAP_FRAMES
    }

    pub(crate) fn end(&mut self, events: &mut Vec<GameEvent>) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", self.score);
        events.push(GameEvent::GameOver { score: self.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_session() {
        let state = GameState::new(&Settings::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.avatar.pos, Vec2::new(100.0, 300.0));
        assert_eq!(state.avatar.vel, 0.0);
        assert_eq!(state.avatar.size, 30.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_timer, 0);
    }

    #[test]
    fn test_new_rejects_short_playfield() {
        let settings = Settings {
            playfield: Playfield::new(400, 250),
            seed: 0,
        };
        assert!(matches!(
            GameState::new(&settings),
            Err(Error::PlayfieldTooShort { height: 250, .. })
        ));
    }

    #[test]
    fn test_jump_overwrites_velocity() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        state.avatar.vel = 7.3;
        assert_eq!(state.jump(), Some(GameEvent::Jumped));
        assert_eq!(state.avatar.vel, -10.0);
        state.jump();
        state.jump();
        assert_eq!(state.avatar.vel, -10.0);
    }

    #[test]
    fn test_jump_ignored_after_game_over() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        state.phase = GamePhase::GameOver;
        state.avatar.vel = 0.0;
        assert_eq!(state.jump(), None);
        assert_eq!(state.avatar.vel, 0.0);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        state.score = 3;
        assert_eq!(state.restart(), None);
        assert_eq!(state.score, 3);

        state.phase = GamePhase::GameOver;
        state.avatar.pos.y = 670.0;
        state.avatar.vel = 4.0;
        state.frame = 99;
        state.spawn_timer = 42;
        assert_eq!(state.restart(), Some(GameEvent::Restarted));
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.avatar, Avatar::default());
        assert_eq!(state.frame, 0);
        assert_eq!(state.spawn_timer, 0);
    }

    #[test]
    fn test_wing_frame_cycles() {
        let mut state = GameState::new(&Settings::default()).unwrap();
        let frames: Vec<u64> = (0..30)
            .map(|f| {
                state.frame = f;
                state.wing_frame()
            })
            .collect();
        assert_eq!(frames[0], 0);
        assert_eq!(frames[8], 0);
        assert_eq!(frames[9], 1);
        assert_eq!(frames[18], 2);
        assert_eq!(frames[27], 0);
    }
}
