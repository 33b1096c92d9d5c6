//! Fixed timestep simulation tick
//!
//! One call to [`advance`] is one 1/60 s step of the game. Host input is
//! collected into a [`TickInput`] between ticks and applied by [`tick`] right
//! before advancing.

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// A discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// The single action key: restarts after game over, jumps otherwise
    Flap,
    Jump,
    Restart,
}

/// Input commands buffered for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap pressed; resolved against the phase at the start of the tick
    pub flap: bool,
    pub jump: bool,
    pub restart: bool,
}

impl TickInput {
    /// Record an event. Repeated events collapse into one.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Flap => self.flap = true,
            InputEvent::Jump => self.jump = true,
            InputEvent::Restart => self.restart = true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.flap || self.jump || self.restart)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Apply buffered input, then advance one step
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let game_over = state.is_game_over();
    let restart = input.restart || (input.flap && game_over);
    let jump = input.jump || (input.flap && !game_over);

    let mut events = Vec::new();
    if restart {
        events.extend(state.restart());
    }
    if jump {
        events.extend(state.jump());
    }
    events.extend(advance(state));
    events
}

/// Advance the session by one step. Does nothing after game over.
///
/// Ground contact and obstacle collisions both end the session, but the step
/// always runs to completion: obstacles still scroll, score and retire on the
/// tick that ends the game.
pub fn advance(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Running {
        return events;
    }

    let height = state.playfield.height_f32();
    let mut ended = false;

    // Avatar physics
    let avatar = &mut state.avatar;
    avatar.vel += GRAVITY;
    avatar.pos.y += avatar.vel;

    let max_y = avatar.max_y(height);
    if avatar.pos.y > max_y {
        avatar.pos.y = max_y;
        avatar.vel = 0.0;
        ended = true;
        events.push(GameEvent::HitGround);
    }
    if avatar.pos.y < 0.0 {
        avatar.pos.y = 0.0;
        avatar.vel = 0.0;
        events.push(GameEvent::HitCeiling);
    }

    // Spawn on a fixed cadence
    state.spawn_timer += 1;
    if state.spawn_timer > SPAWN_INTERVAL {
        let obstacle = Obstacle::spawn(&state.playfield, &mut state.rng);
        let gap_y = obstacle.gap_y;
        let obstacle_id = state.obstacles.insert(obstacle);
        log::debug!("Spawned obstacle {} with gap at {}", obstacle_id, gap_y);
        events.push(GameEvent::ObstacleSpawned { obstacle_id, gap_y });
        state.spawn_timer = 0;
    }

    // Scroll, then collide and score against the moved set
    state.obstacles.advance(OBSTACLE_SPEED);
    let hitbox = state.avatar.hitbox();
    let avatar_x = state.avatar.pos.x;
    for obstacle in state.obstacles.iter_mut() {
        if obstacle.check_collision(&hitbox, height) {
            ended = true;
            events.push(GameEvent::Collided {
                obstacle_id: obstacle.id,
            });
        }
        if obstacle.check_passed(avatar_x) {
            state.score += 1;
            log::debug!("Passed obstacle {}, score {}", obstacle.id, state.score);
            events.push(GameEvent::ObstaclePassed {
                obstacle_id: obstacle.id,
                score: state.score,
            });
        }
    }

    // Retire off-screen obstacles after the pass
    for obstacle in state.obstacles.reap() {
        log::debug!("Retired obstacle {}", obstacle.id);
        events.push(GameEvent::ObstacleRetired {
            obstacle_id: obstacle.id,
        });
    }

    state.frame += 1;

    if ended {
        state.end(&mut events);
    }
    events
}
