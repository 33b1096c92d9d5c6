//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use obstacle::{Obstacle, ObstacleSet};
pub use state::{Avatar, GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, TickInput, advance, tick};

