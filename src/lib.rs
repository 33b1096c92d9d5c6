//! Flappy Gates - a gravity-and-gates arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `renderer`: Rendering collaborator trait and a text renderer
//! - `platform`: Fixed-step driver that buffers host input between ticks
//! - `settings`: Startup configuration (playfield size, seed)

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use settings::{Playfield, Settings};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default playfield dimensions
    pub const PLAYFIELD_WIDTH: u32 = 400;
    pub const PLAYFIELD_HEIGHT: u32 = 700;

    /// Avatar defaults
    pub const AVATAR_START_X: f32 = 100.0;
    pub const AVATAR_START_Y: f32 = 300.0;
    pub const AVATAR_SIZE: f32 = 30.0;

    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Smallest gap_y an obstacle can roll
    pub const GAP_MIN_Y: u32 = 100;
    /// Vertical space reserved outside the random gap range
    pub const GAP_MARGIN: u32 = 300;
    /// Horizontal scroll speed (px/tick)
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Spawn when the spawn timer exceeds this value
    pub const SPAWN_INTERVAL: u32 = 100;

    /// Ticks each wing frame is shown for
    pub const FLAP_FRAME_TICKS: u64 = 9;
    /// Number of wing frames in the flap cycle
    pub const FLAP_FRAMES: u64 = 3;
}
