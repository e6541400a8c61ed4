//! Grid Snake - a browser Snake game on a discrete grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake motion, fruit, collisions, game state)
//! - `input`: Pending-direction queue and key mapping
//! - `game`: Frame controller tying simulation, persistence and audio together
//! - `renderer`: Scene building and canvas 2D drawing
//! - `platform`: Frame clock and browser loop/listener handles
//! - `persistence`: Key-value storage (LocalStorage on web)

pub mod audio;
pub mod best_score;
pub mod error;
pub mod game;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use best_score::BestScore;
pub use error::{Result, SnakeError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Snake speed in cells per second
    pub const SNAKE_SPEED: f32 = 10.0;
    /// Longest frame step fed to the simulation (seconds).
    /// `SNAKE_SPEED * MAX_FRAME_STEP` must stay <= 1 so no cell is skipped.
    pub const MAX_FRAME_STEP: f32 = 0.1;

    /// Default play field, in cells
    pub const DEFAULT_GRID_WIDTH: u32 = 20;
    pub const DEFAULT_GRID_HEIGHT: u32 = 20;
    /// Largest accepted side, in cells
    pub const MAX_GRID_SIZE: u32 = 256;
    /// Pixels per cell
    pub const CELL_SCALE: u32 = 20;

    /// Snake layout at start
    pub const INITIAL_TAIL_LENGTH: usize = 2;
    pub const INITIAL_HEAD_X: i32 = 2;

    /// Fruit sprite sheet has this many tiles in one row
    pub const FRUIT_SPRITE_COUNT: u32 = 10;
    /// Points for eating a plain fruit
    pub const FRUIT_POINTS: u32 = 1;
    /// Decorative oscillation amplitude and rate (per second)
    pub const MAX_OSCILLATION: f32 = 0.2;
    pub const MAX_OSCILLATION_RATE: f32 = 0.5;
}
