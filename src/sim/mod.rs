//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Grid-cell comparisons via `floor`
//! - No rendering, audio, storage or platform dependencies

pub mod collision;
pub mod direction;
pub mod fruit;
pub mod snake;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{LossCause, check_loss, hits_tail, out_of_bounds};
pub use direction::{Axis, Direction};
pub use fruit::Fruit;
pub use snake::{Snake, SnakeSegment};
pub use state::{Boundaries, GameEvent, GameState, GameStatus};
pub use tick::{DirectionQueue, TickInput, tick};
pub use vector::{cell, lane_center, plus, same_cell, times};
