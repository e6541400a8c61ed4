//! Game state and the per-tick transition
//!
//! `GameState` is created fresh on start and restart and mutated in place
//! once per frame. `Lost` is absorbing.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{LossCause, check_loss};
use super::direction::Direction;
use super::fruit::Fruit;
use super::snake::Snake;
use super::tick::DirectionQueue;
use crate::consts::*;
use crate::error::{Result, SnakeError};

/// Size of the play field, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundaries {
    pub width: u32,
    pub height: u32,
}

impl Default for Boundaries {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}

impl Boundaries {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Boundaries large enough for the starting snake and its first move,
    /// and no larger than `MAX_GRID_SIZE` on either side
    pub fn validated(width: u32, height: u32) -> Result<Self> {
        let min_width = (INITIAL_HEAD_X + 2) as u32;
        if !(min_width..=MAX_GRID_SIZE).contains(&width) || !(1..=MAX_GRID_SIZE).contains(&height) {
            return Err(SnakeError::InvalidBoundaries { width, height });
        }
        Ok(Self::new(width, height))
    }

    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = IVec2> + use<> {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);
        (0..height).flat_map(move |y| (0..width).map(move |x| IVec2::new(x, y)))
    }
}

/// Whether the run is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Lost,
}

/// Things that happened during a tick, for the controller's side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FruitSpawned { cell: IVec2 },
    FruitEaten { cell: IVec2, points: u32 },
    Lost(LossCause),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub snake: Snake,
    pub fruit: Option<Fruit>,
    pub score: u32,
    pub status: GameStatus,
    pub boundaries: Boundaries,
    /// Best score as loaded at start; raised by the controller on a new record
    pub best_score: u32,
    pub muted: bool,
    pub paused: bool,
    /// Events raised since the controller last drained them
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Fresh run: short straight snake heading right at mid-height, one fruit.
    pub fn start(boundaries: Boundaries, muted: bool, best_score: u32, seed: u64) -> Self {
        let head = IVec2::new(INITIAL_HEAD_X, (boundaries.height / 2) as i32);
        let mut state = Self {
            seed,
            snake: Snake::new(head, Direction::Right, INITIAL_TAIL_LENGTH, SNAKE_SPEED),
            fruit: None,
            score: 0,
            status: GameStatus::Playing,
            boundaries,
            best_score,
            muted,
            paused: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.spawn_fruit();
        state
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    /// Put a new fruit on a cell the snake does not cover.
    /// An empty field gets no fruit.
    pub fn spawn_fruit(&mut self) {
        let snake = &self.snake;
        let Some(fruit) = Fruit::spawn(&mut self.rng, self.boundaries, |c| snake.occupies(c)) else {
            log::warn!(
                "No cell for a fruit on a {}x{} field",
                self.boundaries.width,
                self.boundaries.height
            );
            return;
        };
        log::debug!("Fruit spawned at {}", fruit.cell());
        self.events.push(GameEvent::FruitSpawned { cell: fruit.cell() });
        self.fruit = Some(fruit);
    }

    /// Advance one frame. Does nothing while paused or after the run is lost.
    pub fn update(&mut self, dt: f32, pending: &mut DirectionQueue) {
        if self.is_lost() || self.paused {
            return;
        }

        let tail_before = self.snake.tail_cells();
        self.snake.update(dt, pending);

        match self.fruit.as_mut() {
            Some(fruit) => fruit.update(dt),
            None => self.spawn_fruit(),
        }

        if let Some(cause) = check_loss(self.snake.head.position, &tail_before, self.boundaries) {
            log::info!("Game over ({cause:?}) with score {}", self.score);
            self.status = GameStatus::Lost;
            self.events.push(GameEvent::Lost(cause));
            return;
        }

        let head = self.snake.head_cell();
        if let Some(fruit) = self.fruit.take_if(|f| f.cell() == head) {
            fruit.collide(self);
        }
    }

    /// Hand the accumulated events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
