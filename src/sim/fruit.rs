//! Fruit spawning, decorative oscillation and consumption

use glam::{IVec2, Vec2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Boundaries, GameEvent, GameState};
use crate::consts::*;

/// Random picks tried before scanning the field for a free cell
const SPAWN_ATTEMPTS: usize = 32;

/// The fruit currently on the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    /// Top-left corner of the fruit's cell
    pub position: Vec2,
    /// Tile in the fruit sprite sheet, `0..FRUIT_SPRITE_COUNT`
    pub sprite_index: u32,
    /// Cosmetic pulse, always within `[0, MAX_OSCILLATION]`
    pub oscillation_phase: f32,
    /// +1.0 while the phase grows, -1.0 while it shrinks
    pub oscillation_sign: f32,
    pub points: u32,
}

impl Fruit {
    pub fn new(cell: IVec2, sprite_index: u32) -> Self {
        Self {
            position: cell.as_vec2(),
            sprite_index: sprite_index % FRUIT_SPRITE_COUNT,
            oscillation_phase: 0.0,
            oscillation_sign: 1.0,
            points: FRUIT_POINTS,
        }
    }

    /// Place a fruit on a random cell not covered by `occupied`.
    /// Falls back to any cell when the field is full; `None` when the field
    /// has no cells at all.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        boundaries: Boundaries,
        occupied: impl Fn(IVec2) -> bool,
    ) -> Option<Self> {
        let width = i32::try_from(boundaries.width).unwrap_or(i32::MAX);
        let height = i32::try_from(boundaries.height).unwrap_or(i32::MAX);
        if width == 0 || height == 0 {
            return None;
        }
        let random_cell =
            |rng: &mut R| IVec2::new(rng.random_range(0..width), rng.random_range(0..height));

        // Rejection sampling is uniform over free cells and cheap while the
        // field is mostly empty; a crowded field is scanned instead.
        let mut cell = (0..SPAWN_ATTEMPTS)
            .map(|_| random_cell(rng))
            .find(|&c| !occupied(c));

        if cell.is_none() && boundaries.width <= MAX_GRID_SIZE && boundaries.height <= MAX_GRID_SIZE {
            let free: Vec<IVec2> = boundaries.cells().filter(|&c| !occupied(c)).collect();
            if !free.is_empty() {
                cell = Some(free[rng.random_range(0..free.len())]);
            }
        }

        let cell = cell.unwrap_or_else(|| random_cell(rng));
        Some(Self::new(cell, rng.random_range(0..FRUIT_SPRITE_COUNT)))
    }

    pub fn cell(&self) -> IVec2 {
        self.position.floor().as_ivec2()
    }

    /// Advance the pulse, bouncing between 0 and `MAX_OSCILLATION`
    pub fn update(&mut self, dt: f32) {
        self.oscillation_phase += self.oscillation_sign * dt * MAX_OSCILLATION_RATE;

        if self.oscillation_phase > MAX_OSCILLATION {
            self.oscillation_phase = MAX_OSCILLATION;
            self.oscillation_sign = -1.0;
        } else if self.oscillation_phase < 0.0 {
            self.oscillation_phase = 0.0;
            self.oscillation_sign = 1.0;
        }
    }

    /// The snake's head reached this fruit: grow, score, and clear the fruit.
    /// A replacement spawns on the next tick.
    pub fn collide(self, state: &mut GameState) {
        state.snake.grow();
        state.fruit = None;
        state.score += self.points;
        log::debug!("Fruit eaten at {}, score {}", self.cell(), state.score);
        state.events.push(GameEvent::FruitEaten {
            cell: self.cell(),
            points: self.points,
        });
    }
}
