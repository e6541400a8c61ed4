//! Per-frame simulation tick
//!
//! Applies one-shot toggles from input, then advances the game state.

use std::collections::VecDeque;

use super::direction::Direction;
use super::state::GameState;

/// Directions typed but not yet applied, oldest first.
///
/// No two queued directions share an axis, so the queue never holds more
/// than two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionQueue {
    pending: VecDeque<Direction>,
}

impl DirectionQueue {
    /// Queue a direction unless one on the same axis is already waiting.
    /// Returns whether it was queued.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.pending.iter().any(|d| d.axis() == direction.axis()) {
            return false;
        }
        self.pending.push_back(direction);
        true
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn peek(&self) -> Option<Direction> {
        self.pending.front().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.pending.iter().copied()
    }
}

/// Input gathered between two frames
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pending direction changes (drained one per tick)
    pub directions: DirectionQueue,
    /// Pause toggle
    pub pause: bool,
    /// Mute toggle
    pub mute: bool,
}

/// Advance the game by one frame of `dt` seconds.
///
/// Toggles are consumed here. A paused frame still runs and leaves the state as is.
pub fn tick(state: &mut GameState, input: &mut TickInput, dt: f32) {
    if input.mute {
        state.muted = !state.muted;
        input.mute = false;
        log::info!("Sound {}", if state.muted { "muted" } else { "on" });
    }

    if input.pause {
        input.pause = false;
        if state.is_playing() {
            state.paused = !state.paused;
            log::info!("Game {}", if state.paused { "paused" } else { "resumed" });
        }
    }

    // Inputs typed while paused wait for the unpause
    state.update(dt, &mut input.directions);
}
