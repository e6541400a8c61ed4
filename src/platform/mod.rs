//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame timing (capped step after stalls)
//! - Owning and cancelling the running frame loop
//! - Input/visibility listeners (web only, see `web`)

use crate::consts::MAX_FRAME_STEP;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Turns frame timestamps (ms) into simulation steps (s).
///
/// The first frame after creation or `reset` yields 0; later steps are
/// capped at `MAX_FRAME_STEP` so a backgrounded tab does not teleport the snake.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_time {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_STEP),
            None => 0.0,
        };
        self.last_time = Some(now_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

/// A scheduled, cancellable frame loop
pub trait LoopHandle {
    fn cancel(&mut self);
}

/// Owns at most one running loop. Installing a new loop cancels the old one
/// first, so two loops never drive the same game.
#[derive(Debug)]
pub struct LoopSlot<H: LoopHandle> {
    current: Option<H>,
}

impl<H: LoopHandle> Default for LoopSlot<H> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<H: LoopHandle> LoopSlot<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the running loop (if any), then start the one `start` builds
    pub fn replace_with(&mut self, start: impl FnOnce() -> H) {
        self.cancel();
        self.current = Some(start());
    }

    pub fn cancel(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: LoopHandle> Drop for LoopSlot<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
