//! Rendering module
//!
//! `Scene::build` turns a `GameState` into a flat draw list in pixel space.
//! The canvas backend (web only) just executes it, so everything about what
//! is drawn where is testable natively.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasView;

use crate::sim::{Direction, GameState, SnakeSegment};

/// Chessboard colors
pub const BACKGROUND_LIGHT: &str = "#00ff00";
pub const BACKGROUND_DARK: &str = "#00f000";
/// Fallback snake color when sprites are missing
pub const SNAKE_COLOR: &str = "#1b3a1b";
pub const TEXT_COLOR: &str = "black";
pub const OVERLAY_COLOR: &str = "rgba(0, 0, 0, 0.5)";
pub const OVERLAY_TEXT_COLOR: &str = "white";
pub const SCORE_FONT: &str = "bold 18px Arial";
pub const OVERLAY_FONT: &str = "bold 32px Arial";

/// Tiles of the snake sprite sheet, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakePart {
    Head,
    Body,
    Curve,
    TailTip,
}

impl SnakePart {
    pub fn tile(&self) -> u32 {
        match self {
            SnakePart::Head => 0,
            SnakePart::Body => 1,
            SnakePart::Curve => 2,
            SnakePart::TailTip => 3,
        }
    }
}

/// Which sheet and tile a sprite comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Snake(SnakePart),
    Fruit(u32),
}

/// One drawing operation, in pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: &'static str,
    },
    /// Square sprite centered on (`cx`, `cy`), rotated clockwise
    Sprite {
        sprite: Sprite,
        cx: f32,
        cy: f32,
        size: f32,
        rotation_deg: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: &'static str,
        color: &'static str,
        centered: bool,
    },
}

/// Everything to draw for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCmd>,
}

/// Sprites are drawn pointing up; rotate them to face `direction`
pub fn rotation_for(direction: Direction) -> f32 {
    match direction {
        Direction::Up => 0.0,
        Direction::Right => 90.0,
        Direction::Down => 180.0,
        Direction::Left => 270.0,
    }
}

/// The curve tile joins the top and right edges; rotate it to join the two
/// edges the snake passes through. `curve` is `[entered, exited]` travel.
pub fn rotation_for_curve(curve: [Direction; 2]) -> f32 {
    let [entered, exited] = curve;
    // Edge the snake came in through, and edge it left through
    let sides = [entered.opposite(), exited];
    let has = |d: Direction| sides.contains(&d);

    if has(Direction::Up) && has(Direction::Right) {
        0.0
    } else if has(Direction::Right) && has(Direction::Down) {
        90.0
    } else if has(Direction::Down) && has(Direction::Left) {
        180.0
    } else {
        270.0
    }
}

impl Scene {
    pub fn build(state: &GameState, scale: f32) -> Self {
        let width = state.boundaries.width as f32 * scale;
        let height = state.boundaries.height as f32 * scale;
        let mut commands = Vec::new();

        // Background
        for cell in state.boundaries.cells() {
            let color = if (cell.x + cell.y) % 2 == 0 {
                BACKGROUND_LIGHT
            } else {
                BACKGROUND_DARK
            };
            commands.push(DrawCmd::FillRect {
                x: cell.x as f32 * scale,
                y: cell.y as f32 * scale,
                w: scale,
                h: scale,
                color,
            });
        }

        // Fruit, pulsing around its cell center
        if let Some(fruit) = &state.fruit {
            let cell = fruit.cell().as_vec2();
            commands.push(DrawCmd::Sprite {
                sprite: Sprite::Fruit(fruit.sprite_index),
                cx: (cell.x + 0.5) * scale,
                cy: (cell.y + 0.5) * scale,
                size: scale * (1.0 + fruit.oscillation_phase),
                rotation_deg: 0.0,
            });
        }

        // Snake, tail end first so the head is drawn on top
        let tail_len = state.snake.tail.len();
        for (i, segment) in state.snake.tail.iter().enumerate().rev() {
            let is_tip = i + 1 == tail_len;
            commands.push(segment_cmd(segment, is_tip, scale));
        }
        let head = state.snake.head;
        commands.push(DrawCmd::Sprite {
            sprite: Sprite::Snake(SnakePart::Head),
            cx: head.position.x * scale,
            cy: head.position.y * scale,
            size: scale,
            rotation_deg: rotation_for(head.direction),
        });

        // Score
        commands.push(DrawCmd::Text {
            text: format!("Score: {}", state.score),
            x: scale,
            y: scale,
            font: SCORE_FONT,
            color: TEXT_COLOR,
            centered: false,
        });
        commands.push(DrawCmd::Text {
            text: format!("Best: {}", state.best_score.max(state.score)),
            x: scale,
            y: scale * 2.0,
            font: SCORE_FONT,
            color: TEXT_COLOR,
            centered: false,
        });

        let overlay = if state.is_lost() {
            Some("Game over - press R")
        } else if state.paused {
            Some("Paused")
        } else {
            None
        };
        if let Some(text) = overlay {
            commands.push(DrawCmd::FillRect {
                x: 0.0,
                y: 0.0,
                w: width,
                h: height,
                color: OVERLAY_COLOR,
            });
            commands.push(DrawCmd::Text {
                text: text.to_string(),
                x: width / 2.0,
                y: height / 2.0,
                font: OVERLAY_FONT,
                color: OVERLAY_TEXT_COLOR,
                centered: true,
            });
        }

        Self {
            width,
            height,
            commands,
        }
    }
}

/// Tail segments are drawn centered in their cell
fn segment_cmd(segment: &SnakeSegment, is_tip: bool, scale: f32) -> DrawCmd {
    let cell = segment.cell().as_vec2();
    let (part, rotation_deg) = match segment.curve {
        Some(curve) if !is_tip => (SnakePart::Curve, rotation_for_curve(curve)),
        _ if is_tip => (SnakePart::TailTip, rotation_for(segment.direction)),
        _ => (SnakePart::Body, rotation_for(segment.direction)),
    };

    DrawCmd::Sprite {
        sprite: Sprite::Snake(part),
        cx: (cell.x + 0.5) * scale,
        cy: (cell.y + 0.5) * scale,
        size: scale,
        rotation_deg,
    }
}
