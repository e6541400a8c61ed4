//! Snake motion on the grid
//!
//! The head moves continuously along its lane; the tail is the list of cells
//! the head has left, newest first, trimmed to `tail_length`.

use std::collections::VecDeque;

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::direction::{Axis, Direction};
use super::tick::DirectionQueue;
use super::vector::{cell, lane_center, plus, times};
use crate::consts::*;

/// One cell-sized piece of the snake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnakeSegment {
    pub position: Vec2,
    /// Direction of travel (for the head) or of leaving the cell (for the tail)
    pub direction: Direction,
    /// `[entered, exited]` travel directions when the snake turned in this cell
    pub curve: Option<[Direction; 2]>,
}

impl SnakeSegment {
    pub fn new(position: Vec2, direction: Direction) -> Self {
        Self {
            position,
            direction,
            curve: None,
        }
    }

    pub fn is_curve(&self) -> bool {
        self.curve.is_some()
    }

    pub fn cell(&self) -> IVec2 {
        cell(self.position)
    }
}

/// The player's snake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub head: SnakeSegment,
    /// Nearest the head first
    pub tail: VecDeque<SnakeSegment>,
    /// Target tail size; grows by one per fruit, never shrinks
    pub tail_length: usize,
    pub velocity: Vec2,
    /// Cells per second
    pub speed: f32,
    /// A turn was applied and the head has not yet reached the next cell
    pub is_turning: bool,
}

impl Snake {
    /// Snake whose head sits centered in `head_cell`, with a straight tail
    /// trailing behind it, travelling towards `direction`.
    pub fn new(head_cell: IVec2, direction: Direction, tail_length: usize, speed: f32) -> Self {
        let center = head_cell.as_vec2() + Vec2::splat(0.5);
        let back = direction.opposite().unit();
        let tail = (1..=tail_length)
            .map(|i| SnakeSegment::new(center + back * i as f32, direction))
            .collect();

        Self {
            head: SnakeSegment::new(center, direction),
            tail,
            tail_length,
            velocity: direction.velocity(speed),
            speed,
            is_turning: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.head.direction
    }

    pub fn head_cell(&self) -> IVec2 {
        self.head.cell()
    }

    /// Cells covered by the tail, nearest the head first
    pub fn tail_cells(&self) -> Vec<IVec2> {
        self.tail.iter().map(SnakeSegment::cell).collect()
    }

    /// True when the head or any tail segment covers `target`
    pub fn occupies(&self, target: IVec2) -> bool {
        self.head_cell() == target || self.tail.iter().any(|s| s.cell() == target)
    }

    /// Advance the snake by `dt` seconds, consuming at most one pending direction.
    pub fn update(&mut self, dt: f32, pending: &mut DirectionQueue) {
        // A popped direction on the current axis is dropped, not requeued
        if !self.is_turning {
            if let Some(next) = pending.pop() {
                if Some(next.axis()) != Axis::of(self.velocity) {
                    self.velocity = next.velocity(self.speed);
                    self.is_turning = true;
                }
            }
        }

        let direction = Direction::from_velocity(self.velocity).unwrap_or(self.head.direction);
        let old_head = self.head;
        let mut position = plus(old_head.position, times(self.velocity, dt));

        match direction.axis() {
            Axis::Horizontal => position.y = lane_center(position.y),
            Axis::Vertical => position.x = lane_center(position.x),
        }

        self.head = SnakeSegment::new(position, direction);

        if cell(position) != old_head.cell() {
            let entered = self
                .tail
                .front()
                .map(|s| s.direction)
                .unwrap_or(old_head.direction);

            let mut left_behind = SnakeSegment::new(old_head.position, direction);
            if entered.axis() != direction.axis() {
                left_behind.curve = Some([entered, direction]);
            }

            self.tail.push_front(left_behind);
            self.is_turning = false;
        }

        self.tail.truncate(self.tail_length);
    }

    /// Lengthen the snake by one; the tail fills in on the next cell crossing.
    pub fn grow(&mut self) {
        self.tail_length += 1;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new(
            IVec2::new(INITIAL_HEAD_X, (DEFAULT_GRID_HEIGHT / 2) as i32),
            Direction::Right,
            INITIAL_TAIL_LENGTH,
            SNAKE_SPEED,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn queue(dirs: &[Direction]) -> DirectionQueue {
        let mut q = DirectionQueue::default();
        for &d in dirs {
            q.push(d);
        }
        q
    }

    #[test]
    fn test_new_snake_layout() {
        let snake = Snake::new(IVec2::new(2, 10), Direction::Right, 2, SNAKE_SPEED);
        assert_eq!(snake.head.position, Vec2::new(2.5, 10.5));
        assert_eq!(snake.tail_cells(), vec![IVec2::new(1, 10), IVec2::new(0, 10)]);
        assert_eq!(snake.velocity, Vec2::new(SNAKE_SPEED, 0.0));
        assert!(!snake.is_turning);
    }

    #[test]
    fn test_straight_move_keeps_lane() {
        let mut snake = Snake::default();
        let mut pending = DirectionQueue::default();
        snake.update(0.03, &mut pending);
        assert!((snake.head.position.x - 2.8).abs() < 1e-5);
        assert_eq!(snake.head.position.y, 10.5);
        // Still inside cell (2, 10): tail untouched
        assert_eq!(snake.tail_cells(), vec![IVec2::new(1, 10), IVec2::new(0, 10)]);
    }

    #[test]
    fn test_crossing_shifts_tail() {
        let mut snake = Snake::default();
        let mut pending = DirectionQueue::default();
        snake.update(0.06, &mut pending);
        assert_eq!(snake.head_cell(), IVec2::new(3, 10));
        assert_eq!(snake.tail_cells(), vec![IVec2::new(2, 10), IVec2::new(1, 10)]);
        assert_eq!(snake.tail.len(), snake.tail_length);
    }

    #[test]
    fn test_turn_applies_and_locks_until_crossing() {
        let mut snake = Snake::default();
        let mut pending = queue(&[Direction::Down, Direction::Left]);

        snake.update(DT, &mut pending);
        assert_eq!(snake.direction(), Direction::Down);
        assert!(snake.is_turning);
        // Horizontal coordinate snapped to the lane center
        assert_eq!(snake.head.position.x, 2.5);
        // Second direction waits for the crossing
        assert_eq!(pending.len(), 1);

        snake.update(DT, &mut pending);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(pending.len(), 1);

        // Reach the next row
        while snake.head_cell().y == 10 {
            snake.update(DT, &mut pending);
        }
        assert_eq!(snake.head_cell(), IVec2::new(2, 11));
        assert!(!snake.is_turning);
        assert_eq!(pending.len(), 1);

        snake.update(DT, &mut pending);
        assert_eq!(snake.direction(), Direction::Left);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_same_axis_direction_is_dropped() {
        let mut snake = Snake::default();
        let mut pending = queue(&[Direction::Left]);
        snake.update(DT, &mut pending);
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_turning);
        assert!(pending.is_empty());
    }

    #[test]
    fn test_turn_marks_curve_segment() {
        let mut snake = Snake::default();
        let mut pending = queue(&[Direction::Up]);
        while snake.head_cell() == IVec2::new(2, 10) {
            snake.update(DT, &mut pending);
        }
        assert_eq!(snake.head_cell(), IVec2::new(2, 9));
        let corner = snake.tail[0];
        assert_eq!(corner.cell(), IVec2::new(2, 10));
        assert_eq!(corner.curve, Some([Direction::Right, Direction::Up]));
        assert!(!snake.tail[1].is_curve());
    }

    #[test]
    fn test_grow_is_lazy() {
        let mut snake = Snake::default();
        let mut pending = DirectionQueue::default();
        snake.grow();
        assert_eq!(snake.tail_length, 3);
        assert_eq!(snake.tail.len(), 2);

        snake.update(0.06, &mut pending);
        assert_eq!(snake.tail.len(), 3);
        assert_eq!(
            snake.tail_cells(),
            vec![IVec2::new(2, 10), IVec2::new(1, 10), IVec2::new(0, 10)]
        );
    }

    #[test]
    fn test_occupies() {
        let snake = Snake::default();
        assert!(snake.occupies(IVec2::new(2, 10)));
        assert!(snake.occupies(IVec2::new(0, 10)));
        assert!(!snake.occupies(IVec2::new(3, 10)));
    }
}
