//! Directions of travel and their axes
//!
//! Screen coordinates: `Down` is +y, `Right` is +x.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::SnakeError;

/// One of the four directions the snake can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a direction (or velocity) lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector pointing this way
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    /// Velocity of the given magnitude pointing this way
    pub fn velocity(self, speed: f32) -> Vec2 {
        self.unit() * speed
    }

    /// Direction of an axis-aligned velocity. A zero velocity has none.
    pub fn from_velocity(velocity: Vec2) -> Result<Direction, SnakeError> {
        if velocity.x > 0.0 {
            Ok(Direction::Right)
        } else if velocity.x < 0.0 {
            Ok(Direction::Left)
        } else if velocity.y > 0.0 {
            Ok(Direction::Down)
        } else if velocity.y < 0.0 {
            Ok(Direction::Up)
        } else {
            Err(SnakeError::InvalidDirection(format!("{velocity}")))
        }
    }

    /// Index into per-direction tables
    pub fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(SnakeError::InvalidDirection(s.to_string())),
        }
    }
}

impl Axis {
    /// Axis of a velocity; `None` when the velocity is zero
    pub fn of(velocity: Vec2) -> Option<Axis> {
        Direction::from_velocity(velocity).ok().map(Direction::axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_mapping() {
        assert_eq!(Direction::Left.axis(), Axis::Horizontal);
        assert_eq!(Direction::Right.axis(), Axis::Horizontal);
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Down.axis(), Axis::Vertical);
    }

    #[test]
    fn test_opposites_share_axis() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.opposite().axis(), dir.axis());
        }
    }

    #[test]
    fn test_velocity_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_velocity(dir.velocity(10.0)).unwrap(), dir);
        }
    }

    #[test]
    fn test_zero_velocity_is_invalid() {
        let err = Direction::from_velocity(Vec2::ZERO).unwrap_err();
        assert!(matches!(err, SnakeError::InvalidDirection(_)));
        assert_eq!(Axis::of(Vec2::ZERO), None);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("Up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        let err = "north".parse::<Direction>().unwrap_err();
        assert!(matches!(err, SnakeError::InvalidDirection(ref s) if s == "north"));
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }
}
