//! Grid collision checks
//!
//! Everything here compares grid cells, `(floor(x), floor(y))`.

use glam::{IVec2, Vec2};
use serde::{Deserialize, Serialize};

use super::state::Boundaries;
use super::vector::cell;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossCause {
    /// Head left the play field
    Wall,
    /// Head ran into the tail
    SelfHit,
}

/// True when the head has left the field.
/// Compares raw coordinates so a head at exactly `width` is already out.
pub fn out_of_bounds(head: Vec2, boundaries: Boundaries) -> bool {
    head.x < 0.0
        || head.y < 0.0
        || head.x >= boundaries.width as f32
        || head.y >= boundaries.height as f32
}

/// True when the head's cell is one of `tail_cells`
pub fn hits_tail(head: Vec2, tail_cells: &[IVec2]) -> bool {
    let head_cell = cell(head);
    tail_cells.iter().any(|&c| c == head_cell)
}

/// Wall first, then self collision. `tail_cells` is the tail before the move.
pub fn check_loss(head: Vec2, tail_cells: &[IVec2], boundaries: Boundaries) -> Option<LossCause> {
    if out_of_bounds(head, boundaries) {
        Some(LossCause::Wall)
    } else if hits_tail(head, tail_cells) {
        Some(LossCause::SelfHit)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_edges() {
        let bounds = Boundaries::new(5, 5);
        assert!(!out_of_bounds(Vec2::new(0.0, 0.0), bounds));
        assert!(!out_of_bounds(Vec2::new(4.99, 4.99), bounds));
        assert!(out_of_bounds(Vec2::new(5.0, 2.5), bounds));
        assert!(out_of_bounds(Vec2::new(2.5, 5.0), bounds));
        assert!(out_of_bounds(Vec2::new(-0.01, 2.5), bounds));
        assert!(out_of_bounds(Vec2::new(2.5, -0.01), bounds));
    }

    #[test]
    fn test_hits_tail_by_cell() {
        let tail = [IVec2::new(3, 3), IVec2::new(2, 3)];
        assert!(hits_tail(Vec2::new(3.9, 3.1), &tail));
        assert!(!hits_tail(Vec2::new(4.0, 3.1), &tail));
        assert!(!hits_tail(Vec2::new(3.5, 3.5), &[]));
    }

    #[test]
    fn test_wall_takes_precedence() {
        let bounds = Boundaries::new(5, 5);
        let tail = [IVec2::new(5, 2)];
        assert_eq!(check_loss(Vec2::new(5.1, 2.5), &tail, bounds), Some(LossCause::Wall));
        assert_eq!(
            check_loss(Vec2::new(3.5, 2.5), &[IVec2::new(3, 2)], bounds),
            Some(LossCause::SelfHit)
        );
        assert_eq!(check_loss(Vec2::new(3.5, 2.5), &[], bounds), None);
    }
}
