//! Point/velocity arithmetic and grid-cell helpers

use glam::{IVec2, Vec2};

/// Componentwise sum
#[inline]
pub fn plus(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

/// Componentwise scale
#[inline]
pub fn times(v: Vec2, factor: f32) -> Vec2 {
    Vec2::new(v.x * factor, v.y * factor)
}

/// Grid cell containing a point: `(floor(x), floor(y))`
#[inline]
pub fn cell(v: Vec2) -> IVec2 {
    v.floor().as_ivec2()
}

/// True when both points resolve to the same grid cell
#[inline]
pub fn same_cell(a: Vec2, b: Vec2) -> bool {
    cell(a) == cell(b)
}

/// Center of the lane containing `coord`
#[inline]
pub fn lane_center(coord: f32) -> f32 {
    coord.floor() + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_and_times() {
        let v = plus(Vec2::new(1.0, 2.0), Vec2::new(0.5, -3.0));
        assert_eq!(v, Vec2::new(1.5, -1.0));
        assert_eq!(times(Vec2::new(10.0, 0.0), 0.05), Vec2::new(0.5, 0.0));
    }

    #[test]
    fn test_cell_floors_negative_coordinates() {
        assert_eq!(cell(Vec2::new(3.9, 0.1)), IVec2::new(3, 0));
        assert_eq!(cell(Vec2::new(-0.1, 2.0)), IVec2::new(-1, 2));
    }

    #[test]
    fn test_same_cell() {
        assert!(same_cell(Vec2::new(3.0, 3.0), Vec2::new(3.5, 3.99)));
        assert!(!same_cell(Vec2::new(3.0, 3.0), Vec2::new(4.0, 3.0)));
    }

    #[test]
    fn test_lane_center() {
        assert_eq!(lane_center(10.0), 10.5);
        assert_eq!(lane_center(10.99), 10.5);
        assert_eq!(lane_center(-0.2), -0.5);
    }
}
