use serde::{Deserialize, Serialize};

/// Smallest coordinate a window may be dragged to on either axis
pub const EDGE_FLOOR: i32 = 8;

/// A top-left anchor on the desktop canvas, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Shift by a delta on each axis
    pub fn offset(self, dx: i32, dy: i32) -> Point {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Component-wise difference `self - origin`
    pub fn delta_from(self, origin: Point) -> (i32, i32) {
        (
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
        )
    }

    /// Raise each axis to at least [`EDGE_FLOOR`]
    pub fn clamp_to_floor(self) -> Point {
        Point::new(self.x.max(EDGE_FLOOR), self.y.max(EDGE_FLOOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_floors_each_axis_independently() {
        assert_eq!(Point::new(-100, 50).clamp_to_floor(), Point::new(8, 50));
        assert_eq!(Point::new(30, 3).clamp_to_floor(), Point::new(30, 8));
        assert_eq!(Point::new(8, 8).clamp_to_floor(), Point::new(8, 8));
    }

    #[test]
    fn offset_and_delta_are_inverse() {
        let origin = Point::new(100, 100);
        let moved = origin.offset(-200, -50);
        assert_eq!(moved, Point::new(-100, 50));
        assert_eq!(moved.delta_from(origin), (-200, -50));
    }

    #[test]
    fn offset_saturates() {
        let p = Point::new(i32::MAX - 1, i32::MIN + 1).offset(10, -10);
        assert_eq!(p, Point::new(i32::MAX, i32::MIN));
    }
}
