//! 2D geometry primitives for pointer tracking.
//!
//! Coordinates are in viewport units, matching whatever unit system the
//! gesture adapter reports. The y axis grows downward (screen
//! convention), which the drop-zone resolver relies on.
//!
//! ## Offset arithmetic
//!
//! Subtracting two points yields a [`Vec2`]; a drag session stores the
//! pointer-to-item offset once at grab time and subtracts it from every
//! subsequent pointer position:
//!
//! ```
//! use candy_sort::core::Point;
//!
//! let item = Point::new(40.0, 80.0);
//! let pointer = Point::new(52.0, 95.0);
//!
//! let offset = pointer - item;
//! assert_eq!(pointer - offset, item);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point from viewport coordinates.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Create a displacement vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Point) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<Vec2> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec2) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Point;

    fn add(self, rhs: Vec2) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_sub_point() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, 5.0);

        assert_eq!(a - b, Vec2::new(6.0, 15.0));
    }

    #[test]
    fn test_point_sub_vec() {
        let p = Point::new(10.0, 20.0);
        let v = Vec2::new(4.0, 5.0);

        assert_eq!(p - v, Point::new(6.0, 15.0));
        assert_eq!((p - v) + v, p);
    }

    #[test]
    fn test_offset_round_trip() {
        let item = Point::new(33.0, 77.0);
        let grab = Point::new(40.0, 90.0);

        let offset = grab - item;
        let moved = Point::new(120.0, 300.0);

        // Item tracks the pointer without jumping to it
        assert_eq!(moved - offset, Point::new(113.0, 287.0));
    }

    #[test]
    fn test_serialization() {
        let p = Point::new(1.5, -2.5);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
