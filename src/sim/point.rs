//! Integer 2-D point used for positions, velocities and grid scaling
//!
//! Points are values: `add` and `scale` return new points.

use std::ops::{Add, Mul};

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A distance from the origin in pixels (or grid cells before scaling)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Point(IVec2);

impl Point {
    pub const ZERO: Self = Self(IVec2::ZERO);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.0.y
    }

    /// Componentwise sum
    #[inline]
    pub fn add(self, other: Point) -> Point {
        Point(self.0 + other.0)
    }

    /// Componentwise product by `factor`
    #[inline]
    pub fn scale(self, factor: i32) -> Point {
        Point(self.0 * factor)
    }

    #[inline]
    pub fn equals(self, other: Point) -> bool {
        self == other
    }

    /// Same point with `x` replaced
    #[inline]
    pub fn with_x(self, x: i32) -> Point {
        Point::new(x, self.y())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point(self.0 * rhs)
    }
}
