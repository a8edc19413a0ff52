//! `Point`: a plain 3D world-space coordinate.
//!
//! The navigation core treats points as opaque data: it stores them as
//! waypoints, hands them to containment predicates and only ever measures
//! squared distance to detect degenerate route requests.

use std::fmt;
use std::ops::{Add, Sub};

/// A world-space position with `f32` components.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Point = Point::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point { x, y, z }
    }

    /// Squared euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Point) -> f32 {
        let d = self - other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// True when `other` lies strictly closer than `sqrt(threshold_sq)`.
    #[inline]
    pub fn near(self, other: Point, threshold_sq: f32) -> bool {
        self.distance_squared(other) < threshold_sq
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl From<[f32; 3]> for Point {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Point::new(x, y, z)
    }
}

impl From<Point> for [f32; 3] {
    #[inline]
    fn from(p: Point) -> Self {
        [p.x, p.y, p.z]
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
