//! Geometry primitives for nav-sieve.
//!
//! Points are world-space positions used as waypoints; boxes back the
//! built-in region containment test.

pub mod aabb;
pub mod point;

pub use aabb::Aabb;
pub use point::Point;
