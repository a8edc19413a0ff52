//! Link: a directed, weighted connection between two regions.
//!
//! A link belongs to the outgoing list of its source region, so it only
//! records the target. Crossing a link means walking to its `exit` point on
//! the source region and arriving at its `entry` point on the target.

use crate::geometry::point::Point;
use crate::nav_error::NavError;
use crate::topology::region_id::RegionId;

/// A directed edge to `target` with a fixed traversal cost and waypoints.
///
/// Fields are private: the cost and both points cannot change once the link
/// exists.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Link {
    target: RegionId,
    cost: f32,
    exit: Point,
    entry: Point,
}

impl Link {
    /// Construct a link towards `target`.
    ///
    /// # Errors
    /// [`NavError::InvalidCost`] if `cost` is negative, NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nav_sieve::geometry::Point;
    /// use nav_sieve::topology::link::Link;
    /// use nav_sieve::topology::region_id::RegionId;
    /// let to = RegionId::new(2).unwrap();
    /// let l = Link::new(to, 5.0, Point::new(1.0, 0.0, 0.0), Point::new(2.0, 0.0, 0.0)).unwrap();
    /// assert_eq!(l.target(), to);
    /// assert_eq!(l.cost(), 5.0);
    /// assert!(Link::new(to, -1.0, Point::ZERO, Point::ZERO).is_err());
    /// ```
    pub fn new(target: RegionId, cost: f32, exit: Point, entry: Point) -> Result<Self, NavError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(NavError::InvalidCost(cost));
        }
        Ok(Link {
            target,
            cost,
            exit,
            entry,
        })
    }

    /// Link whose cost is the straight-line distance between its waypoints.
    ///
    /// # Errors
    /// [`NavError::InvalidCost`] if a waypoint coordinate is NaN or infinite,
    /// or the distance overflows.
    pub fn straight(target: RegionId, exit: Point, entry: Point) -> Result<Self, NavError> {
        Link::new(target, exit.distance(entry), exit, entry)
    }

    #[inline]
    pub fn target(&self) -> RegionId {
        self.target
    }

    #[inline]
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Waypoint on the source region where the crossing starts.
    #[inline]
    pub fn exit(&self) -> Point {
        self.exit
    }

    /// Waypoint on the target region where the crossing ends.
    #[inline]
    pub fn entry(&self) -> Point {
        self.entry
    }
}
