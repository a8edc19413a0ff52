//! Core trait for navigable regions.
//!
//! A region is a walkable surface (a platform, a room floor, a ledge) owned by
//! the host's world model. The navigation graph only needs three things from
//! it: its outgoing links, a containment test, and a hook to recompute any
//! cached state when the topology is rescanned.

use crate::geometry::point::Point;
use crate::topology::link::Link;

/// Outcome of a successful containment test.
///
/// `exit` is set when the query point sits on or near the region boundary
/// rather than strictly inside; routes leaving from such a point walk to
/// `exit` first.
#[derive(Copy, Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Containment {
    pub exit: Option<Point>,
}

impl Containment {
    /// Point lies strictly inside; no boundary waypoint.
    #[inline]
    pub const fn inside() -> Self {
        Containment { exit: None }
    }

    /// Point lies at the boundary; route through `exit` first.
    #[inline]
    pub const fn at_boundary(exit: Point) -> Self {
        Containment { exit: Some(exit) }
    }
}

/// Node API consumed by [`NavGraph`](crate::nav_graph::NavGraph) and
/// [`RouteFinder`](crate::algs::route::RouteFinder).
///
/// # Required Methods
/// - `links`: outgoing links in the order traversal should consider them
/// - `contains`: `Some` when `point` belongs to this region
///
/// # Provided Methods
/// - `refresh`: called exactly once per region each time a scan discovers it
pub trait NavRegion {
    /// Outgoing links. Order is significant: scans and searches visit links
    /// in this order and earlier links win ties.
    fn links(&self) -> &[Link];

    /// Containment test for `point`.
    fn contains(&self, point: Point) -> Option<Containment>;

    /// Recompute cached state after a topology change.
    fn refresh(&mut self) {}
}

impl<R: NavRegion + ?Sized> NavRegion for Box<R> {
    #[inline]
    fn links(&self) -> &[Link] {
        (**self).links()
    }

    #[inline]
    fn contains(&self, point: Point) -> Option<Containment> {
        (**self).contains(point)
    }

    #[inline]
    fn refresh(&mut self) {
        (**self).refresh();
    }
}
