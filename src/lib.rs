//! # nav-sieve
//!
//! nav-sieve locates which navigable region of a world contains an arbitrary
//! 3D point, and computes waypoint routes between two such points by
//! crossing directed, weighted links between regions.
//!
//! ## Features
//! - Non-owning navigation graph built by a reachability scan from an entry region
//! - First-match containment lookup in discovery order, with boundary exit points
//! - Route search with swappable cost policies (`LocalGreedy`, `Cumulative`)
//! - Ready-made `InMemoryWorld` arena and `BoxRegion` surfaces
//! - Readers/writer `SharedNavGraph` so searches never overlap a scan
//!
//! ## Usage
//!
//! ```rust
//! use nav_sieve::prelude::*;
//!
//! let mut world = InMemoryWorld::new();
//! let a = world.insert(BoxRegion::new(Point::new(0.0, 0.0, 0.0), Point::new(4.0, 1.0, 4.0))).unwrap();
//! let b = world.insert(BoxRegion::new(Point::new(6.0, 0.0, 0.0), Point::new(10.0, 1.0, 4.0))).unwrap();
//! let bridge = Link::new(b, 2.0, Point::new(4.0, 0.5, 2.0), Point::new(6.0, 0.5, 2.0)).unwrap();
//! world.add_link(a, bridge).unwrap();
//!
//! let graph = NavGraph::scanned(Some(a), &mut world);
//! let route = graph.find_route(&world, Point::new(1.0, 0.5, 1.0), Point::new(8.0, 0.5, 1.0));
//! assert_eq!(route.len(), 3);
//! ```
//!
//! ## Determinism
//!
//! Scans, lookups and searches visit links in list order and never sort by
//! weight, so repeated queries over an unchanged world return identical
//! routes. Among equally good candidates the first one in list order wins.
//!
//! ## Logging
//! The crate logs through the [`log`] facade and never installs a logger.

pub mod algs;
pub mod config;
pub mod geometry;
pub mod nav_error;
pub mod nav_graph;
pub mod topology;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::policy::CostPolicy;
    pub use crate::algs::route::{LinkPath, Route, RouteFinder, find_route};
    pub use crate::config::RouteConfig;
    pub use crate::geometry::{Aabb, Point};
    pub use crate::nav_error::NavError;
    pub use crate::nav_graph::{Located, NavGraph, SharedNavGraph};
    pub use crate::topology::{
        BoxRegion, Containment, InMemoryWorld, Link, NavRegion, NavRegionMut, RegionId,
        RegionStore,
    };
}
