//! Top-level module for navigation topology abstractions.
//!
//! This module provides the node and edge types of the navigation graph:
//! - `RegionId` handles and `Link` edges
//! - The `NavRegion` trait hosts implement for their walkable surfaces
//! - `RegionStore` and the in-memory `InMemoryWorld` arena that owns regions
//!
//! Most users will implement `NavRegion` for their own surface type, or use
//! `BoxRegion` with `InMemoryWorld` directly.

pub mod link;
pub mod region;
pub mod region_id;
pub mod world;

pub use link::Link;
pub use region::{Containment, NavRegion};
pub use region_id::RegionId;
pub use world::{BoxRegion, InMemoryWorld, NavRegionMut, RegionStore};
