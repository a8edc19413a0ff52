//! Region storage owned by the host.
//!
//! The navigation graph never owns regions. It asks a [`RegionStore`] to
//! resolve ids on demand, so a region removed by the host simply stops
//! resolving and disappears from the next scan.
//!
//! [`InMemoryWorld`] is a ready-made store with monotonic ids, and
//! [`BoxRegion`] a ready-made region whose shape is a vertex set with
//! cached axis-aligned bounds.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use crate::geometry::aabb::Aabb;
use crate::geometry::point::Point;
use crate::nav_error::NavError;
use crate::topology::link::Link;
use crate::topology::region::{Containment, NavRegion};
use crate::topology::region_id::RegionId;

/// Resolves region ids to the regions the host owns.
pub trait RegionStore {
    type Region: NavRegion;

    fn get(&self, id: RegionId) -> Option<&Self::Region>;
    fn get_mut(&mut self, id: RegionId) -> Option<&mut Self::Region>;

    /// True if `id` currently resolves.
    #[inline]
    fn has(&self, id: RegionId) -> bool {
        self.get(id).is_some()
    }
}

/// Regions whose outgoing link list can be edited in place.
pub trait NavRegionMut: NavRegion {
    fn links_mut(&mut self) -> &mut Vec<Link>;
}

/// An in-memory arena of regions keyed by [`RegionId`].
///
/// Ids are handed out from 1 upwards and never reused, so a stale id held
/// anywhere after [`remove`](Self::remove) can never alias a new region.
/// Once `u64::MAX` has been handed out the world refuses further inserts.
#[derive(Clone, Debug)]
pub struct InMemoryWorld<R> {
    regions: BTreeMap<RegionId, R>,
    /// `None` once every id has been used.
    next_id: Option<NonZeroU64>,
}

impl<R> Default for InMemoryWorld<R> {
    fn default() -> Self {
        Self {
            regions: BTreeMap::new(),
            next_id: Some(NonZeroU64::MIN),
        }
    }
}

impl<R: NavRegion> InMemoryWorld<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `region` and return its fresh id.
    ///
    /// # Errors
    /// [`NavError::IdsExhausted`] when the id space is used up; `region` is
    /// dropped and the world is unchanged.
    pub fn insert(&mut self, region: R) -> Result<RegionId, NavError> {
        let raw = self.next_id.ok_or(NavError::IdsExhausted)?;
        self.next_id = raw.checked_add(1);
        let id = RegionId::from_nonzero(raw);
        self.regions.insert(id, region);
        Ok(id)
    }

    /// Drop `id` from the world. Graphs that tracked it must be rescanned.
    pub fn remove(&mut self, id: RegionId) -> Option<R> {
        self.regions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Live ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &R)> + '_ {
        self.regions.iter().map(|(id, r)| (*id, r))
    }
}

impl<R: NavRegionMut> InMemoryWorld<R> {
    /// Append `link` to the outgoing list of `src`.
    ///
    /// The target is not checked: a link to a region that never resolves is
    /// kept and later treated as unreachable by scans and searches.
    pub fn add_link(&mut self, src: RegionId, link: Link) -> Result<(), NavError> {
        let region = self
            .regions
            .get_mut(&src)
            .ok_or(NavError::UnknownRegion(src))?;
        region.links_mut().push(link);
        Ok(())
    }

    /// Remove every link `src → target`, returning how many were dropped.
    pub fn remove_links(&mut self, src: RegionId, target: RegionId) -> Result<usize, NavError> {
        let links = self
            .regions
            .get_mut(&src)
            .ok_or(NavError::UnknownRegion(src))?
            .links_mut();
        let before = links.len();
        links.retain(|l| l.target() != target);
        Ok(before - links.len())
    }
}

impl<R: NavRegion> RegionStore for InMemoryWorld<R> {
    type Region = R;

    #[inline]
    fn get(&self, id: RegionId) -> Option<&R> {
        self.regions.get(&id)
    }

    #[inline]
    fn get_mut(&mut self, id: RegionId) -> Option<&mut R> {
        self.regions.get_mut(&id)
    }
}

/// A region shaped by a vertex set, tested against its cached bounds.
///
/// Points inside the bounds are contained with no exit point. Points outside
/// but within `margin` of the bounds are contained at the boundary, with the
/// nearest bounds point as exit. [`refresh`](NavRegion::refresh) recomputes
/// the bounds from the current vertices.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxRegion {
    vertices: Vec<Point>,
    bounds: Aabb,
    margin: f32,
    links: Vec<Link>,
}

impl BoxRegion {
    /// Box between two opposite corners.
    pub fn new(a: Point, b: Point) -> Self {
        BoxRegion {
            vertices: vec![a, b],
            bounds: Aabb::new(a, b),
            margin: 0.0,
            links: Vec::new(),
        }
    }

    /// Region bounding `vertices`.
    ///
    /// # Errors
    /// [`NavError::EmptyRegion`] for an empty vertex set.
    pub fn from_vertices<I: IntoIterator<Item = Point>>(vertices: I) -> Result<Self, NavError> {
        let vertices: Vec<Point> = vertices.into_iter().collect();
        let bounds = Aabb::from_points(vertices.iter().copied()).ok_or(NavError::EmptyRegion)?;
        Ok(BoxRegion {
            vertices,
            bounds,
            margin: 0.0,
            links: Vec::new(),
        })
    }

    /// Accept points up to `margin` outside the bounds as boundary points.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Replace the shape. Bounds keep their old value until the next refresh.
    ///
    /// # Errors
    /// [`NavError::EmptyRegion`] for an empty vertex set; the shape is left
    /// unchanged.
    pub fn set_vertices<I>(&mut self, vertices: I) -> Result<(), NavError>
    where
        I: IntoIterator<Item = Point>,
    {
        let vertices: Vec<Point> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(NavError::EmptyRegion);
        }
        self.vertices = vertices;
        Ok(())
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Bounds as of the last refresh (or construction).
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }
}

impl NavRegion for BoxRegion {
    fn links(&self) -> &[Link] {
        &self.links
    }

    fn contains(&self, point: Point) -> Option<Containment> {
        if self.bounds.contains(point) {
            return Some(Containment::inside());
        }
        if self.bounds.distance_squared(point) <= self.margin * self.margin {
            return Some(Containment::at_boundary(self.bounds.clamp(point)));
        }
        None
    }

    fn refresh(&mut self) {
        if let Some(bounds) = Aabb::from_points(self.vertices.iter().copied()) {
            self.bounds = bounds;
        }
    }
}

impl NavRegionMut for BoxRegion {
    fn links_mut(&mut self) -> &mut Vec<Link> {
        &mut self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> BoxRegion {
        BoxRegion::new(Point::ZERO, Point::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn insert_fails_once_ids_run_out() {
        let mut w = InMemoryWorld {
            regions: BTreeMap::new(),
            next_id: Some(NonZeroU64::MAX),
        };
        let last = w.insert(unit_box()).unwrap();
        assert_eq!(last.get(), u64::MAX);
        assert_eq!(w.insert(unit_box()), Err(NavError::IdsExhausted));
        assert_eq!(w.len(), 1);
        assert!(w.has(last));
    }

    #[test]
    fn ids_are_monotonic_and_not_reused() {
        let mut w = InMemoryWorld::new();
        let a = w.insert(unit_box()).unwrap();
        let b = w.insert(unit_box()).unwrap();
        assert_eq!((a.get(), b.get()), (1, 2));
        assert!(w.remove(a).is_some());
        let c = w.insert(unit_box()).unwrap();
        assert_eq!(c.get(), 3);
        assert!(!w.has(a));
        assert_eq!(w.ids().collect::<Vec<_>>(), vec![b, c]);
        assert_eq!(w.len(), 2);
    }

    #[test]
    fn add_link_on_unknown_region_fails() {
        let mut w: InMemoryWorld<BoxRegion> = InMemoryWorld::new();
        let ghost = RegionId::new(9).unwrap();
        let link = Link::new(ghost, 1.0, Point::ZERO, Point::ZERO).unwrap();
        assert_eq!(w.add_link(ghost, link), Err(NavError::UnknownRegion(ghost)));
    }

    #[test]
    fn add_and_remove_links_keeps_order() {
        let mut w = InMemoryWorld::new();
        let a = w.insert(unit_box()).unwrap();
        let b = w.insert(unit_box()).unwrap();
        let c = w.insert(unit_box()).unwrap();
        for (t, cost) in [(b, 1.0), (c, 2.0), (b, 3.0)] {
            w.add_link(a, Link::new(t, cost, Point::ZERO, Point::ZERO).unwrap())
                .unwrap();
        }
        let costs: Vec<f32> = w.get(a).unwrap().links().iter().map(Link::cost).collect();
        assert_eq!(costs, vec![1.0, 2.0, 3.0]);
        assert_eq!(w.remove_links(a, b), Ok(2));
        let left: Vec<RegionId> = w.get(a).unwrap().links().iter().map(Link::target).collect();
        assert_eq!(left, vec![c]);
    }

    #[test]
    fn box_contains_inside_without_exit() {
        let r = unit_box().with_margin(0.5);
        assert_eq!(r.contains(Point::new(0.5, 0.5, 0.5)), Some(Containment::inside()));
    }

    #[test]
    fn box_margin_yields_boundary_exit() {
        let r = unit_box().with_margin(0.5);
        let got = r.contains(Point::new(1.25, 0.5, 0.5));
        assert_eq!(got, Some(Containment::at_boundary(Point::new(1.0, 0.5, 0.5))));
        assert_eq!(r.contains(Point::new(2.0, 0.5, 0.5)), None);
        assert_eq!(unit_box().contains(Point::new(1.25, 0.5, 0.5)), None);
    }

    #[test]
    fn refresh_recomputes_bounds() {
        let mut r = unit_box();
        r.set_vertices([Point::ZERO, Point::new(4.0, 1.0, 1.0)]).unwrap();
        let far = Point::new(3.0, 0.5, 0.5);
        assert!(r.contains(far).is_none());
        r.refresh();
        assert!(r.contains(far).is_some());
        assert_eq!(r.bounds().max, Point::new(4.0, 1.0, 1.0));
    }

    #[test]
    fn empty_vertices_rejected() {
        assert_eq!(
            BoxRegion::from_vertices(Vec::new()).unwrap_err(),
            NavError::EmptyRegion
        );
        let mut r = unit_box();
        assert!(r.set_vertices(Vec::new()).is_err());
        assert_eq!(r.vertices().len(), 2);
    }
}
