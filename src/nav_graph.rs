//! Navigation graph: the regions reachable from an entry region.
//!
//! [`NavGraph`] tracks region ids in discovery order. It is rebuilt
//! wholesale by [`NavGraph::scan`] whenever the host changes topology; there
//! is no incremental update. Containment lookups walk the tracked regions in
//! that same order and the first match wins.

use std::sync::Arc;

use hashbrown::HashSet;
use parking_lot::RwLock;

use crate::algs::route::{Route, RouteFinder};
use crate::config::RouteConfig;
use crate::geometry::point::Point;
use crate::topology::link::Link;
use crate::topology::region::NavRegion;
use crate::topology::region_id::RegionId;
use crate::topology::world::RegionStore;

/// Result of [`NavGraph::locate`]: the first tracked region containing the
/// query point, plus the boundary waypoint its containment test reported.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Located {
    pub region: RegionId,
    pub exit: Option<Point>,
}

/// Ordered set of regions reachable from `entry`.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    entry: Option<RegionId>,
    order: Vec<RegionId>,
    tracked: HashSet<RegionId>,
}

impl NavGraph {
    /// Empty graph rooted at `entry`. Nothing is tracked until [`scan`](Self::scan).
    pub fn new(entry: Option<RegionId>) -> Self {
        NavGraph {
            entry,
            order: Vec::new(),
            tracked: HashSet::new(),
        }
    }

    /// Build and scan in one step.
    pub fn scanned<W: RegionStore>(entry: Option<RegionId>, world: &mut W) -> Self {
        let mut graph = NavGraph::new(entry);
        graph.scan(world);
        graph
    }

    #[inline]
    pub fn entry(&self) -> Option<RegionId> {
        self.entry
    }

    /// Change the entry region. Takes effect at the next scan.
    #[inline]
    pub fn set_entry(&mut self, entry: Option<RegionId>) {
        self.entry = entry;
    }

    /// Rebuild the tracked set from the entry region.
    ///
    /// Pre-order depth-first walk: a region is tracked and refreshed when it
    /// is first reached, then its links are followed in list order. Each
    /// reachable region is refreshed exactly once per scan. Link targets that
    /// do not resolve in `world` are skipped.
    pub fn scan<W: RegionStore>(&mut self, world: &mut W) {
        self.order.clear();
        self.tracked.clear();

        let Some(entry) = self.entry else {
            log::debug!("nav scan: no entry region, graph left empty");
            return;
        };
        let Some(targets) = self.discover(world, entry) else {
            log::warn!("nav scan: entry region {entry} does not resolve");
            return;
        };

        // (pending targets of a region, next index) frames emulate recursion.
        let mut stack: Vec<(Vec<RegionId>, usize)> = vec![(targets, 0)];
        while let Some((targets, idx)) = stack.last_mut() {
            let Some(&next) = targets.get(*idx) else {
                stack.pop();
                continue;
            };
            *idx += 1;
            if self.tracked.contains(&next) {
                continue;
            }
            match self.discover(world, next) {
                Some(children) => stack.push((children, 0)),
                None => log::warn!("nav scan: link target {next} does not resolve, skipping"),
            }
        }

        log::debug!(
            "nav scan: tracked {} region(s) from entry {entry}",
            self.order.len()
        );
    }

    /// Track and refresh `id`, returning its link targets in list order.
    fn discover<W: RegionStore>(&mut self, world: &mut W, id: RegionId) -> Option<Vec<RegionId>> {
        let region = world.get_mut(id)?;
        self.tracked.insert(id);
        self.order.push(id);
        region.refresh();
        Some(region.links().iter().map(Link::target).collect())
    }

    /// Tracked regions in discovery order.
    #[inline]
    pub fn regions(&self) -> &[RegionId] {
        &self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn contains_region(&self, id: RegionId) -> bool {
        self.tracked.contains(&id)
    }

    /// First tracked region whose containment test accepts `point`.
    pub fn locate<W: RegionStore>(&self, world: &W, point: Point) -> Option<Located> {
        self.order.iter().find_map(|&id| {
            let containment = world.get(id)?.contains(point)?;
            Some(Located {
                region: id,
                exit: containment.exit,
            })
        })
    }

    /// Route from `a` to `b` with the default configuration.
    pub fn find_route<W: RegionStore>(&self, world: &W, a: Point, b: Point) -> Route {
        RouteFinder::new(self, world).find_route(a, b)
    }
}

/// A [`NavGraph`] behind a readers/writer lock.
///
/// Scans take the write lock and queries take a read lock, so a search never
/// observes a half-rebuilt tracked set.
#[derive(Clone, Debug, Default)]
pub struct SharedNavGraph {
    inner: Arc<RwLock<NavGraph>>,
}

impl SharedNavGraph {
    pub fn new(graph: NavGraph) -> Self {
        SharedNavGraph {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    pub fn scan<W: RegionStore>(&self, world: &mut W) {
        self.inner.write().scan(world);
    }

    pub fn set_entry(&self, entry: Option<RegionId>) {
        self.inner.write().set_entry(entry);
    }

    pub fn locate<W: RegionStore>(&self, world: &W, point: Point) -> Option<Located> {
        self.inner.read().locate(world, point)
    }

    pub fn find_route<W: RegionStore>(&self, world: &W, a: Point, b: Point) -> Route {
        self.find_route_with(world, a, b, &RouteConfig::default())
    }

    pub fn find_route_with<W: RegionStore>(
        &self,
        world: &W,
        a: Point,
        b: Point,
        config: &RouteConfig,
    ) -> Route {
        let graph = self.inner.read();
        RouteFinder::new(&graph, world)
            .config(config.clone())
            .find_route(a, b)
    }

    /// Copy of the tracked regions in discovery order.
    pub fn regions(&self) -> Vec<RegionId> {
        self.inner.read().regions().to_vec()
    }
}
