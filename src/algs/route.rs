//! Route search between two world-space points.
//!
//! [`RouteFinder`] resolves both endpoints to their containing regions with
//! [`NavGraph::locate`], searches the link graph between those regions under
//! the configured [`CostPolicy`], and flattens the winning links into a
//! [`Route`] of waypoints.
//!
//! # Waypoint order
//! A route is always, in walking order:
//!
//! 1. the boundary exit point of the start containment, if it reported one;
//! 2. for each link crossed: the link's `exit` (on its source region), then
//!    its `entry` (on its target region);
//! 3. the destination point `b`.
//!
//! An empty route means "nothing to do": the endpoints are (nearly) the same
//! point, one of them is outside every tracked region, or no path exists.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use itertools::Itertools;

use crate::algs::policy::CostPolicy;
use crate::config::RouteConfig;
use crate::geometry::point::Point;
use crate::nav_graph::NavGraph;
use crate::topology::link::Link;
use crate::topology::region::NavRegion;
use crate::topology::region_id::RegionId;
use crate::topology::world::RegionStore;

/// Ordered waypoints from a start point to a destination point.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route(Vec<Point>);

impl Route {
    /// The "no route" value.
    #[inline]
    pub fn empty() -> Self {
        Route(Vec::new())
    }

    /// Waypoints in walking order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consume the route, returning its waypoints.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First waypoint, if any.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.0.first().copied()
    }

    /// Last waypoint; for a non-empty route this is the destination.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.0.last().copied()
    }

    /// Iterate the waypoints by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Length of the polyline through the waypoints.
    pub fn length(&self) -> f32 {
        self.0
            .iter()
            .tuple_windows()
            .map(|(p, q)| p.distance(*q))
            .sum()
    }
}

impl From<Vec<Point>> for Route {
    fn from(points: Vec<Point>) -> Self {
        Route(points)
    }
}

impl IntoIterator for Route {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'r> IntoIterator for &'r Route {
    type Item = &'r Point;
    type IntoIter = std::slice::Iter<'r, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Links crossed between two regions, in walking order.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkPath<'a> {
    links: Vec<&'a Link>,
}

impl<'a> LinkPath<'a> {
    /// Crossed links, first hop first.
    #[inline]
    pub fn links(&self) -> &[&'a Link] {
        &self.links
    }

    /// Number of links crossed.
    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Sum of the crossed link costs.
    pub fn total_cost(&self) -> f32 {
        self.links.iter().map(|l| l.cost()).sum()
    }

    /// `exit, entry` for each link.
    pub fn waypoints(&self) -> impl Iterator<Item = Point> + '_ {
        self.links.iter().flat_map(|l| [l.exit(), l.entry()])
    }
}

/// Route search over a scanned [`NavGraph`].
///
/// Only tracked regions take part in the search: a link whose target was
/// not discovered by the last scan is ignored.
pub struct RouteFinder<'a, W: RegionStore> {
    graph: &'a NavGraph,
    world: &'a W,
    config: RouteConfig,
}

impl<'a, W: RegionStore> RouteFinder<'a, W> {
    pub fn new(graph: &'a NavGraph, world: &'a W) -> Self {
        Self {
            graph,
            world,
            config: RouteConfig::default(),
        }
    }

    pub fn config(mut self, config: RouteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn policy(mut self, policy: CostPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn degenerate_distance_sq(mut self, threshold_sq: f32) -> Self {
        self.config.degenerate_distance_sq = threshold_sq;
        self
    }

    /// Waypoints from `a` to `b`, or an empty route.
    pub fn find_route(&self, a: Point, b: Point) -> Route {
        if a.near(b, self.config.degenerate_distance_sq) {
            log::trace!("route {a} -> {b}: endpoints coincide");
            return Route::empty();
        }
        let Some(from) = self.graph.locate(self.world, a) else {
            log::trace!("route {a} -> {b}: start is outside every region");
            return Route::empty();
        };
        let Some(to) = self.graph.locate(self.world, b) else {
            log::trace!("route {a} -> {b}: destination is outside every region");
            return Route::empty();
        };

        let mut points = Vec::new();
        points.extend(from.exit);
        if from.region != to.region {
            let Some(path) = self.search(from.region, to.region) else {
                log::debug!(
                    "route {a} -> {b}: no path from region {} to region {}",
                    from.region,
                    to.region
                );
                return Route::empty();
            };
            points.extend(path.waypoints());
        }
        points.push(b);
        Route(points)
    }

    /// Links connecting region `from` to region `to` under the configured
    /// policy. `from == to` yields an empty path; an untracked endpoint or a
    /// missing connection yields `None`.
    pub fn search(&self, from: RegionId, to: RegionId) -> Option<LinkPath<'a>> {
        if !self.graph.contains_region(from) || !self.graph.contains_region(to) {
            return None;
        }
        if from == to {
            return Some(LinkPath { links: Vec::new() });
        }
        let links = match self.config.policy {
            CostPolicy::LocalGreedy => self.greedy(from, to)?,
            CostPolicy::Cumulative => self.cumulative(from, to)?,
        };
        Some(LinkPath { links })
    }

    #[inline]
    fn links_of(&self, id: RegionId) -> &'a [Link] {
        let world: &'a W = self.world;
        world.get(id).map(|r| r.links()).unwrap_or(&[])
    }

    #[inline]
    fn walkable(&self, id: RegionId) -> bool {
        self.graph.contains_region(id)
    }

    /// Explicit-stack form of the local greedy walk. Each frame is one region
    /// being expanded; a finished frame hands its best hop to its parent.
    fn greedy(&self, from: RegionId, target: RegionId) -> Option<Vec<&'a Link>> {
        let mut visited = HashSet::new();
        // Winning hops, each pointing at the hop that continues it.
        let mut chain: Vec<(&'a Link, Option<usize>)> = Vec::new();

        visited.insert(from);
        let mut stack = vec![GreedyFrame::new(self.links_of(from), None)];

        while let Some(frame) = stack.last_mut() {
            let links = frame.links;
            if let Some(link) = links.get(frame.next) {
                frame.next += 1;
                let next = link.target();
                // Checked per link: deeper frames grow `visited` as we go.
                if visited.contains(&next) || !self.walkable(next) {
                    continue;
                }
                if next == target {
                    frame.best = Some((link, None));
                    frame.next = links.len();
                    continue;
                }
                visited.insert(next);
                stack.push(GreedyFrame::new(self.links_of(next), Some(link)));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            let hop = done.best.map(|(link, tail)| {
                chain.push((link, tail));
                chain.len() - 1
            });
            let Some(parent) = stack.last_mut() else {
                return hop.map(|head| unroll(&chain, head));
            };
            let (Some(head), Some(via)) = (hop, done.via) else {
                continue;
            };
            // Reported upwards: the child's own hop cost, not the accumulated one.
            let cost = chain[head].0.cost();
            if cost < parent.best_cost {
                parent.best_cost = cost;
                parent.best = Some((via, Some(head)));
            }
        }
        None
    }

    fn cumulative(&self, from: RegionId, to: RegionId) -> Option<Vec<&'a Link>> {
        let mut dist: HashMap<RegionId, f32> = HashMap::new();
        let mut came_by: HashMap<RegionId, (RegionId, &'a Link)> = HashMap::new();
        let mut done: HashSet<RegionId> = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        dist.insert(from, 0.0);
        heap.push(Frontier {
            cost: 0.0,
            seq,
            region: from,
        });

        while let Some(Frontier { cost, region, .. }) = heap.pop() {
            if !done.insert(region) {
                continue;
            }
            if region == to {
                break;
            }
            for link in self.links_of(region) {
                let next = link.target();
                if done.contains(&next) || !self.walkable(next) {
                    continue;
                }
                let candidate = cost + link.cost();
                // Strict: the first route found at a given cost is kept.
                if dist.get(&next).is_some_and(|&d| candidate >= d) {
                    continue;
                }
                dist.insert(next, candidate);
                came_by.insert(next, (region, link));
                seq += 1;
                heap.push(Frontier {
                    cost: candidate,
                    seq,
                    region: next,
                });
            }
        }

        if !done.contains(&to) {
            return None;
        }
        let mut links = Vec::new();
        let mut at = to;
        while at != from {
            let (prev, link) = came_by.get(&at)?;
            links.push(*link);
            at = *prev;
        }
        links.reverse();
        Some(links)
    }
}

/// A region under expansion in the greedy walk.
struct GreedyFrame<'a> {
    links: &'a [Link],
    next: usize,
    /// Link the parent frame crossed to get here; `None` at the root.
    via: Option<&'a Link>,
    best_cost: f32,
    /// Winning link out of this region and the index of its continuation.
    best: Option<(&'a Link, Option<usize>)>,
}

impl<'a> GreedyFrame<'a> {
    fn new(links: &'a [Link], via: Option<&'a Link>) -> Self {
        Self {
            links,
            next: 0,
            via,
            best_cost: f32::INFINITY,
            best: None,
        }
    }
}

fn unroll<'a>(chain: &[(&'a Link, Option<usize>)], head: usize) -> Vec<&'a Link> {
    let mut links = Vec::new();
    let mut at = Some(head);
    while let Some(i) = at {
        let (link, tail) = chain[i];
        links.push(link);
        at = tail;
    }
    links
}

/// Min-heap entry ordered by cost, then by push order.
struct Frontier {
    cost: f32,
    seq: u64,
    region: RegionId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Route from `a` to `b` with [`RouteConfig::default`].
pub fn find_route<W: RegionStore>(graph: &NavGraph, world: &W, a: Point, b: Point) -> Route {
    RouteFinder::new(graph, world).find_route(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::world::{BoxRegion, InMemoryWorld};

    fn pt(x: f32) -> Point {
        Point::new(x, 0.5, 0.5)
    }

    /// Unit boxes laid out along x: region i spans [i*10, i*10+1].
    fn strip(n: usize) -> (InMemoryWorld<BoxRegion>, Vec<RegionId>) {
        let mut w = InMemoryWorld::new();
        let ids = (0..n)
            .map(|i| {
                let x = i as f32 * 10.0;
                w.insert(BoxRegion::new(Point::new(x, 0.0, 0.0), Point::new(x + 1.0, 1.0, 1.0))).unwrap()
            })
            .collect();
        (w, ids)
    }

    fn link(w: &mut InMemoryWorld<BoxRegion>, from: RegionId, to: RegionId, cost: f32, tag: f32) {
        let l = Link::new(to, cost, Point::new(tag, 0.0, 0.0), Point::new(tag, 1.0, 0.0)).unwrap();
        w.add_link(from, l).unwrap();
    }

    fn centre(i: usize) -> Point {
        pt(i as f32 * 10.0 + 0.5)
    }

    #[test]
    fn route_empty_and_len() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.length(), 0.0);
        let r = Route::from(vec![Point::ZERO, Point::new(3.0, 4.0, 0.0), Point::new(3.0, 4.0, 2.0)]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.length(), 7.0);
        assert_eq!(r.first(), Some(Point::ZERO));
        assert_eq!(r.last(), Some(Point::new(3.0, 4.0, 2.0)));
    }

    #[test]
    fn greedy_ignores_cost_already_spent() {
        // 0 -> 1 (cost 100) -> 3 (cost 1)
        // 0 -> 2 (cost 1)   -> 3 (cost 5)
        // Greedy compares the downstream hops (1 vs 5) and picks via 1.
        let (mut w, ids) = strip(4);
        link(&mut w, ids[0], ids[1], 100.0, 1.0);
        link(&mut w, ids[0], ids[2], 1.0, 2.0);
        link(&mut w, ids[1], ids[3], 1.0, 3.0);
        link(&mut w, ids[2], ids[3], 5.0, 4.0);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);

        let greedy = RouteFinder::new(&g, &w).search(ids[0], ids[3]).unwrap();
        let targets: Vec<RegionId> = greedy.links().iter().map(|l| l.target()).collect();
        assert_eq!(targets, vec![ids[1], ids[3]]);
        assert_eq!(greedy.total_cost(), 101.0);

        let best = RouteFinder::new(&g, &w)
            .policy(CostPolicy::Cumulative)
            .search(ids[0], ids[3])
            .unwrap();
        let targets: Vec<RegionId> = best.links().iter().map(|l| l.target()).collect();
        assert_eq!(targets, vec![ids[2], ids[3]]);
        assert_eq!(best.total_cost(), 6.0);
    }

    #[test]
    fn greedy_direct_link_short_circuits() {
        // 0 -> 1 -> 2 (cheap detour found first), then 0 -> 2 direct (expensive)
        let (mut w, ids) = strip(3);
        link(&mut w, ids[0], ids[1], 0.1, 1.0);
        link(&mut w, ids[1], ids[2], 0.1, 2.0);
        link(&mut w, ids[0], ids[2], 50.0, 3.0);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);
        let path = RouteFinder::new(&g, &w).search(ids[0], ids[2]).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.links()[0].cost(), 50.0);
    }

    #[test]
    fn greedy_visited_set_is_not_unwound() {
        // 0 -> 1 -> 3 -> 4 (target), 0 -> 2 -> 3.
        // Region 3 is consumed by the branch through 1; 2 then has nowhere to go.
        let (mut w, ids) = strip(5);
        link(&mut w, ids[0], ids[1], 1.0, 1.0);
        link(&mut w, ids[0], ids[2], 1.0, 2.0);
        link(&mut w, ids[1], ids[3], 9.0, 3.0);
        link(&mut w, ids[2], ids[3], 1.0, 4.0);
        link(&mut w, ids[3], ids[4], 1.0, 5.0);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);
        let path = RouteFinder::new(&g, &w).search(ids[0], ids[4]).unwrap();
        let targets: Vec<RegionId> = path.links().iter().map(|l| l.target()).collect();
        assert_eq!(targets, vec![ids[1], ids[3], ids[4]]);
    }

    #[test]
    fn search_same_region_and_untracked() {
        let (mut w, ids) = strip(3);
        link(&mut w, ids[0], ids[1], 1.0, 1.0);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);
        let f = RouteFinder::new(&g, &w);
        assert!(f.search(ids[0], ids[0]).unwrap().is_empty());
        assert!(f.search(ids[0], ids[2]).is_none());
        assert!(f.search(ids[2], ids[0]).is_none());
    }

    #[test]
    fn waypoints_follow_exit_then_entry() {
        let (mut w, ids) = strip(2);
        link(&mut w, ids[0], ids[1], 1.0, 7.0);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);
        let r = find_route(&g, &w, centre(0), centre(1));
        assert_eq!(
            r.points(),
            &[Point::new(7.0, 0.0, 0.0), Point::new(7.0, 1.0, 0.0), centre(1)]
        );
    }

    #[test]
    fn degenerate_threshold_is_configurable() {
        let (mut w, ids) = strip(1);
        let g = NavGraph::scanned(Some(ids[0]), &mut w);
        let a = pt(0.2);
        let b = pt(0.6);
        assert_eq!(find_route(&g, &w, a, b).points(), &[b]);
        let f = RouteFinder::new(&g, &w).degenerate_distance_sq(0.5);
        assert!(f.find_route(a, b).is_empty());
    }

    #[test]
    fn frontier_pops_cheapest_then_oldest() {
        let r = RegionId::new(1).unwrap();
        let mut heap = BinaryHeap::new();
        heap.push(Frontier { cost: 2.0, seq: 0, region: r });
        heap.push(Frontier { cost: 1.0, seq: 2, region: r });
        heap.push(Frontier { cost: 1.0, seq: 1, region: r });
        let order: Vec<(f32, u64)> = std::iter::from_fn(|| heap.pop().map(|f| (f.cost, f.seq))).collect();
        assert_eq!(order, vec![(1.0, 1), (1.0, 2), (2.0, 0)]);
    }
}
