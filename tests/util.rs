#![allow(dead_code)]
use std::collections::BTreeSet;

use nav_sieve::prelude::*;

/// Spacing between consecutive strip regions along x.
pub const PITCH: f32 = 10.0;

/// `n` unit boxes along x: region `i` spans `[i*PITCH, i*PITCH + 1]`.
pub fn strip_world(n: usize) -> (InMemoryWorld<BoxRegion>, Vec<RegionId>) {
    let mut w = InMemoryWorld::new();
    let ids = (0..n)
        .map(|i| {
            let x = i as f32 * PITCH;
            w.insert(BoxRegion::new(
                Point::new(x, 0.0, 0.0),
                Point::new(x + 1.0, 1.0, 1.0),
            )).unwrap()
        })
        .collect();
    (w, ids)
}

/// Centre of strip region `i`.
pub fn centre(i: usize) -> Point {
    Point::new(i as f32 * PITCH + 0.5, 0.5, 0.5)
}

/// Exit waypoint of a `from -> to` link built by [`connect`].
pub fn exit_of(from: usize, to: usize) -> Point {
    Point::new(from as f32 * PITCH + 1.0, 0.5, to as f32)
}

/// Entry waypoint of a `from -> to` link built by [`connect`].
pub fn entry_of(from: usize, to: usize) -> Point {
    Point::new(to as f32 * PITCH, 0.5, from as f32)
}

/// Add a link between strip regions by index.
pub fn connect(
    w: &mut InMemoryWorld<BoxRegion>,
    ids: &[RegionId],
    from: usize,
    to: usize,
    cost: f32,
) {
    let link = Link::new(ids[to], cost, exit_of(from, to), entry_of(from, to)).unwrap();
    w.add_link(ids[from], link).unwrap();
}

/// Reference reachability over an index edge list.
pub fn reachable(n: usize, edges: &[(usize, usize, u8)], start: usize) -> BTreeSet<usize> {
    let mut seen = BTreeSet::new();
    let mut stack = vec![start];
    while let Some(u) = stack.pop() {
        if u >= n || !seen.insert(u) {
            continue;
        }
        stack.extend(edges.iter().filter(|e| e.0 == u).map(|e| e.1));
    }
    seen
}

/// Reference all-pairs minimum cost (Floyd–Warshall) from `start`.
pub fn min_costs(n: usize, edges: &[(usize, usize, u8)], start: usize) -> Vec<Option<f32>> {
    let mut d = vec![vec![None::<f32>; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = Some(0.0);
    }
    for &(u, v, c) in edges {
        let c = f32::from(c);
        if d[u][v].is_none_or(|old| c < old) {
            d[u][v] = Some(c);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].is_none_or(|old| a + b < old) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    d.swap_remove(start)
}

/// Map a tracked id back to its strip index.
pub fn index_of(ids: &[RegionId], id: RegionId) -> usize {
    ids.iter().position(|&r| r == id).expect("id from this strip")
}
