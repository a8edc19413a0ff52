//! Path-cost policies for the route search.

/// How competing links are compared while searching for a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// Depth-first search that, at each region, prefers the link whose
    /// downstream subpath reports the cheapest *next hop*. The cost already
    /// spent reaching a branch point is ignored, so the result is not
    /// necessarily the shortest route. A direct link to the target is taken
    /// as soon as it is seen. The visited set is shared across the whole
    /// search and never unwound.
    #[default]
    LocalGreedy,
    /// Dijkstra over summed link costs. Returns a minimum-cost route;
    /// among equal-cost routes the first one discovered is kept.
    Cumulative,
}
