//! Route search configuration.

use crate::algs::policy::CostPolicy;

/// Squared distance below which two query points count as the same place.
pub const DEFAULT_DEGENERATE_DISTANCE_SQ: f32 = 0.1;

/// Tunables for [`RouteFinder`](crate::algs::route::RouteFinder).
///
/// Missing fields deserialize to their defaults, so partial configs such as
/// `{"policy": "cumulative"}` are accepted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// `find_route(a, b)` returns an empty route when
    /// `a.distance_squared(b)` is below this value.
    pub degenerate_distance_sq: f32,
    pub policy: CostPolicy,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            degenerate_distance_sq: DEFAULT_DEGENERATE_DISTANCE_SQ,
            policy: CostPolicy::default(),
        }
    }
}
