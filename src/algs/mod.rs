//! Re-export public algorithms.

pub mod policy;
pub mod route;

pub use policy::CostPolicy;
pub use route::{LinkPath, Route, RouteFinder, find_route};
