//! NavError: error type for nav-sieve construction APIs.
//!
//! Queries (scan, locate, route search) never fail; they report "nothing
//! found" as empty or absent results. Errors only arise while building the
//! world: bad identifiers, links on unknown regions, or invalid costs.

use crate::topology::region_id::RegionId;
use thiserror::Error;

/// Unified error type for nav-sieve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    /// Attempted to construct a RegionId with a zero value (invalid).
    #[error("RegionId must be non-zero (0 is reserved as invalid/sentinel)")]
    InvalidRegionId,
    /// The region does not resolve in the store.
    #[error("unknown region `{0}`")]
    UnknownRegion(RegionId),
    /// Link costs must be finite and non-negative.
    #[error("invalid link cost {0}: expected a finite value >= 0")]
    InvalidCost(f32),
    /// A region shape needs at least one vertex.
    #[error("region shape has no vertices")]
    EmptyRegion,
    /// Every region id has already been handed out.
    #[error("region id space exhausted")]
    IdsExhausted,
}
