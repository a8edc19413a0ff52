//! `RegionId`: a strong, zero-cost handle for navigable regions
//!
//! Regions are owned by the host's world model; the navigation graph only
//! refers to them. `RegionId` wraps a nonzero `u64` so that 0 stays free as
//! an invalid or sentinel value and `Option<RegionId>` costs nothing extra.

use crate::nav_error::NavError;
use std::{fmt, num::NonZeroU64};

/// Opaque, non-owning reference to a region held by a
/// [`RegionStore`](crate::topology::world::RegionStore).
///
/// # Memory layout
/// This type is `repr(transparent)` over `NonZeroU64`, so it has the size
/// and alignment of a `u64` and `Option<RegionId>` has the same size.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct RegionId(NonZeroU64);

impl RegionId {
    /// Creates a new `RegionId` from a raw `u64` value.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::InvalidRegionId`] if `raw == 0`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use nav_sieve::topology::region_id::RegionId;
    /// let r = RegionId::new(1).unwrap();
    /// assert_eq!(r.get(), 1);
    /// assert!(RegionId::new(0).is_err());
    /// ```
    #[inline]
    pub fn new(raw: u64) -> Result<Self, NavError> {
        NonZeroU64::new(raw)
            .map(RegionId)
            .ok_or(NavError::InvalidRegionId)
    }

    #[inline]
    pub const fn from_nonzero(raw: NonZeroU64) -> Self {
        RegionId(raw)
    }

    /// Returns the inner `u64` value of this `RegionId`.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegionId").field(&self.get()).finish()
    }
}

/// Prints only the raw integer.
impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u64> for RegionId {
    type Error = NavError;
    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        RegionId::new(raw)
    }
}
