//! Distance lookup between locations.
//!
//! A [`DistanceProvider`] answers one question: given two locations, what
//! distance and travel time separate them. The planner composes against the
//! trait, so lookup tables, network-backed clients and memoizing wrappers
//! plug in interchangeably. This module ships the in-crate implementations;
//! the OSRM HTTP client lives in `tripline-osrm`.

mod cache;
mod error;
mod table;

pub use cache::CachedDistanceProvider;
pub use error::DistanceError;
pub use table::TableDistanceProvider;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Location;

/// Distance and duration of one hop between two locations.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TravelEstimate {
    /// Travelled distance in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes.
    pub duration_minutes: f64,
}

impl TravelEstimate {
    /// Zero distance, zero duration.
    pub const ZERO: Self = Self {
        distance_km: 0.0,
        duration_minutes: 0.0,
    };

    /// Construct an estimate from a distance and a duration.
    #[must_use]
    pub const fn new(distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            distance_km,
            duration_minutes,
        }
    }
}

/// Resolve the distance and duration between two locations.
///
/// Implementations may fail (missing table entry, unreachable pair, network
/// trouble); callers propagate those failures rather than guessing. Nothing
/// here promises symmetry or the triangle inequality. The planner does not
/// rely on either, and callers wanting symmetric results should wrap their
/// provider in [`CachedDistanceProvider`].
///
/// # Examples
///
/// ```
/// use tripline_core::{DistanceError, DistanceProvider, Location, TravelEstimate};
///
/// struct UnitDistanceProvider;
///
/// impl DistanceProvider for UnitDistanceProvider {
///     fn distance(
///         &self,
///         _from: &Location,
///         _to: &Location,
///     ) -> Result<TravelEstimate, DistanceError> {
///         Ok(TravelEstimate::new(1.0, 2.0))
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Location::new("A", 0.0, 0.0)?;
/// let b = Location::new("B", 1.0, 1.0)?;
/// let estimate = UnitDistanceProvider.distance(&a, &b)?;
/// assert_eq!(estimate.distance_km, 1.0);
/// # Ok(())
/// # }
/// ```
pub trait DistanceProvider {
    /// Distance and duration from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError`] when the pair cannot be resolved.
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError>;
}

/// Placeholder provider returning `(0, 0)` for every pair.
///
/// Deliberately dumb rather than an estimate: it stands in where a caller
/// has no real provider to supply yet.
#[derive(Debug, Default, Copy, Clone)]
pub struct ZeroDistanceProvider;

impl DistanceProvider for ZeroDistanceProvider {
    fn distance(&self, _from: &Location, _to: &Location) -> Result<TravelEstimate, DistanceError> {
        Ok(TravelEstimate::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_provider_returns_zero_for_any_pair() {
        let a = Location::new("A", 10.0, 20.0).expect("valid");
        let b = Location::new("B", -30.0, 40.0).expect("valid");

        let estimate = ZeroDistanceProvider.distance(&a, &b).expect("never fails");

        assert_eq!(estimate, TravelEstimate::ZERO);
    }
}
