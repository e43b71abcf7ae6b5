//! Test doubles for the distance-provider contract.
//!
//! Used by this crate's unit and behaviour tests and available to
//! downstream crates that need deterministic providers without a network.

use std::sync::{Mutex, PoisonError};

use crate::{DistanceError, DistanceProvider, Location, TravelEstimate};

/// Provider returning the same pre-configured response for every pair.
///
/// # Examples
///
/// ```
/// use tripline_core::test_support::FixedDistanceProvider;
/// use tripline_core::{DistanceProvider, Location, TravelEstimate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = FixedDistanceProvider::with_estimate(TravelEstimate::new(1.0, 2.0));
/// let a = Location::new("A", 0.0, 0.0)?;
/// let b = Location::new("B", 1.0, 1.0)?;
/// assert_eq!(provider.distance(&a, &b)?.duration_minutes, 2.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FixedDistanceProvider {
    response: Result<TravelEstimate, DistanceError>,
}

impl FixedDistanceProvider {
    /// Answer every pair with `estimate`.
    #[must_use]
    pub fn with_estimate(estimate: TravelEstimate) -> Self {
        Self {
            response: Ok(estimate),
        }
    }

    /// Fail every pair with `error`.
    #[must_use]
    pub fn with_error(error: DistanceError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl DistanceProvider for FixedDistanceProvider {
    fn distance(&self, _from: &Location, _to: &Location) -> Result<TravelEstimate, DistanceError> {
        self.response.clone()
    }
}

/// Decorator recording every `(from, to)` name pair passed through it.
///
/// Lets tests assert how often, in what order and with which pairs a
/// provider was consulted.
#[derive(Debug)]
pub struct RecordingDistanceProvider<P> {
    inner: P,
    calls: Mutex<Vec<(String, String)>>,
}

impl<P: DistanceProvider> RecordingDistanceProvider<P> {
    /// Wrap `inner` with an empty call log.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Name pairs seen so far, in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of lookups seen so far.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<P: DistanceProvider> DistanceProvider for RecordingDistanceProvider<P> {
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((from.name.clone(), to.name.clone()));
        self.inner.distance(from, to)
    }
}
