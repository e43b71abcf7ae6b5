//! Memoizing decorator for distance providers.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::debug;
use ordered_float::OrderedFloat;

use crate::{DistanceError, DistanceProvider, Location, TravelEstimate};

/// `(latitude, longitude)` endpoint usable as a hash-map key.
type Endpoint = (OrderedFloat<f64>, OrderedFloat<f64>);

/// Symmetric pair key; the two endpoints are stored in lexicographic order.
type PairKey = (Endpoint, Endpoint);

/// Memoizes another provider under a symmetric per-pair key.
///
/// The key is built from the two endpoints' `(latitude, longitude)` pairs in
/// lexicographic order, so `distance(a, b)` and `distance(b, a)` share one
/// entry. Identity is by coordinate value, not name: two locations at the
/// same position collide, intentionally, because physical distance depends
/// on position rather than label.
///
/// The backing map is guarded by a mutex that stays held across the wrapped
/// call, so concurrent callers resolve each pair upstream at most once.
/// Failed lookups are not cached; the next call retries the wrapped
/// provider.
///
/// # Examples
///
/// ```
/// use tripline_core::{
///     CachedDistanceProvider, DistanceProvider, Location, TableDistanceProvider, TravelEstimate,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let table = TableDistanceProvider::new()
///     .with_entry("A", "B", TravelEstimate::new(1.23, 4.56));
/// let cached = CachedDistanceProvider::new(table);
///
/// let a = Location::new("A", 1.0, 2.0)?;
/// let b = Location::new("B", 3.0, 4.0)?;
/// assert_eq!(cached.distance(&a, &b)?, cached.distance(&b, &a)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CachedDistanceProvider<P> {
    inner: P,
    entries: Mutex<HashMap<PairKey, TravelEstimate>>,
}

impl<P: DistanceProvider> CachedDistanceProvider<P> {
    /// Wrap `inner` with an empty cache.
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Access the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    fn key_for(a: &Location, b: &Location) -> PairKey {
        let first = (OrderedFloat(a.latitude()), OrderedFloat(a.longitude()));
        let second = (OrderedFloat(b.latitude()), OrderedFloat(b.longitude()));
        if first <= second {
            (first, second)
        } else {
            (second, first)
        }
    }
}

impl<P: DistanceProvider> DistanceProvider for CachedDistanceProvider<P> {
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError> {
        let key = Self::key_for(from, to);
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(estimate) = entries.get(&key) {
            return Ok(*estimate);
        }
        debug!("distance cache miss for {} -> {}", from.name, to.name);
        let estimate = self.inner.distance(from, to)?;
        entries.insert(key, estimate);
        Ok(estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedDistanceProvider, RecordingDistanceProvider};
    use rstest::rstest;

    fn location(name: &str, latitude: f64, longitude: f64) -> Location {
        Location::new(name, latitude, longitude).expect("valid coordinates")
    }

    fn counting_cache() -> CachedDistanceProvider<RecordingDistanceProvider<FixedDistanceProvider>>
    {
        CachedDistanceProvider::new(RecordingDistanceProvider::new(
            FixedDistanceProvider::with_estimate(TravelEstimate::new(1.23, 4.56)),
        ))
    }

    #[rstest]
    fn repeated_lookups_invoke_the_wrapped_provider_once() {
        let cached = counting_cache();
        let a = location("A", 1.0, 2.0);
        let b = location("B", 3.0, 4.0);

        let first = cached.distance(&a, &b).expect("lookup succeeds");
        let second = cached.distance(&a, &b).expect("lookup succeeds");

        assert_eq!(first, TravelEstimate::new(1.23, 4.56));
        assert_eq!(first, second);
        assert_eq!(cached.inner().call_count(), 1);
    }

    #[rstest]
    fn reversed_pair_shares_the_same_entry() {
        let cached = counting_cache();
        let a = location("A", 10.0, 20.0);
        let b = location("B", 30.0, 40.0);

        let forward = cached.distance(&a, &b).expect("lookup succeeds");
        let reverse = cached.distance(&b, &a).expect("lookup succeeds");

        assert_eq!(forward, reverse);
        assert_eq!(cached.inner().call_count(), 1);
    }

    #[rstest]
    fn distinct_pairs_are_not_mixed() {
        let cached = counting_cache();
        let a = location("A", 0.0, 0.0);
        let b = location("B", 1.0, 1.0);
        let c = location("C", 2.0, 2.0);

        cached.distance(&a, &b).expect("lookup succeeds");
        cached.distance(&a, &c).expect("lookup succeeds");

        assert_eq!(cached.inner().call_count(), 2);
    }

    #[rstest]
    fn identity_is_by_coordinates_not_name() {
        let cached = counting_cache();
        let a = location("Depot", 1.0, 2.0);
        let same_spot = location("Warehouse", 1.0, 2.0);
        let b = location("B", 3.0, 4.0);

        cached.distance(&a, &b).expect("lookup succeeds");
        cached.distance(&same_spot, &b).expect("lookup succeeds");

        assert_eq!(cached.inner().call_count(), 1);
    }

    #[rstest]
    fn failed_lookups_are_not_cached() {
        let cached = CachedDistanceProvider::new(RecordingDistanceProvider::new(
            FixedDistanceProvider::with_error(DistanceError::UnknownPair {
                from: "A".into(),
                to: "B".into(),
            }),
        ));
        let a = location("A", 0.0, 0.0);
        let b = location("B", 1.0, 1.0);

        assert!(cached.distance(&a, &b).is_err());
        assert!(cached.distance(&a, &b).is_err());

        assert_eq!(cached.inner().call_count(), 2);
    }
}
