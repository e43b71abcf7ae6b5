//! Behavioural tests for the memoizing distance cache.

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tripline_core::test_support::{FixedDistanceProvider, RecordingDistanceProvider};
use tripline_core::{CachedDistanceProvider, DistanceProvider, Location, TravelEstimate};

type Cache = CachedDistanceProvider<RecordingDistanceProvider<FixedDistanceProvider>>;

fn location(name: &str, value: f64) -> Location {
    Location::new(name, value, value).expect("valid coordinates")
}

#[fixture]
fn cache() -> Cache {
    CachedDistanceProvider::new(RecordingDistanceProvider::new(
        FixedDistanceProvider::with_estimate(TravelEstimate::new(1.23, 4.56)),
    ))
}

#[fixture]
fn lookups() -> RefCell<Vec<TravelEstimate>> {
    RefCell::new(Vec::new())
}

#[given("a cached provider over a recording provider")]
fn cached_provider(#[from(lookups)] lookups: &RefCell<Vec<TravelEstimate>>) {
    lookups.borrow_mut().clear();
}

#[when("I look up the same pair twice")]
fn look_up_same_pair_twice(
    #[from(cache)] cache: &Cache,
    #[from(lookups)] lookups: &RefCell<Vec<TravelEstimate>>,
) {
    let a = location("A", 1.0);
    let b = location("B", 2.0);
    for _ in 0..2 {
        let estimate = cache.distance(&a, &b).expect("lookup succeeds");
        lookups.borrow_mut().push(estimate);
    }
}

#[when("I look up a pair and then its reverse")]
fn look_up_pair_and_reverse(
    #[from(cache)] cache: &Cache,
    #[from(lookups)] lookups: &RefCell<Vec<TravelEstimate>>,
) {
    let a = location("A", 1.0);
    let b = location("B", 2.0);
    let forward = cache.distance(&a, &b).expect("lookup succeeds");
    let reverse = cache.distance(&b, &a).expect("lookup succeeds");
    lookups.borrow_mut().extend([forward, reverse]);
}

#[then("both lookups agree")]
fn lookups_agree(#[from(lookups)] lookups: &RefCell<Vec<TravelEstimate>>) {
    let lookups = lookups.borrow();
    assert_eq!(lookups.len(), 2);
    assert_eq!(lookups[0], lookups[1]);
}

#[then("the wrapped provider was consulted once")]
fn wrapped_provider_consulted_once(#[from(cache)] cache: &Cache) {
    assert_eq!(cache.inner().call_count(), 1);
}

#[scenario(path = "tests/features/distance_cache.feature", index = 0)]
fn repeated_lookups_hit_once(cache: Cache, lookups: RefCell<Vec<TravelEstimate>>) {
    let _ = (cache, lookups);
}

#[scenario(path = "tests/features/distance_cache.feature", index = 1)]
fn reversed_lookups_share_entry(cache: Cache, lookups: RefCell<Vec<TravelEstimate>>) {
    let _ = (cache, lookups);
}
