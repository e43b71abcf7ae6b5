//! Property tests for the planner laws.

use proptest::prelude::*;
use tripline_core::test_support::RecordingDistanceProvider;
use tripline_core::{
    CachedDistanceProvider, DistanceError, DistanceProvider, Location, TravelEstimate,
    order_stops_nearest_neighbour, plan_route, plan_route_naive_round_trip,
};

/// Deterministic provider: rectilinear distance in coordinate space.
#[derive(Debug, Copy, Clone)]
struct GridDistanceProvider;

impl DistanceProvider for GridDistanceProvider {
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError> {
        let dx = (from.longitude() - to.longitude()).abs();
        let dy = (from.latitude() - to.latitude()).abs();
        Ok(TravelEstimate::new(dx + dy, (dx + dy) * 2.0))
    }
}

fn coordinates() -> impl Strategy<Value = (f64, f64)> {
    (-90.0..90.0f64, -180.0..180.0f64)
}

/// Stops with unique generated names and in-range coordinates.
fn stops(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Location>> {
    proptest::collection::vec(coordinates(), range).prop_map(|coordinates| {
        coordinates
            .into_iter()
            .enumerate()
            .map(|(index, (latitude, longitude))| {
                Location::new(format!("S{index}"), latitude, longitude)
                    .expect("generated coordinates are in range")
            })
            .collect()
    })
}

fn sorted_names(stops: &[Location]) -> Vec<String> {
    let mut names: Vec<String> = stops.iter().map(|stop| stop.name.clone()).collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn ordering_is_deterministic(stops in stops(0..6)) {
        let first = order_stops_nearest_neighbour(&stops, &GridDistanceProvider)
            .expect("grid provider never fails");
        let second = order_stops_nearest_neighbour(&stops, &GridDistanceProvider)
            .expect("grid provider never fails");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn ordering_is_a_permutation_seeded_by_the_first_stop(stops in stops(1..6)) {
        let ordered = order_stops_nearest_neighbour(&stops, &GridDistanceProvider)
            .expect("grid provider never fails");

        prop_assert_eq!(ordered.len(), stops.len());
        prop_assert_eq!(&ordered[0], &stops[0]);
        prop_assert_eq!(sorted_names(&ordered), sorted_names(&stops));
    }

    #[test]
    fn cached_lookups_are_symmetric_and_hit_upstream_once(
        a in coordinates(),
        b in coordinates(),
    ) {
        let from = Location::new("From", a.0, a.1).expect("generated coordinates are in range");
        let to = Location::new("To", b.0, b.1).expect("generated coordinates are in range");
        let cache = CachedDistanceProvider::new(RecordingDistanceProvider::new(
            GridDistanceProvider,
        ));

        let forward = cache.distance(&from, &to).expect("grid provider never fails");
        let reverse = cache.distance(&to, &from).expect("grid provider never fails");

        prop_assert_eq!(forward, reverse);
        prop_assert_eq!(cache.inner().call_count(), 1);
    }

    #[test]
    fn plan_totals_equal_the_leg_sums(stops in stops(2..6)) {
        let plan = plan_route(&stops, &GridDistanceProvider).expect("plan succeeds");

        let sum_distance: f64 = plan.legs.iter().map(|leg| leg.distance_km).sum();
        let sum_duration: f64 = plan.legs.iter().map(|leg| leg.duration_minutes).sum();

        prop_assert_eq!(plan.legs.len(), plan.stops.len() - 1);
        prop_assert!((plan.total_distance_km - sum_distance).abs() <= 1e-9);
        prop_assert!((plan.total_duration_minutes - sum_duration).abs() <= 1e-9);
    }

    #[test]
    fn round_trips_start_and_end_at_the_start(stops in stops(1..5)) {
        let start = Location::new("Start", 0.0, 0.0).expect("valid coordinates");

        let plan = plan_route_naive_round_trip(&start, &stops, &GridDistanceProvider)
            .expect("plan succeeds");

        prop_assert_eq!(plan.legs.len(), stops.len() + 1);
        prop_assert_eq!(&plan.legs[0].start, &start);
        prop_assert_eq!(&plan.legs[plan.legs.len() - 1].end, &start);
    }
}
