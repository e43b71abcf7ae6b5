//! Greedy nearest-neighbour ordering and the naive planning entry points.

use std::collections::HashSet;

use log::debug;

use super::{PlanError, plan_route};
use crate::{DistanceError, DistanceProvider, Location, RoutePlan};

/// Order stops greedily by always travelling to the closest remaining stop.
///
/// The sequence is seeded with the first input stop, so the input order of
/// that element matters. From the current stop, all remaining stops are
/// scanned in their current order and the strictly closest one is appended;
/// on an exact distance tie the earliest remaining candidate wins. Only the
/// distance half of each estimate is consulted; duration never influences
/// the ordering. Fewer than two stops are returned unchanged.
///
/// This is an O(n²) tour-construction heuristic, not an optimal tour.
///
/// # Errors
///
/// Forwards the first failing distance lookup.
///
/// # Examples
///
/// ```
/// use tripline_core::{Location, TableDistanceProvider, TravelEstimate};
/// use tripline_core::order_stops_nearest_neighbour;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Location::new("A", 0.0, 0.0)?;
/// let b = Location::new("B", 1.0, 1.0)?;
/// let c = Location::new("C", 2.0, 2.0)?;
///
/// let table = TableDistanceProvider::new()
///     .with_entry("A", "B", TravelEstimate::new(5.0, 10.0))
///     .with_entry("A", "C", TravelEstimate::new(20.0, 30.0))
///     .with_entry("B", "C", TravelEstimate::new(7.0, 12.0));
///
/// let ordered = order_stops_nearest_neighbour(&[a.clone(), c, b.clone()], &table)?;
/// assert_eq!(ordered[0], a);
/// assert_eq!(ordered[1], b);
/// # Ok(())
/// # }
/// ```
pub fn order_stops_nearest_neighbour(
    stops: &[Location],
    provider: &dyn DistanceProvider,
) -> Result<Vec<Location>, DistanceError> {
    if stops.len() < 2 {
        return Ok(stops.to_vec());
    }

    let mut current = stops[0].clone();
    let mut ordered = Vec::with_capacity(stops.len());
    ordered.push(current.clone());
    let mut remaining: Vec<Location> = stops[1..].to_vec();

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = provider.distance(&current, &remaining[0])?.distance_km;

        for index in 1..remaining.len() {
            let candidate = provider.distance(&current, &remaining[index])?.distance_km;
            // Strict comparison: on a tie the earlier remaining stop wins.
            if candidate < best_distance {
                best_distance = candidate;
                best_index = index;
            }
        }

        current = remaining.remove(best_index);
        ordered.push(current.clone());
    }

    Ok(ordered)
}

/// Plan a one-way route: order the stops, then travel start → each stop.
///
/// # Errors
///
/// Returns [`PlanError::StartAmongStops`] when the start equals any stop by
/// value, [`PlanError::DuplicateStopName`] when two stops share a name
/// (even at different coordinates), and otherwise whatever ordering or
/// assembly surface.
pub fn plan_route_naive(
    start: &Location,
    stops: &[Location],
    provider: &dyn DistanceProvider,
) -> Result<RoutePlan, PlanError> {
    validate_stops(start, stops)?;
    debug!("planning one-way route from {} over {} stops", start.name, stops.len());

    let ordered = order_stops_nearest_neighbour(stops, provider)?;
    let mut sequence = Vec::with_capacity(stops.len() + 1);
    sequence.push(start.clone());
    sequence.extend(ordered);

    plan_route(&sequence, provider)
}

/// Plan a round trip: order the stops, travel start → each stop → start.
///
/// With no stops at all the result is the trivial one-stop plan: ordering
/// is skipped entirely and the provider is never consulted. Otherwise the
/// return-to-start leg is resolved through the provider exactly like any
/// other leg.
///
/// # Errors
///
/// Same failure modes as [`plan_route_naive`].
///
/// # Examples
///
/// ```
/// use tripline_core::{Location, ZeroDistanceProvider, plan_route_naive_round_trip};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let start = Location::new("Start", 0.0, 0.0)?;
/// let plan = plan_route_naive_round_trip(&start, &[], &ZeroDistanceProvider)?;
/// assert_eq!(plan.stops, vec![start]);
/// assert!(plan.legs.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn plan_route_naive_round_trip(
    start: &Location,
    stops: &[Location],
    provider: &dyn DistanceProvider,
) -> Result<RoutePlan, PlanError> {
    validate_stops(start, stops)?;

    if stops.is_empty() {
        return Ok(RoutePlan::new(vec![start.clone()], Vec::new(), 0.0, 0.0)?);
    }
    debug!("planning round trip from {} over {} stops", start.name, stops.len());

    let ordered = order_stops_nearest_neighbour(stops, provider)?;
    let mut sequence = Vec::with_capacity(stops.len() + 2);
    sequence.push(start.clone());
    sequence.extend(ordered);
    sequence.push(start.clone());

    plan_route(&sequence, provider)
}

/// Entry-point validation shared by both naive planners.
fn validate_stops(start: &Location, stops: &[Location]) -> Result<(), PlanError> {
    if stops.iter().any(|stop| stop == start) {
        return Err(PlanError::StartAmongStops {
            name: start.name.clone(),
        });
    }

    let mut seen = HashSet::new();
    for stop in stops {
        if !seen.insert(stop.name.as_str()) {
            return Err(PlanError::DuplicateStopName {
                name: stop.name.clone(),
            });
        }
    }

    Ok(())
}
