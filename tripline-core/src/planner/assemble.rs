//! Pairwise route assembly.

use log::debug;

use super::PlanError;
use crate::{DistanceProvider, Leg, Location, RoutePlan};

/// Assemble a validated [`RoutePlan`] over an already-ordered stop sequence.
///
/// The provider is consulted exactly once per adjacent pair, left to right,
/// and the plan's totals are the exact running sums of those answers, the
/// same numbers the [`RoutePlan`] constructor re-checks. Callers without a
/// real provider can pass
/// [`ZeroDistanceProvider`](crate::ZeroDistanceProvider), the deliberate
/// `(0, 0)` placeholder.
///
/// # Errors
///
/// Returns [`PlanError::TooFewStops`] for fewer than two stops, forwards
/// the first failing distance lookup, and rejects provider output the data
/// model does not accept (negative distance or duration).
///
/// # Examples
///
/// ```
/// use tripline_core::{Location, ZeroDistanceProvider, plan_route};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Location::new("A", 0.0, 0.0)?;
/// let b = Location::new("B", 1.0, 1.0)?;
///
/// let plan = plan_route(&[a, b], &ZeroDistanceProvider)?;
/// assert_eq!(plan.legs.len(), 1);
/// assert_eq!(plan.total_distance_km, 0.0);
/// # Ok(())
/// # }
/// ```
pub fn plan_route(
    stops: &[Location],
    provider: &dyn DistanceProvider,
) -> Result<RoutePlan, PlanError> {
    if stops.len() < 2 {
        return Err(PlanError::TooFewStops {
            actual: stops.len(),
        });
    }

    let mut legs = Vec::with_capacity(stops.len() - 1);
    let mut total_distance = 0.0;
    let mut total_duration = 0.0;

    for (start, end) in stops.iter().zip(stops.iter().skip(1)) {
        let estimate = provider.distance(start, end)?;
        legs.push(Leg::new(
            start.clone(),
            end.clone(),
            estimate.distance_km,
            estimate.duration_minutes,
        )?);
        total_distance += estimate.distance_km;
        total_duration += estimate.duration_minutes;
    }

    debug!(
        "assembled {} legs covering {total_distance} km",
        legs.len()
    );
    Ok(RoutePlan::new(
        stops.to_vec(),
        legs,
        total_distance,
        total_duration,
    )?)
}
