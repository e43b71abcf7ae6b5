//! Complete route plans with validated totals.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Leg, Location};

/// Tolerance for comparing stated totals against leg sums. Applied both
/// relatively and absolutely to absorb floating-point summation error.
const TOTAL_TOLERANCE: f64 = 1e-9;

/// An ordered sequence of stops with the legs that connect them.
///
/// Construction re-checks every invariant rather than silently correcting:
/// there must be exactly `stops - 1` legs (zero for a single stop), each leg
/// must connect its surrounding stops, and the stated totals must equal the
/// leg sums within tolerance.
///
/// # Examples
///
/// ```
/// use tripline_core::{Leg, Location, RoutePlan};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let a = Location::new("A", 0.0, 0.0)?;
/// let b = Location::new("B", 1.0, 1.0)?;
/// let leg = Leg::new(a.clone(), b.clone(), 10.0, 20.0)?;
///
/// let plan = RoutePlan::new(vec![a, b], vec![leg], 10.0, 20.0)?;
/// assert_eq!(plan.legs.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutePlan {
    /// Stops in visiting order.
    pub stops: Vec<Location>,
    /// Legs connecting consecutive stops.
    pub legs: Vec<Leg>,
    /// Sum of the leg distances in kilometres.
    pub total_distance_km: f64,
    /// Sum of the leg durations in minutes.
    pub total_duration_minutes: f64,
}

/// Errors returned by [`RoutePlan::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutePlanError {
    /// The leg count did not match the stop count.
    #[error("expected {expected} legs for {stops} stops, got {actual}")]
    LegCountMismatch {
        /// Number of stops supplied.
        stops: usize,
        /// Legs required for that many stops.
        expected: usize,
        /// Legs actually supplied.
        actual: usize,
    },
    /// A leg did not connect its surrounding stops.
    #[error("leg {index} does not connect its surrounding stops")]
    DisconnectedLeg {
        /// Position of the offending leg.
        index: usize,
    },
    /// The stated total distance did not match the leg sum.
    #[error("total_distance_km must equal the sum of leg distances ({expected}), got {actual}")]
    TotalDistanceMismatch {
        /// Sum of the leg distances.
        expected: f64,
        /// Stated total.
        actual: f64,
    },
    /// The stated total duration did not match the leg sum.
    #[error("total_duration_minutes must equal the sum of leg durations ({expected}), got {actual}")]
    TotalDurationMismatch {
        /// Sum of the leg durations.
        expected: f64,
        /// Stated total.
        actual: f64,
    },
}

impl RoutePlan {
    /// Validates and constructs a [`RoutePlan`].
    ///
    /// # Errors
    ///
    /// Returns [`RoutePlanError`] when the leg count is wrong, a leg fails
    /// to connect its surrounding stops, or a total strays from the leg sum
    /// by more than the tolerance.
    pub fn new(
        stops: Vec<Location>,
        legs: Vec<Leg>,
        total_distance_km: f64,
        total_duration_minutes: f64,
    ) -> Result<Self, RoutePlanError> {
        let expected = stops.len().saturating_sub(1);
        if legs.len() != expected {
            return Err(RoutePlanError::LegCountMismatch {
                stops: stops.len(),
                expected,
                actual: legs.len(),
            });
        }

        for (index, leg) in legs.iter().enumerate() {
            if leg.start != stops[index] || leg.end != stops[index + 1] {
                return Err(RoutePlanError::DisconnectedLeg { index });
            }
        }

        let sum_distance: f64 = legs.iter().map(|leg| leg.distance_km).sum();
        let sum_duration: f64 = legs.iter().map(|leg| leg.duration_minutes).sum();

        if !within_tolerance(total_distance_km, sum_distance) {
            return Err(RoutePlanError::TotalDistanceMismatch {
                expected: sum_distance,
                actual: total_distance_km,
            });
        }
        if !within_tolerance(total_duration_minutes, sum_duration) {
            return Err(RoutePlanError::TotalDurationMismatch {
                expected: sum_duration,
                actual: total_duration_minutes,
            });
        }

        Ok(Self {
            stops,
            legs,
            total_distance_km,
            total_duration_minutes,
        })
    }
}

/// Equality within both a relative and an absolute tolerance of
/// [`TOTAL_TOLERANCE`].
fn within_tolerance(actual: f64, expected: f64) -> bool {
    let scale = actual.abs().max(expected.abs());
    (actual - expected).abs() <= TOTAL_TOLERANCE.max(TOTAL_TOLERANCE * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn location(name: &str, value: f64) -> Location {
        Location::new(name, value, value).expect("valid coordinates")
    }

    fn leg(start: &Location, end: &Location, distance_km: f64, duration_minutes: f64) -> Leg {
        Leg::new(start.clone(), end.clone(), distance_km, duration_minutes).expect("valid leg")
    }

    #[fixture]
    fn stops() -> Vec<Location> {
        vec![location("A", 0.0), location("B", 1.0), location("C", 2.0)]
    }

    #[rstest]
    fn valid_plan_creates_and_totals_match(stops: Vec<Location>) {
        let legs = vec![
            leg(&stops[0], &stops[1], 10.0, 20.0),
            leg(&stops[1], &stops[2], 5.5, 10.0),
        ];

        let plan = RoutePlan::new(stops, legs, 15.5, 30.0).expect("valid plan");

        assert_eq!(plan.stops.len(), 3);
        assert_eq!(plan.legs.len(), 2);
        assert_eq!(plan.total_distance_km, 15.5);
        assert_eq!(plan.total_duration_minutes, 30.0);
    }

    #[rstest]
    fn single_stop_plan_has_no_legs(stops: Vec<Location>) {
        let plan =
            RoutePlan::new(vec![stops[0].clone()], Vec::new(), 0.0, 0.0).expect("trivial plan");
        assert!(plan.legs.is_empty());
    }

    #[rstest]
    fn empty_plan_is_valid() {
        assert!(RoutePlan::new(Vec::new(), Vec::new(), 0.0, 0.0).is_ok());
    }

    #[rstest]
    fn leg_count_must_be_stops_minus_one(stops: Vec<Location>) {
        let err = RoutePlan::new(vec![stops[0].clone(), stops[1].clone()], Vec::new(), 0.0, 0.0)
            .expect_err("missing leg");
        assert_eq!(
            err,
            RoutePlanError::LegCountMismatch {
                stops: 2,
                expected: 1,
                actual: 0,
            }
        );

        let stray = leg(&stops[0], &stops[1], 1.0, 1.0);
        let err = RoutePlan::new(vec![stops[0].clone()], vec![stray], 1.0, 1.0)
            .expect_err("stray leg");
        assert!(matches!(err, RoutePlanError::LegCountMismatch { .. }));
    }

    #[rstest]
    fn legs_must_connect_consecutive_stops(stops: Vec<Location>) {
        // Second leg departs from A instead of B.
        let legs = vec![
            leg(&stops[0], &stops[1], 1.0, 1.0),
            leg(&stops[0], &stops[2], 1.0, 1.0),
        ];
        let err = RoutePlan::new(stops, legs, 2.0, 2.0).expect_err("broken chain");
        assert_eq!(err, RoutePlanError::DisconnectedLeg { index: 1 });
    }

    #[rstest]
    #[case(999.0, 20.0)]
    #[case(10.0, 999.0)]
    fn totals_must_equal_leg_sums(
        stops: Vec<Location>,
        #[case] total_distance: f64,
        #[case] total_duration: f64,
    ) {
        let legs = vec![
            leg(&stops[0], &stops[1], 10.0, 20.0),
            leg(&stops[1], &stops[2], 0.0, 0.0),
        ];
        assert!(RoutePlan::new(stops, legs, total_distance, total_duration).is_err());
    }

    #[rstest]
    fn totals_within_tolerance_are_accepted(stops: Vec<Location>) {
        let legs = vec![
            leg(&stops[0], &stops[1], 0.1, 0.1),
            leg(&stops[1], &stops[2], 0.2, 0.2),
        ];
        // 0.1 + 0.2 != 0.3 exactly in binary floating point.
        assert!(RoutePlan::new(stops, legs, 0.3, 0.3).is_ok());
    }
}
