//! Failures raised by the planning entry points.

use thiserror::Error;

use crate::{DistanceError, LegError, RoutePlanError};

/// Errors from [`plan_route`](crate::plan_route),
/// [`plan_route_naive`](crate::plan_route_naive) and
/// [`plan_route_naive_round_trip`](crate::plan_route_naive_round_trip).
///
/// Validation failures are raised eagerly at the entry point; provider
/// failures abort planning on the first failing lookup and are forwarded
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Route assembly needs at least two stops.
    #[error("a route needs at least two stops, got {actual}")]
    TooFewStops {
        /// Number of stops supplied.
        actual: usize,
    },
    /// The start location also appeared among the stops.
    #[error("start location {name:?} also appears among the stops")]
    StartAmongStops {
        /// Name of the offending start location.
        name: String,
    },
    /// Two stops shared a name, regardless of their coordinates.
    #[error("stop name {name:?} appears more than once")]
    DuplicateStopName {
        /// The repeated name.
        name: String,
    },
    /// A distance lookup failed.
    #[error(transparent)]
    Distance(#[from] DistanceError),
    /// A provider produced a leg the data model rejects, e.g. a negative
    /// distance.
    #[error(transparent)]
    InvalidLeg(#[from] LegError),
    /// The assembled plan violated a route invariant.
    #[error(transparent)]
    InvalidPlan(#[from] RoutePlanError),
}
