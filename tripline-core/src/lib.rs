//! Core planning engine for Tripline.
//!
//! Tripline turns a start location and a set of stops into an ordered
//! sequence of travel legs with per-leg and total distance/duration. This
//! crate holds the domain model, the distance-lookup capability and the
//! planning algorithms; the HTTP-backed provider lives in `tripline-osrm`.
//!
//! - [`Location`], [`Leg`] and [`RoutePlan`] are immutable value types whose
//!   invariants are validated at construction.
//! - [`DistanceProvider`] abstracts "given two locations, return distance
//!   and duration". [`CachedDistanceProvider`] memoizes any provider under a
//!   symmetric per-pair key; [`TableDistanceProvider`] resolves pairs from a
//!   fixed table; [`ZeroDistanceProvider`] is the deliberate placeholder for
//!   callers without a real provider.
//! - [`plan_route`] assembles a validated plan over an already-ordered stop
//!   sequence. [`plan_route_naive`] and [`plan_route_naive_round_trip`]
//!   order the stops first via [`order_stops_nearest_neighbour`].

#![forbid(unsafe_code)]

mod distance;
mod leg;
mod location;
mod plan;
mod planner;
pub mod test_support;

pub use distance::{
    CachedDistanceProvider, DistanceError, DistanceProvider, TableDistanceProvider,
    TravelEstimate, ZeroDistanceProvider,
};
pub use leg::{Leg, LegError};
pub use location::{Location, LocationError};
pub use plan::{RoutePlan, RoutePlanError};
pub use planner::{
    PlanError, order_stops_nearest_neighbour, plan_route, plan_route_naive,
    plan_route_naive_round_trip,
};
