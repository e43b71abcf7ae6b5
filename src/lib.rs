//! Facade crate for the Tripline route planner.
//!
//! This crate re-exports the core domain types and planning entry points,
//! and exposes the OSRM-backed distance provider behind a feature flag.

#![forbid(unsafe_code)]

pub use tripline_core::{
    CachedDistanceProvider, DistanceError, DistanceProvider, Leg, LegError, Location,
    LocationError, PlanError, RoutePlan, RoutePlanError, TableDistanceProvider, TravelEstimate,
    ZeroDistanceProvider, order_stops_nearest_neighbour, plan_route, plan_route_naive,
    plan_route_naive_round_trip,
};

#[cfg(feature = "osrm")]
pub use tripline_osrm::{OsrmDistanceProvider, OsrmDistanceProviderConfig, ProviderBuildError};
