//! Route assembly and the naive nearest-neighbour planner.
//!
//! Planning happens in two stages. [`order_stops_nearest_neighbour`] turns
//! an unordered set of stops into a visiting sequence with a greedy
//! heuristic; [`plan_route`] walks an ordered sequence pairwise, resolving
//! each hop through a [`DistanceProvider`](crate::DistanceProvider) and
//! accumulating totals into a validated
//! [`RoutePlan`](crate::RoutePlan). [`plan_route_naive`] and
//! [`plan_route_naive_round_trip`] compose the two.

mod assemble;
mod error;
mod naive;

pub use assemble::plan_route;
pub use error::PlanError;
pub use naive::{order_stops_nearest_neighbour, plan_route_naive, plan_route_naive_round_trip};
