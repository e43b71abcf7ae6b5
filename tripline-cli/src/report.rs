//! Plain-text rendering of route plans.

use std::fmt::Write;

use tripline_core::RoutePlan;

/// Render a plan as the totals, followed by one numbered line per leg.
pub(crate) fn render_plan(plan: &RoutePlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total distance: {:.1} km", plan.total_distance_km);
    let _ = writeln!(out, "Total duration: {:.0} mins", plan.total_duration_minutes);
    let _ = writeln!(out, "Legs:");
    for (index, leg) in plan.legs.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} -> {} ({:.1} km, {:.0} mins)",
            index + 1,
            leg.start.name,
            leg.end.name,
            leg.distance_km,
            leg.duration_minutes,
        );
    }
    out
}
