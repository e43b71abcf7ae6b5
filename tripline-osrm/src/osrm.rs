//! OSRM API response types for the Route service.
//!
//! Deserialisation types for the OSRM Route API, which computes the fastest
//! route between supplied coordinates. Only the per-route totals are
//! consumed; geometry is never requested.
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// Carries route summaries on success or an error message on failure; the
/// `code` field indicates which.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM, `"Ok"` on success. Other values include
    /// `"InvalidQuery"` and `"NoRoute"`.
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, best first. Empty or absent when no route exists.
    #[serde(default)]
    pub routes: Vec<RouteSummary>,
}

/// Totals for one candidate route.
#[derive(Debug, Deserialize)]
pub struct RouteSummary {
    /// Route length in metres.
    pub distance: f64,
    /// Route travel time in seconds.
    pub duration: f64,
}

impl RouteResponse {
    /// Check whether the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}
