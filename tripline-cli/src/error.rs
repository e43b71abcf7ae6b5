//! Error types emitted by the Tripline CLI.

use thiserror::Error;
use tripline_core::{LocationError, PlanError};
use tripline_osrm::ProviderBuildError;

/// Errors emitted by the Tripline CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// A location argument was not of the form `NAME=LAT,LON`.
    #[error("invalid location {argument:?}: expected NAME=LAT,LON")]
    MalformedLocation {
        /// The offending argument.
        argument: String,
    },
    /// A location argument carried an unparseable coordinate.
    #[error("invalid coordinate in {argument:?}: {source}")]
    MalformedCoordinate {
        /// The offending argument.
        argument: String,
        /// Parse failure for the coordinate.
        #[source]
        source: std::num::ParseFloatError,
    },
    /// A coordinate was parseable but out of range.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// Constructing the routing provider failed.
    #[error("failed to build routing provider for {base_url:?}: {source}")]
    BuildProvider {
        /// Configured OSRM base URL.
        base_url: String,
        /// Construction failure.
        #[source]
        source: ProviderBuildError,
    },
    /// Planning failed.
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// Serializing the plan to JSON failed.
    #[error("failed to serialize plan: {0}")]
    SerializePlan(#[source] serde_json::Error),
}
