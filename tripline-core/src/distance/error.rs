//! Failures surfaced by distance providers.

use thiserror::Error;

/// Errors from [`DistanceProvider::distance`](crate::DistanceProvider::distance).
///
/// Variants carry `String` context instead of source errors so the enum
/// stays `Clone + PartialEq` for test assertions. The planning core never
/// catches these; a single failing lookup aborts the whole plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistanceError {
    /// A lookup-table provider had no entry for the pair, in either
    /// direction.
    #[error("no known distance between {from:?} and {to:?}")]
    UnknownPair {
        /// Name of the origin location.
        from: String,
        /// Name of the destination location.
        to: String,
    },
    /// A routing service answered but found no route between the pair.
    #[error("routing service found no route between {from:?} and {to:?}")]
    NoRoute {
        /// Name of the origin location.
        from: String,
        /// Name of the destination location.
        to: String,
    },
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The service answered with an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error description.
        message: String,
    },
    /// The request failed before an HTTP response arrived.
    #[error("request to {url} failed: {message}")]
    Network {
        /// Requested URL.
        url: String,
        /// Error description.
        message: String,
    },
    /// The service response could not be decoded.
    #[error("failed to parse routing service response: {message}")]
    Parse {
        /// Error description.
        message: String,
    },
    /// The service rejected the request at the application level.
    #[error("routing service rejected the request ({code}): {message}")]
    Service {
        /// Service status code, e.g. `"InvalidQuery"`.
        code: String,
        /// Error message supplied by the service.
        message: String,
    },
}
