//! HTTP-based `DistanceProvider` using OSRM's Route API.
//!
//! The [`DistanceProvider`] trait is synchronous so the planning core stays
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use tripline_core::{DistanceError, DistanceProvider, Location, TravelEstimate};

use crate::osrm::RouteResponse;

/// Default public OSRM instance.
pub const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "tripline-osrm/0.1";

/// Default routing profile.
const DEFAULT_PROFILE: &str = "driving";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Errors from [`OsrmDistanceProvider`] construction.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Configuration for [`OsrmDistanceProvider`].
#[derive(Debug, Clone)]
pub struct OsrmDistanceProviderConfig {
    /// Base URL for the OSRM service (e.g. `"http://localhost:5000"`).
    pub base_url: String,
    /// Routing profile segment of the request path, e.g. `"driving"`.
    pub profile: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for OsrmDistanceProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OsrmDistanceProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based distance provider using the OSRM Route API.
///
/// The provider owns a Tokio runtime that is reused across calls. When
/// invoked from outside any Tokio runtime it blocks on that stored runtime.
/// When invoked from inside a multi-threaded Tokio runtime (detected via
/// [`Handle::try_current()`]) it uses the caller's handle with
/// [`tokio::task::block_in_place`] to avoid nested-runtime panics; from
/// inside a `current_thread` runtime it falls back to the stored runtime.
///
/// One request resolves one pair; pairs that will be looked up repeatedly
/// should be wrapped in
/// [`CachedDistanceProvider`](tripline_core::CachedDistanceProvider).
pub struct OsrmDistanceProvider {
    client: Client,
    config: OsrmDistanceProviderConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for OsrmDistanceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OsrmDistanceProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl OsrmDistanceProvider {
    /// Create a provider with default configuration for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(OsrmDistanceProviderConfig::new(base_url))
    }

    /// Create a provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn with_config(config: OsrmDistanceProviderConfig) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the OSRM Route API URL for a pair of locations.
    ///
    /// The URL format is `{base_url}/route/v1/{profile}/{coordinates}`
    /// where coordinates are semicolon-separated `lon,lat` pairs.
    fn build_route_url(&self, from: &Location, to: &Location) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.longitude(),
            from.latitude(),
            to.longitude(),
            to.latitude(),
        )
    }

    /// Fetch the travel estimate asynchronously.
    async fn fetch_estimate_async(
        &self,
        from: &Location,
        to: &Location,
    ) -> Result<TravelEstimate, DistanceError> {
        let url = self.build_route_url(from, to);
        debug!("requesting OSRM route {url}");

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "false")])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response.json().await.map_err(|err| DistanceError::Parse {
                message: err.to_string(),
            })?;

        convert_response(&route_response, from, to)
    }

    /// Convert a reqwest error to a [`DistanceError`].
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DistanceError {
        if error.is_timeout() {
            return DistanceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DistanceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DistanceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Convert an OSRM response to a [`TravelEstimate`].
///
/// OSRM reports metres and seconds; the estimate carries kilometres and
/// minutes. An `Ok` response with an empty route list means the pair is
/// unroutable.
fn convert_response(
    response: &RouteResponse,
    from: &Location,
    to: &Location,
) -> Result<TravelEstimate, DistanceError> {
    if !response.is_ok() {
        return Err(DistanceError::Service {
            code: response.code.clone(),
            message: response.message.clone().unwrap_or_default(),
        });
    }

    let Some(route) = response.routes.first() else {
        return Err(DistanceError::NoRoute {
            from: from.name.clone(),
            to: to.name.clone(),
        });
    };

    Ok(TravelEstimate::new(
        route.distance / 1000.0,
        route.duration / 60.0,
    ))
}

impl DistanceProvider for OsrmDistanceProvider {
    /// Resolve one pair through the OSRM Route API.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime should
    /// be multi-threaded; from a `current_thread` runtime the provider falls
    /// back to its own stored runtime, which may block the caller's runtime.
    fn distance(&self, from: &Location, to: &Location) -> Result<TravelEstimate, DistanceError> {
        let future = self.fetch_estimate_async(from, to);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or a current_thread runtime: use our own.
            _ => self.runtime.block_on(future),
        }
    }
}
