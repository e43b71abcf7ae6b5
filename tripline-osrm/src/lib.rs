//! OSRM-backed distance provider for Tripline.
//!
//! [`OsrmDistanceProvider`] implements
//! [`tripline_core::DistanceProvider`] against the OSRM Route API. The
//! synchronous trait is satisfied by blocking on async HTTP calls
//! internally, keeping the planning core embeddable in synchronous
//! contexts.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tripline_core::{DistanceProvider, Location};
//! use tripline_osrm::{OsrmDistanceProvider, OsrmDistanceProviderConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OsrmDistanceProviderConfig::new("http://localhost:5000")
//!     .with_profile("walking")
//!     .with_timeout(Duration::from_secs(5));
//! let provider = OsrmDistanceProvider::with_config(config)?;
//!
//! let home = Location::new("Home", 51.5, -0.1)?;
//! let work = Location::new("Work", 51.52, -0.08)?;
//! let estimate = provider.distance(&home, &work)?;
//! println!("{:.1} km in {:.0} minutes", estimate.distance_km, estimate.duration_minutes);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod osrm;
mod provider;

pub use provider::{
    DEFAULT_BASE_URL, DEFAULT_USER_AGENT, OsrmDistanceProvider, OsrmDistanceProviderConfig,
    ProviderBuildError,
};
