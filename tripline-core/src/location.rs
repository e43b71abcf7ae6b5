//! Named geographic locations.

use geo::Coord;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named point on the map.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`, validated
/// once at construction. Equality is by value across all fields, so two
/// locations at the same position with different names are distinct stops.
///
/// # Examples
///
/// ```
/// use tripline_core::Location;
///
/// # fn main() -> Result<(), tripline_core::LocationError> {
/// let store = Location::new("IKEA Wembley", 51.552, -0.296)?;
/// assert_eq!(store.latitude(), 51.552);
/// assert_eq!(store.longitude(), -0.296);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Display name; the naive planner also keys its duplicate check on it.
    pub name: String,
    /// Geospatial position.
    pub coord: Coord<f64>,
}

/// Errors returned by [`Location::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// Latitude fell outside `[-90, 90]`.
    #[error("latitude must be between -90 and 90, got {value}")]
    LatitudeOutOfRange {
        /// Rejected latitude.
        value: f64,
    },
    /// Longitude fell outside `[-180, 180]`.
    #[error("longitude must be between -180 and 180, got {value}")]
    LongitudeOutOfRange {
        /// Rejected longitude.
        value: f64,
    },
}

impl Location {
    /// Validates and constructs a [`Location`].
    ///
    /// # Errors
    ///
    /// Returns [`LocationError`] when either coordinate is out of range.
    /// `NaN` never satisfies the range check, so it is rejected too.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, LocationError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(LocationError::LatitudeOutOfRange { value: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(LocationError::LongitudeOutOfRange { value: longitude });
        }
        Ok(Self {
            name: name.into(),
            coord: Coord {
                x: longitude,
                y: latitude,
            },
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coord.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coord.x
    }
}
