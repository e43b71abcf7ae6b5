//! Directed travel segments between consecutive stops.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Location;

/// One directed travel segment between two consecutive stops in a plan.
///
/// Providers are not required to pre-validate their output; a negative
/// distance or duration is rejected here, at the construction boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Leg {
    /// Where the segment departs from.
    pub start: Location,
    /// Where the segment arrives.
    pub end: Location,
    /// Travelled distance in kilometres.
    pub distance_km: f64,
    /// Travel time in minutes.
    pub duration_minutes: f64,
}

/// Errors returned by [`Leg::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LegError {
    /// Distance was negative.
    #[error("distance_km must be >= 0, got {value}")]
    NegativeDistance {
        /// Rejected distance.
        value: f64,
    },
    /// Duration was negative.
    #[error("duration_minutes must be >= 0, got {value}")]
    NegativeDuration {
        /// Rejected duration.
        value: f64,
    },
}

impl Leg {
    /// Validates and constructs a [`Leg`].
    ///
    /// # Errors
    ///
    /// Returns [`LegError`] when the distance or duration is negative.
    pub fn new(
        start: Location,
        end: Location,
        distance_km: f64,
        duration_minutes: f64,
    ) -> Result<Self, LegError> {
        if distance_km < 0.0 {
            return Err(LegError::NegativeDistance { value: distance_km });
        }
        if duration_minutes < 0.0 {
            return Err(LegError::NegativeDuration {
                value: duration_minutes,
            });
        }
        Ok(Self {
            start,
            end,
            distance_km,
            duration_minutes,
        })
    }
}
