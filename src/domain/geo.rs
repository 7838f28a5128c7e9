//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClockError;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Coordinate used whenever no location can be obtained (New York City).
    pub const FALLBACK: Self = Self {
        latitude: 40.7128,
        longitude: -74.0060,
    };

    /// Creates a coordinate, rejecting values outside `[-90, 90]` x `[-180, 180]`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidCoordinate`] for out-of-range or non-finite values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ClockError> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(ClockError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Latitude in degrees north.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees east.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Renders as `lat, lng` rounded to four decimal places.
impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
