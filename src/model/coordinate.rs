use crate::error::{TrackerError, TrackerResult};
use crate::utils::distance::calculate_distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in decimal degrees. Always finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> TrackerResult<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);
        if !valid {
            return Err(TrackerError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        calculate_distance(self, other)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

/// Body of `GET /update_location/{id}`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdate {
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<LocationUpdate> for Coordinate {
    type Error = TrackerError;

    fn try_from(update: LocationUpdate) -> Result<Self, Self::Error> {
        Coordinate::new(update.latitude, update.longitude)
    }
}
