//! The [`GeoCoordinate`] value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoordError;

/// A location on the globe in degrees.
///
/// Always holds a latitude in `[-90, 90]` and a longitude in `[-180, 180]`;
/// the only way to build one is [`GeoCoordinate::new`], which rejects
/// anything else instead of clamping it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordError> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lon_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !(lat_ok && lon_ok) {
            return Err(CoordError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees. Positive = north.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees. Positive = east.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Place this coordinate on a sphere of the given radius.
    pub fn to_sphere(&self, radius: f64) -> Result<crate::SpherePoint, CoordError> {
        crate::mapping::to_sphere(self.latitude, self.longitude, radius)
    }

    /// Position of this coordinate on the unit sphere.
    pub fn unit_vector(&self) -> crate::SpherePoint {
        crate::mapping::unit_vector(self.latitude, self.longitude)
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.1}\u{00B0}{}, {:.1}\u{00B0}{}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir,
        )
    }
}

/// Unchecked serde shape; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = CoordError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        GeoCoordinate::new(raw.latitude, raw.longitude)
    }
}

impl From<GeoCoordinate> for RawCoordinate {
    fn from(coord: GeoCoordinate) -> Self {
        Self {
            latitude: coord.latitude,
            longitude: coord.longitude,
        }
    }
}
