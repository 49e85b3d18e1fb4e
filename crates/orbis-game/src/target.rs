//! Game targets and the bundled target list.

use orbis_coords::{CoordError, GeoCoordinate};
use serde::{Deserialize, Serialize};

/// A place the player is asked to find.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameTarget {
    /// Name shown in the prompt.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GameTarget {
    /// Create a target.
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// The validated coordinate of this target.
    pub fn coordinate(&self) -> Result<GeoCoordinate, CoordError> {
        GeoCoordinate::new(self.latitude, self.longitude)
    }
}

/// Representative points for a handful of countries.
const COUNTRIES: &[(&str, f64, f64)] = &[
    ("France", 46.6, 2.2),
    ("Brazil", -10.8, -52.9),
    ("Australia", -25.3, 133.8),
    ("Japan", 36.2, 138.3),
    ("Egypt", 26.8, 30.8),
    ("Canada", 56.1, -106.3),
    ("India", 20.6, 78.9),
    ("Argentina", -38.4, -63.6),
    ("Kenya", 0.0, 37.9),
    ("Mexico", 23.6, -102.6),
    ("China", 35.9, 104.2),
    ("South Africa", -30.6, 22.9),
];

/// The bundled list of countries to play with.
pub fn builtin_targets() -> Vec<GameTarget> {
    COUNTRIES
        .iter()
        .map(|&(name, lat, lon)| GameTarget::new(name, lat, lon))
        .collect()
}
