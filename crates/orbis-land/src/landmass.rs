//! Landmasses and land/ocean classification.

use std::fmt;

use orbis_coords::GeoCoordinate;
use serde::{Deserialize, Serialize};

use crate::polygon::Polygon;

/// What lies under a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Inside at least one landmass polygon.
    Land,
    /// Outside every landmass polygon.
    Ocean,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Land => f.write_str("land"),
            Surface::Ocean => f.write_str("ocean"),
        }
    }
}

/// A named set of polygons, e.g. a continent or a country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmass {
    /// Display name.
    pub name: String,
    /// ISO 3166-1 alpha-3 code, when the source data provides one.
    #[serde(default)]
    pub code: Option<String>,
    /// Outer rings; a point inside any of them is on this landmass.
    pub polygons: Vec<Polygon>,
}

impl Landmass {
    /// Create a landmass without a country code.
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            code: None,
            polygons,
        }
    }

    /// Attach an ISO country code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Whether any polygon of this landmass contains `coordinate`.
    pub fn contains(&self, coordinate: &GeoCoordinate) -> bool {
        self.polygons.iter().any(|p| p.contains(coordinate))
    }
}

/// Classify a coordinate as land or ocean.
///
/// Stops at the first polygon that contains the point.
pub fn classify(coordinate: &GeoCoordinate, landmasses: &[Landmass]) -> Surface {
    if locate(coordinate, landmasses).is_some() {
        Surface::Land
    } else {
        Surface::Ocean
    }
}

/// The first landmass containing `coordinate`, if any.
pub fn locate<'a>(coordinate: &GeoCoordinate, landmasses: &'a [Landmass]) -> Option<&'a Landmass> {
    let hit = landmasses.iter().find(|l| l.contains(coordinate));
    tracing::trace!(
        %coordinate,
        landmass = hit.map(|l| l.name.as_str()),
        "located coordinate"
    );
    hit
}
