//! GeoJSON country boundaries to [`Landmass`] values.
//!
//! Accepts a `FeatureCollection` (or a single `Feature`) whose geometries are
//! `Polygon` or `MultiPolygon`. Both are normalized to a list of polygons and
//! only each polygon's outer ring is kept; holes are dropped. Rings that
//! cannot form a valid [`Polygon`] are skipped with a warning rather than
//! failing the whole document.

use glam::DVec2;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LandError;
use crate::landmass::Landmass;
use crate::polygon::Polygon;

/// Property keys tried, in order, for a feature's display name.
const NAME_KEYS: &[&str] = &["NAME", "name", "ADMIN"];

/// Property key holding the ISO 3166-1 alpha-3 code.
const CODE_KEY: &str = "ISO_A3";

/// Natural Earth marks "no code" with this value.
const MISSING_CODE: &str = "-99";

type Position = Vec<f64>;
type Ring = Vec<Position>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Document {
    FeatureCollection { features: Vec<Feature> },
    Feature(Feature),
    #[serde(other)]
    Other,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Other,
}

/// Parse a GeoJSON document into landmasses, one per usable feature.
pub fn landmasses_from_geojson(json: &str) -> Result<Vec<Landmass>, LandError> {
    let features = match serde_json::from_str::<Document>(json)? {
        Document::FeatureCollection { features } => features,
        Document::Feature(feature) => vec![feature],
        Document::Other => {
            return Err(LandError::InvalidGeoJson(
                "expected a FeatureCollection or Feature".to_string(),
            ));
        }
    };

    let total = features.len();
    let landmasses: Vec<Landmass> = features
        .into_iter()
        .enumerate()
        .filter_map(|(index, feature)| feature_to_landmass(index, feature))
        .collect();

    tracing::debug!(
        features = total,
        landmasses = landmasses.len(),
        "ingested GeoJSON boundaries"
    );
    Ok(landmasses)
}

fn feature_to_landmass(index: usize, feature: Feature) -> Option<Landmass> {
    let properties = feature.properties.unwrap_or_default();
    let name = NAME_KEYS
        .iter()
        .find_map(|key| properties.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("Feature {index}"));
    let code = properties
        .get(CODE_KEY)
        .and_then(Value::as_str)
        .filter(|code| *code != MISSING_CODE)
        .map(str::to_string);

    let polygons_rings: Vec<Vec<Ring>> = match feature.geometry {
        Some(Geometry::Polygon { coordinates }) => vec![coordinates],
        Some(Geometry::MultiPolygon { coordinates }) => coordinates,
        Some(Geometry::Other) | None => {
            tracing::debug!(%name, "skipping feature without polygon geometry");
            return None;
        }
    };

    let polygons: Vec<Polygon> = polygons_rings
        .into_iter()
        .filter_map(|rings| rings.into_iter().next())
        .filter_map(|outer| match outer_ring_to_polygon(&outer) {
            Ok(polygon) => Some(polygon),
            Err(err) => {
                tracing::warn!(%name, %err, "skipping malformed ring");
                None
            }
        })
        .collect();

    if polygons.is_empty() {
        tracing::debug!(%name, "feature has no usable polygons");
        return None;
    }

    Some(Landmass {
        name,
        code,
        polygons,
    })
}

fn outer_ring_to_polygon(ring: &[Position]) -> Result<Polygon, LandError> {
    let vertices = ring
        .iter()
        .map(|position| match position.as_slice() {
            [lon, lat, ..] => Ok(DVec2::new(*lon, *lat)),
            _ => Err(LandError::InvalidGeoJson(format!(
                "position with {} components",
                position.len()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Polygon::new(vertices)
}
