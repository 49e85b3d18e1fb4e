//! Closed `(longitude, latitude)` rings and the even-odd containment test.

use glam::DVec2;
use orbis_coords::GeoCoordinate;
use serde::{Deserialize, Serialize};

use crate::error::LandError;

/// Edges whose latitude span is below this are treated as horizontal and
/// never count as a crossing.
pub const EDGE_EPSILON: f64 = 1e-10;

/// A simple closed ring of `(longitude, latitude)` vertices, `x = lon`, `y = lat`.
///
/// The last vertex connects back to the first. Holes are not represented.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct Polygon {
    ring: Vec<DVec2>,
}

impl Polygon {
    /// Build a polygon from its vertex ring.
    ///
    /// Consecutive repeated vertices are collapsed and a trailing vertex equal
    /// to the first (the explicit closing vertex GeoJSON uses) is dropped.
    /// Fails if fewer than three vertices remain or
    /// any vertex lies outside `[-180, 180] × [-90, 90]`.
    pub fn new(mut ring: Vec<DVec2>) -> Result<Self, LandError> {
        if let Some(v) = ring
            .iter()
            .find(|v| GeoCoordinate::new(v.y, v.x).is_err())
        {
            return Err(LandError::InvalidVertex {
                longitude: v.x,
                latitude: v.y,
            });
        }

        ring.dedup();
        if ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        if ring.len() < 3 {
            return Err(LandError::DegeneratePolygon {
                vertices: ring.len(),
            });
        }

        Ok(Self { ring })
    }

    /// Build a polygon from `[longitude, latitude]` pairs.
    pub fn from_lon_lat(pairs: &[[f64; 2]]) -> Result<Self, LandError> {
        Self::new(pairs.iter().map(|&[lon, lat]| DVec2::new(lon, lat)).collect())
    }

    /// The vertex ring, without a duplicated closing vertex.
    pub fn ring(&self) -> &[DVec2] {
        &self.ring
    }

    /// Number of vertices in the ring.
    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// Whether `coordinate` lies inside this ring.
    pub fn contains(&self, coordinate: &GeoCoordinate) -> bool {
        point_in_polygon(coordinate, self)
    }
}

impl TryFrom<Vec<[f64; 2]>> for Polygon {
    type Error = LandError;

    fn try_from(pairs: Vec<[f64; 2]>) -> Result<Self, Self::Error> {
        Self::from_lon_lat(&pairs)
    }
}

impl From<Polygon> for Vec<[f64; 2]> {
    fn from(polygon: Polygon) -> Self {
        polygon.ring.iter().map(|v| [v.x, v.y]).collect()
    }
}

/// Even-odd test of a coordinate against a polygon.
pub fn point_in_polygon(coordinate: &GeoCoordinate, polygon: &Polygon) -> bool {
    point_in_ring(
        polygon.ring(),
        DVec2::new(coordinate.longitude(), coordinate.latitude()),
    )
}

/// Even-odd ray casting on a raw `(lon, lat)` ring.
///
/// A ray is cast from `point` toward increasing longitude at constant
/// latitude; each edge it crosses flips the inside flag. Rings with fewer
/// than three vertices contain nothing.
pub fn point_in_ring(ring: &[DVec2], point: DVec2) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        j = i;

        if (a.y > point.y) == (b.y > point.y) {
            continue;
        }
        let dy = b.y - a.y;
        if dy.abs() < EDGE_EPSILON {
            continue;
        }
        let crossing_lon = a.x + (b.x - a.x) * (point.y - a.y) / dy;
        if point.x < crossing_lon {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> GeoCoordinate {
        GeoCoordinate::new(lat, lon).unwrap()
    }

    fn square() -> Polygon {
        Polygon::from_lon_lat(&[[10.0, 10.0], [10.0, -10.0], [-10.0, -10.0], [-10.0, 10.0]])
            .unwrap()
    }

    #[test]
    fn test_square_contains_origin() {
        assert!(point_in_polygon(&coord(0.0, 0.0), &square()));
    }

    #[test]
    fn test_square_excludes_far_point() {
        assert!(!point_in_polygon(&coord(50.0, 50.0), &square()));
        assert!(!square().contains(&coord(0.0, 11.0)));
        assert!(!square().contains(&coord(-11.0, 0.0)));
    }

    #[test]
    fn test_concave_ring() {
        // A "C" shape opening to the east.
        let c = Polygon::from_lon_lat(&[
            [0.0, 0.0],
            [30.0, 0.0],
            [30.0, 10.0],
            [10.0, 10.0],
            [10.0, 20.0],
            [30.0, 20.0],
            [30.0, 30.0],
            [0.0, 30.0],
        ])
        .unwrap();
        assert!(c.contains(&coord(5.0, 20.0)));
        assert!(c.contains(&coord(15.0, 5.0)));
        assert!(!c.contains(&coord(15.0, 20.0)));
    }

    #[test]
    fn test_horizontal_edge_at_query_latitude() {
        // Query latitude exactly on the top and bottom edges must not blow up.
        // Rings are half-open in latitude: the bottom edge is inside, the
        // top edge is not.
        let ring = square();
        assert!(!ring.contains(&coord(10.0, 0.0)));
        assert!(ring.contains(&coord(-10.0, 0.0)));

        let flat = [
            DVec2::new(0.0, 5.0),
            DVec2::new(10.0, 5.0),
            DVec2::new(10.0, 5.0 + 1e-12),
        ];
        assert!(!point_in_ring(&flat, DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_short_ring_contains_nothing() {
        let ring = [DVec2::new(0.0, 0.0), DVec2::new(10.0, 10.0)];
        assert!(!point_in_ring(&ring, DVec2::new(5.0, 5.0)));
        assert!(!point_in_ring(&[], DVec2::ZERO));
    }

    #[test]
    fn test_closing_vertex_dropped() {
        let closed = Polygon::from_lon_lat(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]])
            .unwrap();
        assert_eq!(closed.vertex_count(), 3);
    }

    #[test]
    fn test_degenerate_polygon_rejected() {
        let err = Polygon::from_lon_lat(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]).unwrap_err();
        assert!(matches!(err, LandError::DegeneratePolygon { vertices: 2 }));
        assert!(Polygon::new(Vec::new()).is_err());

        let repeated = Polygon::from_lon_lat(&[[0.0, 0.0], [0.0, 0.0], [0.0, 0.0], [0.0, 0.0]])
            .unwrap_err();
        assert!(matches!(repeated, LandError::DegeneratePolygon { vertices: 1 }));
    }

    #[test]
    fn test_repeated_vertices_collapsed() {
        let polygon = Polygon::from_lon_lat(&[
            [0.0, 0.0],
            [0.0, 0.0],
            [10.0, 0.0],
            [10.0, 10.0],
            [10.0, 10.0],
            [0.0, 0.0],
        ])
        .unwrap();
        assert_eq!(polygon.vertex_count(), 3);
    }

    #[test]
    fn test_out_of_range_vertex_rejected() {
        let err = Polygon::from_lon_lat(&[[0.0, 0.0], [200.0, 0.0], [0.0, 10.0]]).unwrap_err();
        assert!(matches!(err, LandError::InvalidVertex { .. }));
    }

    #[test]
    fn test_serde_uses_lon_lat_pairs() {
        let polygon: Polygon =
            serde_json::from_str("[[10, 10], [10, -10], [-10, -10], [-10, 10]]").unwrap();
        assert_eq!(polygon, square());

        let degenerate: Result<Polygon, _> = serde_json::from_str("[[0, 0], [1, 1]]");
        assert!(degenerate.is_err());
    }
}
