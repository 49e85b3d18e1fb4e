//! Mesh-build helpers: outline vertices on the sphere and per-face land masks.
//!
//! Renderer-agnostic; callers upload the returned positions or use the mask
//! to pick vertex colours.

use orbis_coords::{CoordError, SpherePoint, from_sphere, to_sphere};

use crate::landmass::{Landmass, Surface, classify};

/// Line-list vertices tracing every polygon outline of `landmass`.
///
/// Each consecutive pair of points is one edge; the closing edge back to the
/// first vertex is included.
pub fn outline_segments(landmass: &Landmass, radius: f64) -> Result<Vec<SpherePoint>, CoordError> {
    let edge_count: usize = landmass.polygons.iter().map(|p| p.vertex_count()).sum();
    let mut vertices = Vec::with_capacity(edge_count * 2);

    for polygon in &landmass.polygons {
        let ring = polygon.ring();
        for (i, start) in ring.iter().enumerate() {
            let end = ring[(i + 1) % ring.len()];
            vertices.push(to_sphere(start.y, start.x, radius)?);
            vertices.push(to_sphere(end.y, end.x, radius)?);
        }
    }

    Ok(vertices)
}

/// Land/ocean class of each triangle in a non-indexed triangle list.
///
/// Every three positions form one face; the face centroid is projected onto
/// the unit sphere and classified. A trailing partial face is ignored and a
/// centroid at the origin counts as ocean.
pub fn classify_triangles(positions: &[SpherePoint], landmasses: &[Landmass]) -> Vec<Surface> {
    positions
        .chunks_exact(3)
        .map(|face| {
            let centroid = (face[0] + face[1] + face[2]) / 3.0;
            match from_sphere(centroid) {
                Ok(coordinate) => classify(&coordinate, landmasses),
                Err(_) => Surface::Ocean,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::Polygon;
    use glam::DVec3;

    fn square_landmass() -> Landmass {
        Landmass::new(
            "square",
            vec![
                Polygon::from_lon_lat(&[[-10.0, -10.0], [10.0, -10.0], [10.0, 10.0], [-10.0, 10.0]])
                    .unwrap(),
            ],
        )
    }

    #[test]
    fn test_outline_segments_closed_and_on_sphere() {
        let vertices = outline_segments(&square_landmass(), 2.0).unwrap();
        assert_eq!(vertices.len(), 8);
        for v in &vertices {
            assert!((v.length() - 2.0).abs() < 1e-9);
        }
        // Last segment returns to the first vertex.
        assert!((vertices[7] - vertices[0]).length() < 1e-12);
    }

    #[test]
    fn test_outline_segments_rejects_bad_radius() {
        assert!(outline_segments(&square_landmass(), 0.0).is_err());
    }

    #[test]
    fn test_classify_triangles() {
        let land = [square_landmass()];
        // A small triangle around (0°, 0°) and another around (0°, 90°E).
        let positions = [
            DVec3::new(1.0, 0.01, 0.0),
            DVec3::new(1.0, -0.01, 0.01),
            DVec3::new(1.0, -0.01, -0.01),
            DVec3::new(0.0, 0.01, 1.0),
            DVec3::new(0.01, -0.01, 1.0),
            DVec3::new(-0.01, -0.01, 1.0),
            // Dangling vertex, not a full face.
            DVec3::X,
        ];
        let mask = classify_triangles(&positions, &land);
        assert_eq!(mask, vec![Surface::Land, Surface::Ocean]);
    }

    #[test]
    fn test_degenerate_centroid_is_ocean() {
        let positions = [DVec3::X, DVec3::NEG_X, DVec3::ZERO];
        assert_eq!(
            classify_triangles(&positions, &[square_landmass()]),
            vec![Surface::Ocean]
        );
    }
}
