//! Forward and inverse mapping between geographic coordinates and sphere points.

use glam::DVec3;

use crate::coordinate::GeoCoordinate;
use crate::error::CoordError;

/// A point on (or normalized onto) a sphere centered at the origin.
pub type SpherePoint = DVec3;

/// Map a latitude/longitude in degrees onto a sphere of `radius`.
///
/// The result lies at distance `radius` from the origin.
pub fn to_sphere(latitude: f64, longitude: f64, radius: f64) -> Result<SpherePoint, CoordError> {
    GeoCoordinate::new(latitude, longitude)?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(CoordError::InvalidRadius(radius));
    }
    Ok(unit_vector(latitude, longitude) * radius)
}

/// Map a point on a sphere (of any radius) back to latitude/longitude.
///
/// The point is first normalized to a unit vector. Longitude is returned in
/// `(-180, 180]`. At the poles longitude is undefined and whatever `atan2`
/// produces for the residual x/z components is returned.
pub fn from_sphere(point: SpherePoint) -> Result<GeoCoordinate, CoordError> {
    let length = point.length();
    if !length.is_finite() || length < 1e-12 {
        return Err(CoordError::DegeneratePoint {
            x: point.x,
            y: point.y,
            z: point.z,
        });
    }

    let dir = point / length;
    // Rounding can push |y| a hair past 1 for polar points.
    let latitude = 90.0 - dir.y.clamp(-1.0, 1.0).acos().to_degrees();
    let longitude = normalize_longitude(dir.z.atan2(dir.x).to_degrees());

    GeoCoordinate::new(latitude.clamp(-90.0, 90.0), longitude)
}

/// Wrap a longitude in degrees into `(-180, 180]`.
pub fn normalize_longitude(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Straight-line distance between two coordinates on the unit sphere.
///
/// Monotonic in the great-circle angle, ranging from 0 (same point) to 2
/// (antipodes).
pub fn chordal_distance(a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
    a.unit_vector().distance(b.unit_vector())
}

pub(crate) fn unit_vector(latitude: f64, longitude: f64) -> SpherePoint {
    let lat_rad = latitude.to_radians();
    let lon_rad = longitude.to_radians();
    DVec3::new(
        lat_rad.cos() * lon_rad.cos(),
        lat_rad.sin(),
        lat_rad.cos() * lon_rad.sin(),
    )
}
