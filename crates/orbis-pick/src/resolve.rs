//! Click resolution: pixels to a geographic coordinate.

use glam::{DVec2, DVec3};
use orbis_coords::{GeoCoordinate, from_sphere};

use crate::camera::PickCamera;
use crate::error::PickError;
use crate::sphere::PickTarget;
use crate::viewport::Viewport;

/// Where a pick ray struck the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Geographic location of the hit.
    pub coordinate: GeoCoordinate,
    /// World-space hit point.
    pub point: DVec3,
    /// Distance from the ray origin to the hit.
    pub distance: f64,
}

/// Outcome of resolving a click. A miss is a normal result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickResult {
    /// The ray passed beside the globe.
    Miss,
    /// The ray hit the globe.
    Hit(PickHit),
}

impl PickResult {
    /// Whether the globe was hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, PickResult::Hit(_))
    }

    /// The hit coordinate, present only on a hit.
    pub fn coordinate(&self) -> Option<GeoCoordinate> {
        match self {
            PickResult::Hit(hit) => Some(hit.coordinate),
            PickResult::Miss => None,
        }
    }
}

/// Resolve a pixel position to the geographic coordinate under it.
///
/// `screen` is in pixels with the origin at the top-left of `viewport`.
pub fn resolve<C, T>(
    screen: DVec2,
    viewport: &Viewport,
    camera: &C,
    target: &T,
) -> Result<PickResult, PickError>
where
    C: PickCamera + ?Sized,
    T: PickTarget + ?Sized,
{
    let ndc = viewport.to_ndc(screen)?;
    let ray = camera.ray_from_ndc(ndc).ok_or(PickError::DegenerateRay)?;

    let Some(distance) = target.intersect(&ray) else {
        tracing::debug!(x = screen.x, y = screen.y, "pick missed globe");
        return Ok(PickResult::Miss);
    };

    let point = ray.at(distance);
    let coordinate = from_sphere(target.surface_to_unit(point))?;
    tracing::debug!(x = screen.x, y = screen.y, %coordinate, distance, "pick hit globe");

    Ok(PickResult::Hit(PickHit {
        coordinate,
        point,
        distance,
    }))
}
