//! Cameras that turn NDC positions into world-space rays.

use glam::{DMat4, DVec2, DVec3};
use orbis_coords::GeoCoordinate;

use crate::ray::Ray;

/// Anything that can cast a pick ray through a point in normalized device
/// coordinates.
pub trait PickCamera {
    /// The world-space ray through `ndc` (`[-1, 1]²`, +Y up), or `None` if
    /// the camera is degenerate.
    fn ray_from_ndc(&self, ndc: DVec2) -> Option<Ray>;
}

/// A right-handed perspective camera looking from `position` at `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Eye position in world space.
    pub position: DVec3,
    /// Point the camera looks at.
    pub target: DVec3,
    /// Approximate up direction; must not be parallel to the view direction.
    pub up: DVec3,
    /// Vertical field of view in radians.
    pub fov_y: f64,
    /// Width / height.
    pub aspect_ratio: f64,
    /// Near clip plane distance (positive).
    pub near: f64,
    /// Far clip plane distance (positive, > near).
    pub far: f64,
}

impl PerspectiveCamera {
    /// A camera `distance` units from the origin above `coordinate`, looking
    /// at the globe center.
    pub fn orbiting(coordinate: &GeoCoordinate, distance: f64) -> Self {
        let direction = coordinate.unit_vector();
        // Near the poles the view direction lines up with +Y.
        let up = if direction.y.abs() > 0.999 {
            DVec3::NEG_Z * direction.y.signum()
        } else {
            DVec3::Y
        };
        Self {
            position: direction * distance,
            target: DVec3::ZERO,
            up,
            ..Self::default()
        }
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.target, self.up)
    }

    /// View-to-clip transform (depth mapped to `[0, 1]`).
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh(self.fov_y, self.aspect_ratio, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect_ratio(&mut self, width: f64, height: f64) {
        self.aspect_ratio = width / height;
    }

    /// Unit vector the camera looks along.
    pub fn forward(&self) -> DVec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Project a world-space point to NDC. `None` if it is behind the eye.
    pub fn world_to_ndc(&self, point: DVec3) -> Option<DVec2> {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        if clip.w <= 0.0 || !clip.is_finite() {
            return None;
        }
        Some(DVec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl PickCamera for PerspectiveCamera {
    fn ray_from_ndc(&self, ndc: DVec2) -> Option<Ray> {
        let inv_view_proj = self.view_projection_matrix().inverse();
        if !inv_view_proj.is_finite() {
            return None;
        }
        // Any depth strictly inside the frustum lies on the pixel's ray.
        let through = inv_view_proj.project_point3(DVec3::new(ndc.x, ndc.y, 0.5));
        Ray::new(self.position, through - self.position)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 6.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
            fov_y: 45f64.to_radians(),
            aspect_ratio: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
