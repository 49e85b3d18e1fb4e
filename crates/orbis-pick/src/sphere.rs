//! Pick targets: what a pick ray is intersected against.

use glam::DVec3;

use crate::ray::Ray;

/// A surface a pick ray can hit, standing in for whatever is drawn.
///
/// Implementations only need an analytic intersection; the visual mesh
/// (country polygons, clouds) can be arbitrarily detailed.
pub trait PickTarget {
    /// Distance along `ray` to the nearest hit at or ahead of its origin.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Map a world-space hit point to a direction from the globe center.
    ///
    /// The result does not have to be unit length; it is normalized before
    /// being turned into a coordinate.
    fn surface_to_unit(&self, point: DVec3) -> DVec3;
}

/// An analytic sphere, by default centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center in world space.
    pub center: DVec3,
    /// Radius in world units.
    pub radius: f64,
}

impl Sphere {
    /// A sphere of `radius` at the origin.
    ///
    /// A radius that is not finite and positive never registers a hit.
    pub fn new(radius: f64) -> Self {
        Self {
            center: DVec3::ZERO,
            radius,
        }
    }
}

impl PickTarget for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return None;
        }
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;
        let disc = b * b - c;
        if disc < 0.0 || !disc.is_finite() {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            // Origin inside the sphere.
            Some(t_far)
        } else {
            None
        }
    }

    fn surface_to_unit(&self, point: DVec3) -> DVec3 {
        point - self.center
    }
}
