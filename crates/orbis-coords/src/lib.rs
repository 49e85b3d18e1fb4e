//! Geographic coordinates on a globe and their mapping to 3-D sphere points.
//!
//! Latitude 90° is the +Y pole and longitude 0° is the +X meridian, so a
//! coordinate maps to `(cos(lat)·cos(lon), sin(lat), cos(lat)·sin(lon))`
//! scaled by the sphere radius. [`to_sphere`] and [`from_sphere`] are exact
//! inverses up to floating-point tolerance everywhere except the poles,
//! where longitude is undefined.

mod coordinate;
mod error;
mod mapping;

pub use coordinate::GeoCoordinate;
pub use error::CoordError;
pub use mapping::{SpherePoint, chordal_distance, from_sphere, normalize_longitude, to_sphere};
