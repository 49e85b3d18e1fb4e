//! Land/ocean classification against simplified landmass outlines.
//!
//! Landmasses are sets of closed `(longitude, latitude)` rings without holes.
//! [`classify`] answers "land or ocean" for a clicked coordinate and
//! [`locate`] says which landmass (country) was hit. Outline data comes from
//! the bundled low-poly continents ([`builtin_landmasses`]) or a GeoJSON
//! boundary file ([`geojson::landmasses_from_geojson`]).

mod builtin;
mod error;
pub mod geojson;
mod landmass;
pub mod mesh;
mod polygon;

pub use builtin::builtin_landmasses;
pub use error::LandError;
pub use landmass::{Landmass, Surface, classify, locate};
pub use polygon::{EDGE_EPSILON, Polygon, point_in_polygon, point_in_ring};
