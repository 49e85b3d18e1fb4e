//! Screen-click picking against a globe.
//!
//! A click in pixels is converted to normalized device coordinates, turned
//! into a world-space [`Ray`] by a [`PickCamera`], intersected with a
//! [`PickTarget`] (usually the analytic [`Sphere`] standing in for the globe
//! mesh), and the nearest hit is mapped back to a geographic coordinate.

mod camera;
mod error;
mod ray;
mod resolve;
mod sphere;
mod viewport;

pub use camera::{PerspectiveCamera, PickCamera};
pub use error::PickError;
pub use ray::Ray;
pub use resolve::{PickHit, PickResult, resolve};
pub use sphere::{PickTarget, Sphere};
pub use viewport::Viewport;
