//! Coordinate error types.

/// Errors produced when building or mapping geographic coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordError {
    /// Latitude or longitude outside its valid range, or not finite.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Offending latitude in degrees.
        latitude: f64,
        /// Offending longitude in degrees.
        longitude: f64,
    },

    /// Sphere radius must be finite and strictly positive.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f64),

    /// A zero-length or non-finite point has no direction to map back.
    #[error("cannot map degenerate point ({x}, {y}, {z}) to a coordinate")]
    DegeneratePoint {
        /// X component.
        x: f64,
        /// Y component.
        y: f64,
        /// Z component.
        z: f64,
    },
}
