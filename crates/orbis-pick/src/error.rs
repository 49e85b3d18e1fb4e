//! Picking error types.

use orbis_coords::CoordError;

/// Errors that prevent a click from being resolved at all.
///
/// Missing the globe is not an error; see [`PickResult::Miss`](crate::PickResult::Miss).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PickError {
    /// Viewport dimensions must be finite and positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },

    /// The camera could not produce a usable ray for this click.
    #[error("camera produced a degenerate ray")]
    DegenerateRay,

    /// The hit point could not be mapped to a coordinate.
    #[error(transparent)]
    Coord(#[from] CoordError),
}
