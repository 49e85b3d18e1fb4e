//! Land data error types.

/// Errors raised while building polygons or ingesting boundary data.
#[derive(Debug, thiserror::Error)]
pub enum LandError {
    /// A ring needs at least three distinct vertices to enclose an area.
    #[error("degenerate polygon: {vertices} vertices (need at least 3)")]
    DegeneratePolygon {
        /// Number of usable vertices found.
        vertices: usize,
    },

    /// A vertex is not a finite `(longitude, latitude)` pair in range.
    #[error("invalid polygon vertex ({longitude}, {latitude})")]
    InvalidVertex {
        /// Vertex longitude in degrees.
        longitude: f64,
        /// Vertex latitude in degrees.
        latitude: f64,
    },

    /// The document parsed but is not a GeoJSON `FeatureCollection` or `Feature`.
    #[error("unsupported GeoJSON document: {0}")]
    InvalidGeoJson(String),

    /// The boundary document is not valid JSON for the expected shape.
    #[error("failed to parse GeoJSON: {0}")]
    Json(#[from] serde_json::Error),
}
