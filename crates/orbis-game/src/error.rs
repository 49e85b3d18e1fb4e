//! Game error types.

use orbis_coords::CoordError;

/// Errors from configuring the game or starting a round.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// `start_round` needs at least one candidate.
    #[error("no candidate targets to choose from")]
    NoCandidates,

    /// The chosen target does not have a valid coordinate.
    #[error("invalid target {name:?}: {source}")]
    InvalidTarget {
        /// Target name.
        name: String,
        /// Why the coordinate was rejected.
        #[source]
        source: CoordError,
    },

    /// Tolerance must be finite and positive.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}
