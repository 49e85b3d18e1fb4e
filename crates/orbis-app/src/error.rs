//! Application error type.

use std::path::PathBuf;

use orbis_config::ConfigError;
use orbis_coords::CoordError;
use orbis_game::GameError;
use orbis_land::LandError;
use orbis_pick::PickError;

/// Everything that can go wrong while running a globe session.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Loading or validating configuration failed.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Boundary data could not be parsed.
    #[error("land data error: {0}")]
    Land(#[from] LandError),

    /// A click could not be resolved.
    #[error("pick failed: {0}")]
    Pick(#[from] PickError),

    /// A round could not be started.
    #[error("game error: {0}")]
    Game(#[from] GameError),

    /// A coordinate was out of range.
    #[error(transparent)]
    Coord(#[from] CoordError),

    /// A boundary file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadLand {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
