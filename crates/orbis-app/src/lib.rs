//! Orbis application layer.
//!
//! Ties the coordinate, land, picking and game crates into a
//! [`GlobeSession`] that turns pixel clicks into [`ClickReport`]s, plus the
//! line-based game loop used by the `orbis play` command.

mod error;
pub mod play;
mod session;

pub use error::AppError;
pub use session::{ClickReport, GlobeSession, Mode, load_landmasses};
