//! "Find the country" proximity game.
//!
//! A [`ProximityGame`] holds at most one target. Guesses are scored by the
//! straight-line (chordal) distance between unit-sphere points, which grows
//! monotonically with the angle between them and needs no inverse trig.

mod engine;
mod error;
mod target;

pub use engine::{DEFAULT_TOLERANCE, GuessOutcome, ProximityGame};
pub use error::GameError;
pub use target::{GameTarget, builtin_targets};
