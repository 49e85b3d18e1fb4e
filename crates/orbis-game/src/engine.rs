//! The round state machine.

use std::fmt;

use orbis_coords::{GeoCoordinate, chordal_distance};
use rand::Rng;

use crate::error::GameError;
use crate::target::GameTarget;

/// Default maximum chordal distance (unit-sphere units) for a correct guess.
///
/// 0.35 is roughly 20° of arc.
pub const DEFAULT_TOLERANCE: f64 = 0.35;

/// Result of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuessOutcome {
    /// Close enough; the round is over.
    Correct {
        /// Chordal distance to the target.
        distance: f64,
        /// Guesses taken this round, including this one.
        attempts: u32,
    },
    /// Too far; the round continues.
    Incorrect {
        /// Chordal distance to the target.
        distance: f64,
    },
    /// No round is in progress. Nothing changed.
    NoActiveRound,
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessOutcome::Correct { .. } => f.write_str("correct"),
            GuessOutcome::Incorrect { .. } => f.write_str("incorrect"),
            GuessOutcome::NoActiveRound => f.write_str("no-active-round"),
        }
    }
}

#[derive(Debug, Clone)]
struct Round {
    target: GameTarget,
    coordinate: GeoCoordinate,
    attempts: u32,
}

/// Holds the current target, if any, and scores guesses against it.
///
/// Idle until [`start_round`](Self::start_round); a correct guess returns it
/// to idle.
#[derive(Debug, Clone)]
pub struct ProximityGame {
    tolerance: f64,
    round: Option<Round>,
}

impl Default for ProximityGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ProximityGame {
    /// An idle game with [`DEFAULT_TOLERANCE`].
    pub fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            round: None,
        }
    }

    /// An idle game with a custom tolerance.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, GameError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(GameError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            tolerance,
            round: None,
        })
    }

    /// Maximum chordal distance (exclusive) for a correct guess.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether a round is in progress.
    pub fn is_active(&self) -> bool {
        self.round.is_some()
    }

    /// The target of the current round.
    pub fn current_target(&self) -> Option<&GameTarget> {
        self.round.as_ref().map(|r| &r.target)
    }

    /// Guesses made in the current round; 0 when idle.
    pub fn attempts(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.attempts)
    }

    /// Pick a target uniformly at random and make it the current one.
    ///
    /// Replaces any round already in progress.
    pub fn start_round<R: Rng>(
        &mut self,
        candidates: &[GameTarget],
        rng: &mut R,
    ) -> Result<&GameTarget, GameError> {
        if candidates.is_empty() {
            return Err(GameError::NoCandidates);
        }
        let target = candidates[rng.random_range(0..candidates.len())].clone();
        let coordinate = target
            .coordinate()
            .map_err(|source| GameError::InvalidTarget {
                name: target.name.clone(),
                source,
            })?;

        if let Some(previous) = &self.round {
            tracing::debug!(previous = %previous.target.name, "replacing unfinished round");
        }
        tracing::info!(name = %target.name, "round started");

        let round = self.round.insert(Round {
            target,
            coordinate,
            attempts: 0,
        });
        Ok(&round.target)
    }

    /// End the current round without a winner, returning its target.
    pub fn abandon(&mut self) -> Option<GameTarget> {
        let round = self.round.take()?;
        tracing::info!(name = %round.target.name, attempts = round.attempts, "round abandoned");
        Some(round.target)
    }

    /// Score a guess against the current target.
    pub fn submit_guess(&mut self, coordinate: &GeoCoordinate) -> GuessOutcome {
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::NoActiveRound;
        };

        round.attempts = round.attempts.saturating_add(1);
        let distance = chordal_distance(coordinate, &round.coordinate);
        if distance < self.tolerance {
            let attempts = round.attempts;
            tracing::info!(
                name = %round.target.name,
                attempts,
                distance,
                "round won"
            );
            self.round = None;
            GuessOutcome::Correct { distance, attempts }
        } else {
            tracing::debug!(%coordinate, distance, "guess too far");
            GuessOutcome::Incorrect { distance }
        }
    }
}
