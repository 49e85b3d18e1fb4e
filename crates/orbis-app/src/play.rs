//! Text-driven game loop: reads `x y` pixel clicks, prints verdicts.

use std::io::{BufRead, Write};

use glam::DVec2;
use orbis_game::GuessOutcome;

use crate::error::AppError;
use crate::session::GlobeSession;

/// Totals for a finished play session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    /// Rounds won.
    pub rounds_won: u32,
    /// Guesses that hit the globe, across all rounds.
    pub guesses: u32,
}

/// Parse a `"x y"` pixel pair. Commas are accepted as separators.
///
/// Non-finite values (`nan`, `inf`, overflow) are rejected.
pub fn parse_click(line: &str) -> Option<DVec2> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(DVec2::new(x, y))
}

/// Play until input ends, `quit` is read, or `rounds` rounds are won.
///
/// A new round starts after every correct guess.
pub fn run_play<I, O>(
    session: &mut GlobeSession,
    input: I,
    mut output: O,
    rounds: Option<u32>,
) -> Result<PlaySummary, AppError>
where
    I: BufRead,
    O: Write,
{
    let mut summary = PlaySummary::default();
    let mut target = session.start_round()?.name.clone();
    writeln!(output, "Find {target}")?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit" | "exit") {
            break;
        }
        let Some(screen) = parse_click(line) else {
            writeln!(output, "expected pixel coordinates \"x y\", got {line:?}")?;
            continue;
        };

        let report = session.click(screen)?;
        match report.guess {
            None => writeln!(output, "missed the globe")?,
            Some(GuessOutcome::Incorrect { distance }) => {
                summary.guesses += 1;
                writeln!(output, "{report}, {distance:.3} away from {target}")?;
            }
            Some(GuessOutcome::Correct { attempts, .. }) => {
                summary.guesses += 1;
                summary.rounds_won += 1;
                writeln!(output, "Correct! Found {target} in {attempts} guesses")?;
                if rounds.is_some_and(|limit| summary.rounds_won >= limit) {
                    break;
                }
                target = session.start_round()?.name.clone();
                writeln!(output, "Find {target}")?;
            }
            Some(GuessOutcome::NoActiveRound) => {
                target = session.start_round()?.name.clone();
                writeln!(output, "Find {target}")?;
            }
        }
    }

    tracing::info!(
        rounds_won = summary.rounds_won,
        guesses = summary.guesses,
        "play finished"
    );
    Ok(summary)
}
