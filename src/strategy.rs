use crate::constraints::ValidPairings;
use crate::teams::Team;
use itertools::Itertools;
use rand::prelude::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::error;

/// A runner-up with fewer legal winners than this makes the draw switch to the careful policy.
pub const CONFLICT_THRESHOLD: usize = 3;

/// With fewer runners-up than this left, the draw always uses the careful policy.
pub const CAREFUL_DRAW_REMAINING: usize = 6;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum DrawError {
    /// A runner-up still in the pot can't be drawn against any remaining winner.
    #[error("runner-up {0} has no valid opponent left")]
    NoValidOpponent(&'static str),
    /// An error occurred while drawing.
    #[error("an error occurred while drawing: {0}")]
    InternalError(&'static str),
}

/// How a [`Move`] was chosen.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Policy {
    /// The runner-up had a single legal winner left.
    Forced,
    /// Random runner-up, drawn against its least contended winner.
    ConflictAvoiding,
    /// Random runner-up, drawn against a random legal winner.
    Random,
}

/// A pairing committed by the draw.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Move {
    pub runner_up: Team,
    pub winner: Team,
    pub policy: Policy,
}

/// Returns whether any of `runners_up` has fewer than [`CONFLICT_THRESHOLD`] legal winners.
pub fn needs_conflict_avoidance(pairings: &ValidPairings, runners_up: &[Team]) -> bool {
    runners_up
        .iter()
        .any(|r| pairings.get(r).map_or(0, <[Team]>::len) < CONFLICT_THRESHOLD)
}

/// Returns whether the next pairing has to be chosen by [`next_move`] instead of [`random_move`].
#[inline]
pub fn needs_careful_draw(pairings: &ValidPairings, runners_up: &[Team]) -> bool {
    runners_up.len() < CAREFUL_DRAW_REMAINING || needs_conflict_avoidance(pairings, runners_up)
}

/// Chooses the next pairing while avoiding dead ends.
///
/// A runner-up with a single legal winner is always drawn first (the first one in `runners_up`).
/// Otherwise a random runner-up is drawn against the winner the fewest other runners-up can still
/// meet, ties being broken randomly.
pub fn next_move(
    pairings: &ValidPairings,
    runners_up: &[Team],
    rng: &mut impl Rng,
) -> Result<Move, DrawError> {
    let mut forced = None;
    for runner_up in runners_up {
        // Every runner-up is checked, so a dead end is reported even if a move is forced
        if let [winner] = candidates(pairings, runner_up)? {
            if forced.is_none() {
                forced = Some(Move {
                    runner_up: *runner_up,
                    winner: *winner,
                    policy: Policy::Forced,
                });
            }
        }
    }
    if let Some(forced) = forced {
        return Ok(forced);
    }

    let runner_up = runners_up
        .choose(rng)
        .ok_or(DrawError::InternalError("no runner-up left to draw"))?;

    let least_contended = candidates(pairings, runner_up)?
        .iter()
        .min_set_by_key(|&winner| {
            runners_up
                .iter()
                .filter(|&other| other != runner_up)
                .filter(|&other| pairings.get(other).is_some_and(|ws| ws.contains(winner)))
                .count()
        });
    let winner = least_contended
        .choose(rng)
        .ok_or(DrawError::InternalError("no least contended winner found"))?;

    Ok(Move {
        runner_up: *runner_up,
        winner: **winner,
        policy: Policy::ConflictAvoiding,
    })
}

/// Draws a random runner-up against a random legal winner.
pub fn random_move(
    pairings: &ValidPairings,
    runners_up: &[Team],
    rng: &mut impl Rng,
) -> Result<Move, DrawError> {
    let runner_up = runners_up
        .choose(rng)
        .ok_or(DrawError::InternalError("no runner-up left to draw"))?;
    let winner = candidates(pairings, runner_up)?
        .choose(rng)
        .ok_or(DrawError::InternalError("no winner left to draw"))?;

    Ok(Move {
        runner_up: *runner_up,
        winner: *winner,
        policy: Policy::Random,
    })
}

/// Legal winners of a runner-up which is still in the pot. Never empty.
fn candidates<'a>(pairings: &'a ValidPairings, runner_up: &Team) -> Result<&'a [Team], DrawError> {
    match pairings.get(runner_up) {
        Some([]) => {
            error!(runner_up = runner_up.name, "runner-up left without a valid opponent");
            Err(DrawError::NoValidOpponent(runner_up.name))
        }
        Some(winners) => Ok(winners),
        None => Err(DrawError::InternalError("runner-up missing from valid pairings")),
    }
}
