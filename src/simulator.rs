use crate::constraints::valid_pairings;
use crate::strategy::{needs_careful_draw, next_move, random_move, DrawError, Move};
use crate::teams::{can_be_paired, Team, GROUP_RUNNERS_UP, GROUP_WINNERS, TEAMS_PER_POT};
use crate::{RandGen, Seeder};
use indexmap::IndexMap;
use rand::Rng;
use std::num::NonZero;
use tracing::{debug, trace};

/// Number of times each valid pairing has been drawn.
///
/// Only valid pairings of the registry are counted, ordered by winner then runner-up.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tally {
    counts: IndexMap<(Team, Team), u64>,
}

impl Tally {
    /// Creates a new `Tally` with a zero count for every valid (winner, runner-up) pairing.
    pub fn new() -> Tally {
        let counts = GROUP_WINNERS
            .iter()
            .flat_map(|w| GROUP_RUNNERS_UP.iter().map(move |r| (*w, *r)))
            .filter(|(w, r)| can_be_paired(w, r))
            .map(|pairing| (pairing, 0))
            .collect();
        Tally { counts }
    }

    /// Number of draws where `winner` met `runner_up`. [`None`] if the pairing isn't valid.
    #[inline]
    pub fn get(&self, winner: &Team, runner_up: &Team) -> Option<u64> {
        self.counts.get(&(*winner, *runner_up)).copied()
    }

    /// Iterates over the (winner, runner-up) pairings and their counts.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Team, &Team, u64)> {
        self.counts.iter().map(|((w, r), &count)| (w, r, count))
    }

    /// Number of pairings which can be counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all the counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    fn record(&mut self, winner: &Team, runner_up: &Team) -> Result<(), DrawError> {
        let count = self
            .counts
            .get_mut(&(*winner, *runner_up))
            .ok_or(DrawError::InternalError("drawn an invalid pairing"))?;
        *count += 1;
        Ok(())
    }
}

impl Default for Tally {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`execute_simulation`].
#[derive(Debug)]
pub struct Simulation {
    /// Pairings drawn over every simulated draw.
    pub tally: Tally,
    /// The group winners, in registry order.
    pub winners: &'static [Team],
    /// The group runners-up, in registry order.
    pub runners_up: &'static [Team],
    /// Number of simulated draws.
    pub simulations: NonZero<u32>,
}

/// Simulates a single draw, adding its pairings to `tally`.
///
/// Returns the committed pairings in draw order. Each team is drawn exactly once.
pub fn simulate_draw(tally: &mut Tally, rng: &mut impl Rng) -> Result<Vec<Move>, DrawError> {
    let mut winners = GROUP_WINNERS.to_vec();
    let mut runners_up = GROUP_RUNNERS_UP.to_vec();
    let mut moves = Vec::with_capacity(TEAMS_PER_POT);

    while !winners.is_empty() && !runners_up.is_empty() {
        // Recomputed from scratch after every pairing
        let pairings = valid_pairings(&winners, &runners_up);

        let mv = if needs_careful_draw(&pairings, &runners_up) {
            next_move(&pairings, &runners_up, rng)?
        } else {
            random_move(&pairings, &runners_up, rng)?
        };
        trace!(
            winner = mv.winner.name,
            runner_up = mv.runner_up.name,
            policy = ?mv.policy,
            "pairing drawn"
        );

        remove(&mut runners_up, &mv.runner_up)?;
        remove(&mut winners, &mv.winner)?;
        tally.record(&mv.winner, &mv.runner_up)?;
        moves.push(mv);
    }

    Ok(moves)
}

/// Simulates `simulations` draws and counts how many times each pairing has been drawn.
///
/// The draws are reproducible: the same `seeder` always gives the same tally.
/// The first draw reaching a dead end aborts the simulation.
pub fn execute_simulation(
    simulations: NonZero<u32>,
    mut seeder: Seeder,
) -> Result<Simulation, DrawError> {
    debug!(simulations = simulations.get(), "starting simulation");

    let mut rng: RandGen = seeder.make_rng();
    let mut tally = Tally::new();
    for _ in 0..simulations.get() {
        simulate_draw(&mut tally, &mut rng)?;
    }

    debug!(pairings = tally.total(), "simulation completed");
    Ok(Simulation {
        tally,
        winners: &GROUP_WINNERS,
        runners_up: &GROUP_RUNNERS_UP,
        simulations,
    })
}

#[inline]
fn remove(teams: &mut Vec<Team>, team: &Team) -> Result<(), DrawError> {
    let index = teams
        .iter()
        .position(|t| t == team)
        .ok_or(DrawError::InternalError("drawn team is not in the pot"))?;
    teams.remove(index);
    Ok(())
}
