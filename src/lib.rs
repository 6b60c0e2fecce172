#![forbid(unsafe_code)]

//! Simulation of the round of 16 draw of a two-legged knockout round.
//!
//! Group winners are paired with group runners-up so that no pairing joins two teams from the same
//! group or from the same country. [`simulator::execute_simulation`] runs the random draw many
//! times and tallies every pairing, [`count::count_possible_draws`] counts every complete valid draw.

use rand::{thread_rng, RngCore};

pub mod constraints;
pub mod count;
pub mod input;
pub mod report;
pub mod simulator;
pub mod strategy;
pub mod teams;

pub use simulator::{execute_simulation, Simulation, Tally};
pub use teams::{Team, GROUP_RUNNERS_UP, GROUP_WINNERS};

/// Random generator used by the draws.
pub type RandGen = rand_pcg::Pcg64;

/// Seeder of [`RandGen`].
pub type Seeder = rand_seeder::Seeder;

/// Generates a new random seed.
pub fn gen_seed() -> [u8; 32] {
    let mut seed = [0u8; 32];
    thread_rng().fill_bytes(&mut seed);
    seed
}

/// Generates a new [`Seeder`] from a random seed.
#[inline]
pub fn gen_seeder() -> Seeder {
    Seeder::from(gen_seed())
}
