use std::num::{IntErrorKind, NonZero};
use thiserror::Error;

/// Maximum number of simulations accepted by [`parse_simulations`].
///
/// This is a limit on the time a single request may take, the simulator itself has no upper bound.
pub const MAX_SIMULATIONS: u32 = 10_000_000;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum SimulationInputError {
    /// The input is not a whole number.
    #[error("the number of simulations must be a number")]
    NotANumber,
    /// The input is zero or negative.
    #[error("the number of simulations must be greater than zero")]
    NotPositive,
    /// The input is over [`MAX_SIMULATIONS`].
    #[error("too many simulations ({0} at most, but {1} were requested)")]
    TooMany(u32, u64),
    /// An error occurred while parsing the number of simulations.
    #[error("an error occurred while parsing the number of simulations: {0}")]
    InternalError(&'static str),
}

/// Parses a user-provided number of simulations.
pub fn parse_simulations(input: &str) -> Result<NonZero<u32>, SimulationInputError> {
    let input = input.trim();
    let requested: i64 = match input.parse() {
        Ok(requested) => requested,
        // Still a number, just out of the i64 range
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => {
            return Err(SimulationInputError::NotPositive)
        }
        Err(_) => return Err(SimulationInputError::NotANumber),
    };

    if requested < 1 {
        return Err(SimulationInputError::NotPositive);
    }
    let requested = requested.unsigned_abs();
    if requested > MAX_SIMULATIONS as u64 {
        return Err(SimulationInputError::TooMany(MAX_SIMULATIONS, requested));
    }

    u32::try_from(requested)
        .ok()
        .and_then(NonZero::new)
        .ok_or(SimulationInputError::InternalError("couldn't convert the number to u32"))
}
