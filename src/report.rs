use crate::simulator::Tally;
use crate::teams::{Team, GROUP_RUNNERS_UP, GROUP_WINNERS};
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::num::NonZero;

/// Number of significant digits shown by [`format_odds`].
pub const SIGNIFICANT_DIGITS: usize = 5;

/// A pairing drawn at least once.
#[derive(Serialize, Copy, Clone, Debug, Eq, PartialEq)]
pub struct Matchup {
    pub winner: Team,
    pub runner_up: Team,
    /// Number of draws where the two teams met.
    pub count: u64,
}

impl Matchup {
    /// Probability of the pairing over `simulations` draws.
    #[inline]
    pub fn odds(&self, simulations: NonZero<u32>) -> f64 {
        self.count as f64 / simulations.get() as f64
    }
}

/// Arranges the tally in one row per group winner (registry order).
///
/// Each row lists the runners-up the winner has been drawn against, most frequent first.
pub fn pretty_table(tally: &Tally) -> Vec<Vec<Matchup>> {
    GROUP_WINNERS
        .iter()
        .map(|winner| {
            GROUP_RUNNERS_UP
                .iter()
                .filter_map(|runner_up| match tally.get(winner, runner_up) {
                    Some(count) if count != 0 => Some(Matchup {
                        winner: *winner,
                        runner_up: *runner_up,
                        count,
                    }),
                    _ => None,
                })
                .sorted_by_key(|matchup| Reverse(matchup.count))
                .collect()
        })
        .collect()
}

/// Formats a number with [`SIGNIFICANT_DIGITS`] significant digits.
///
/// Trailing zeros are removed, but a fixed notation number always keeps one decimal digit.
/// Numbers below 1e-4 or from 1e4 on use the scientific notation (`1e-05`, `1.2345e+04`).
pub fn format_odds(odds: f64) -> String {
    if odds == 0.0 {
        return "0.0".to_owned();
    }
    if !odds.is_finite() {
        return odds.to_string();
    }

    // Rounding first, the exponent may change (9.99999 -> 1.0000e1)
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, odds);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 - 1 {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        );
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
    let fixed = format!("{:.*}", decimals, odds);
    let trimmed = trim_zeros(&fixed);
    if trimmed.contains('.') {
        trimmed.to_owned()
    } else {
        format!("{trimmed}.0")
    }
}

#[inline]
fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
