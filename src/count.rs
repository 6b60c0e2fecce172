use crate::teams::{can_be_paired, Team, GROUP_RUNNERS_UP, GROUP_WINNERS, TEAMS_PER_POT};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(Eq, PartialEq))]
#[non_exhaustive]
pub enum CountError {
    /// The two pots don't have the same number of teams.
    #[error("pots of different sizes can't be paired ({0} winners, {1} runners-up)")]
    MismatchedPots(usize, usize),
}

/// Counts every possible outcome of the draw of the registry teams.
pub fn count_possible_draws() -> u64 {
    let mut paired = [false; TEAMS_PER_POT];
    let count = count_from(0, &GROUP_WINNERS, &GROUP_RUNNERS_UP, &mut paired);
    debug!(count, "counted possible draws");
    count
}

/// Counts the complete draws pairing every winner with a different runner-up, where every pairing
/// is valid (see [`can_be_paired`]).
pub fn count_valid_draws(winners: &[Team], runners_up: &[Team]) -> Result<u64, CountError> {
    if winners.len() != runners_up.len() {
        return Err(CountError::MismatchedPots(winners.len(), runners_up.len()));
    }

    let mut paired = vec![false; runners_up.len()];
    Ok(count_from(0, winners, runners_up, &mut paired))
}

// Winners are paired in order, `paired` marks the runners-up already taken and is restored before returning
fn count_from(depth: usize, winners: &[Team], runners_up: &[Team], paired: &mut [bool]) -> u64 {
    let Some(winner) = winners.get(depth) else {
        return 1;
    };

    let mut count = 0;
    for (i, runner_up) in runners_up.iter().enumerate() {
        if !paired[i] && can_be_paired(winner, runner_up) {
            paired[i] = true;
            count += count_from(depth + 1, winners, runners_up, paired);
            paired[i] = false;
        }
    }
    count
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn brute_force(winners: &[Team], runners_up: &[Team]) -> u64 {
        runners_up
            .iter()
            .permutations(runners_up.len())
            .filter(|perm| {
                winners
                    .iter()
                    .zip(perm)
                    .all(|(winner, runner_up)| can_be_paired(winner, runner_up))
            })
            .count() as u64
    }

    #[test]
    fn test_possible_draws() {
        assert_eq!(count_possible_draws(), 3876);
    }

    #[test]
    fn test_determinism() {
        let first = count_possible_draws();
        for _ in 0..10 {
            assert_eq!(count_possible_draws(), first);
        }
    }

    #[test]
    fn test_brute_force() {
        assert_eq!(
            count_possible_draws(),
            brute_force(&GROUP_WINNERS, &GROUP_RUNNERS_UP)
        );
        assert_eq!(
            count_valid_draws(&GROUP_WINNERS, &GROUP_RUNNERS_UP),
            Ok(count_possible_draws())
        );
    }

    #[test]
    fn test_smaller_pots() {
        for size in 0..=TEAMS_PER_POT {
            for start in 0..=(TEAMS_PER_POT - size) {
                let winners = &GROUP_WINNERS[start..start + size];
                let runners_up = &GROUP_RUNNERS_UP[TEAMS_PER_POT - size..];
                assert_eq!(
                    count_valid_draws(winners, runners_up),
                    Ok(brute_force(winners, runners_up))
                );
            }
        }
    }

    #[test]
    fn test_group_exclusion() {
        // Every country differs, so only the groups keep teams apart
        let winners = [Team::new('A', "X", "a1"), Team::new('B', "Y", "b1")];
        let runners_up = [Team::new('A', "Z", "a2"), Team::new('B', "W", "b2")];
        assert_eq!(count_valid_draws(&winners, &runners_up), Ok(1));

        let runners_up = [Team::new('A', "Z", "a2"), Team::new('C', "W", "c2")];
        assert_eq!(count_valid_draws(&winners, &runners_up), Ok(1));

        let runners_up = [Team::new('C', "Z", "c2"), Team::new('D', "W", "d2")];
        assert_eq!(count_valid_draws(&winners, &runners_up), Ok(2));
    }

    #[test]
    fn test_mismatched_pots() {
        assert_eq!(
            count_valid_draws(&GROUP_WINNERS, &GROUP_RUNNERS_UP[..7]),
            Err(CountError::MismatchedPots(8, 7))
        );
    }
}
