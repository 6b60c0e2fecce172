use crate::teams::{can_be_paired, Team};
use indexmap::IndexMap;

/// The winners every runner-up can still be drawn against.
///
/// Runners-up are kept in the order they were provided, and so are the winners of each list.
/// A runner-up without any legal winner maps to an empty list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidPairings {
    pairings: IndexMap<Team, Vec<Team>>,
}

impl ValidPairings {
    /// The legal winners of `runner_up`, or [`None`] if the runner-up is not part of the mapping.
    #[inline]
    pub fn get(&self, runner_up: &Team) -> Option<&[Team]> {
        self.pairings.get(runner_up).map(Vec::as_slice)
    }

    /// Iterates over the runners-up and their legal winners.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Team, &[Team])> {
        self.pairings.iter().map(|(r, w)| (r, w.as_slice()))
    }

    /// Number of runners-up in the mapping.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}

/// Computes the winners each of `runners_up` can be drawn against.
pub fn valid_pairings(winners: &[Team], runners_up: &[Team]) -> ValidPairings {
    let pairings = runners_up
        .iter()
        .map(|runner_up| {
            let candidates = winners
                .iter()
                .filter(|winner| can_be_paired(winner, runner_up))
                .copied()
                .collect();
            (*runner_up, candidates)
        })
        .collect();

    ValidPairings { pairings }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::teams::{GROUP_RUNNERS_UP, GROUP_WINNERS};

    #[test]
    fn test_full_pots() {
        let pairings = valid_pairings(&GROUP_WINNERS, &GROUP_RUNNERS_UP);
        assert_eq!(pairings.len(), GROUP_RUNNERS_UP.len());

        for (runner_up, winners) in pairings.iter() {
            for winner in winners {
                assert_ne!(winner.group, runner_up.group);
                assert_ne!(winner.country, runner_up.country);
            }
        }

        // Liverpool can't meet the English teams nor Neapel
        let liverpool = pairings.get(&GROUP_RUNNERS_UP[0]).unwrap();
        let names: Vec<_> = liverpool.iter().map(|t| t.name).collect();
        assert_eq!(names, ["Porto", "Bayern", "Real", "Lissabon"]);
    }

    #[test]
    fn test_keeps_winners_order() {
        let winners = [GROUP_WINNERS[7], GROUP_WINNERS[1], GROUP_WINNERS[5]];
        let pairings = valid_pairings(&winners, &GROUP_RUNNERS_UP[..1]);
        assert_eq!(
            pairings.get(&GROUP_RUNNERS_UP[0]).unwrap(),
            &[GROUP_WINNERS[7], GROUP_WINNERS[1], GROUP_WINNERS[5]]
        );
    }

    #[test]
    fn test_undrawable_runner_up() {
        // Only Neapel left, same group as Liverpool
        let pairings = valid_pairings(&GROUP_WINNERS[..1], &GROUP_RUNNERS_UP[..1]);
        assert_eq!(pairings.len(), 1);
        assert_eq!(pairings.get(&GROUP_RUNNERS_UP[0]), Some(&[][..]));
    }

    #[test]
    fn test_missing_runner_up() {
        let pairings = valid_pairings(&GROUP_WINNERS, &GROUP_RUNNERS_UP[..2]);
        assert_eq!(pairings.get(&GROUP_RUNNERS_UP[5]), None);
        assert!(valid_pairings(&GROUP_WINNERS, &[]).is_empty());
    }
}
