use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Number of teams in each pot (group winners and group runners-up).
pub const TEAMS_PER_POT: usize = 8;

/// A team qualified for the round of 16.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Team {
    /// Group of the group stage the team played in.
    pub group: char,
    /// Country of the team.
    pub country: &'static str,
    /// Display name.
    pub name: &'static str,
}

impl Team {
    #[inline]
    pub const fn new(group: char, country: &'static str, name: &'static str) -> Self {
        Team {
            group,
            country,
            name,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.group, self.country)
    }
}

/// Group winners of the 2019-2020 Champions League.
pub const GROUP_WINNERS: [Team; TEAMS_PER_POT] = [
    Team::new('A', "ITA", "Neapel"),
    Team::new('B', "POR", "Porto"),
    Team::new('C', "GER", "Bayern"),
    Team::new('D', "ENG", "Tottenham"),
    Team::new('E', "ENG", "Chelsea"),
    Team::new('F', "ESP", "Real"),
    Team::new('G', "ENG", "ManCity"),
    Team::new('H', "POR", "Lissabon"),
];

/// Group runners-up of the 2019-2020 Champions League.
pub const GROUP_RUNNERS_UP: [Team; TEAMS_PER_POT] = [
    Team::new('A', "ENG", "Liverpool"),
    Team::new('B', "BEL", "Bruegge"),
    Team::new('C', "ITA", "InterM"),
    Team::new('D', "GER", "Frankfurt"),
    Team::new('E', "ITA", "ACMailand"),
    Team::new('F', "GER", "Leipzig"),
    Team::new('G', "GER", "Dortmund"),
    Team::new('H', "FRA", "PSG"),
];

/// Returns whether a winner may be drawn against a runner-up: they must come from different groups
/// and from different countries.
#[inline]
pub fn can_be_paired(winner: &Team, runner_up: &Team) -> bool {
    winner.group != runner_up.group && winner.country != runner_up.country
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_same_group_excluded() {
        // Liverpool and Neapel both come from group A
        assert!(!can_be_paired(&GROUP_WINNERS[0], &GROUP_RUNNERS_UP[0]));
    }

    #[test]
    fn test_same_country_excluded() {
        // Bayern and Dortmund are both German
        assert!(!can_be_paired(&GROUP_WINNERS[2], &GROUP_RUNNERS_UP[6]));
        assert!(can_be_paired(&GROUP_WINNERS[2], &GROUP_RUNNERS_UP[7]));
    }

    #[test]
    fn test_valid_pairs() {
        let valid = GROUP_WINNERS
            .iter()
            .flat_map(|w| GROUP_RUNNERS_UP.iter().map(move |r| (w, r)))
            .filter(|(w, r)| can_be_paired(w, r))
            .count();
        assert_eq!(valid, 48);
    }

    #[test]
    fn test_pots_are_disjoint() {
        for winner in &GROUP_WINNERS {
            assert!(!GROUP_RUNNERS_UP.contains(winner));
        }
    }
}
