use crate::model::player::Side;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Result of a single resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Own,
    Opponent,
    Draw,
}

impl Outcome {
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Own => Some(Side::Own),
            Outcome::Opponent => Some(Side::Opponent),
            Outcome::Draw => None,
        }
    }

    /// The same outcome seen from the other side of the table.
    pub const fn mirror(self) -> Self {
        match self {
            Outcome::Own => Outcome::Opponent,
            Outcome::Opponent => Outcome::Own,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{}", side.label().to_ascii_uppercase()),
            None => f.write_str("DRAW"),
        }
    }
}

/// Overall classification of a finished game, decided by comparing final scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    OwnWins,
    OpponentWins,
    Draw,
}

impl MatchResult {
    pub fn from_scores(own: u32, opponent: u32) -> Self {
        match own.cmp(&opponent) {
            core::cmp::Ordering::Greater => MatchResult::OwnWins,
            core::cmp::Ordering::Less => MatchResult::OpponentWins,
            core::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchResult::OwnWins => "USER WINS",
            MatchResult::OpponentWins => "BOT WINS",
            MatchResult::Draw => "DRAW",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::{MatchResult, Outcome};
    use crate::model::player::Side;

    #[test]
    fn winner_maps_to_side() {
        assert_eq!(Outcome::Own.winner(), Some(Side::Own));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::Opponent.winner(), Some(Side::Opponent));
    }

    #[test]
    fn mirror_is_an_involution() {
        for outcome in [Outcome::Own, Outcome::Opponent, Outcome::Draw] {
            assert_eq!(outcome.mirror().mirror(), outcome);
        }
        assert_eq!(Outcome::Own.mirror(), Outcome::Opponent);
    }

    #[test]
    fn display_matches_referee_wording() {
        assert_eq!(Outcome::Own.to_string(), "USER");
        assert_eq!(Outcome::Opponent.to_string(), "BOT");
        assert_eq!(Outcome::Draw.to_string(), "DRAW");
    }

    #[test]
    fn match_result_compares_scores() {
        assert_eq!(MatchResult::from_scores(2, 0), MatchResult::OwnWins);
        assert_eq!(MatchResult::from_scores(0, 1), MatchResult::OpponentWins);
        assert_eq!(MatchResult::from_scores(1, 1), MatchResult::Draw);
        assert_eq!(MatchResult::OpponentWins.to_string(), "BOT WINS");
    }
}
