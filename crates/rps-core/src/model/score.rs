use crate::model::outcome::{MatchResult, Outcome};
use crate::model::player::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn award(&mut self, side: Side) {
        self.totals[side.index()] += 1;
    }

    /// Credits the round winner. Draws leave both totals unchanged.
    pub fn apply_outcome(&mut self, outcome: Outcome) {
        if let Some(side) = outcome.winner() {
            self.award(side);
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        self.totals[side.index()]
    }

    pub fn standings(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn is_behind(&self, side: Side) -> bool {
        self.score(side) < self.score(side.other())
    }

    pub fn result(&self) -> MatchResult {
        MatchResult::from_scores(self.score(Side::Own), self.score(Side::Opponent))
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}
