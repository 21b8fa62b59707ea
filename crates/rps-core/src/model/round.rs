use crate::model::moves::Move;
use crate::model::outcome::Outcome;
use serde::{Deserialize, Serialize};

/// One completed round. Written once into the history and never touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_number: u32,
    pub own_move: Move,
    pub opponent_move: Move,
    pub winner: Outcome,
}

impl RoundRecord {
    pub const fn new(
        round_number: u32,
        own_move: Move,
        opponent_move: Move,
        winner: Outcome,
    ) -> Self {
        Self {
            round_number,
            own_move,
            opponent_move,
            winner,
        }
    }
}
