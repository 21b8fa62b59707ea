use super::match_state::GameState;
use crate::model::outcome::MatchResult;
use crate::model::player::Side;
use crate::model::round::RoundRecord;
use serde::{Deserialize, Serialize};

/// Read-only report of a session, written out after (or during) a game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameTranscript {
    pub rounds_consumed: u32,
    pub own_score: u32,
    pub opponent_score: u32,
    pub own_bomb_used: bool,
    pub opponent_bomb_used: bool,
    pub forfeits: usize,
    pub history: Vec<RoundRecord>,
    pub result: Option<MatchResult>,
}

impl GameTranscript {
    pub fn capture(state: &GameState) -> Self {
        GameTranscript {
            rounds_consumed: state.round() - 1,
            own_score: state.score(Side::Own),
            opponent_score: state.score(Side::Opponent),
            own_bomb_used: state.bomb_used(Side::Own),
            opponent_bomb_used: state.bomb_used(Side::Opponent),
            forfeits: state.forfeits(),
            history: state.history().to_vec(),
            result: state.result(),
        }
    }

    pub fn to_json(state: &GameState) -> serde_json::Result<String> {
        let transcript = Self::capture(state);
        serde_json::to_string_pretty(&transcript)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
