use crate::game::MAX_ROUNDS;
use crate::model::moves::Move;
use crate::model::outcome::{MatchResult, Outcome};
use crate::model::player::Side;
use crate::model::round::RoundRecord;
use crate::model::score::ScoreBoard;

/// The mutable aggregate for one session. Owned by the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    round: u32,
    scores: ScoreBoard,
    bombs_used: [bool; 2],
    history: Vec<RoundRecord>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: 1,
            scores: ScoreBoard::new(),
            bombs_used: [false; 2],
            history: Vec::new(),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores.score(side)
    }

    pub fn bomb_used(&self, side: Side) -> bool {
        self.bombs_used[side.index()]
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn draws(&self) -> usize {
        self.history.iter().filter(|r| r.winner.is_draw()).count()
    }

    /// Rounds consumed without a record, i.e. lost to invalid input.
    pub fn forfeits(&self) -> usize {
        (self.round - 1) as usize - self.history.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.round > MAX_ROUNDS
    }

    /// Final classification, available once every round has been consumed.
    pub fn result(&self) -> Option<MatchResult> {
        self.is_game_over().then(|| self.scores.result())
    }

    /// Records a resolved round and advances to the next one.
    ///
    /// Callers pass moves that already passed validation and the outcome the
    /// resolver produced for them.
    pub fn apply(&mut self, own_move: Move, opponent_move: Move, outcome: Outcome) -> &mut Self {
        debug_assert!(!self.is_game_over(), "round applied after game over");

        if own_move.is_bomb() {
            self.bombs_used[Side::Own.index()] = true;
        }
        if opponent_move.is_bomb() {
            self.bombs_used[Side::Opponent.index()] = true;
        }

        self.scores.apply_outcome(outcome);
        self.history.push(RoundRecord::new(
            self.round,
            own_move,
            opponent_move,
            outcome,
        ));
        self.round += 1;
        self
    }

    /// Consumes the current round without a record or score change.
    pub fn forfeit(&mut self) -> &mut Self {
        debug_assert!(!self.is_game_over(), "round forfeited after game over");
        self.round += 1;
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game::MAX_ROUNDS;
    use crate::model::moves::Move;
    use crate::model::outcome::{MatchResult, Outcome};
    use crate::model::player::Side;

    #[test]
    fn new_state_starts_at_round_one() {
        let state = GameState::new();
        assert_eq!(state.round(), 1);
        assert_eq!(state.scores().standings(), &[0, 0]);
        assert!(!state.bomb_used(Side::Own));
        assert!(!state.bomb_used(Side::Opponent));
        assert!(state.history().is_empty());
        assert_eq!(state.result(), None);
    }

    #[test]
    fn apply_credits_winner_and_appends_record() {
        let mut state = GameState::new();
        state.apply(Move::Rock, Move::Scissors, Outcome::Own);

        assert_eq!(state.round(), 2);
        assert_eq!(state.score(Side::Own), 1);
        assert_eq!(state.score(Side::Opponent), 0);
        let record = state.history()[0];
        assert_eq!(record.round_number, 1);
        assert_eq!(record.winner, Outcome::Own);
    }

    #[test]
    fn draw_changes_no_score() {
        let mut state = GameState::new();
        state.apply(Move::Paper, Move::Paper, Outcome::Draw);
        assert_eq!(state.scores().standings(), &[0, 0]);
        assert_eq!(state.draws(), 1);
    }

    #[test]
    fn double_bomb_marks_both_sides() {
        let mut state = GameState::new();
        state.apply(Move::Bomb, Move::Bomb, Outcome::Draw);
        assert!(state.bomb_used(Side::Own));
        assert!(state.bomb_used(Side::Opponent));
    }

    #[test]
    fn bomb_flag_survives_later_rounds() {
        let mut state = GameState::new();
        state.apply(Move::Rock, Move::Bomb, Outcome::Opponent);
        state.apply(Move::Rock, Move::Paper, Outcome::Opponent);
        assert!(state.bomb_used(Side::Opponent));
        assert!(!state.bomb_used(Side::Own));
    }

    #[test]
    fn forfeit_advances_round_without_record() {
        let mut state = GameState::new();
        state.forfeit();
        assert_eq!(state.round(), 2);
        assert!(state.history().is_empty());
        assert_eq!(state.forfeits(), 1);
        assert_eq!(state.scores().standings(), &[0, 0]);
    }

    #[test]
    fn game_ends_after_max_rounds() {
        let mut state = GameState::new();
        for _ in 1..MAX_ROUNDS {
            state.apply(Move::Rock, Move::Paper, Outcome::Opponent);
            assert!(!state.is_game_over());
        }
        state.forfeit();
        assert!(state.is_game_over());
        assert_eq!(state.round(), MAX_ROUNDS + 1);
        assert_eq!(state.result(), Some(MatchResult::OpponentWins));
    }
}
