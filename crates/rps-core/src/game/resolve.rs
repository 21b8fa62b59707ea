use crate::model::moves::Move;
use crate::model::outcome::Outcome;

/// Adjudicates one round. Total over every pair of moves.
///
/// Rules are checked in order: matching moves draw (which covers bomb against
/// bomb), a lone bomb wins outright, and everything else falls through to the
/// standard rock/paper/scissors cycle.
pub fn resolve(own_move: Move, opponent_move: Move) -> Outcome {
    if own_move == opponent_move {
        return Outcome::Draw;
    }

    match (own_move, opponent_move) {
        (Move::Bomb, _) => Outcome::Own,
        (_, Move::Bomb) => Outcome::Opponent,
        (own, opponent) if own.beats(opponent) => Outcome::Own,
        _ => Outcome::Opponent,
    }
}
