use super::heuristic::log_choice;
use super::{Policy, PolicyContext};
use rps_core::model::moves::Move;

/// Replays a fixed sequence of moves, wrapping around at the end.
///
/// Used to feed an exact opponent line into a session. The script is played
/// as written, so it may contain a second bomb.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedPolicy {
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        Self {
            moves: moves.into(),
            cursor: 0,
        }
    }

    pub fn played(&self) -> usize {
        self.cursor
    }
}

impl Policy for ScriptedPolicy {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move {
        let chosen = match self.moves.len() {
            0 => Move::Rock,
            len => self.moves[self.cursor % len],
        };
        self.cursor += 1;
        log_choice(ctx, self.name(), chosen, "scripted");
        chosen
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
