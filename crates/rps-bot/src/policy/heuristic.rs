use super::{Policy, PolicyContext};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::game::match_state::GameState;
use rps_core::model::moves::Move;
use rps_core::model::player::Side;
use tracing::{Level, event};

/// The referee's opponent: bombs when trailing with the bomb still in hand,
/// otherwise picks uniformly among rock, paper and scissors.
pub struct CatchUpPolicy<R = StdRng> {
    rng: R,
}

impl<R: Rng + Send> CatchUpPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl CatchUpPolicy<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Policy for CatchUpPolicy<R> {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move {
        let (chosen, reason) = select(ctx, &mut self.rng);
        log_choice(ctx, self.name(), chosen, reason);
        chosen
    }

    fn name(&self) -> &'static str {
        "catch_up"
    }
}

/// Opponent move for `state`, drawing from `rng` only when the bomb override does not fire.
pub fn choose_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Move {
    select(&PolicyContext::new(Side::Opponent, state), rng).0
}

fn select<R: Rng + ?Sized>(ctx: &PolicyContext, rng: &mut R) -> (Move, &'static str) {
    if ctx.bomb_available() && ctx.is_behind() {
        return (Move::Bomb, "catch_up_bomb");
    }
    let index = rng.gen_range(0..Move::STANDARD.len());
    (Move::STANDARD[index], "uniform")
}

pub(super) fn log_choice(ctx: &PolicyContext, policy: &str, chosen: Move, reason: &str) {
    if !tracing::enabled!(target: "rps_bot::choice", Level::DEBUG) {
        return;
    }

    event!(
        target: "rps_bot::choice",
        Level::DEBUG,
        side = ?ctx.side,
        policy,
        round = ctx.state.round(),
        own_score = ctx.state.score(Side::Own),
        opponent_score = ctx.state.score(Side::Opponent),
        bomb_available = ctx.bomb_available(),
        chosen = %chosen,
        reason,
    );
}
