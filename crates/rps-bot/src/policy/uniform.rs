use super::heuristic::log_choice;
use super::{Policy, PolicyContext};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::model::moves::Move;

/// Picks uniformly among every move still legal for its side, bomb included.
///
/// The unrestricted variant draws from all four moves every round, spent bomb
/// or not, and relies on the validator to forfeit the repeat.
pub struct UniformPolicy<R = StdRng> {
    rng: R,
    respect_bomb_limit: bool,
}

impl<R: Rng + Send> UniformPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            respect_bomb_limit: true,
        }
    }

    pub fn unrestricted(rng: R) -> Self {
        Self {
            rng,
            respect_bomb_limit: false,
        }
    }
}

impl UniformPolicy<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> Policy for UniformPolicy<R> {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move {
        let pool: &[Move] = if ctx.bomb_available() || !self.respect_bomb_limit {
            &Move::ALL
        } else {
            &Move::STANDARD
        };
        let chosen = pool[self.rng.gen_range(0..pool.len())];
        log_choice(ctx, self.name(), chosen, "uniform");
        chosen
    }

    fn name(&self) -> &'static str {
        if self.respect_bomb_limit {
            "uniform"
        } else {
            "unrestricted"
        }
    }
}
