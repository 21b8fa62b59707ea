mod heuristic;
mod scripted;
mod uniform;

pub use heuristic::{CatchUpPolicy, choose_move};
pub use scripted::ScriptedPolicy;
pub use uniform::UniformPolicy;

use core::fmt;
use core::str::FromStr;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rps_core::game::match_state::GameState;
use rps_core::model::moves::Move;
use rps_core::model::player::Side;
use serde::{Deserialize, Deserializer};

/// Context provided to policies for decision-making
pub struct PolicyContext<'a> {
    pub side: Side,
    pub state: &'a GameState,
}

impl<'a> PolicyContext<'a> {
    pub fn new(side: Side, state: &'a GameState) -> Self {
        Self { side, state }
    }

    pub fn bomb_available(&self) -> bool {
        !self.state.bomb_used(self.side)
    }

    pub fn is_behind(&self) -> bool {
        self.state.scores().is_behind(self.side)
    }
}

/// Move selection for an automated side.
///
/// Implementations are trusted to respect the one-bomb rule for their own side;
/// the session never validates what a policy returns.
pub trait Policy: Send {
    fn choose_move(&mut self, ctx: &PolicyContext) -> Move;

    fn name(&self) -> &'static str;
}

/// Policies selectable from configuration.
///
/// `Unrestricted` keeps asking for the bomb after it is spent, so it only
/// makes sense for a side whose moves pass through the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    CatchUp,
    Uniform,
    Unrestricted,
}

impl PolicyKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PolicyKind::CatchUp => "catch_up",
            PolicyKind::Uniform => "uniform",
            PolicyKind::Unrestricted => "unrestricted",
        }
    }

    /// Whether every move this policy returns respects the one-bomb rule.
    pub const fn respects_bomb_limit(self) -> bool {
        !matches!(self, PolicyKind::Unrestricted)
    }

    /// Builds the policy with its own random source. `None` seeds from entropy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match self {
            PolicyKind::CatchUp => Box::new(CatchUpPolicy::new(rng)),
            PolicyKind::Uniform => Box::new(UniformPolicy::new(rng)),
            PolicyKind::Unrestricted => Box::new(UniformPolicy::unrestricted(rng)),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = PolicyKindError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "catch_up" | "catchup" | "default" => Ok(PolicyKind::CatchUp),
            "uniform" | "random" => Ok(PolicyKind::Uniform),
            "unrestricted" | "any" => Ok(PolicyKind::Unrestricted),
            other => Err(PolicyKindError(other.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyKindError(pub String);

impl fmt::Display for PolicyKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid policy: {}. Valid policies: catch_up, uniform, unrestricted",
            self.0
        )
    }
}

impl std::error::Error for PolicyKindError {}
