use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rps_bot::{PolicyContext, PolicyKind};
use rps_core::game::match_state::GameState;
use rps_core::game::serialization::GameTranscript;
use rps_core::model::outcome::MatchResult;
use rps_core::model::player::Side;
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::RefereeConfig;
use crate::session::play_round;

/// Plays complete games back to back with an automated own side.
pub struct SimulationRunner {
    games: usize,
    seed: u64,
    own_policy: PolicyKind,
    opponent: PolicyKind,
    jsonl: Option<PathBuf>,
}

/// Totals returned after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationSummary {
    pub games: usize,
    pub own_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub forfeits: usize,
    pub rounds_resolved: usize,
    pub jsonl_path: Option<PathBuf>,
}

impl SimulationSummary {
    fn record(&mut self, state: &GameState) {
        self.games += 1;
        match state.scores().result() {
            MatchResult::OwnWins => self.own_wins += 1,
            MatchResult::OpponentWins => self.opponent_wins += 1,
            MatchResult::Draw => self.draws += 1,
        }
        self.forfeits += state.forfeits();
        self.rounds_resolved += state.history().len();
    }
}

#[derive(Serialize)]
struct GameRow<'a> {
    game_index: usize,
    seed: u64,
    own_policy: &'a str,
    opponent_policy: &'a str,
    #[serde(flatten)]
    transcript: GameTranscript,
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize game row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

impl SimulationRunner {
    pub fn new(config: &RefereeConfig) -> Self {
        Self {
            games: config.simulation.games,
            seed: config.seed.unwrap_or(0),
            own_policy: config.simulation.own_policy,
            opponent: config.opponent,
            jsonl: config.simulation.jsonl_path(),
        }
    }

    pub fn run(&self) -> Result<SimulationSummary, SimulationError> {
        let mut writer = match self.jsonl.as_deref() {
            Some(path) => Some(open_writer(path)?),
            None => None,
        };

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut summary = SimulationSummary {
            jsonl_path: self.jsonl.clone(),
            ..SimulationSummary::default()
        };

        for game_index in 0..self.games {
            let base_seed = rng.next_u64();
            let state = self.play_game(base_seed);
            summary.record(&state);

            event!(
                target: "rps_cli::simulate",
                Level::INFO,
                game_index,
                seed = base_seed,
                own_score = state.score(Side::Own),
                opponent_score = state.score(Side::Opponent),
                forfeits = state.forfeits(),
                result = ?state.scores().result(),
            );

            if let Some(writer) = writer.as_mut() {
                let row = GameRow {
                    game_index,
                    seed: base_seed,
                    own_policy: self.own_policy.as_str(),
                    opponent_policy: self.opponent.as_str(),
                    transcript: GameTranscript::capture(&state),
                };
                serde_json::to_writer(&mut *writer, &row)?;
                writer.write_all(b"\n")?;
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }

        Ok(summary)
    }

    /// One full game. Both policies derive their random source from `base_seed`.
    fn play_game(&self, base_seed: u64) -> GameState {
        let mut own = self.own_policy.build(Some(base_seed));
        let mut opponent = self.opponent.build(Some(base_seed.rotate_left(32)));
        let mut state = GameState::new();

        while !state.is_game_over() {
            let own_move = own.choose_move(&PolicyContext::new(Side::Own, &state));
            play_round(&mut state, own_move.as_str(), opponent.as_mut());
        }
        state
    }
}

fn open_writer(path: &Path) -> Result<BufWriter<File>, SimulationError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}
