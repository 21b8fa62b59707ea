use std::io::{self, BufRead, Write};

use rps_bot::{Policy, PolicyContext};
use rps_core::game::match_state::GameState;
use rps_core::game::resolve::resolve;
use rps_core::game::validate::{ValidationError, validate};
use rps_core::model::player::Side;
use rps_core::model::round::RoundRecord;
use thiserror::Error;
use tracing::{Level, event};

use crate::intent::{Intent, parse_intent};
use crate::render;

/// What happened to one line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    Help,
    Resolved(RoundRecord),
    Forfeited { round: u32, error: ValidationError },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Runs one round from a raw own-side move.
///
/// Only the own side is validated. The opponent policy is consulted after
/// validation succeeds, so a forfeit consumes no randomness.
pub fn play_round(state: &mut GameState, raw: &str, opponent: &mut dyn Policy) -> RoundEvent {
    let round = state.round();
    let own_move = match validate(raw, Side::Own, state) {
        Ok(mv) => mv,
        Err(error) => {
            state.forfeit();
            event!(
                target: "rps_cli::round",
                Level::INFO,
                round,
                forfeited = true,
                reason = %error,
            );
            return RoundEvent::Forfeited { round, error };
        }
    };

    let opponent_move = opponent.choose_move(&PolicyContext::new(Side::Opponent, state));
    let outcome = resolve(own_move, opponent_move);
    state.apply(own_move, opponent_move, outcome);

    event!(
        target: "rps_cli::round",
        Level::INFO,
        round,
        own_move = %own_move,
        opponent_move = %opponent_move,
        outcome = ?outcome,
        own_score = state.score(Side::Own),
        opponent_score = state.score(Side::Opponent),
    );

    let record = state
        .history()
        .last()
        .copied()
        .unwrap_or_else(|| RoundRecord::new(round, own_move, opponent_move, outcome));
    RoundEvent::Resolved(record)
}

/// Interactive game between an operator on `input`/`output` and an automated opponent.
pub struct Session<R, W> {
    state: GameState,
    input: R,
    output: W,
    opponent: Box<dyn Policy>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, opponent: Box<dyn Policy>) -> Self {
        Self {
            state: GameState::new(),
            input,
            output,
            opponent,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Prompts for and handles one line. End of input counts as an empty line.
    pub fn step(&mut self) -> Result<RoundEvent, SessionError> {
        render::write_round_prompt(&mut self.output, self.state.round())?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
        }

        let event = match parse_intent(&line) {
            Intent::Help => {
                render::write_help(&mut self.output)?;
                RoundEvent::Help
            }
            Intent::PlayMove(raw) => {
                let event = play_round(&mut self.state, raw, self.opponent.as_mut());
                match &event {
                    RoundEvent::Resolved(record) => render::write_round(&mut self.output, record)?,
                    RoundEvent::Forfeited { error, .. } => {
                        render::write_forfeit(&mut self.output, error)?
                    }
                    RoundEvent::Help => {}
                }
                event
            }
        };
        Ok(event)
    }

    /// Plays the whole game and returns the final state.
    pub fn run(mut self) -> Result<GameState, SessionError> {
        render::write_banner(&mut self.output)?;
        while !self.state.is_game_over() {
            self.step()?;
        }
        render::write_summary(&mut self.output, &self.state)?;
        event!(
            target: "rps_cli::round",
            Level::INFO,
            game_over = true,
            result = ?self.state.scores().result(),
            forfeits = self.state.forfeits(),
        );
        Ok(self.state)
    }
}
