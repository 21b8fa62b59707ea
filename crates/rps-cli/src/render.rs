//! Text shown to the operator. Every writer returns `io::Result` so the
//! session can surface a closed terminal instead of panicking.

use std::io::{self, Write};

use rps_core::game::MAX_ROUNDS;
use rps_core::game::match_state::GameState;
use rps_core::game::validate::ValidationError;
use rps_core::model::moves::Move;
use rps_core::model::player::Side;
use rps_core::model::round::RoundRecord;

const TITLE: &str = "Rock Paper Scissors Plus";

pub fn write_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "rps-referee {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out)?;
    writeln!(out, "{TITLE}")?;
    writeln!(out, "Rules:")?;
    writeln!(out, "- Best of {MAX_ROUNDS} rounds")?;
    writeln!(out, "- Moves: {}", move_list())?;
    writeln!(out, "- Bomb can be used once per player")?;
    writeln!(out, "- Invalid input wastes the round")
}

pub fn write_round_prompt(out: &mut impl Write, round: u32) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Round {round} ---")?;
    write!(out, "Your move: ")?;
    out.flush()
}

pub fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Valid moves: {}", move_list())
}

pub fn write_forfeit(out: &mut impl Write, error: &ValidationError) -> io::Result<()> {
    writeln!(out, "Invalid input ({error}). This round is counted as a loss.")
}

pub fn write_round(out: &mut impl Write, record: &RoundRecord) -> io::Result<()> {
    writeln!(out, "{} move: {}", Side::Own, record.own_move)?;
    writeln!(out, "{} move: {}", Side::Opponent, record.opponent_move)?;
    if record.winner.is_draw() {
        writeln!(out, "Round result: DRAW")
    } else {
        writeln!(out, "Round winner: {}", record.winner)
    }
}

pub fn write_summary(out: &mut impl Write, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "GAME OVER")?;
    writeln!(
        out,
        "Final Score -> {}: {} | {}: {}",
        Side::Own,
        state.score(Side::Own),
        Side::Opponent,
        state.score(Side::Opponent)
    )?;
    let result = state.scores().result();
    writeln!(out, "RESULT: {result}")?;
    out.flush()
}

fn move_list() -> String {
    Move::ALL
        .iter()
        .map(|mv| mv.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
