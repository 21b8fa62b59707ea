use std::io::Cursor;

use rps_bot::{CatchUpPolicy, Policy, ScriptedPolicy};
use rps_cli::session::{RoundEvent, Session};
use rps_core::game::match_state::GameState;
use rps_core::game::validate::ValidationError;
use rps_core::model::moves::Move;
use rps_core::model::outcome::{MatchResult, Outcome};
use rps_core::model::player::Side;

fn run(input: &str, opponent: Box<dyn Policy>) -> (GameState, String) {
    let mut output = Vec::new();
    let state = Session::new(Cursor::new(input.to_string()), &mut output, opponent)
        .run()
        .expect("session completes");
    (state, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn scripted_game_ends_with_user_win() {
    let opponent = ScriptedPolicy::new([Move::Scissors, Move::Rock, Move::Paper]);
    let (state, output) = run("rock\nbomb\npaper\n", Box::new(opponent));

    let winners: Vec<Outcome> = state.history().iter().map(|r| r.winner).collect();
    assert_eq!(winners, vec![Outcome::Own, Outcome::Own, Outcome::Draw]);
    assert_eq!(state.result(), Some(MatchResult::OwnWins));
    assert!(output.contains("Round winner: USER"));
    assert!(output.contains("Round result: DRAW"));
    assert!(output.contains("Final Score -> User: 2 | Bot: 0"));
    assert!(output.ends_with("RESULT: USER WINS\n"));
}

#[test]
fn invalid_first_move_is_forfeited() {
    let mut output = Vec::new();
    let opponent = Box::new(ScriptedPolicy::new([Move::Rock]));
    let mut session = Session::new(Cursor::new("lizard\n"), &mut output, opponent);

    let event = session.step().expect("step");
    assert!(matches!(
        event,
        RoundEvent::Forfeited {
            round: 1,
            error: ValidationError::InvalidMove { .. }
        }
    ));
    assert_eq!(session.state().round(), 2);
    assert!(session.state().history().is_empty());
    assert_eq!(session.state().scores().standings(), &[0, 0]);
}

#[test]
fn second_bomb_is_forfeited_in_round_three() {
    let opponent = ScriptedPolicy::new([Move::Rock, Move::Paper, Move::Scissors]);
    let (state, output) = run("bomb\nrock\nbomb\n", Box::new(opponent));

    assert_eq!(state.history().len(), 2);
    assert_eq!(state.forfeits(), 1);
    assert!(state.bomb_used(Side::Own));
    assert!(output.contains("User bomb already used"));
    assert!(output.contains("This round is counted as a loss."));
    assert!(output.contains("RESULT: DRAW"));
}

#[test]
fn help_reprompts_the_same_round() {
    let opponent = ScriptedPolicy::new([Move::Rock]);
    let (state, output) = run("help\nrock\nRULES\nrock\nrock\n", Box::new(opponent));

    assert_eq!(state.history().len(), 3);
    assert_eq!(state.forfeits(), 0);
    assert_eq!(output.matches("--- Round 1 ---").count(), 2);
    assert_eq!(output.matches("--- Round 2 ---").count(), 2);
    assert_eq!(output.matches("Valid moves:").count(), 2);
}

#[test]
fn catch_up_opponent_bombs_after_falling_behind() {
    // Any own win in round 1 leaves the bot behind with its bomb unused.
    for seed in 0..20 {
        let (state, _) = run("bomb\nrock\nrock\n", Box::new(CatchUpPolicy::seeded(seed)));
        let round_two = state.history()[1];
        assert_eq!(round_two.opponent_move, Move::Bomb, "seed {seed}");
        assert!(state.bomb_used(Side::Opponent));
    }
}
