use crate::game::match_state::GameState;
use crate::model::moves::Move;
use crate::model::player::Side;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{input}' is not a valid move")]
    InvalidMove { input: String },
    #[error("{side} bomb already used")]
    SpecialMoveExhausted { side: Side },
}

/// Checks a raw move for `side` against the legal move set and the one-bomb rule.
///
/// Does not mark the bomb as used; that only happens once the round has been
/// resolved and applied to the state.
pub fn validate(raw: &str, side: Side, state: &GameState) -> Result<Move, ValidationError> {
    let mv = raw
        .parse::<Move>()
        .map_err(|err| ValidationError::InvalidMove { input: err.0 })?;

    if mv.is_bomb() && state.bomb_used(side) {
        return Err(ValidationError::SpecialMoveExhausted { side });
    }

    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, validate};
    use crate::game::match_state::GameState;
    use crate::model::moves::Move;
    use crate::model::outcome::Outcome;
    use crate::model::player::Side;

    #[test]
    fn accepts_normalized_tokens() {
        let state = GameState::new();
        assert_eq!(validate(" Paper ", Side::Own, &state), Ok(Move::Paper));
        assert_eq!(validate("BOMB", Side::Own, &state), Ok(Move::Bomb));
    }

    #[test]
    fn rejects_unknown_tokens() {
        let state = GameState::new();
        assert_eq!(
            validate("lizard", Side::Own, &state),
            Err(ValidationError::InvalidMove {
                input: "lizard".to_string()
            })
        );
    }

    #[test]
    fn bomb_is_exhausted_per_side() {
        let mut state = GameState::new();
        state.apply(Move::Bomb, Move::Rock, Outcome::Own);

        assert_eq!(
            validate("bomb", Side::Own, &state),
            Err(ValidationError::SpecialMoveExhausted { side: Side::Own })
        );
        assert_eq!(validate("bomb", Side::Opponent, &state), Ok(Move::Bomb));
        assert_eq!(validate("rock", Side::Own, &state), Ok(Move::Rock));
    }

    #[test]
    fn validation_has_no_side_effects() {
        let state = GameState::new();
        let _ = validate("bomb", Side::Own, &state);
        assert!(!state.bomb_used(Side::Own));
        assert_eq!(state.round(), 1);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = ValidationError::SpecialMoveExhausted { side: Side::Own };
        assert_eq!(err.to_string(), "User bomb already used");
        let err = ValidationError::InvalidMove {
            input: "spock".to_string(),
        };
        assert_eq!(err.to_string(), "'spock' is not a valid move");
    }
}
