/// What the operator asked for with one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent<'a> {
    /// Show the move list. Does not consume the round.
    Help,
    /// Anything else is treated as a move attempt and goes to the validator.
    PlayMove(&'a str),
}

pub fn parse_intent(input: &str) -> Intent<'_> {
    let text = input.trim();
    if text.eq_ignore_ascii_case("help") || text.eq_ignore_ascii_case("rules") {
        return Intent::Help;
    }
    Intent::PlayMove(text)
}
