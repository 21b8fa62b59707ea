pub mod match_state;
pub mod resolve;
pub mod serialization;
pub mod validate;

/// Number of rounds in a session. The game ends once the round counter passes it.
pub const MAX_ROUNDS: u32 = 3;
