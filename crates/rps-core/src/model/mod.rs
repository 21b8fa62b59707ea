pub mod moves;
pub mod outcome;
pub mod player;
pub mod round;
pub mod score;
