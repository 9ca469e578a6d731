//! Guess scoring.
//!
//! Compares a guessed station with the target attribute by attribute: name,
//! lines, position on line, structure type, external connections, and hop
//! distance with a direction hint.

mod result;
mod score;

pub use result::{Direction, GuessResult, MatchType};
pub use score::score;
