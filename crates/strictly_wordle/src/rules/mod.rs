//! Game rules for the word-guessing round.
//!
//! This module contains pure functions for scoring guesses and deciding
//! when a round ends. Rules are separated from round storage so contracts
//! and invariants can reuse them.

pub mod evaluate;
pub mod termination;

pub use evaluate::evaluate;
pub use termination::{MAX_GUESSES, check_outcome};
