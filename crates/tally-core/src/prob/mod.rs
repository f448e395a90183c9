//! Hypergeometric probability estimation over the remaining deck.
//!
//! This module is composed of:
//! - `combinatorics`: exact binomial coefficients and the at-least-one
//!   draw probability.
//! - `engine`: per-player ranking of card types by probability and
//!   expected count.

mod combinatorics;
mod engine;

pub use combinatorics::{combination, probability_at_least_one};
pub use engine::{CardProbability, rank_for_player};
