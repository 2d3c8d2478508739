//! Error types.
//!
//! Only configuration problems are errors. A strategy proposing an illegal
//! move is the normal way a game ends and is reported through
//! `EndReason`, not through `SimError`.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("invalid configuration: can't play a game with {player_count} players (expected 1..=7)")]
    InvalidConfiguration { player_count: usize },
    #[error("unknown strategy: {0} (expected one of random, minimal, trick)")]
    UnknownStrategy(String),
}
