//! Play strategies.
//!
//! A strategy looks at the table and one hand and proposes a move. It never
//! mutates either, keeps no state between calls, and is not required to
//! propose a legal move: the game loop re-checks every move and ends the
//! game on the first illegal one.
//!
//! - `RandomStrategy`: uniform pick among legal moves
//! - `MinimalDistanceStrategy`: closest extreme card onto the tightest pile
//! - `TrickStrategy`: hunts for value differences of exactly 10
//!
//! `StrategyKind` selects one of the three by name and dispatches to it.

pub mod minimal;
pub mod random;
pub mod trick;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameState, Move, SimError};
use crate::zones::Hand;

pub use minimal::MinimalDistanceStrategy;
pub use random::{legal_moves, RandomStrategy};
pub use trick::TrickStrategy;

/// Decision function for a single turn.
pub trait Strategy: Send + Sync {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Propose a move for `hand` on the current table.
    ///
    /// Indices are resolved against `hand` exactly as passed. The returned
    /// move may be illegal.
    fn decide(&self, state: &GameState, hand: &Hand, rng: &mut GameRng) -> Move;
}

/// The built-in strategies, selectable by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Random,
    Minimal,
    Trick,
}

impl StrategyKind {
    /// All strategies, in report order.
    pub const ALL: [StrategyKind; 3] = [StrategyKind::Random, StrategyKind::Minimal, StrategyKind::Trick];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Minimal => "minimal",
            StrategyKind::Trick => "trick",
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SimError::UnknownStrategy(s.to_string()))
    }
}

impl Strategy for StrategyKind {
    fn name(&self) -> &'static str {
        self.as_str()
    }

    fn decide(&self, state: &GameState, hand: &Hand, rng: &mut GameRng) -> Move {
        match self {
            StrategyKind::Random => RandomStrategy.decide(state, hand, rng),
            StrategyKind::Minimal => MinimalDistanceStrategy.decide(state, hand, rng),
            StrategyKind::Trick => TrickStrategy.decide(state, hand, rng),
        }
    }
}
