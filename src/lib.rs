//! # thegame-sim
//!
//! Monte Carlo simulator for a cooperative shedding card game played on
//! four piles, used to compare play strategies by how many cards they get
//! onto the table.
//!
//! ## Rules in Brief
//!
//! - Two ascending piles start at 1, two descending piles start at 100.
//! - Cards 2 to 99 are shuffled and dealt (8, 7 or 6 per hand for 1, 2 or
//!   3+ players).
//! - On a turn a player plays one card, strictly above an ascending top or
//!   strictly below a descending top, then draws a replacement.
//! - The first illegal play ends the game. So does running out of cards.
//!
//! ## Design Principles
//!
//! 1. **Strategies Are Advisory**: A strategy only proposes a move. The
//!    game loop re-checks legality before touching the table.
//!
//! 2. **Explicit Randomness**: Every random choice goes through a seeded
//!    `GameRng` passed in by the caller. Same seed, same game.
//!
//! 3. **Independent Games**: A game owns its table, deck and hands. Batches
//!    run games in parallel with nothing shared between them.
//!
//! ## Modules
//!
//! - `core`: Cards, piles, table state, moves, players, RNG, configuration
//! - `zones`: Deck and hands
//! - `strategy`: The `Strategy` trait and the three built-in heuristics
//! - `sim`: Game state machine, `simulate`, and parallel batches

pub mod core;
pub mod sim;
pub mod strategy;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, GameConfig, GameRng, GameRngState, GameState, Move, Pile, PileKind, PlayerId,
    PlayerMap, SimError,
};

pub use crate::zones::{Deck, Hand};

pub use crate::strategy::{
    MinimalDistanceStrategy, RandomStrategy, Strategy, StrategyKind, TrickStrategy,
};

pub use crate::sim::{
    run_batch, simulate, summarize, BatchConfig, EndReason, Game, GameOutcome, Phase, SummaryRow,
    TrialRecord,
};
