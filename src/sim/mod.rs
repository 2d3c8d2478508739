//! Running games.
//!
//! - `game`: the single-game state machine and the `simulate` entry point
//! - `batch`: parallel Monte Carlo batches and their summaries

pub mod batch;
pub mod game;

pub use batch::{run_batch, summarize, BatchConfig, SummaryRow, TrialRecord};
pub use game::{simulate, EndReason, Game, GameOutcome, Phase};
