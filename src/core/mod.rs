//! Core engine types: cards, players, table state, moves, RNG, configuration.
//!
//! Everything here is independent of any particular strategy or of how
//! games are driven.

pub mod card;
pub mod config;
pub mod error;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use card::{Card, DRAW_POOL_SIZE, JUMP};
pub use config::{hand_size_for, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::SimError;
pub use moves::Move;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Pile, PileKind, PILE_COUNT};
