//! Card locations off the table.
//!
//! ## Key Types
//!
//! - `Deck`: the shuffled draw pile, consumed from the top
//! - `Hand`: one player's cards, ordered as strategies see them

pub mod deck;
pub mod hand;

pub use deck::Deck;
pub use hand::Hand;
