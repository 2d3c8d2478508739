//! Card values.
//!
//! Cards are plain integers from 1 to 100. The two extremes never enter the
//! draw pool: `1` seeds both ascending piles and `100` seeds both descending
//! piles. Everything in between (`2..=99`, 98 cards) is shuffled and dealt.

use serde::{Deserialize, Serialize};

/// Value difference that the trick heuristic treats as a "jump".
pub const JUMP: u8 = 10;

/// Number of cards in the shuffled draw pool.
pub const DRAW_POOL_SIZE: usize = 98;

/// A single card, identified only by its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    /// Seed value of both ascending piles.
    pub const ASCENDING_SEED: Card = Card(1);

    /// Seed value of both descending piles.
    pub const DESCENDING_SEED: Card = Card(100);

    /// Create a card with the given value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw card value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Absolute difference between two card values.
    #[must_use]
    pub const fn distance(self, other: Card) -> u8 {
        self.0.abs_diff(other.0)
    }

    /// Whether the two values are exactly one jump apart.
    #[must_use]
    pub const fn is_jump_from(self, other: Card) -> bool {
        self.distance(other) == JUMP
    }

    /// The draw pool in ascending order (`2..=99`).
    pub fn draw_pool() -> impl Iterator<Item = Card> {
        (2..=99u8).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
