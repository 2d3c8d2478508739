//! Move representation: which pile, which card.
//!
//! A move is a pair of indices. `pile_index` is `0..4` (two ascending piles
//! followed by two descending piles) and `hand_index` is a position in the
//! hand exactly as it was passed to the strategy.

use serde::{Deserialize, Serialize};

/// A proposed play.
///
/// ```
/// use thegame_sim::core::Move;
///
/// let mv = Move::new(2, 0);
/// assert_eq!(mv.pile_index, 2);
/// assert_eq!(Move::FALLBACK, Move::new(0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target pile (0, 1 ascending; 2, 3 descending).
    pub pile_index: usize,
    /// Position of the card in the player's hand.
    pub hand_index: usize,
}

impl Move {
    /// Returned when a strategy finds nothing to play.
    ///
    /// Legal only by coincidence, so it normally ends the game.
    pub const FALLBACK: Move = Move::new(0, 0);

    #[must_use]
    pub const fn new(pile_index: usize, hand_index: usize) -> Self {
        Self {
            pile_index,
            hand_index,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hand[{}] -> pile {}", self.hand_index, self.pile_index)
    }
}
