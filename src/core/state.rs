//! Table state: the four piles.
//!
//! ## Piles
//!
//! Piles are append-only. Each is seeded with one card and tagged with a
//! kind that decides which cards it accepts:
//! - `Ascending` (seed 1): next card must be strictly greater than the top
//! - `Descending` (seed 100): next card must be strictly less than the top
//!
//! ## GameState
//!
//! Two ascending and two descending piles, addressed by index:
//!
//! | index | kind       | seed |
//! |-------|------------|------|
//! | 0, 1  | Ascending  | 1    |
//! | 2, 3  | Descending | 100  |
//!
//! Strategies only ever see `&GameState`; the game loop is the sole writer.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Number of piles on the table.
pub const PILE_COUNT: usize = 4;

/// Ordering rule of a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Ascending,
    Descending,
}

impl PileKind {
    /// Kind of the pile at `index`.
    ///
    /// Panics if `index` is not a pile index.
    #[must_use]
    pub fn of_index(index: usize) -> Self {
        match index {
            0 | 1 => PileKind::Ascending,
            2 | 3 => PileKind::Descending,
            _ => panic!("pile index {index} out of range (0..{PILE_COUNT})"),
        }
    }

    /// Seed card for piles of this kind.
    #[must_use]
    pub const fn seed(self) -> Card {
        match self {
            PileKind::Ascending => Card::ASCENDING_SEED,
            PileKind::Descending => Card::DESCENDING_SEED,
        }
    }

    /// Whether `card` may be placed on a pile of this kind showing `top`.
    #[must_use]
    pub fn accepts(self, top: Card, card: Card) -> bool {
        match self {
            PileKind::Ascending => card > top,
            PileKind::Descending => card < top,
        }
    }
}

/// A single append-only pile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Create a pile holding only its seed card.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: vec![kind.seed()],
        }
    }

    #[must_use]
    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// Current top card.
    #[must_use]
    pub fn top(&self) -> Card {
        // Never empty: the seed is pushed on construction.
        self.cards[self.cards.len() - 1]
    }

    /// Whether `card` may be placed on this pile.
    #[must_use]
    pub fn accepts(&self, card: Card) -> bool {
        self.kind.accepts(self.top(), card)
    }

    /// All cards, seed first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Cards played onto this pile (everything after the seed).
    #[must_use]
    pub fn played(&self) -> &[Card] {
        &self.cards[1..]
    }

    fn push(&mut self, card: Card) {
        assert!(
            self.accepts(card),
            "illegal card {card} on {:?} pile with top {}",
            self.kind,
            self.top()
        );
        self.cards.push(card);
    }
}

/// The four piles on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    ascending: [Pile; 2],
    descending: [Pile; 2],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the seeded table `[1, 1, 100, 100]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ascending: [Pile::new(PileKind::Ascending), Pile::new(PileKind::Ascending)],
            descending: [Pile::new(PileKind::Descending), Pile::new(PileKind::Descending)],
        }
    }

    /// Create a table whose piles show the given tops.
    ///
    /// Each top that differs from its seed is played on top of the seed, so
    /// every top must be legal for its pile.
    ///
    /// ```
    /// use thegame_sim::core::{Card, GameState};
    ///
    /// let state = GameState::with_tops([Card(40), Card(1), Card(60), Card(100)]);
    /// assert_eq!(state.top_of(0), Card(40));
    /// assert_eq!(state.pile(0).cards(), &[Card(1), Card(40)]);
    /// assert_eq!(state.played_count(), 2);
    /// ```
    #[must_use]
    pub fn with_tops(tops: [Card; PILE_COUNT]) -> Self {
        let mut state = Self::new();
        for (index, top) in tops.into_iter().enumerate() {
            if top != state.top_of(index) {
                state.apply(index, top);
            }
        }
        state
    }

    /// Get a pile by index.
    ///
    /// Panics if `index >= 4`.
    #[must_use]
    pub fn pile(&self, index: usize) -> &Pile {
        match index {
            0 | 1 => &self.ascending[index],
            2 | 3 => &self.descending[index - 2],
            _ => panic!("pile index {index} out of range (0..{PILE_COUNT})"),
        }
    }

    fn pile_mut(&mut self, index: usize) -> &mut Pile {
        match index {
            0 | 1 => &mut self.ascending[index],
            2 | 3 => &mut self.descending[index - 2],
            _ => panic!("pile index {index} out of range (0..{PILE_COUNT})"),
        }
    }

    /// Iterate over `(index, pile)` in index order.
    pub fn piles(&self) -> impl Iterator<Item = (usize, &Pile)> {
        self.ascending.iter().chain(self.descending.iter()).enumerate()
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top_of(&self, index: usize) -> Card {
        self.pile(index).top()
    }

    /// Check whether `card` may be played on pile `index`.
    ///
    /// Pure: repeated calls against an unchanged state agree.
    #[must_use]
    pub fn is_legal(&self, index: usize, card: Card) -> bool {
        self.pile(index).accepts(card)
    }

    /// Play `card` on pile `index`.
    ///
    /// The caller must have checked `is_legal` first; an illegal card panics.
    pub fn apply(&mut self, index: usize, card: Card) {
        self.pile_mut(index).push(card);
    }

    /// Total cards played onto the table, seeds excluded.
    #[must_use]
    pub fn played_count(&self) -> usize {
        self.piles().map(|(_, pile)| pile.played().len()).sum()
    }

    /// Tops of all four piles in index order.
    #[must_use]
    pub fn tops(&self) -> [Card; PILE_COUNT] {
        [self.top_of(0), self.top_of(1), self.top_of(2), self.top_of(3)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_seeded() {
        let state = GameState::new();

        assert_eq!(state.tops(), [Card(1), Card(1), Card(100), Card(100)]);
        assert_eq!(state.played_count(), 0);
        assert_eq!(state.pile(1).kind(), PileKind::Ascending);
        assert_eq!(state.pile(3).kind(), PileKind::Descending);
    }

    #[test]
    fn test_ascending_legality() {
        let state = GameState::with_tops([Card(40), Card(1), Card(100), Card(100)]);

        assert!(state.is_legal(0, Card(41)));
        assert!(!state.is_legal(0, Card(40)));
        assert!(!state.is_legal(0, Card(39)));
    }

    #[test]
    fn test_descending_legality() {
        let state = GameState::with_tops([Card(1), Card(1), Card(100), Card(60)]);

        assert!(state.is_legal(3, Card(59)));
        assert!(!state.is_legal(3, Card(60)));
        assert!(!state.is_legal(3, Card(61)));
        assert!(state.is_legal(2, Card(99)));
    }

    #[test]
    fn test_is_legal_has_no_side_effects() {
        let state = GameState::with_tops([Card(20), Card(30), Card(80), Card(70)]);
        let before = state.clone();

        for _ in 0..3 {
            assert!(state.is_legal(1, Card(31)));
            assert!(!state.is_legal(2, Card(81)));
        }
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_appends() {
        let mut state = GameState::new();
        state.apply(0, Card(5));
        state.apply(0, Card(9));
        state.apply(2, Card(90));

        assert_eq!(state.pile(0).cards(), &[Card(1), Card(5), Card(9)]);
        assert_eq!(state.pile(0).played(), &[Card(5), Card(9)]);
        assert_eq!(state.top_of(2), Card(90));
        assert_eq!(state.played_count(), 3);
    }

    #[test]
    #[should_panic(expected = "illegal card")]
    fn test_apply_illegal_panics() {
        let mut state = GameState::with_tops([Card(50), Card(1), Card(100), Card(100)]);
        state.apply(0, Card(49));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_pile_index_out_of_range() {
        let state = GameState::new();
        let _ = state.top_of(4);
    }

    #[test]
    fn test_kind_of_index() {
        assert_eq!(PileKind::of_index(0), PileKind::Ascending);
        assert_eq!(PileKind::of_index(2), PileKind::Descending);
        assert_eq!(PileKind::Descending.seed(), Card(100));
    }
}
