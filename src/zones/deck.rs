//! Draw pile.

use crate::core::card::Card;
use crate::core::rng::GameRng;

/// Undealt cards. Cards are drawn from the end of the backing `Vec`.
///
/// ```
/// use thegame_sim::core::Card;
/// use thegame_sim::zones::Deck;
///
/// let mut deck = Deck::from_draw_order([Card(50), Card(60)]);
/// assert_eq!(deck.draw(), Some(Card(50)));
/// assert_eq!(deck.draw(), Some(Card(60)));
/// assert_eq!(deck.draw(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The full `2..=99` pool, shuffled.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = Card::draw_pool().collect();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// A stacked deck that yields `cards` in the given order.
    #[must_use]
    pub fn from_draw_order(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    /// Take the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Remaining cards, bottom first (the last element is drawn next).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::DRAW_POOL_SIZE;

    #[test]
    fn test_shuffled_holds_whole_pool() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_eq!(deck.len(), DRAW_POOL_SIZE);

        let mut cards = deck.cards().to_vec();
        assert_ne!(cards, Card::draw_pool().collect::<Vec<_>>());
        cards.sort_unstable();
        assert_eq!(cards, Card::draw_pool().collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = Deck::shuffled(&mut GameRng::new(9));
        let b = Deck::shuffled(&mut GameRng::new(9));
        let c = Deck::shuffled(&mut GameRng::new(10));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_draw_until_empty() {
        let mut deck = Deck::from_draw_order([Card(7)]);
        assert!(!deck.is_empty());

        assert_eq!(deck.draw(), Some(Card(7)));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), None);
    }
}
