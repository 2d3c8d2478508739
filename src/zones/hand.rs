//! A player's hand.
//!
//! Hands are small (at most 8 cards), so they live inline in a `SmallVec`.
//! Order is kept stable across removals: a strategy's `hand_index` always
//! refers to the order the strategy was shown.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::Card;

/// Cards held by one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; 8]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand holding `cards` in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over `(index, card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Card)> + '_ {
        self.cards.iter().copied().enumerate()
    }

    /// Take the card at `index` out of the hand.
    ///
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Card {
        assert!(
            index < self.cards.len(),
            "hand index {index} out of range (hand holds {} cards)",
            self.cards.len()
        );
        self.cards.remove(index)
    }

    /// Add a card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Lowest card and the index of its first occurrence.
    #[must_use]
    pub fn lowest(&self) -> Option<(usize, Card)> {
        self.iter()
            .fold(None, |best, (i, card)| match best {
                Some((_, low)) if low <= card => best,
                _ => Some((i, card)),
            })
    }

    /// Highest card and the index of its first occurrence.
    #[must_use]
    pub fn highest(&self) -> Option<(usize, Card)> {
        self.iter()
            .fold(None, |best, (i, card)| match best {
                Some((_, high)) if high >= card => best,
                _ => Some((i, card)),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(values: &[u8]) -> Hand {
        Hand::from_cards(values.iter().copied().map(Card))
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut h = hand(&[10, 20, 30, 40]);

        assert_eq!(h.remove(1), Card(20));
        assert_eq!(h.cards(), &[Card(10), Card(30), Card(40)]);

        h.push(Card(5));
        assert_eq!(h.cards(), &[Card(10), Card(30), Card(40), Card(5)]);
    }

    #[test]
    #[should_panic(expected = "hand index 3 out of range")]
    fn test_remove_out_of_range_panics() {
        let mut h = hand(&[10, 20, 30]);
        h.remove(3);
    }

    #[test]
    fn test_lowest_and_highest() {
        let h = hand(&[42, 7, 99, 7, 99]);

        assert_eq!(h.lowest(), Some((1, Card(7))));
        assert_eq!(h.highest(), Some((2, Card(99))));
        assert_eq!(Hand::new().lowest(), None);
        assert_eq!(Hand::new().highest(), None);
    }

    #[test]
    fn test_get() {
        let h = hand(&[3, 4]);
        assert_eq!(h.get(1), Some(Card(4)));
        assert_eq!(h.get(2), None);
        assert_eq!(h.len(), 2);
    }
}
