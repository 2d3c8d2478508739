//! Minimal distance heuristic.
//!
//! Compares the gap between the hand's lowest card and the lowest ascending
//! top against the gap between the hand's highest card and the highest
//! descending top, then plays whichever extreme is closer. There is no
//! legality check: once the hand drifts past the tops this strategy
//! proposes an illegal move, which is how its games usually end.

use crate::core::{GameRng, GameState, Move};
use crate::zones::Hand;

use super::Strategy;

#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalDistanceStrategy;

impl Strategy for MinimalDistanceStrategy {
    fn name(&self) -> &'static str {
        "minimal"
    }

    fn decide(&self, state: &GameState, hand: &Hand, _rng: &mut GameRng) -> Move {
        let (Some((low_index, low)), Some((high_index, high))) = (hand.lowest(), hand.highest())
        else {
            return Move::FALLBACK;
        };

        let min_ascending = state.top_of(0).min(state.top_of(1));
        let max_descending = state.top_of(2).max(state.top_of(3));

        // Ties go to the descending side.
        if min_ascending.distance(low) < max_descending.distance(high) {
            let pile = if state.top_of(0) == min_ascending { 0 } else { 1 };
            Move::new(pile, low_index)
        } else {
            let pile = if state.top_of(2) == max_descending { 2 } else { 3 };
            Move::new(pile, high_index)
        }
    }
}
