//! Jump-hunting heuristic.
//!
//! Looks for values exactly [`JUMP`] apart, in three stages:
//!
//! 1. A hand card one jump away from some pile's top. One such pair is
//!    picked at random and returned as is. The jump alone is taken as
//!    reason enough, so the move is not checked against the pile's
//!    ordering rule and may be illegal.
//! 2. Two hand cards one jump apart. For the first such pair, the lower
//!    indexed card is tried on piles 0 to 2 with each pile's own rule and
//!    one accepting pile is picked at random. Pile 3 is never tried here.
//! 3. Otherwise defer to [`RandomStrategy`].

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, Move, JUMP, PILE_COUNT};
use crate::zones::Hand;

use super::random::RandomStrategy;
use super::Strategy;

/// Piles probed for the first card of a jump pair.
const PAIR_PILES: usize = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct TrickStrategy;

impl TrickStrategy {
    /// Stage 1: `(pile, hand index)` pairs where the card is one jump from the top.
    pub fn jump_moves(state: &GameState, hand: &Hand) -> SmallVec<[Move; 8]> {
        let mut moves = SmallVec::new();
        for pile_index in 0..PILE_COUNT {
            let top = state.top_of(pile_index);
            for (hand_index, card) in hand.iter() {
                if card.is_jump_from(top) {
                    moves.push(Move::new(pile_index, hand_index));
                }
            }
        }
        moves
    }

    /// Stage 2: setups for a later jump, from the first pair of hand cards
    /// that are one jump apart.
    pub fn pair_moves(state: &GameState, hand: &Hand) -> SmallVec<[Move; 3]> {
        let cards = hand.cards();
        let first_pair = (0..cards.len())
            .flat_map(|i| (i + 1..cards.len()).map(move |j| (i, j)))
            .find(|&(i, j)| cards[i].distance(cards[j]) == JUMP);

        let mut moves = SmallVec::new();
        if let Some((i, _)) = first_pair {
            for pile_index in 0..PAIR_PILES {
                if state.is_legal(pile_index, cards[i]) {
                    moves.push(Move::new(pile_index, i));
                }
            }
        }
        moves
    }
}

impl Strategy for TrickStrategy {
    fn name(&self) -> &'static str {
        "trick"
    }

    fn decide(&self, state: &GameState, hand: &Hand, rng: &mut GameRng) -> Move {
        let jumps = Self::jump_moves(state, hand);
        if let Some(&mv) = rng.choose(&jumps) {
            return mv;
        }

        let setups = Self::pair_moves(state, hand);
        if let Some(&mv) = rng.choose(&setups) {
            return mv;
        }

        RandomStrategy.decide(state, hand, rng)
    }
}
