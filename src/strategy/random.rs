//! Uniform random play among legal moves.

use smallvec::SmallVec;

use crate::core::{GameRng, GameState, Move, PILE_COUNT};
use crate::zones::Hand;

use super::Strategy;

/// Every legal `(pile, hand index)` pair, piles outer, hand inner.
///
/// At most 4 piles x 8 cards, so the result stays inline.
pub fn legal_moves(state: &GameState, hand: &Hand) -> SmallVec<[Move; 32]> {
    let mut moves = SmallVec::new();
    for pile_index in 0..PILE_COUNT {
        for (hand_index, card) in hand.iter() {
            if state.is_legal(pile_index, card) {
                moves.push(Move::new(pile_index, hand_index));
            }
        }
    }
    moves
}

/// Picks any legal move uniformly at random.
///
/// With nothing legal it returns `Move::FALLBACK`, which ends the game
/// unless it happens to be legal.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn decide(&self, state: &GameState, hand: &Hand, rng: &mut GameRng) -> Move {
        let moves = legal_moves(state, hand);
        rng.choose(&moves).copied().unwrap_or(Move::FALLBACK)
    }
}
