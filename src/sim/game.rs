//! The game loop.
//!
//! A game moves through three phases:
//!
//! - `Dealing`: piles seeded, pool shuffled, hands dealt round-robin
//! - `Playing`: rounds of turns in seat order
//! - `Ended`: terminal, the played-card count is final
//!
//! Each turn the player's strategy proposes a move, the card leaves the
//! hand, and the move is checked against the table. A legal card goes on
//! its pile and the hand draws a replacement while the deck lasts. An
//! illegal card ends the whole game on the spot: nobody else in that round
//! gets to act.
//!
//! The loop condition (deck non-empty, some hand non-empty) is only checked
//! between rounds, so when the deck runs dry mid-round the rest of that
//! round is still played without drawing.

use serde::{Deserialize, Serialize};

use crate::core::{
    Card, GameConfig, GameRng, GameState, Move, PlayerId, PlayerMap, SimError, MAX_PLAYERS,
    MIN_PLAYERS, PILE_COUNT,
};
use crate::strategy::Strategy;
use crate::zones::{Deck, Hand};

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Playing,
    Ended,
}

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The deck was empty at a round boundary.
    DeckExhausted,
    /// Every hand was empty at a round boundary.
    HandsEmpty,
    /// A strategy proposed a move its card could not legally make.
    ///
    /// `card` is the rejected card; it is out of the hand and on no pile.
    IllegalMove { player: PlayerId, mv: Move, card: Card },
}

/// Summary of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Cards successfully played, seeds excluded.
    pub cards_played: u32,
    /// Rounds started, including the one cut short by an illegal move.
    pub rounds: u32,
    pub reason: EndReason,
}

/// A single game: table, deck and hands.
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
    deck: Deck,
    hands: PlayerMap<Hand>,
    phase: Phase,
    cards_played: u32,
    rounds: u32,
    end_reason: Option<EndReason>,
}

impl Game {
    /// Seed the piles, shuffle the pool and deal.
    ///
    /// Cards are dealt one at a time to each player in seat order until
    /// every hand holds `config.hand_size()` cards.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut game = Self {
            state: GameState::new(),
            deck: Deck::shuffled(rng),
            hands: PlayerMap::with_default(config.player_count()),
            phase: Phase::Dealing,
            cards_played: 0,
            rounds: 0,
            end_reason: None,
        };

        for _ in 0..config.hand_size() {
            for player in PlayerId::all(config.player_count()) {
                if let Some(card) = game.deck.draw() {
                    game.hands[player].push(card);
                }
            }
        }

        log::debug!(
            "dealt {} cards to each of {} players, {} left in deck",
            config.hand_size(),
            config.player_count(),
            game.deck.len()
        );

        game.phase = Phase::Playing;
        game
    }

    /// Start a game from an arbitrary table, hands and deck.
    ///
    /// Used to replay fixed scenarios. The player count is validated; the
    /// cards themselves are taken as given.
    pub fn from_parts(state: GameState, hands: Vec<Hand>, deck: Deck) -> Result<Self, SimError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&hands.len()) {
            return Err(SimError::InvalidConfiguration {
                player_count: hands.len(),
            });
        }

        Ok(Self {
            state,
            deck,
            hands: PlayerMap::from_vec(hands),
            phase: Phase::Playing,
            cards_played: 0,
            rounds: 0,
            end_reason: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn hands(&self) -> &PlayerMap<Hand> {
        &self.hands
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn cards_played(&self) -> u32 {
        self.cards_played
    }

    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Why the game ended, once it has.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    /// Every card currently in the game outside the pile seeds.
    ///
    /// Hands, deck, played pile cards and a rejected card if there is one.
    /// Sorted, so it can be compared against the draw pool directly.
    #[must_use]
    pub fn card_census(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self
            .hands
            .values()
            .flat_map(|hand| hand.cards().iter().copied())
            .chain(self.deck.cards().iter().copied())
            .chain(
                self.state
                    .piles()
                    .flat_map(|(_, pile)| pile.played().iter().copied()),
            )
            .collect();
        if let Some(EndReason::IllegalMove { card, .. }) = self.end_reason {
            cards.push(card);
        }
        cards.sort_unstable();
        cards
    }

    /// Play rounds until the game ends.
    pub fn play<S: Strategy + ?Sized>(&mut self, strategy: &S, rng: &mut GameRng) -> GameOutcome {
        while self.phase == Phase::Playing {
            self.play_round(strategy, rng);
        }

        let outcome = self.outcome();
        log::debug!(
            "{} strategy: {} cards played over {} rounds ({:?})",
            strategy.name(),
            outcome.cards_played,
            outcome.rounds,
            outcome.reason
        );
        outcome
    }

    /// Check the loop condition and, if it holds, play one round.
    ///
    /// Returns the phase afterwards.
    pub fn play_round<S: Strategy + ?Sized>(&mut self, strategy: &S, rng: &mut GameRng) -> Phase {
        if self.phase != Phase::Playing {
            return self.phase;
        }
        if self.deck.is_empty() {
            self.finish(EndReason::DeckExhausted);
            return self.phase;
        }
        if self.hands.values().all(Hand::is_empty) {
            self.finish(EndReason::HandsEmpty);
            return self.phase;
        }

        self.rounds += 1;
        for player in PlayerId::all(self.hands.player_count()) {
            if self.hands[player].is_empty() {
                continue;
            }
            if let Err(reason) = self.take_turn(player, strategy, rng) {
                self.finish(reason);
                break;
            }
        }
        self.phase
    }

    fn take_turn<S: Strategy + ?Sized>(
        &mut self,
        player: PlayerId,
        strategy: &S,
        rng: &mut GameRng,
    ) -> Result<(), EndReason> {
        let hand = &mut self.hands[player];
        let mv = strategy.decide(&self.state, hand, rng);

        assert!(
            mv.pile_index < PILE_COUNT,
            "{} strategy returned pile index {} (expected < {PILE_COUNT})",
            strategy.name(),
            mv.pile_index
        );
        assert!(
            mv.hand_index < hand.len(),
            "{} strategy returned hand index {} for a hand of {} cards",
            strategy.name(),
            mv.hand_index,
            hand.len()
        );

        let card = hand.remove(mv.hand_index);
        if !self.state.is_legal(mv.pile_index, card) {
            log::debug!(
                "{player} played {card} on pile {} showing {}: illegal, game over",
                mv.pile_index,
                self.state.top_of(mv.pile_index)
            );
            return Err(EndReason::IllegalMove { player, mv, card });
        }

        log::trace!("{player} plays {card} on pile {}", mv.pile_index);
        self.state.apply(mv.pile_index, card);
        self.cards_played += 1;

        if let Some(replacement) = self.deck.draw() {
            hand.push(replacement);
        }
        Ok(())
    }

    fn finish(&mut self, reason: EndReason) {
        self.phase = Phase::Ended;
        self.end_reason = Some(reason);
    }

    fn outcome(&self) -> GameOutcome {
        GameOutcome {
            cards_played: self.cards_played,
            rounds: self.rounds,
            reason: self.end_reason.unwrap_or(EndReason::DeckExhausted),
        }
    }
}

/// Deal and play one game, returning how many cards were played.
///
/// Fails with `InvalidConfiguration` before touching `rng` when
/// `player_count` is outside `1..=7`.
///
/// ```
/// use thegame_sim::core::GameRng;
/// use thegame_sim::sim::simulate;
/// use thegame_sim::strategy::StrategyKind;
///
/// let mut rng = GameRng::new(42);
/// let played = simulate(3, &StrategyKind::Random, &mut rng).unwrap();
/// assert!(played <= 98);
///
/// assert!(simulate(8, &StrategyKind::Random, &mut rng).is_err());
/// ```
pub fn simulate<S: Strategy + ?Sized>(
    player_count: usize,
    strategy: &S,
    rng: &mut GameRng,
) -> Result<u32, SimError> {
    let config = GameConfig::new(player_count)?;
    let mut game = Game::deal(&config, rng);
    Ok(game.play(strategy, rng).cards_played)
}
