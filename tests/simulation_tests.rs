//! Full randomized games with the built-in strategies.

use proptest::prelude::*;

use thegame_sim::core::{Card, GameConfig, GameRng, GameState, PileKind, SimError, DRAW_POOL_SIZE};
use thegame_sim::sim::{simulate, EndReason, Game, Phase};
use thegame_sim::strategy::{Strategy, StrategyKind};

fn assert_piles_monotone(state: &GameState) {
    for (index, pile) in state.piles() {
        for pair in pile.cards().windows(2) {
            match pile.kind() {
                PileKind::Ascending => assert!(pair[0] < pair[1], "pile {index} not ascending: {:?}", pile.cards()),
                PileKind::Descending => assert!(pair[0] > pair[1], "pile {index} not descending: {:?}", pile.cards()),
            }
        }
    }
}

fn pool() -> Vec<Card> {
    Card::draw_pool().collect()
}

// =============================================================================
// Entry Point
// =============================================================================

#[test]
fn test_simulate_every_player_count_and_strategy() {
    for players in 1..=7 {
        for kind in StrategyKind::ALL {
            for seed in 0..5 {
                let played = simulate(players, &kind, &mut GameRng::new(seed)).unwrap();
                assert!(played as usize <= DRAW_POOL_SIZE, "{players} players, {kind}: {played}");
            }
        }
    }
}

#[test]
fn test_simulate_rejects_invalid_player_counts() {
    for players in [0, 8, 9, 100] {
        let result = simulate(players, &StrategyKind::Trick, &mut GameRng::new(1));
        assert_eq!(result, Err(SimError::InvalidConfiguration { player_count: players }));
    }
}

#[test]
fn test_simulate_accepts_trait_objects() {
    let strategies: Vec<Box<dyn Strategy>> = StrategyKind::ALL
        .into_iter()
        .map(|kind| Box::new(kind) as Box<dyn Strategy>)
        .collect();

    for strategy in &strategies {
        let played = simulate(2, strategy.as_ref(), &mut GameRng::new(11)).unwrap();
        assert!(played as usize <= DRAW_POOL_SIZE);
    }
}

#[test]
fn test_same_seed_same_game() {
    let config = GameConfig::new(4).unwrap();
    for kind in StrategyKind::ALL {
        let mut a = Game::deal(&config, &mut GameRng::new(2024));
        let mut b = Game::deal(&config, &mut GameRng::new(2024));

        let out_a = a.play(&kind, &mut GameRng::new(5));
        let out_b = b.play(&kind, &mut GameRng::new(5));

        assert_eq!(out_a, out_b);
        assert_eq!(a.state(), b.state());
    }
}

// =============================================================================
// Outcome Consistency
// =============================================================================

#[test]
fn test_outcome_matches_table() {
    for players in 1..=7 {
        for kind in StrategyKind::ALL {
            let config = GameConfig::new(players).unwrap();
            let mut rng = GameRng::new(players as u64 * 31);
            let mut game = Game::deal(&config, &mut rng);

            let outcome = game.play(&kind, &mut rng);

            assert_eq!(game.phase(), Phase::Ended);
            assert_eq!(outcome.cards_played as usize, game.state().played_count());
            assert_eq!(game.card_census(), pool());
            match outcome.reason {
                EndReason::DeckExhausted => assert!(game.deck().is_empty()),
                EndReason::HandsEmpty => panic!("dealt hands cannot all empty while the deck lasts"),
                EndReason::IllegalMove { mv, card, .. } => {
                    assert!(!game.state().is_legal(mv.pile_index, card));
                }
            }
        }
    }
}

#[test]
fn test_random_strategy_only_stops_when_stuck_or_out_of_cards() {
    let config = GameConfig::new(1).unwrap();
    for seed in 0..20 {
        let mut rng = GameRng::new(seed);
        let mut game = Game::deal(&config, &mut rng);

        let before_last_round = loop {
            let snapshot = game.clone();
            if game.play_round(&StrategyKind::Random, &mut rng) == Phase::Ended {
                break snapshot;
            }
        };

        if let Some(EndReason::IllegalMove { player, .. }) = game.end_reason() {
            // With one player, the snapshot hand is the one that got stuck.
            let hand = &before_last_round.hands()[player];
            let any_legal = (0..4).any(|pile| {
                hand.cards().iter().any(|&card| before_last_round.state().is_legal(pile, card))
            });
            assert!(!any_legal, "random strategy gave up with a legal move available");
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

fn any_strategy() -> impl proptest::strategy::Strategy<Value = StrategyKind> {
    proptest::sample::select(StrategyKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_simulate_terminates_within_bounds(
        seed in any::<u64>(),
        players in 1usize..=7,
        kind in any_strategy()
    ) {
        let played = simulate(players, &kind, &mut GameRng::new(seed)).unwrap();
        prop_assert!(played as usize <= DRAW_POOL_SIZE);
    }

    #[test]
    fn prop_invariants_hold_every_round(
        seed in any::<u64>(),
        players in 1usize..=7,
        kind in any_strategy()
    ) {
        let config = GameConfig::new(players).unwrap();
        let mut rng = GameRng::new(seed);
        let mut game = Game::deal(&config, &mut rng);
        prop_assert_eq!(game.card_census(), pool());

        loop {
            let phase = game.play_round(&kind, &mut rng);

            prop_assert_eq!(game.card_census(), pool());
            assert_piles_monotone(game.state());
            prop_assert_eq!(game.cards_played() as usize, game.state().played_count());

            if phase == Phase::Ended {
                break;
            }
        }
    }

    #[test]
    fn prop_invalid_player_count_is_rejected(players in prop_oneof![Just(0usize), 8usize..1000]) {
        let mut rng = GameRng::new(0);
        let before = rng.state();

        let result = simulate(players, &StrategyKind::Random, &mut rng);

        prop_assert_eq!(result, Err(SimError::InvalidConfiguration { player_count: players }));
        prop_assert_eq!(rng.state(), before);
    }

    #[test]
    fn prop_is_legal_is_pure(
        asc in (1u8..=99, 1u8..=99),
        desc in (2u8..=100, 2u8..=100),
        card in 1u8..=100,
        pile in 0usize..4
    ) {
        let state = GameState::with_tops([Card(asc.0), Card(asc.1), Card(desc.0), Card(desc.1)]);
        let before = state.clone();

        let first = state.is_legal(pile, Card(card));
        for _ in 0..3 {
            prop_assert_eq!(state.is_legal(pile, Card(card)), first);
        }
        prop_assert_eq!(&state, &before);

        let expected = if pile < 2 { card > state.top_of(pile).value() } else { card < state.top_of(pile).value() };
        prop_assert_eq!(first, expected);
    }
}
