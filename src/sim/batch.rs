//! Monte Carlo batches.
//!
//! A batch plays `repeats` games for every `(player count, strategy)` pair
//! and records how many cards each game got onto the table. Games are
//! independent, so they are spread over rayon's thread pool one game per
//! task. Trial `i` always draws from RNG stream `i` of the batch seed,
//! which makes a batch reproducible regardless of thread scheduling.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, SimError, MAX_PLAYERS, MIN_PLAYERS};
use crate::strategy::StrategyKind;

use super::game::simulate;

/// Batch configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Games per `(player count, strategy)` pair.
    pub repeats: u32,

    /// Seed for the per-trial RNG streams.
    pub seed: u64,

    /// Player counts to simulate, in report order.
    pub player_counts: Vec<usize>,

    /// Strategies to simulate, in report order.
    pub strategies: Vec<StrategyKind>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            repeats: 1000,
            seed: 42,
            player_counts: (MIN_PLAYERS..=MAX_PLAYERS).collect(),
            strategies: StrategyKind::ALL.to_vec(),
        }
    }
}

impl BatchConfig {
    pub fn with_repeats(mut self, repeats: u32) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_player_counts(mut self, player_counts: Vec<usize>) -> Self {
        self.player_counts = player_counts;
        self
    }

    pub fn with_strategies(mut self, strategies: Vec<StrategyKind>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Total number of games the batch will play.
    #[must_use]
    pub fn trial_count(&self) -> usize {
        self.repeats as usize * self.player_counts.len() * self.strategies.len()
    }

    /// Trials in sequential order: repeat, then player count, then strategy.
    fn trials(&self) -> Vec<(usize, StrategyKind)> {
        let mut trials = Vec::with_capacity(self.trial_count());
        for _ in 0..self.repeats {
            for &players in &self.player_counts {
                for &strategy in &self.strategies {
                    trials.push((players, strategy));
                }
            }
        }
        trials
    }
}

/// Result of one game in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub player_count: usize,
    pub strategy: StrategyKind,
    pub cards_played: u32,
}

impl std::fmt::Display for TrialRecord {
    /// Tab-separated: `players<TAB>strategy<TAB>cards played`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{}", self.player_count, self.strategy, self.cards_played)
    }
}

/// Play every trial of the batch in parallel.
///
/// Records come back in the same order a sequential loop would produce.
/// Any invalid player count fails the whole batch before a game is played.
pub fn run_batch(config: &BatchConfig) -> Result<Vec<TrialRecord>, SimError> {
    if let Some(&player_count) = config
        .player_counts
        .iter()
        .find(|&&n| !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n))
    {
        return Err(SimError::InvalidConfiguration { player_count });
    }

    let base = GameRng::new(config.seed);
    let trials = config.trials();
    log::info!("running {} games with seed {}", trials.len(), config.seed);

    trials
        .into_par_iter()
        .enumerate()
        .map(|(index, (player_count, strategy))| {
            let mut rng = base.stream(index as u64);
            let cards_played = simulate(player_count, &strategy, &mut rng)?;
            Ok(TrialRecord {
                player_count,
                strategy,
                cards_played,
            })
        })
        .collect()
}

/// Aggregate statistics for one `(player count, strategy)` pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub player_count: usize,
    pub strategy: StrategyKind,
    pub games: u32,
    pub mean: f64,
    pub min: u32,
    pub max: u32,
}

impl std::fmt::Display for SummaryRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{:.2}\t{}\t{}",
            self.player_count, self.strategy, self.games, self.mean, self.min, self.max
        )
    }
}

#[derive(Default)]
struct Tally {
    games: u32,
    total: u64,
    min: u32,
    max: u32,
}

/// Group records by `(player count, strategy)`, sorted by both.
pub fn summarize(records: &[TrialRecord]) -> Vec<SummaryRow> {
    let mut tallies: FxHashMap<(usize, StrategyKind), Tally> = FxHashMap::default();

    for record in records {
        let tally = tallies
            .entry((record.player_count, record.strategy))
            .or_insert_with(|| Tally {
                min: u32::MAX,
                ..Tally::default()
            });
        tally.games += 1;
        tally.total += u64::from(record.cards_played);
        tally.min = tally.min.min(record.cards_played);
        tally.max = tally.max.max(record.cards_played);
    }

    let mut rows: Vec<SummaryRow> = tallies
        .into_iter()
        .map(|((player_count, strategy), tally)| SummaryRow {
            player_count,
            strategy,
            games: tally.games,
            mean: tally.total as f64 / f64::from(tally.games),
            min: tally.min,
            max: tally.max,
        })
        .collect();
    rows.sort_by_key(|row| (row.player_count, row.strategy));
    rows
}
