//! Play a single game and report how many cards made it onto the table.

use anyhow::Result;
use clap::Parser;
use thegame_sim::core::{GameConfig, GameRng};
use thegame_sim::sim::Game;
use thegame_sim::strategy::StrategyKind;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (1-7)
    num_players: usize,

    /// Strategy every player follows (random, minimal, trick)
    #[arg(long, default_value = "random", value_parser = parse_strategy)]
    strategy: StrategyKind,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn parse_strategy(name: &str) -> Result<StrategyKind, thegame_sim::SimError> {
    name.parse()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = GameConfig::new(args.num_players)?;
    let mut rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    log::info!("seed {}", rng.seed());

    let mut game = Game::deal(&config, &mut rng);
    let outcome = game.play(&args.strategy, &mut rng);
    log::info!("game ended after {} rounds: {:?}", outcome.rounds, outcome.reason);

    eprintln!(
        "Simulated game with {} players and {} strategy. Played {}.",
        args.num_players, args.strategy, outcome.cards_played
    );

    Ok(())
}
