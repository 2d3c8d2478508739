//! Play many games for every player count and strategy.
//!
//! Prints one `players<TAB>strategy<TAB>cards played` line per game.

use std::io::{BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use thegame_sim::sim::{run_batch, summarize, BatchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Games per player count and strategy
    #[arg(long, default_value_t = 1000)]
    repeats: u32,

    /// Batch seed; every game derives its own stream from it
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Also print per player count / strategy statistics to stderr
    #[arg(long)]
    summary: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = std::str::FromStr::from_str(&args.log_level).unwrap_or(log::LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();

    let config = BatchConfig::default()
        .with_repeats(args.repeats)
        .with_seed(args.seed);
    let records = run_batch(&config)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        writeln!(out, "{record}")?;
    }
    out.flush()?;

    if args.summary {
        eprintln!("players\tstrategy\tgames\tmean\tmin\tmax");
        for row in summarize(&records) {
            eprintln!("{row}");
        }
    }

    Ok(())
}
