//! Match Runner CLI
//!
//! Ask the engine for a move, or let it play a whole game against itself.

use anyhow::{Context, Result};
use chess_core::Engine;
use classical_engine::ClassicalEngine;
use match_runner::{CliOptions, MatchRunner, MAX_DEPTH, STARTPOS};
use std::env;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Material minimax match runner");
    println!();
    println!("Usage:");
    println!("  match_runner bestmove [--fen FEN] [--moves M...] [--depth D] [--config FILE]");
    println!("  match_runner selfplay [--fen FEN] [--moves M...] [--depth D]");
    println!("                        [--white-depth D] [--black-depth D] [--max-plies N]");
    println!("                        [--config FILE] [--out FILE] [--log FILTER]");
    println!();
    println!("Depths are in plies, 1 to {MAX_DEPTH} (default 3). FEN may be `{STARTPOS}`.");
    println!("Moves use UCI notation, e.g. e2e4 or e7e8q.");
    println!();
    println!("Examples:");
    println!("  match_runner bestmove --fen \"4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1\" --depth 2");
    println!("  match_runner selfplay --depth 3 --max-plies 120 --out game.json");
}

/// Logs go to stderr; RUST_LOG wins over the configured filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_bestmove(args: &[String]) -> Result<()> {
    let opts = CliOptions::parse(args).context("invalid options")?;
    init_logging(&opts.config.log_filter);

    let runner = MatchRunner::new(opts.config);
    let mut engine = ClassicalEngine::new();
    let report = runner
        .best_move(&mut engine)
        .context("cannot set up the position")?;

    for line in report.lines() {
        println!("{line}");
    }
    Ok(())
}

fn run_selfplay(args: &[String]) -> Result<()> {
    let opts = CliOptions::parse(args).context("invalid options")?;
    init_logging(&opts.config.log_filter);

    let runner = MatchRunner::new(opts.config);
    let mut white = ClassicalEngine::new();
    let mut black = ClassicalEngine::new();

    println!(
        "=== Self-play: {} (depth {}) vs {} (depth {}) ===",
        white.name(),
        runner.config().white_depth,
        black.name(),
        runner.config().black_depth
    );

    let record = runner
        .play_game(&mut white, &mut black)
        .context("self-play game failed")?;

    println!("{}", record.moves.join(" "));
    println!();
    println!("Result: {} ({})", record.result, record.termination);
    println!("Final position: {}", record.final_fen);

    if let Some(path) = &opts.out {
        record
            .save(path)
            .with_context(|| format!("cannot save game record to {}", path.display()))?;
        println!("Game record written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "bestmove" | "go" => run_bestmove(&args[2..]),
        "selfplay" | "play" => run_selfplay(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("unknown command `{other}`")
        }
    }
}
