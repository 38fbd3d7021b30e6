//! Match Runner
//!
//! Drives the classical engine without any interactive front end:
//! - pick a single move for a position (`bestmove`)
//! - let the engine play both sides until the game ends (`selfplay`)
//!
//! # Usage
//!
//! ```bash
//! cargo run -p match_runner -- bestmove --fen "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1" --depth 2
//! cargo run -p match_runner -- selfplay --config match.toml --max-plies 120 --out game.json
//! ```

mod config;
mod runner;

pub use config::*;
pub use runner::*;
