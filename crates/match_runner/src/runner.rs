//! Plays games between engines

use chess_core::{
    apply_uci_moves, format_uci_move, ChessError, Engine, GameResult, Outcome, Position,
    SearchResult, START_FEN,
};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::MatchConfig;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// The rules say the game goes on, yet the engine found nothing to play.
    #[error("engine `{engine}` returned no move in live position {fen}")]
    NoMove { engine: String, fen: String },

    #[error("failed to serialize game record")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Finished(Outcome),
    PlyLimit,
}

impl Termination {
    pub fn result(self) -> GameResult {
        match self {
            Termination::Finished(outcome) => outcome.result(),
            Termination::PlyLimit => GameResult::Ongoing,
        }
    }

    pub fn describe(self) -> String {
        match self {
            Termination::Finished(outcome) => outcome.to_string(),
            Termination::PlyLimit => "ply limit reached".to_string(),
        }
    }
}

/// Answer to a single `bestmove` request.
#[derive(Debug, Clone)]
pub struct BestMoveReport {
    pub position: Position,
    pub search: SearchResult,
    /// Set when the searched position is already over, move or not
    pub outcome: Option<Outcome>,
}

impl BestMoveReport {
    /// Lines printed by the `bestmove` command.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "info depth {} score {} nodes {}",
            self.search.depth, self.search.score, self.search.nodes
        )];
        lines.push(match self.search.best_move {
            Some(mv) => format!("bestmove {}", format_uci_move(&self.position, mv)),
            None => "bestmove 0000".to_string(),
        });
        if let Some(outcome) = self.outcome {
            lines.push(format!("info result {} ({})", outcome.result(), outcome));
        }
        lines
    }
}

/// Complete record of one game, written out as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub start_fen: String,
    /// Every move in UCI notation, forced opening moves included
    pub moves: Vec<String>,
    /// `1-0`, `0-1`, `1/2-1/2` or `*`
    pub result: String,
    pub termination: String,
    pub final_fen: String,
}

impl GameRecord {
    /// Save the record to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), MatchError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| MatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Runs games under one configuration
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The configured start position with the opening moves already played.
    pub fn starting_position(&self) -> Result<Position, ChessError> {
        let mut pos = match self.config.start_fen() {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::startpos(),
        };
        apply_uci_moves(&mut pos, self.config.opening_moves.iter().map(String::as_str))?;
        Ok(pos)
    }

    /// Search the starting position once with the depth of the side to move.
    pub fn best_move(&self, engine: &mut dyn Engine) -> Result<BestMoveReport, ChessError> {
        let mut position = self.starting_position()?;
        let depth = self.config.depth_for(position.side_to_move());
        let search = engine.search(&mut position, depth);
        let outcome = position.outcome();
        if let Some(outcome) = outcome {
            debug!(%outcome, found = search.best_move.is_some(), "searched a finished position");
        }
        Ok(BestMoveReport {
            position,
            search,
            outcome,
        })
    }

    /// Play a single game until it ends or the ply limit is hit
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, MatchError> {
        let mut pos = self.starting_position()?;
        white.new_game();
        black.new_game();

        let mut moves = self.config.opening_moves.clone();
        let mut plies = 0u32;

        let termination = loop {
            if let Some(outcome) = pos.outcome() {
                break Termination::Finished(outcome);
            }
            if plies >= self.config.max_plies {
                warn!(plies, fen = %pos.fen(), "ply limit reached, abandoning game");
                break Termination::PlyLimit;
            }

            let side = pos.side_to_move();
            let depth = self.config.depth_for(side);
            let engine: &mut dyn Engine = match side {
                chess_core::Color::White => &mut *white,
                chess_core::Color::Black => &mut *black,
            };

            let result = engine.search(&mut pos, depth);
            let Some(mv) = result.best_move else {
                return Err(MatchError::NoMove {
                    engine: engine.name().to_string(),
                    fen: pos.fen(),
                });
            };

            let text = format_uci_move(&pos, mv);
            info!(
                ply = pos.ply(),
                side = ?side,
                mv = %text,
                score = result.score,
                nodes = result.nodes,
                "engine move"
            );
            pos.apply(mv);
            moves.push(text);
            plies += 1;
        };

        debug!(termination = %termination.describe(), plies, "game over");

        Ok(GameRecord {
            white: format!("{} (depth {})", white.name(), self.config.white_depth),
            black: format!("{} (depth {})", black.name(), self.config.black_depth),
            start_fen: self.config.start_fen().unwrap_or(START_FEN).to_string(),
            moves,
            result: termination.result().to_string(),
            termination: termination.describe(),
            final_fen: pos.fen(),
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
