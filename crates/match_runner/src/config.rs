//! Match configuration: TOML file plus command-line overrides

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Deepest search the driver accepts.
pub const MAX_DEPTH: u8 = 8;

/// Stands for the standard start position wherever a FEN is expected.
pub const STARTPOS: &str = "startpos";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("search depth must be between 1 and {}, got {0}", MAX_DEPTH)]
    InvalidDepth(u8),

    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("option `{0}` needs a value")]
    MissingValue(String),

    #[error("bad value `{value}` for option `{flag}`")]
    BadValue { flag: String, value: String },
}

/// Configuration for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Search depth in plies when white is to move
    pub white_depth: u8,
    /// Search depth in plies when black is to move
    pub black_depth: u8,
    /// Plies after which an unfinished game is abandoned
    pub max_plies: u32,
    /// Starting position (None or `startpos` = standard start)
    pub start_fen: Option<String>,
    /// UCI moves played from the start position before the engine takes over
    pub opening_moves: Vec<String>,
    /// Default tracing filter, overridden by RUST_LOG
    pub log_filter: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            white_depth: 3,
            black_depth: 3,
            max_plies: 200,
            start_fen: None,
            opening_moves: Vec::new(),
            log_filter: "info".to_string(),
        }
    }
}

impl MatchConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let mut config: MatchConfig = toml::from_str(text)?;
        config.drop_startpos();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for depth in [self.white_depth, self.black_depth] {
            if !(1..=MAX_DEPTH).contains(&depth) {
                return Err(ConfigError::InvalidDepth(depth));
            }
        }
        Ok(())
    }

    /// The FEN to start from, or None for the standard start position.
    pub fn start_fen(&self) -> Option<&str> {
        self.start_fen.as_deref().filter(|fen| fen.trim() != STARTPOS)
    }

    fn drop_startpos(&mut self) {
        if self.start_fen().is_none() {
            self.start_fen = None;
        }
    }

    pub fn depth_for(&self, color: chess_core::Color) -> u8 {
        match color {
            chess_core::Color::White => self.white_depth,
            chess_core::Color::Black => self.black_depth,
        }
    }
}

/// Everything the command line can set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub config: MatchConfig,
    /// Where to write the game record as JSON
    pub out: Option<PathBuf>,
}

impl CliOptions {
    /// Parses options; `--config FILE` is loaded first, other flags override it.
    pub fn parse(args: &[String]) -> Result<Self, ConfigError> {
        let mut config = match config_path(args)? {
            Some(path) => MatchConfig::load(Path::new(path))?,
            None => MatchConfig::default(),
        };
        let mut out = None;

        let mut iter = args.iter().peekable();
        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--config" | "-c" => {
                    next_value(&mut iter, flag)?;
                }
                "--depth" | "-d" => {
                    let depth = parse_value(flag, next_value(&mut iter, flag)?)?;
                    config.white_depth = depth;
                    config.black_depth = depth;
                }
                "--white-depth" => {
                    config.white_depth = parse_value(flag, next_value(&mut iter, flag)?)?;
                }
                "--black-depth" => {
                    config.black_depth = parse_value(flag, next_value(&mut iter, flag)?)?;
                }
                "--max-plies" => {
                    config.max_plies = parse_value(flag, next_value(&mut iter, flag)?)?;
                }
                "--fen" => {
                    config.start_fen = Some(next_value(&mut iter, flag)?.to_string());
                }
                "--moves" => {
                    config.opening_moves.clear();
                    while let Some(mv) = iter.next_if(|arg| !arg.starts_with('-')) {
                        config.opening_moves.push(mv.clone());
                    }
                }
                "--log" => {
                    config.log_filter = next_value(&mut iter, flag)?.to_string();
                }
                "--out" | "-o" => {
                    out = Some(PathBuf::from(next_value(&mut iter, flag)?));
                }
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        config.drop_startpos();
        config.validate()?;
        Ok(Self { config, out })
    }
}

fn config_path(args: &[String]) -> Result<Option<&str>, ConfigError> {
    match args.iter().position(|arg| arg == "--config" || arg == "-c") {
        Some(idx) => args
            .get(idx + 1)
            .map(|path| Some(path.as_str()))
            .ok_or_else(|| ConfigError::MissingValue(args[idx].clone())),
        None => Ok(None),
    }
}

fn next_value<'a, I>(iter: &mut I, flag: &str) -> Result<&'a str, ConfigError>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .map(String::as_str)
        .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))
}

fn parse_value<T: FromStr>(flag: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::BadValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
