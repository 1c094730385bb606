use std::path::PathBuf;

use crate::game::{Player, RoundState};

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("round is already over ({0:?})")]
    Finished(RoundState),

    #[error("{} has no move to offer while the round is in progress", .0.name())]
    NoMove(Player),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
