//! Errors raised while loading or validating game configuration.

use thiserror::Error;

use crate::enums::EnemyKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration defines no levels")]
    NoLevels,

    #[error("level {level:?} spawns {kind:?} but the enemy table has no entry for it")]
    UnknownEnemyType { level: String, kind: EnemyKind },

    #[error("level {level:?} has {found} layout rows, expected at least {expected}")]
    LayoutRows {
        level: String,
        expected: usize,
        found: usize,
    },

    #[error("level {level:?} row {row} has {found} columns, expected at least {expected}")]
    LayoutColumns {
        level: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no enemy spawn points configured")]
    NoSpawnPoints,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
