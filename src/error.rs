//! Error types for the trivia crate.
//!
//! `TriviaError` covers everything that can fail at the edges (files, parsing,
//! config, terminal). `DocumentError` names the ways a game document can be
//! malformed; the loader rejects those before a `GameState` ever exists.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum TriviaError {
    /// A game document parsed but failed validation.
    #[error("invalid game document '{id}': {reason}")]
    InvalidDocument { id: String, reason: DocumentError },

    /// Game document JSON could not be parsed.
    #[error("failed to parse game document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// File or terminal I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required directory (home, config, data) could not be resolved.
    #[error("could not determine {0} directory")]
    MissingDirectory(&'static str),
}

/// Reasons a game document is rejected at load time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("game has no levels")]
    NoLevels,

    #[error("level {level} has neither categories nor a final question")]
    EmptyLevel { level: u32 },

    #[error("level {level} has both categories and a final question")]
    AmbiguousLevel { level: u32 },

    #[error("level {level} has an empty category list")]
    EmptyBoard { level: u32 },

    #[error("level {level}: category '{category}' has no questions")]
    EmptyCategory { level: u32, category: String },

    #[error(
        "level {level}: category '{category}' has {found} questions, expected {expected}"
    )]
    RaggedBoard {
        level: u32,
        category: String,
        expected: usize,
        found: usize,
    },
}

/// Result type for trivia operations
pub type Result<T> = std::result::Result<T, TriviaError>;
