//! Error types shared by the ranking structures.
//!
//! Lookups that simply miss return `Option`; only mutations on a missing key,
//! duplicate registrations and export failures surface as [`RankingError`].

use thiserror::Error;

/// Errors reported by roster and leaderboard operations.
#[derive(Debug, Error)]
pub enum RankingError {
    /// No record exists under the given key (username or competitor code)
    #[error("'{0}' not found")]
    NotFound(String),

    /// A record with the same key is already registered; the operation was skipped
    #[error("'{0}' already exists")]
    DuplicateKey(String),

    /// Writing an export failed
    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RankingError>;
