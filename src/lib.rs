//! # Fantasy Ranking
//!
//! Rankings, search and leaderboards for a fantasy racing league.
//!
//! ## Architecture
//!
//! - **Types**: Core value types (CompetitorRecord, ParticipantRecord, LeaderboardEntry)
//! - **Roster**: Stable, append-only competitor storage with code lookup
//! - **Ranking**: AVL tree ordered by score, slab-allocated
//! - **Search**: Prefix trie over competitor names and codes
//! - **Sort**: First-pivot partition-exchange sorts by score and price
//! - **Leaderboard**: Participant map with a rebuilt-on-read ranked view
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Every ordering is total, ties are broken by code or username
//! 2. **No Floating Point**: Prices and budgets are exact decimals
//! 3. **No Dangling Handles**: Search results are ids into the roster and the
//!    leaderboard holds weak participant handles
//! 4. **Synchronous Execution**: Single-threaded, in-memory, no async

// ============================================================================
// Module declarations
// ============================================================================

/// Error type and result alias
pub mod error;

/// Sizing and display defaults
pub mod config;

/// Core data types: CompetitorRecord, ParticipantRecord, LeaderboardEntry
pub mod types;

/// Stable competitor storage
pub mod roster;

/// Ranking tree: AVL tree with slab-based storage
pub mod ranking;

/// Prefix search over names and codes
pub mod search;

/// In-place competitor sorts
pub mod sort;

/// Participant leaderboard
pub mod leaderboard;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::RankingConfig;
pub use error::{RankingError, Result};
pub use leaderboard::Leaderboard;
pub use ranking::RankingTree;
pub use roster::{CompetitorId, Roster};
pub use search::PrefixTrie;
pub use types::{CompetitorRecord, LeaderboardEntry, ParticipantRecord, ParticipantStats, TeamRef};
