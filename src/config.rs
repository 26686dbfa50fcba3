//! Sizing and display defaults.
//!
//! None of the structures need configuration to be correct; these values only
//! pre-size storage and choose how many rows a ranking view shows.

/// Rows shown by ranking views when the caller does not ask for a count
pub const DEFAULT_TOP_N: usize = 10;

/// A full grid plus reserves
pub const DEFAULT_ROSTER_CAPACITY: usize = 24;

/// Tuning for a ranking session.
///
/// ## Example
///
/// ```
/// use fantasy_ranking::config::RankingConfig;
///
/// let config = RankingConfig::default().with_top_n(3);
/// assert_eq!(config.top_n, 3);
/// assert_eq!(config.roster_capacity, 24);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    /// Pre-allocated competitor slots (roster and ranking tree)
    pub roster_capacity: usize,

    /// Pre-allocated leaderboard slots
    pub leaderboard_capacity: usize,

    /// Rows shown by top-n views
    pub top_n: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            roster_capacity: DEFAULT_ROSTER_CAPACITY,
            leaderboard_capacity: 0,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RankingConfig {
    pub fn with_roster_capacity(mut self, capacity: usize) -> Self {
        self.roster_capacity = capacity;
        self
    }

    pub fn with_leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
