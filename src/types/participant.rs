//! League participants and their leaderboard snapshots.
//!
//! A [`ParticipantRecord`] is owned by the caller, normally behind an
//! `Rc`, and shared with the [`Leaderboard`](crate::leaderboard::Leaderboard)
//! through a weak handle. The username is fixed at construction because it
//! is the leaderboard key; score and budget live in `Cell`s so the
//! leaderboard can apply points without a mutable borrow of caller data.

use std::cell::Cell;

use rust_decimal::Decimal;

/// The group and members a participant picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamRef {
    /// Constructor / group name
    pub group: String,

    /// Competitor codes in the team
    pub members: Vec<String>,
}

impl TeamRef {
    pub fn new(group: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            group: group.into(),
            members,
        }
    }
}

/// A league participant with an aggregate score.
///
/// ## Example
///
/// ```
/// use fantasy_ranking::types::{ParticipantRecord, TeamRef};
/// use rust_decimal::Decimal;
///
/// let alice = ParticipantRecord::new("alice", Decimal::from(100), TeamRef::default());
/// alice.add_score(25);
/// assert_eq!(alice.score(), 25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRecord {
    username: String,
    score: Cell<i64>,
    budget: Cell<Decimal>,
    team: TeamRef,
}

impl ParticipantRecord {
    /// Create a participant with a zero score
    pub fn new(username: impl Into<String>, budget: Decimal, team: TeamRef) -> Self {
        Self::with_score(username, 0, budget, team)
    }

    /// Create a participant with an existing score (e.g. loaded from a table)
    pub fn with_score(
        username: impl Into<String>,
        score: i64,
        budget: Decimal,
        team: TeamRef,
    ) -> Self {
        Self {
            username: username.into(),
            score: Cell::new(score),
            budget: Cell::new(budget),
            team,
        }
    }

    #[inline]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.score.get()
    }

    #[inline]
    pub fn budget(&self) -> Decimal {
        self.budget.get()
    }

    #[inline]
    pub fn team(&self) -> &TeamRef {
        &self.team
    }

    /// Add points, returning the new score
    pub fn add_score(&self, delta: i64) -> i64 {
        let score = self.score.get().saturating_add(delta);
        self.score.set(score);
        score
    }

    pub fn set_score(&self, score: i64) {
        self.score.set(score);
    }

    pub fn set_budget(&self, budget: Decimal) {
        self.budget.set(budget);
    }
}

/// One row of the rebuilt leaderboard.
///
/// Entries are snapshots: they are recomputed on every rebuild and never
/// updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
    pub budget: Decimal,

    /// 1-based position in the current ranking
    pub rank: usize,
}

impl LeaderboardEntry {
    /// Snapshot a participant; the rank is assigned later by the rebuild
    pub fn snapshot(participant: &ParticipantRecord) -> Self {
        Self {
            username: participant.username().to_string(),
            score: participant.score(),
            budget: participant.budget(),
            rank: 0,
        }
    }
}

/// Per-participant statistics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantStats {
    pub username: String,
    pub rank: usize,

    /// Number of participants on the leaderboard
    pub total: usize,
    pub score: i64,
    pub budget: Decimal,

    /// Group and competitor codes the participant picked
    pub team: TeamRef,

    /// Score strictly above the truncated league average
    pub above_average: bool,
}
