//! Live participant leaderboard.
//!
//! ## Architecture
//!
//! - **HashMap**: username -> weak participant handle, for O(1) lookup
//! - **Vec**: denormalized, ranked snapshot of every participant
//!
//! The ranked list is derived data. It is rebuilt from scratch on every
//! mutation and on every accessor that promises a fresh ranking
//! ([`top_n`](Leaderboard::top_n), [`all`](Leaderboard::all),
//! [`rank_of`](Leaderboard::rank_of)), so a participant whose score was
//! changed directly through its `Rc` is still ranked correctly.
//!
//! ## Ownership
//!
//! Participants belong to the caller. The leaderboard keeps `Weak` handles:
//! a participant dropped without being removed first is detected on the next
//! rebuild and pruned instead of dangling.
//!
//! ## Ranking Order
//!
//! Score descending, then username ascending. Ranks are 1-based positions
//! in that order, so they always form the contiguous sequence `1..=n`.
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use fantasy_ranking::leaderboard::Leaderboard;
//! use fantasy_ranking::types::{ParticipantRecord, TeamRef};
//! use rust_decimal::Decimal;
//!
//! let alice = Rc::new(ParticipantRecord::with_score("alice", 50, Decimal::from(100), TeamRef::default()));
//! let bob = Rc::new(ParticipantRecord::with_score("bob", 80, Decimal::from(100), TeamRef::default()));
//!
//! let mut board = Leaderboard::new();
//! board.add_participant(&alice).unwrap();
//! board.add_participant(&bob).unwrap();
//!
//! assert_eq!(board.rank_of("bob"), Some(1));
//! board.add_score("alice", 40).unwrap();
//! assert_eq!(board.rank_of("alice"), Some(1));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::error::{RankingError, Result};
use crate::types::money::format_amount;
use crate::types::{LeaderboardEntry, ParticipantRecord, ParticipantStats};

/// Header row written by [`Leaderboard::export_csv`]
pub const CSV_HEADER: &str = "rank,username,score,budget";

/// Username-keyed participant map with a ranked view.
#[derive(Debug, Default)]
pub struct Leaderboard {
    /// Username -> caller-owned participant
    participants: HashMap<String, Weak<ParticipantRecord>>,

    /// Ranked snapshot from the last rebuild
    rankings: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            participants: HashMap::with_capacity(capacity),
            rankings: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Participant Management
    // ========================================================================

    /// Start tracking a participant.
    ///
    /// # Errors
    ///
    /// [`RankingError::DuplicateKey`] if a live participant with the same
    /// username is already tracked. The leaderboard is left unchanged.
    pub fn add_participant(&mut self, participant: &Rc<ParticipantRecord>) -> Result<()> {
        let username = participant.username();

        if self.contains(username) {
            warn!(username, "participant already exists in leaderboard");
            return Err(RankingError::DuplicateKey(username.to_string()));
        }

        self.participants
            .insert(username.to_string(), Rc::downgrade(participant));
        self.rebuild();
        Ok(())
    }

    /// Stop tracking a participant. Returns false if it was not tracked.
    pub fn remove_participant(&mut self, username: &str) -> bool {
        if self.participants.remove(username).is_none() {
            return false;
        }
        self.rebuild();
        true
    }

    /// Shared handle to a tracked participant
    pub fn participant(&self, username: &str) -> Option<Rc<ParticipantRecord>> {
        self.participants.get(username).and_then(Weak::upgrade)
    }

    #[inline]
    pub fn contains(&self, username: &str) -> bool {
        self.participant(username).is_some()
    }

    /// Number of live participants
    pub fn len(&self) -> usize {
        self.live().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn live(&self) -> impl Iterator<Item = Rc<ParticipantRecord>> + '_ {
        self.participants.values().filter_map(Weak::upgrade)
    }

    // ========================================================================
    // Score Updates
    // ========================================================================

    /// Add points to a participant in place, returning the new score
    ///
    /// # Errors
    ///
    /// [`RankingError::NotFound`] if the username is not tracked.
    pub fn add_score(&mut self, username: &str, delta: i64) -> Result<i64> {
        let participant = self.require(username)?;
        let score = participant.add_score(delta);
        self.rebuild();
        Ok(score)
    }

    /// Overwrite a participant's score
    ///
    /// # Errors
    ///
    /// [`RankingError::NotFound`] if the username is not tracked.
    pub fn set_score(&mut self, username: &str, score: i64) -> Result<()> {
        let participant = self.require(username)?;
        participant.set_score(score);
        self.rebuild();
        Ok(())
    }

    fn require(&self, username: &str) -> Result<Rc<ParticipantRecord>> {
        self.participant(username)
            .ok_or_else(|| RankingError::NotFound(username.to_string()))
    }

    // ========================================================================
    // Rankings
    // ========================================================================

    /// Recompute the ranked view from the current participant data.
    ///
    /// Participants the caller has dropped are pruned first.
    pub fn rebuild(&mut self) {
        self.participants.retain(|username, handle| {
            let live = handle.strong_count() > 0;
            if !live {
                warn!(username = username.as_str(), "participant dropped while tracked, pruning");
            }
            live
        });

        let mut rankings: Vec<LeaderboardEntry> = self
            .live()
            .map(|participant| LeaderboardEntry::snapshot(&participant))
            .collect();

        rankings.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.username.cmp(&b.username))
        });
        for (position, entry) in rankings.iter_mut().enumerate() {
            entry.rank = position + 1;
        }

        debug!(participants = rankings.len(), "leaderboard rebuilt");
        self.rankings = rankings;
    }

    /// The first `n` entries of a fresh ranking, or fewer
    pub fn top_n(&mut self, n: usize) -> Vec<LeaderboardEntry> {
        self.rebuild();
        self.rankings.iter().take(n).cloned().collect()
    }

    /// Every entry of a fresh ranking
    pub fn all(&mut self) -> Vec<LeaderboardEntry> {
        self.rebuild();
        self.rankings.clone()
    }

    /// 1-based rank of a participant, or None if not tracked
    pub fn rank_of(&mut self, username: &str) -> Option<usize> {
        self.rebuild();
        self.rankings
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.rank)
    }

    /// Current rank 1 entry
    pub fn leader(&mut self) -> Option<LeaderboardEntry> {
        self.top_n(1).into_iter().next()
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Mean score truncated toward zero; 0 when there are no participants
    pub fn average_points(&self) -> i64 {
        let (count, total) = self
            .live()
            .fold((0i128, 0i128), |(count, total), p| (count + 1, total + i128::from(p.score())));

        if count == 0 {
            return 0;
        }
        // The mean of i64 values always fits back into i64
        (total / count) as i64
    }

    /// Rank, league size, team and average comparison for one participant
    pub fn stats(&mut self, username: &str) -> Option<ParticipantStats> {
        let rank = self.rank_of(username)?;
        let participant = self.participant(username)?;
        let average = self.average_points();

        Some(ParticipantStats {
            username: username.to_string(),
            rank,
            total: self.rankings.len(),
            score: participant.score(),
            budget: participant.budget(),
            team: participant.team().clone(),
            above_average: participant.score() > average,
        })
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Write a fresh ranking as CSV: a [`CSV_HEADER`] row, then one
    /// `rank,username,score,budget` row per entry. Usernames containing a
    /// comma, quote or line break are quoted with inner quotes doubled.
    ///
    /// # Errors
    ///
    /// [`RankingError::Io`] if the writer fails.
    pub fn export_csv<W: Write>(&mut self, mut writer: W) -> Result<()> {
        self.rebuild();

        writeln!(writer, "{CSV_HEADER}")?;
        for entry in &self.rankings {
            writeln!(
                writer,
                "{},{},{},{}",
                entry.rank,
                csv_field(&entry.username),
                entry.score,
                format_amount(entry.budget)
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    // ========================================================================
    // Cleanup
    // ========================================================================

    /// Forget every participant and the ranked view
    pub fn clear(&mut self) {
        self.participants.clear();
        self.rankings.clear();
    }
}

/// Quote a CSV field when it would otherwise split the row
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
