//! Stable competitor storage.
//!
//! ## Design
//!
//! The roster owns every [`CompetitorRecord`] of a season in an append-only
//! `Vec`. A [`CompetitorId`] is the record's position in that `Vec`, so it
//! stays valid for the lifetime of the roster: records are never removed or
//! moved. The search index stores these ids instead of references, and a
//! lookup with an id from another (smaller) roster misses instead of
//! dangling.
//!
//! A `HashMap` from code to id gives O(1) lookup by code.
//!
//! Ranking trees and search indexes are derived views: after score updates,
//! build a fresh tree with [`Roster::ranking_tree`].

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::{RankingError, Result};
use crate::ranking::RankingTree;
use crate::search::PrefixTrie;
use crate::sort::{sort_by_price_ascending, sort_by_score_descending};
use crate::types::CompetitorRecord;

/// Stable handle to a record in a [`Roster`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompetitorId(usize);

impl CompetitorId {
    /// Position of the record in its roster
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Append-only collection of competitors, indexed by code.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<CompetitorRecord>,
    by_code: HashMap<String, CompetitorId>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a roster with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            by_code: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Register a competitor.
    ///
    /// # Errors
    ///
    /// [`RankingError::DuplicateKey`] if the code is already registered.
    ///
    /// # Example
    ///
    /// ```
    /// use fantasy_ranking::roster::Roster;
    /// use fantasy_ranking::types::CompetitorRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let mut roster = Roster::new();
    /// let id = roster
    ///     .push(CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 400, Decimal::from(30)))
    ///     .unwrap();
    ///
    /// assert_eq!(roster.get(id).unwrap().code, "VER");
    /// assert!(roster
    ///     .push(CompetitorRecord::new("VER", "Someone Else", "Red Bull", 0, Decimal::ZERO))
    ///     .is_err());
    /// ```
    pub fn push(&mut self, record: CompetitorRecord) -> Result<CompetitorId> {
        if self.by_code.contains_key(&record.code) {
            return Err(RankingError::DuplicateKey(record.code));
        }

        let id = CompetitorId(self.records.len());
        self.by_code.insert(record.code.clone(), id);
        self.records.push(record);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: CompetitorId) -> Option<&CompetitorRecord> {
        self.records.get(id.0)
    }

    #[inline]
    pub fn id_of(&self, code: &str) -> Option<CompetitorId> {
        self.by_code.get(code).copied()
    }

    pub fn get_by_code(&self, code: &str) -> Option<&CompetitorRecord> {
        self.id_of(code).and_then(|id| self.get(id))
    }

    /// Add race points to a competitor, returning the new score
    ///
    /// # Errors
    ///
    /// [`RankingError::NotFound`] if no competitor has this code.
    pub fn add_score(&mut self, code: &str, delta: i64) -> Result<i64> {
        let id = self
            .id_of(code)
            .ok_or_else(|| RankingError::NotFound(code.to_string()))?;
        let record = self
            .records
            .get_mut(id.0)
            .ok_or_else(|| RankingError::NotFound(code.to_string()))?;

        let score = record.add_score(delta);
        debug!(code, delta, score, "competitor score updated");
        Ok(score)
    }

    /// Iterate `(id, record)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (CompetitorId, &CompetitorRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (CompetitorId(i), record))
    }

    #[inline]
    pub fn records(&self) -> &[CompetitorRecord] {
        &self.records
    }

    // ========================================================================
    // Derived Views
    // ========================================================================

    /// Build a ranking tree from the current scores
    pub fn ranking_tree(&self) -> RankingTree {
        let mut tree = RankingTree::with_capacity(self.len());
        tree.extend(self.records.iter().cloned());
        tree
    }

    /// Build a search index over every record
    pub fn search_index(&self) -> PrefixTrie {
        let mut trie = PrefixTrie::new();
        for (id, record) in self.iter() {
            trie.insert(id, record);
        }
        trie
    }

    /// Copy of the records sorted by score, highest first
    pub fn sorted_by_score(&self) -> Vec<CompetitorRecord> {
        let mut records = self.records.clone();
        sort_by_score_descending(&mut records);
        records
    }

    /// Copy of the records sorted by price, cheapest first
    pub fn sorted_by_price(&self) -> Vec<CompetitorRecord> {
        let mut records = self.records.clone();
        sort_by_price_ascending(&mut records);
        records
    }
}

impl FromIterator<CompetitorRecord> for Roster {
    /// Collect records, skipping any whose code is already present
    fn from_iter<I: IntoIterator<Item = CompetitorRecord>>(iter: I) -> Self {
        let mut roster = Self::new();
        for record in iter {
            if let Err(err) = roster.push(record) {
                warn!(%err, "skipping competitor");
            }
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn record(code: &str, name: &str, score: i64, price: i64) -> CompetitorRecord {
        CompetitorRecord::new(code, name, "Team", score, Decimal::from(price))
    }

    fn sample() -> Roster {
        let mut roster = Roster::with_capacity(4);
        roster.push(record("VER", "Max Verstappen", 400, 30)).unwrap();
        roster.push(record("HAM", "Lewis Hamilton", 380, 25)).unwrap();
        roster.push(record("LEC", "Charles Leclerc", 380, 22)).unwrap();
        roster.push(record("NOR", "Lando Norris", 250, 24)).unwrap();
        roster
    }

    #[test]
    fn test_roster_push_and_get() {
        let roster = sample();

        assert_eq!(roster.len(), 4);
        assert!(!roster.is_empty());
        assert_eq!(roster.id_of("HAM").map(CompetitorId::index), Some(1));
        assert_eq!(roster.get_by_code("LEC").unwrap().name, "Charles Leclerc");
        assert!(roster.get_by_code("XXX").is_none());
    }

    #[test]
    fn test_roster_rejects_duplicate_code() {
        let mut roster = sample();
        let err = roster.push(record("VER", "Clone", 0, 0)).unwrap_err();

        assert!(matches!(err, RankingError::DuplicateKey(code) if code == "VER"));
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_roster_add_score() {
        let mut roster = sample();

        assert_eq!(roster.add_score("NOR", 25).unwrap(), 275);
        assert_eq!(roster.get_by_code("NOR").unwrap().score, 275);
        assert!(matches!(
            roster.add_score("XXX", 1),
            Err(RankingError::NotFound(_))
        ));
    }

    #[test]
    fn test_roster_ranking_tree_reflects_updates() {
        let mut roster = sample();
        roster.add_score("LEC", 30).unwrap();

        let tree = roster.ranking_tree();
        let codes: Vec<_> = tree.iter().map(|r| r.code.as_str()).collect();

        assert_eq!(codes, ["LEC", "VER", "HAM", "NOR"]);
    }

    #[test]
    fn test_roster_search_index() {
        let roster = sample();
        let trie = roster.search_index();

        let ham = trie.resolve_exact(&roster, "lewis hamilton").unwrap();
        assert_eq!(ham.code, "HAM");
        assert_eq!(trie.resolve_exact(&roster, "nor").unwrap().code, "NOR");
    }

    #[test]
    fn test_roster_sorted_views() {
        let roster = sample();

        let by_score: Vec<_> = roster.sorted_by_score().into_iter().map(|r| r.score).collect();
        assert_eq!(by_score, [400, 380, 380, 250]);

        let by_price: Vec<_> = roster.sorted_by_price().into_iter().map(|r| r.code).collect();
        assert_eq!(by_price, ["LEC", "NOR", "HAM", "VER"]);

        // Source order is untouched
        assert_eq!(roster.records()[0].code, "VER");
    }

    #[test]
    fn test_roster_from_iter_skips_duplicates() {
        let roster: Roster = vec![record("A", "a", 1, 1), record("A", "b", 2, 2), record("B", "c", 3, 3)]
            .into_iter()
            .collect();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get_by_code("A").unwrap().name, "a");
    }
}
