//! Competitor records and their ranking order.
//!
//! ## Ranking Order
//!
//! Competitors rank by score (highest first). Equal scores fall back to the
//! competitor code in ascending lexicographic order, which makes the order
//! total: two records compare equal only when both score and code match.
//!
//! ```text
//! VER 400  <  HAM 380  <  LEC 380  <  NOR 120
//! ```

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// A competitor (driver) taking part in the season.
///
/// `code` is the identity of the record. `score` is the only field that
/// changes during a season.
///
/// ## Example
///
/// ```
/// use fantasy_ranking::types::CompetitorRecord;
/// use rust_decimal::Decimal;
///
/// let ver = CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 400, Decimal::from(30));
/// let ham = CompetitorRecord::new("HAM", "Lewis Hamilton", "Ferrari", 380, Decimal::from(25));
///
/// assert!(ver.ranks_before(&ham));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompetitorRecord {
    /// Unique short code (e.g. "VER"), used as tiebreak and search key
    pub code: String,

    /// Display name, searchable with spaces removed
    pub name: String,

    /// Group (constructor team) the competitor drives for
    pub group: String,

    /// Season points
    pub score: i64,

    /// Price in millions
    pub price: Decimal,
}

impl CompetitorRecord {
    /// Create a new competitor record
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        group: impl Into<String>,
        score: i64,
        price: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            group: group.into(),
            score,
            price,
        }
    }

    /// Compare two records in ranking order (score desc, code asc).
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.code.cmp(&other.code))
    }

    /// True if `self` sorts strictly before `other` in ranking order.
    #[inline]
    pub fn ranks_before(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }

    /// Add race points, returning the new score
    pub fn add_score(&mut self, delta: i64) -> i64 {
        self.score = self.score.saturating_add(delta);
        self.score
    }

    /// Name lowercased with spaces removed, the form stored in the search index
    pub fn search_name(&self) -> String {
        self.name
            .chars()
            .filter(|c| *c != ' ')
            .flat_map(char::to_lowercase)
            .collect()
    }

    /// Code lowercased character by character (spaces kept), matching how
    /// queries are folded while walking the index
    pub fn search_code(&self) -> String {
        self.code.chars().flat_map(char::to_lowercase).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, score: i64) -> CompetitorRecord {
        CompetitorRecord::new(code, code, "Team", score, Decimal::ZERO)
    }

    #[test]
    fn test_higher_score_ranks_first() {
        assert!(record("NOR", 200).ranks_before(&record("ALO", 100)));
        assert!(!record("ALO", 100).ranks_before(&record("NOR", 200)));
    }

    #[test]
    fn test_code_breaks_ties() {
        let ham = record("HAM", 380);
        let lec = record("LEC", 380);

        assert!(ham.ranks_before(&lec));
        assert!(!lec.ranks_before(&ham));
        assert_eq!(ham.rank_cmp(&lec), Ordering::Less);
    }

    #[test]
    fn test_identical_key_is_not_before() {
        let a = record("VER", 400);
        let b = record("VER", 400);

        assert_eq!(a.rank_cmp(&b), Ordering::Equal);
        assert!(!a.ranks_before(&b));
    }

    #[test]
    fn test_empty_code_still_ordered() {
        assert!(record("", 10).ranks_before(&record("A", 10)));
    }

    #[test]
    fn test_add_score() {
        let mut r = record("PIA", 90);
        assert_eq!(r.add_score(25), 115);
        assert_eq!(r.add_score(-15), 100);
        assert_eq!(r.score, 100);
    }

    #[test]
    fn test_search_forms() {
        let r = CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 0, Decimal::ZERO);
        assert_eq!(r.search_name(), "maxverstappen");
        assert_eq!(r.search_code(), "ver");
    }

    #[test]
    fn test_search_code_folds_per_character() {
        // A word-final sigma folds to σ here, not ς
        let r = CompetitorRecord::new("ΑΣ", "Alpha Sigma", "Team", 0, Decimal::ZERO);
        assert_eq!(r.search_code(), "ασ");
    }
}
