//! Prefix trie over competitor names and codes.
//!
//! ## Keys
//!
//! Every competitor is reachable through two independent paths:
//!
//! - its name, lowercased with spaces removed (`"Max Verstappen"` -> `maxverstappen`)
//! - its code, lowercased (`"VER"` -> `ver`)
//!
//! Query text is lowercased and spaces are skipped while walking, so
//! `"max VER"` reaches the same node as `"maxver"`.
//!
//! ## Handles
//!
//! Terminal nodes hold a [`CompetitorId`], never a reference. Resolving a
//! handle goes through the [`Roster`] that issued it.

use std::collections::BTreeMap;

use crate::roster::{CompetitorId, Roster};
use crate::types::CompetitorRecord;

/// A trie node. Children are owned, one per character.
///
/// Keys can be arbitrarily long, so nothing here walks the node graph
/// recursively: traversal and teardown use an explicit stack.
#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    record: Option<CompetitorId>,
}

impl TrieNode {
    /// Collect every terminal handle at or below this node (depth-first,
    /// children in character order)
    fn collect(&self, out: &mut Vec<CompetitorId>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.terminal {
                if let Some(id) = node.record {
                    out.push(id);
                }
            }
            // Reversed so the smallest character is popped first
            stack.extend(node.children.values().rev());
        }
    }

    fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children.values());
        }
        count
    }

    /// Detach every descendant and free them one at a time
    fn drain(&mut self) {
        let mut stack: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

/// Character trie for exact and prefix competitor search.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been inserted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of terminal keys (names and codes; a shared key counts once)
    pub fn len(&self) -> usize {
        self.root.count_terminals()
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Index a competitor under its name and its code.
    ///
    /// Re-inserting a key overwrites the handle stored at its terminal node.
    pub fn insert(&mut self, id: CompetitorId, record: &CompetitorRecord) {
        self.insert_key(&record.search_name(), id);
        self.insert_key(&record.search_code(), id);
    }

    fn insert_key(&mut self, key: &str, id: CompetitorId) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        node.record = Some(id);
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Walk the normalized text, returning the node it ends on
    fn find_node(&self, text: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in text.chars().filter(|c| *c != ' ').flat_map(char::to_lowercase) {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Handle stored under exactly this name or code, if any
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
    ///     .push(CompetitorRecord::new("LEC", "Charles Leclerc", "Ferrari", 380, Decimal::from(22)))
    ///     .unwrap();
    /// let trie = roster.search_index();
    ///
    /// assert_eq!(trie.search_exact("Charles Leclerc"), Some(id));
    /// assert_eq!(trie.search_exact("LEC"), Some(id));
    /// assert_eq!(trie.search_exact("Charles"), None);
    /// ```
    pub fn search_exact(&self, text: &str) -> Option<CompetitorId> {
        let node = self.find_node(text)?;
        if node.terminal {
            node.record
        } else {
            None
        }
    }

    /// Every handle whose name or code starts with `prefix`.
    ///
    /// A competitor matching through both its name and its code appears
    /// twice. Callers must not rely on the order of the result.
    pub fn search_by_prefix(&self, prefix: &str) -> Vec<CompetitorId> {
        let mut ids = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            node.collect(&mut ids);
        }
        ids
    }

    // ========================================================================
    // Resolution against a roster
    // ========================================================================

    /// [`search_exact`](Self::search_exact) resolved to a record
    pub fn resolve_exact<'r>(&self, roster: &'r Roster, text: &str) -> Option<&'r CompetitorRecord> {
        self.search_exact(text).and_then(|id| roster.get(id))
    }

    /// [`search_by_prefix`](Self::search_by_prefix) resolved to records.
    ///
    /// Handles unknown to `roster` are skipped.
    pub fn resolve_prefix<'r>(&self, roster: &'r Roster, prefix: &str) -> Vec<&'r CompetitorRecord> {
        self.search_by_prefix(prefix)
            .into_iter()
            .filter_map(|id| roster.get(id))
            .collect()
    }

    /// Autocomplete suggestions rendered as `"Name (CODE)"`
    pub fn suggestions(&self, roster: &Roster, prefix: &str) -> Vec<String> {
        self.resolve_prefix(roster, prefix)
            .into_iter()
            .map(|r| format!("{} ({})", r.name, r.code))
            .collect()
    }

    // ========================================================================
    // Cleanup
    // ========================================================================

    /// Drop every node and start over with an empty root
    pub fn clear(&mut self) {
        self.root.drain();
        self.root = TrieNode::default();
    }
}

impl Drop for PrefixTrie {
    fn drop(&mut self) {
        self.root.drain();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        for (code, name) in [
            ("VER", "Max Verstappen"),
            ("HAM", "Lewis Hamilton"),
            ("LEC", "Charles Leclerc"),
            ("NOR", "Lando Norris"),
            ("LAW", "Liam Lawson"),
        ] {
            roster
                .push(CompetitorRecord::new(code, name, "Team", 0, Decimal::ZERO))
                .unwrap();
        }
        roster
    }

    fn codes(records: &[&CompetitorRecord]) -> Vec<String> {
        let mut codes: Vec<_> = records.iter().map(|r| r.code.clone()).collect();
        codes.sort();
        codes
    }

    #[test]
    fn test_trie_new() {
        let trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.search_by_prefix("").is_empty());
        assert!(trie.search_exact("").is_none());
    }

    #[test]
    fn test_exact_by_name_and_code() {
        let roster = roster();
        let trie = roster.search_index();

        let ver = roster.id_of("VER").unwrap();
        assert_eq!(trie.search_exact("maxverstappen"), Some(ver));
        assert_eq!(trie.search_exact("Max Verstappen"), Some(ver));
        assert_eq!(trie.search_exact("ver"), Some(ver));
        assert_eq!(trie.search_exact("VER"), Some(ver));
    }

    #[test]
    fn test_exact_requires_terminal() {
        let trie = roster().search_index();

        assert!(trie.search_exact("max").is_none());
        assert!(trie.search_exact("maxverstappenx").is_none());
    }

    #[test]
    fn test_prefix_search() {
        let roster = roster();
        let trie = roster.search_index();

        // "la" reaches the code "law" and the name "landonorris"
        assert_eq!(codes(&trie.resolve_prefix(&roster, "la")), ["LAW", "NOR"]);
        // "l" reaches every name or code starting with l
        assert_eq!(
            codes(&trie.resolve_prefix(&roster, "L")),
            ["HAM", "LAW", "LAW", "LEC", "NOR"]
        );
        assert!(trie.search_by_prefix("zz").is_empty());
    }

    #[test]
    fn test_prefix_skips_spaces() {
        let roster = roster();
        let trie = roster.search_index();

        assert_eq!(codes(&trie.resolve_prefix(&roster, "lewis ham")), ["HAM"]);
    }

    #[test]
    fn test_empty_prefix_returns_all() {
        let roster = roster();
        let trie = roster.search_index();

        let all = trie.search_by_prefix("");
        assert_eq!(all.len(), 10);
        for (id, _) in roster.iter() {
            assert_eq!(all.iter().filter(|x| **x == id).count(), 2);
        }
    }

    #[test]
    fn test_reinsert_is_idempotent() {
        let roster = roster();
        let mut trie = roster.search_index();
        let before = trie.len();

        let (id, record) = roster.iter().next().unwrap();
        trie.insert(id, record);

        assert_eq!(trie.len(), before);
        assert_eq!(trie.search_by_prefix("").len(), 10);
    }

    #[test]
    fn test_stale_handle_skipped() {
        let roster = roster();
        let trie = roster.search_index();
        let small = Roster::new();

        assert!(trie.search_exact("ver").is_some());
        assert!(trie.resolve_exact(&small, "ver").is_none());
        assert!(trie.resolve_prefix(&small, "").is_empty());
    }

    #[test]
    fn test_suggestions() {
        let roster = roster();
        let trie = roster.search_index();

        assert_eq!(trie.suggestions(&roster, "charles"), ["Charles Leclerc (LEC)"]);
    }

    #[test]
    fn test_clear() {
        let roster = roster();
        let mut trie = roster.search_index();

        trie.clear();

        assert!(trie.is_empty());
        assert!(trie.search_exact("ver").is_none());
    }

    #[test]
    fn test_very_long_name() {
        let mut roster = Roster::new();
        let name = "a".repeat(200_000);
        let id = roster
            .push(CompetitorRecord::new("AAA", name.as_str(), "Team", 0, Decimal::ZERO))
            .unwrap();

        let mut trie = roster.search_index();
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.search_by_prefix(""), [id, id]);
        assert_eq!(trie.search_exact(&name), Some(id));
        assert_eq!(trie.resolve_prefix(&roster, "aa").len(), 2);
        assert_eq!(trie.resolve_prefix(&roster, "aaaa").len(), 1);

        trie.clear();
        assert!(trie.is_empty());

        // Dropping a populated index must not recurse either
        drop(roster.search_index());
    }

    #[test]
    fn test_non_ascii_code_exact() {
        let mut roster = Roster::new();
        let id = roster
            .push(CompetitorRecord::new("ΑΣ", "Alpha Sigma", "Team", 0, Decimal::ZERO))
            .unwrap();
        let trie = roster.search_index();

        assert_eq!(trie.search_exact("ΑΣ"), Some(id));
        assert_eq!(trie.search_exact("ασ"), Some(id));
    }

    #[test]
    fn test_prefix_order_is_character_order() {
        let roster = roster();
        let trie = roster.search_index();

        let ids = trie.search_by_prefix("l");
        let keys: Vec<_> = ids.iter().map(|id| roster.get(*id).unwrap().code.as_str()).collect();
        // landonorris, law, lec, lewishamilton, liamlawson
        assert_eq!(keys, ["NOR", "LAW", "LEC", "HAM", "LAW"]);
    }
}
