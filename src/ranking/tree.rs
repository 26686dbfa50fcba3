//! AVL ranking tree implementation.
//!
//! ## Architecture
//!
//! - **Slab**: Arena storage for every node, links are slab keys
//! - **AVL balancing**: |height(left) - height(right)| <= 1 at every node
//!
//! ## Ordering
//!
//! The tree is keyed by (score desc, code asc). A record that ranks strictly
//! before a node goes left; everything else, including an exact duplicate,
//! goes right. An in-order walk therefore yields the ranking from first to
//! last place.
//!
//! Because the key is the score, looking a competitor up by code is a full
//! O(n) scan of both subtrees.
//!
//! ## Example
//!
//! ```
//! use fantasy_ranking::ranking::RankingTree;
//! use fantasy_ranking::types::CompetitorRecord;
//! use rust_decimal::Decimal;
//!
//! let mut tree = RankingTree::new();
//! tree.insert(CompetitorRecord::new("LEC", "Charles Leclerc", "Ferrari", 380, Decimal::from(22)));
//! tree.insert(CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 400, Decimal::from(30)));
//! tree.insert(CompetitorRecord::new("HAM", "Lewis Hamilton", "Ferrari", 380, Decimal::from(25)));
//!
//! let codes: Vec<_> = tree.iter().map(|r| r.code.as_str()).collect();
//! assert_eq!(codes, ["VER", "HAM", "LEC"]);
//! ```

use sha2::{Digest, Sha256};
use slab::Slab;
use tracing::trace;

use crate::ranking::RankingNode;
use crate::types::CompetitorRecord;

/// Height-balanced binary search tree of competitor records.
#[derive(Debug, Clone, Default)]
pub struct RankingTree {
    /// Node storage
    /// Key: slab index, Value: RankingNode
    nodes: Slab<RankingNode>,

    /// Root node (slab key), None when empty
    root: Option<usize>,
}

impl RankingTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            root: None,
        }
    }

    /// Create a tree with pre-allocated node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: None,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of records in the tree
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (0 when empty)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height_of(self.root)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a copy of a competitor record.
    ///
    /// The record is placed by ranking order and the tree is rebalanced on
    /// the way back up. Duplicates are accepted.
    pub fn insert(&mut self, record: CompetitorRecord) {
        let new_key = self.nodes.insert(RankingNode::new(record));
        let root = self.insert_at(self.root, new_key);
        self.root = Some(root);
    }

    /// Link `new_key` into the subtree rooted at `node`, returning the
    /// subtree's new root.
    fn insert_at(&mut self, node: Option<usize>, new_key: usize) -> usize {
        let Some(key) = node else {
            return new_key;
        };

        if self.ranks_before(new_key, key) {
            let left = self.nodes[key].left;
            let child = self.insert_at(left, new_key);
            self.nodes[key].left = Some(child);
        } else {
            let right = self.nodes[key].right;
            let child = self.insert_at(right, new_key);
            self.nodes[key].right = Some(child);
        }

        self.update_height(key);
        self.rebalance(key, new_key)
    }

    /// Restore the AVL invariant at `key` after `new_key` was linked below it.
    ///
    /// The rotation shape is picked by re-running the insertion comparison
    /// against the child on the heavy side: the side of that child the new
    /// record descended into tells the single and double rotation cases apart.
    fn rebalance(&mut self, key: usize, new_key: usize) -> usize {
        let balance = self.balance_factor(key);

        if balance > 1 {
            if let Some(left) = self.nodes[key].left {
                if self.ranks_before(new_key, left) {
                    // Left-Left
                    return self.rotate_right(key);
                }
                // Left-Right
                let pivot = self.rotate_left(left);
                self.nodes[key].left = Some(pivot);
                return self.rotate_right(key);
            }
        }

        if balance < -1 {
            if let Some(right) = self.nodes[key].right {
                if !self.ranks_before(new_key, right) {
                    // Right-Right
                    return self.rotate_left(key);
                }
                // Right-Left
                let pivot = self.rotate_right(right);
                self.nodes[key].right = Some(pivot);
                return self.rotate_left(key);
            }
        }

        key
    }

    // ========================================================================
    // Rotations
    // ========================================================================

    /// Right rotation around `y`:
    ///
    /// ```text
    ///       y                x
    ///      / \              / \
    ///     x   C    --->    A   y
    ///    / \                  / \
    ///   A   B                B   C
    /// ```
    fn rotate_right(&mut self, y: usize) -> usize {
        let Some(x) = self.nodes[y].left else {
            return y;
        };
        let b = self.nodes[x].right;

        self.nodes[x].right = Some(y);
        self.nodes[y].left = b;

        self.update_height(y);
        self.update_height(x);

        trace!(pivot = self.nodes[x].code(), "rotate right");
        x
    }

    /// Left rotation around `x`:
    ///
    /// ```text
    ///     x                    y
    ///    / \                  / \
    ///   A   y      --->      x   C
    ///      / \              / \
    ///     B   C            A   B
    /// ```
    fn rotate_left(&mut self, x: usize) -> usize {
        let Some(y) = self.nodes[x].right else {
            return x;
        };
        let b = self.nodes[y].left;

        self.nodes[y].left = Some(x);
        self.nodes[x].right = b;

        self.update_height(x);
        self.update_height(y);

        trace!(pivot = self.nodes[y].code(), "rotate left");
        y
    }

    // ========================================================================
    // Height Helpers
    // ========================================================================

    #[inline]
    fn height_of(&self, key: Option<usize>) -> u32 {
        key.and_then(|k| self.nodes.get(k)).map_or(0, |n| n.height)
    }

    /// height(left) - height(right)
    #[inline]
    fn balance_factor(&self, key: usize) -> i64 {
        let node = &self.nodes[key];
        i64::from(self.height_of(node.left)) - i64::from(self.height_of(node.right))
    }

    fn update_height(&mut self, key: usize) {
        let (left, right) = {
            let node = &self.nodes[key];
            (node.left, node.right)
        };
        let height = 1 + self.height_of(left).max(self.height_of(right));
        self.nodes[key].height = height;
    }

    #[inline]
    fn ranks_before(&self, a: usize, b: usize) -> bool {
        self.nodes[a].record.ranks_before(&self.nodes[b].record)
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Find a record by competitor code.
    ///
    /// Scans both subtrees since the tree is not organized by code.
    pub fn search(&self, code: &str) -> Option<&CompetitorRecord> {
        self.search_node(self.root, code)
            .map(|key| &self.nodes[key].record)
    }

    fn search_node(&self, node: Option<usize>, code: &str) -> Option<usize> {
        let key = node?;
        let current = &self.nodes[key];

        if current.code() == code {
            return Some(key);
        }

        self.search_node(current.left, code)
            .or_else(|| self.search_node(current.right, code))
    }

    /// Check if a competitor code is present
    #[inline]
    pub fn contains(&self, code: &str) -> bool {
        self.search(code).is_some()
    }

    // ========================================================================
    // Traversals
    // ========================================================================

    /// Iterate records from first to last place (in-order)
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.root)
    }

    /// All records, highest score first
    pub fn ordered_descending(&self) -> Vec<CompetitorRecord> {
        self.iter().cloned().collect()
    }

    /// All records, lowest score first (reverse in-order)
    pub fn ordered_ascending(&self) -> Vec<CompetitorRecord> {
        let mut result = Vec::with_capacity(self.len());
        self.reverse_in_order(self.root, &mut result);
        result
    }

    fn reverse_in_order(&self, node: Option<usize>, result: &mut Vec<CompetitorRecord>) {
        let Some(key) = node else {
            return;
        };
        let current = &self.nodes[key];

        self.reverse_in_order(current.right, result);
        result.push(current.record.clone());
        self.reverse_in_order(current.left, result);
    }

    /// The first `n` records of the ranking, or fewer if the tree is smaller
    pub fn top_n(&self, n: usize) -> Vec<CompetitorRecord> {
        self.iter().take(n).cloned().collect()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the AVL invariant and stored heights at every node
    pub fn is_balanced(&self) -> bool {
        self.checked_height(self.root).is_some()
    }

    fn checked_height(&self, node: Option<usize>) -> Option<u32> {
        let Some(key) = node else {
            return Some(0);
        };
        let current = &self.nodes[key];

        let left = self.checked_height(current.left)?;
        let right = self.checked_height(current.right)?;

        if left.abs_diff(right) > 1 || current.height != 1 + left.max(right) {
            return None;
        }
        Some(current.height)
    }

    /// Check that the in-order walk never goes backwards in ranking order
    pub fn is_ordered(&self) -> bool {
        let mut iter = self.iter();
        let Some(mut prev) = iter.next() else {
            return true;
        };
        for record in iter {
            if record.ranks_before(prev) {
                return false;
            }
            prev = record;
        }
        true
    }

    // ========================================================================
    // Digest
    // ========================================================================

    /// SHA-256 over the ranking (code and score of every record, in order).
    ///
    /// Two trees holding the same ranking produce the same digest regardless
    /// of their internal shape.
    pub fn digest(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for record in self.iter() {
            hasher.update(record.code.as_bytes());
            hasher.update([0u8]);
            hasher.update(record.score.to_le_bytes());
        }

        let mut hash = [0u8; 32];
        hash.copy_from_slice(&hasher.finalize());
        hash
    }

    /// Digest as a hex string
    pub fn digest_hex(&self) -> String {
        hex::encode(self.digest())
    }

    // ========================================================================
    // Cleanup
    // ========================================================================

    /// Release every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl Extend<CompetitorRecord> for RankingTree {
    fn extend<I: IntoIterator<Item = CompetitorRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<CompetitorRecord> for RankingTree {
    fn from_iter<I: IntoIterator<Item = CompetitorRecord>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// In-order iterator over a [`RankingTree`], first place first.
pub struct Iter<'a> {
    nodes: &'a Slab<RankingNode>,
    stack: Vec<usize>,
}

impl<'a> Iter<'a> {
    fn new(nodes: &'a Slab<RankingNode>, root: Option<usize>) -> Self {
        let mut iter = Self {
            nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<usize>) {
        while let Some(key) = node {
            self.stack.push(key);
            node = self.nodes[key].left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CompetitorRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[key];
        self.push_left_spine(node.right);
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a RankingTree {
    type Item = &'a CompetitorRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
