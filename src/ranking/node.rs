//! Ranking tree node for slab-based storage.
//!
//! ## Design
//!
//! `RankingNode` wraps an owned copy of a `CompetitorRecord` with the two
//! child links of a binary search tree and the AVL height of its subtree.
//!
//! ## Slab Integration
//!
//! Per the slab docs (https://docs.rs/slab/0.4.11):
//! - Keys are `usize` values returned by `slab.insert()`
//! - O(1) insert and lookup
//!
//! Children are slab keys, not boxes. A parent is the only node holding a
//! given child key, so the node graph is a tree by construction: rotations
//! only move existing keys between link slots.

use crate::types::CompetitorRecord;

/// Node stored in the ranking tree's slab.
///
/// ```text
/// RankingNode {
///     record: CompetitorRecord
///     left:   Option<usize>   records ranking strictly before this one
///     right:  Option<usize>   records not ranking before this one
///     height: u32             1 for a leaf
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RankingNode {
    /// The competitor held by this node
    pub record: CompetitorRecord,

    /// Left child (slab key)
    pub left: Option<usize>,

    /// Right child (slab key)
    pub right: Option<usize>,

    /// Height of the subtree rooted here
    pub height: u32,
}

impl RankingNode {
    /// Create a new leaf node
    ///
    /// # Example
    ///
    /// ```
    /// use fantasy_ranking::ranking::RankingNode;
    /// use fantasy_ranking::types::CompetitorRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 400, Decimal::from(30));
    /// let node = RankingNode::new(record);
    ///
    /// assert!(node.is_leaf());
    /// assert_eq!(node.height, 1);
    /// ```
    #[inline]
    pub fn new(record: CompetitorRecord) -> Self {
        Self {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Check if this node has no children
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.record.code
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.record.score
    }
}
