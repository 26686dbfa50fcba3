//! Competitor ranking tree.
//!
//! ## Architecture
//!
//! The ranking is an AVL tree with:
//!
//! - **Slab-based storage**: every node lives in a `Slab`, children are keys
//! - **Ranking order**: score descending, then code ascending
//! - **Balance**: standard LL / RR / LR / RL rotations after each insert
//!
//! ## Components
//!
//! - [`RankingNode`]: Owned record copy plus child links and subtree height
//! - [`RankingTree`]: The tree itself, with ordered traversals and search
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert | O(log n) |
//! | Search by code | O(n) |
//! | Ordered traversal | O(n) |
//! | Top n | O(log n + n) |
//! | Clear | O(n) |
//!
//! ## Example
//!
//! ```
//! use fantasy_ranking::ranking::RankingTree;
//! use fantasy_ranking::types::CompetitorRecord;
//! use rust_decimal::Decimal;
//!
//! let mut tree = RankingTree::with_capacity(20);
//! tree.insert(CompetitorRecord::new("NOR", "Lando Norris", "McLaren", 250, Decimal::from(24)));
//!
//! assert_eq!(tree.top_n(1)[0].code, "NOR");
//! ```

pub mod node;
pub mod tree;

pub use node::RankingNode;
pub use tree::{Iter, RankingTree};
