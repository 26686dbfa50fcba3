//! Competitor search.
//!
//! [`PrefixTrie`] answers exact and prefix queries over competitor names and
//! codes. It stores [`CompetitorId`](crate::roster::CompetitorId) handles into
//! a [`Roster`](crate::roster::Roster) rather than the records themselves.
//!
//! ## Example
//!
//! ```
//! use fantasy_ranking::roster::Roster;
//! use fantasy_ranking::types::CompetitorRecord;
//! use rust_decimal::Decimal;
//!
//! let mut roster = Roster::new();
//! roster.push(CompetitorRecord::new("HAM", "Lewis Hamilton", "Ferrari", 380, Decimal::from(25))).unwrap();
//! roster.push(CompetitorRecord::new("HUL", "Nico Hulkenberg", "Sauber", 40, Decimal::from(7))).unwrap();
//!
//! let trie = roster.search_index();
//! assert_eq!(trie.resolve_prefix(&roster, "h").len(), 2);
//! ```

pub mod trie;

pub use trie::PrefixTrie;
