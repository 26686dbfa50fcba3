//! Value types consumed and produced by the ranking structures.
//!
//! ## Types
//!
//! - [`CompetitorRecord`]: A driver with a score, a code and a price
//! - [`ParticipantRecord`]: A league player with an aggregate score
//! - [`TeamRef`]: The group and competitor codes a participant picked
//! - [`LeaderboardEntry`]: A ranked snapshot of a participant
//! - [`ParticipantStats`]: Rank and average comparison for one participant
//!
//! Prices and budgets are [`rust_decimal::Decimal`] values, see [`money`].

mod competitor;
mod participant;
pub mod money;

pub use competitor::CompetitorRecord;
pub use participant::{LeaderboardEntry, ParticipantRecord, ParticipantStats, TeamRef};
