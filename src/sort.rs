//! In-place partition-exchange sorts for competitor slices.
//!
//! ## Partition Scheme
//!
//! Both sorts use the same partition over a subrange `low..=high`:
//!
//! 1. The pivot is the **first** element, `s[low]`.
//! 2. A cursor starts one past the end, at `high + 1`.
//! 3. `j` scans right to left from `high` down to `low + 1`. Every element
//!    that belongs after the pivot is swapped into `--cursor`.
//! 4. The pivot is swapped into `cursor - 1`, which is its final position.
//!
//! ```text
//! [ P | belongs before P ... | belongs after P ... ]
//!   low                cursor-1   cursor        high
//! ```
//!
//! Elements equal to the pivot belong after it. An input that is already in
//! target order is left untouched, so sorting twice is a no-op, but it is
//! also the worst case: O(n^2) comparisons. Recursion always takes the
//! smaller side, so the stack stays O(log n) regardless.

use crate::types::CompetitorRecord;

/// Sort by score, highest first. Ties keep no particular order.
///
/// # Example
///
/// ```
/// use fantasy_ranking::sort::sort_by_score_descending;
/// use fantasy_ranking::types::CompetitorRecord;
/// use rust_decimal::Decimal;
///
/// let mut records = vec![
///     CompetitorRecord::new("NOR", "Lando Norris", "McLaren", 250, Decimal::from(24)),
///     CompetitorRecord::new("VER", "Max Verstappen", "Red Bull", 400, Decimal::from(30)),
/// ];
/// sort_by_score_descending(&mut records);
/// assert_eq!(records[0].code, "VER");
/// ```
pub fn sort_by_score_descending(records: &mut [CompetitorRecord]) {
    quick_sort(records, &|candidate: &CompetitorRecord, pivot: &CompetitorRecord| {
        candidate.score <= pivot.score
    });
}

/// Sort by price, cheapest first. Ties keep no particular order.
pub fn sort_by_price_ascending(records: &mut [CompetitorRecord]) {
    quick_sort(records, &|candidate: &CompetitorRecord, pivot: &CompetitorRecord| {
        candidate.price >= pivot.price
    });
}

/// `belongs_after(candidate, pivot)` decides which side of the pivot an
/// element lands on.
///
/// Only the smaller side is sorted recursively; the loop continues on the
/// larger one, so stack depth stays O(log n) even on sorted or all-tied input.
fn quick_sort<T, F>(mut items: &mut [T], belongs_after: &F)
where
    F: Fn(&T, &T) -> bool,
{
    while items.len() >= 2 {
        let pivot = partition(items, belongs_after);
        let (before, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let after = &mut rest[1..];

        if before.len() < after.len() {
            quick_sort(before, belongs_after);
            items = after;
        } else {
            quick_sort(after, belongs_after);
            items = before;
        }
    }
}

/// Partition around `items[0]`, returning the pivot's final index.
fn partition<T, F>(items: &mut [T], belongs_after: &F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    let mut cursor = items.len();

    for j in (1..items.len()).rev() {
        if belongs_after(&items[j], &items[0]) {
            cursor -= 1;
            items.swap(cursor, j);
        }
    }

    items.swap(cursor - 1, 0);
    cursor - 1
}
