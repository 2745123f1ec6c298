use std::cmp::Ordering;

use super::Transaction;

/// Filter selection that matches every category.
pub const FILTER_ALL: &str = "all";

/// Listing orders offered by the sort control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Date descending.
    Newest,
    /// Date ascending.
    Oldest,
    /// Absolute amount descending.
    AmountHigh,
    /// Original insertion order.
    #[default]
    Unsorted,
}

impl SortOrder {
    /// Maps a sort control value to an order. Unrecognized keys fall back to
    /// the identity order rather than erroring.
    pub fn from_key(key: &str) -> Self {
        match key {
            "newest" => SortOrder::Newest,
            "oldest" => SortOrder::Oldest,
            "amount-high" => SortOrder::AmountHigh,
            _ => SortOrder::Unsorted,
        }
    }
}

/// Returns the subsequence matching `selection`, or every element in order
/// when the [`FILTER_ALL`] sentinel is given.
pub fn filter_by_category(transactions: &[Transaction], selection: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| selection == FILTER_ALL || t.category == selection)
        .cloned()
        .collect()
}

/// Returns a reordered copy of the sequence. The sort is stable, so entries
/// that compare equal keep their original relative order.
pub fn sort_by(transactions: &[Transaction], order: SortOrder) -> Vec<Transaction> {
    let mut out = transactions.to_vec();
    match order {
        SortOrder::Newest => out.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => out.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::AmountHigh => out.sort_by(|a, b| {
            b.magnitude()
                .partial_cmp(&a.magnitude())
                .unwrap_or(Ordering::Equal)
        }),
        SortOrder::Unsorted => {}
    }
    out
}
