//! Core ledger types: transactions, categories, totals and view projection.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

mod categories;
mod currency;
mod totals;
mod view;

pub use categories::{CUSTOM_SENTINEL, CategoryRegistry};
pub use currency::format_naira;
pub use totals::{Totals, totals};
pub use view::{FILTER_ALL, SortOrder, filter_by_category, sort_by};

/// Errors that can occur when creating a [`TransactionDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// The amount provided is not positive.
    NonPositiveAmount,
    /// The category name is empty.
    EmptyCategory,
    /// The "add new category" sentinel was submitted without being resolved
    /// to a real category name.
    UnresolvedCategory,
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::NonPositiveAmount => write!(f, "amount must be positive"),
            DraftError::EmptyCategory => write!(f, "category must not be empty"),
            DraftError::UnresolvedCategory => {
                write!(
                    f,
                    "please enter a new category name or select an existing one"
                )
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Label used in the persisted blob, the CSV export and the listing.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a transaction kind cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(String);

impl std::fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown transaction kind: {}", self.0)
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// One income or expense event in the ledger.
///
/// The stored `amount` is signed: negative if and only if the kind is
/// [`TransactionKind::Expense`], so the signed sum of a sequence equals its
/// net balance. The invariant is upheld by constructing transactions only
/// through [`TransactionDraft`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, derived from the creation time in Unix
    /// milliseconds and bumped on collision so ids stay strictly increasing.
    pub id: u64,
    /// Income or Expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Category label; drawn from or added to the category registry.
    pub category: String,
    /// Signed amount; negative iff the kind is Expense.
    pub amount: f64,
    /// Calendar date of the event.
    pub date: NaiveDate,
    /// Optional free-text note. Absent in older blobs, hence the default.
    #[serde(default)]
    pub note: String,
}

impl Transaction {
    /// Unsigned magnitude of the amount.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }
}

/// Validated input for a new transaction, before an id is assigned.
///
/// Drafts carry the amount as a positive magnitude; the sign convention is
/// applied when the draft is turned into a [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    kind: TransactionKind,
    category: String,
    amount: f64,
    date: NaiveDate,
    note: String,
}

impl TransactionDraft {
    /// Creates a draft after validating the amount and category.
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: f64,
        date: NaiveDate,
        note: impl Into<String>,
    ) -> Result<Self, DraftError> {
        let category = category.into();
        if !(amount > 0.0) {
            return Err(DraftError::NonPositiveAmount);
        }
        if category.trim().is_empty() {
            return Err(DraftError::EmptyCategory);
        }
        if category == CUSTOM_SENTINEL {
            return Err(DraftError::UnresolvedCategory);
        }
        Ok(Self {
            kind,
            category,
            amount,
            date,
            note: note.into(),
        })
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Finalizes the draft into a transaction with the given id, storing
    /// expenses as negative amounts and income as positive.
    pub(crate) fn into_transaction(self, id: u64) -> Transaction {
        let amount = match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        };
        Transaction {
            id,
            kind: self.kind,
            category: self.category,
            amount,
            date: self.date,
            note: self.note,
        }
    }
}
