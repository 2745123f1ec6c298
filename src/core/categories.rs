use std::collections::BTreeSet;

use super::{Transaction, TransactionKind};

/// Picker entry that stands for "create a new category".
///
/// It is never a valid category name; drafts carrying it are rejected.
pub const CUSTOM_SENTINEL: &str = "Add New Category...";

const INCOME_DEFAULTS: [&str; 3] = ["Salary", "Freelance", "Investment"];
const EXPENSE_DEFAULTS: [&str; 4] = ["Food & Drinks", "Rent", "Utilities", "Transport"];

/// Per-kind ordered sets of known category names.
///
/// The registry is process-lifetime state: it starts from the built-in
/// defaults on every startup and grows monotonically as users add custom
/// names. It is never persisted; transactions referencing a custom category
/// outlive the registry entry (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    income: Vec<String>,
    expense: Vec<String>,
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            income: INCOME_DEFAULTS.iter().map(|s| s.to_string()).collect(),
            expense: EXPENSE_DEFAULTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CategoryRegistry {
    /// Returns the ordered category names registered for `kind`.
    pub fn categories_for(&self, kind: TransactionKind) -> &[String] {
        match kind {
            TransactionKind::Income => &self.income,
            TransactionKind::Expense => &self.expense,
        }
    }

    /// Appends `name` to the set for `kind` unless already present.
    pub fn add(&mut self, kind: TransactionKind, name: impl Into<String>) {
        let name = name.into();
        let set = match kind {
            TransactionKind::Income => &mut self.income,
            TransactionKind::Expense => &mut self.expense,
        };
        if !set.contains(&name) {
            set.push(name);
        }
    }

    pub fn contains(&self, kind: TransactionKind, name: &str) -> bool {
        self.categories_for(kind).iter().any(|c| c == name)
    }

    /// First registered category for `kind`, the fallback selection after a
    /// cancelled "add category" prompt.
    pub fn first_default(&self, kind: TransactionKind) -> Option<&str> {
        self.categories_for(kind).first().map(String::as_str)
    }

    /// Entries offered by the category picker: the sentinel first, then the
    /// registered names for `kind`.
    pub fn picker_entries(&self, kind: TransactionKind) -> Vec<String> {
        let mut entries = vec![CUSTOM_SENTINEL.to_string()];
        entries.extend(self.categories_for(kind).iter().cloned());
        entries
    }

    /// Sorted, de-duplicated union of every registered category of both
    /// kinds plus every category referenced by an existing transaction.
    /// Populates the filter control, so categories that only survive inside
    /// old transactions remain selectable.
    pub fn filter_options(&self, transactions: &[Transaction]) -> Vec<String> {
        let mut options: BTreeSet<String> = BTreeSet::new();
        options.extend(self.income.iter().cloned());
        options.extend(self.expense.iter().cloned());
        options.extend(transactions.iter().map(|t| t.category.clone()));
        options.into_iter().collect()
    }
}
