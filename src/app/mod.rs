//! Controller wiring user actions to the ledger components.
//!
//! Every mutation re-runs the full load→compute→render cycle; there is no
//! incremental update path.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::core::{
    CUSTOM_SENTINEL, CategoryRegistry, DraftError, FILTER_ALL, SortOrder, Totals, Transaction,
    TransactionDraft, TransactionKind, filter_by_category, sort_by, totals,
};
use crate::export::{self, ExportError};
use crate::render::{BalanceTone, Chart, RowView, Surface};
use crate::storage::{KeyValueSlot, LedgerStore, StorageError};

/// Errors surfaced by controller actions.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Draft(DraftError),
    Storage(StorageError),
    Export(ExportError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Draft(e) => write!(f, "{e}"),
            AppError::Storage(e) => write!(f, "{e}"),
            AppError::Export(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Draft(e) => Some(e),
            AppError::Storage(e) => Some(e),
            AppError::Export(e) => Some(e),
        }
    }
}

impl From<DraftError> for AppError {
    fn from(e: DraftError) -> Self {
        AppError::Draft(e)
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

impl From<ExportError> for AppError {
    fn from(e: ExportError) -> Self {
        AppError::Export(e)
    }
}

/// Whether an error is a user-level notice (shown and swallowed) or a real
/// failure that should abort the process.
pub fn is_user_notice(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Draft(_) | AppError::Export(ExportError::Empty)
    )
}

/// The controller: owns the ledger store, the category registry and the
/// current view selections, and runs the refresh cycle after each action.
pub struct App<S: KeyValueSlot> {
    store: LedgerStore<S>,
    categories: CategoryRegistry,
    kind: TransactionKind,
    category_selection: String,
    filter: String,
    sort: SortOrder,
}

impl<S: KeyValueSlot> App<S> {
    /// Opens the controller over `slot`, loading any persisted ledger. The
    /// category registry always starts from the built-in defaults.
    pub fn open(slot: S) -> Result<Self, StorageError> {
        let store = LedgerStore::open(slot)?;
        let categories = CategoryRegistry::default();
        let category_selection = categories
            .first_default(TransactionKind::Income)
            .unwrap_or(CUSTOM_SENTINEL)
            .to_string();
        Ok(Self {
            store,
            categories,
            kind: TransactionKind::Income,
            category_selection,
            filter: FILTER_ALL.to_string(),
            sort: SortOrder::Unsorted,
        })
    }

    /// Switches the transaction kind and resets the category selection to
    /// the first default for that kind.
    pub fn set_kind(&mut self, kind: TransactionKind) {
        self.kind = kind;
        self.category_selection = self
            .categories
            .first_default(kind)
            .unwrap_or(CUSTOM_SENTINEL)
            .to_string();
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn category_selection(&self) -> &str {
        &self.category_selection
    }

    /// Applies a category picker choice.
    ///
    /// Choosing the "add new" sentinel consults `prompt`, the name entered
    /// in the follow-up prompt; `None` or an empty entry means the prompt
    /// was cancelled, which reverts the selection to the first default for
    /// the current kind (or the sentinel when none exists).
    pub fn select_category(&mut self, choice: &str, prompt: Option<&str>) {
        if choice != CUSTOM_SENTINEL {
            self.category_selection = choice.to_string();
            return;
        }
        match prompt {
            Some(name) if !name.trim().is_empty() => {
                self.categories.add(self.kind, name);
                self.category_selection = name.to_string();
            }
            _ => {
                self.category_selection = self
                    .categories
                    .first_default(self.kind)
                    .unwrap_or(CUSTOM_SENTINEL)
                    .to_string();
            }
        }
    }

    /// Selects `name` directly, registering it for the current kind when
    /// unseen. The non-interactive counterpart of the picker.
    pub fn choose_category(&mut self, name: &str) {
        if name != CUSTOM_SENTINEL && !name.trim().is_empty() {
            self.categories.add(self.kind, name);
        }
        self.category_selection = name.to_string();
    }

    /// Registers a custom category without changing the selection.
    pub fn add_category(&mut self, kind: TransactionKind, name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(DraftError::EmptyCategory.into());
        }
        self.categories.add(kind, name);
        Ok(())
    }

    pub fn categories_for(&self, kind: TransactionKind) -> &[String] {
        self.categories.categories_for(kind)
    }

    /// Entries for the category picker in the current kind.
    pub fn picker_entries(&self) -> Vec<String> {
        self.categories.picker_entries(self.kind)
    }

    /// Options for the filter control.
    pub fn filter_options(&self) -> Vec<String> {
        self.categories.filter_options(self.store.transactions())
    }

    /// Creates a transaction from the current kind and category selection.
    /// An unresolved sentinel selection is rejected before anything is
    /// stored. Returns the assigned id.
    pub fn submit(&mut self, amount: f64, date: NaiveDate, note: &str) -> Result<u64, AppError> {
        let draft = TransactionDraft::new(
            self.kind,
            self.category_selection.clone(),
            amount,
            date,
            note,
        )?;
        Ok(self.store.add(draft)?)
    }

    /// Deletes by id; unknown ids are silently ignored.
    pub fn delete(&mut self, id: u64) -> Result<(), AppError> {
        self.store.remove(id)?;
        Ok(())
    }

    pub fn set_filter(&mut self, selection: impl Into<String>) {
        self.filter = selection.into();
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort = order;
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// The sequence as currently projected: filtered, then stably sorted.
    pub fn visible(&self) -> Vec<Transaction> {
        let filtered = filter_by_category(self.store.transactions(), &self.filter);
        sort_by(&filtered, self.sort)
    }

    pub fn totals(&self) -> Totals {
        totals(self.store.transactions())
    }

    /// Serializes the ledger to CSV text.
    pub fn export_csv(&self) -> Result<String, AppError> {
        Ok(export::to_csv(self.store.transactions())?)
    }

    /// Writes the dated export file under `dir`. An empty ledger produces a
    /// notice-level error and no file.
    pub fn export_to(&self, dir: &Path) -> Result<PathBuf, AppError> {
        Ok(export::write_csv_file(self.store.transactions(), dir)?)
    }

    /// Full reload→recompute→render pass over the given surfaces.
    pub fn refresh(
        &mut self,
        surface: &mut dyn Surface,
        chart: &mut dyn Chart,
    ) -> Result<(), AppError> {
        self.store.load()?;
        let totals = self.totals();
        let tone = if totals.balance >= 0.0 {
            BalanceTone::Positive
        } else {
            BalanceTone::Negative
        };
        let rows: Vec<RowView> = self
            .visible()
            .iter()
            .map(RowView::from_transaction)
            .collect();
        debug!(rows = rows.len(), "rendering view");
        surface.show_totals(&totals, tone);
        surface.show_rows(&rows);
        chart.draw(totals.income, totals.expense);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    fn app() -> App<MemorySlot> {
        App::open(MemorySlot::new()).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn switching_kind_resets_the_selection() {
        let mut app = app();
        app.set_kind(TransactionKind::Expense);
        assert_eq!(app.category_selection(), "Food & Drinks");
        app.set_kind(TransactionKind::Income);
        assert_eq!(app.category_selection(), "Salary");
    }

    #[test]
    fn resolved_prompt_registers_and_selects_the_new_category() {
        let mut app = app();
        app.select_category(CUSTOM_SENTINEL, Some("Royalties"));
        assert_eq!(app.category_selection(), "Royalties");
        assert!(
            app.categories_for(TransactionKind::Income)
                .contains(&"Royalties".to_string())
        );
    }

    #[test]
    fn cancelled_prompt_reverts_to_the_first_default() {
        let mut app = app();
        app.set_kind(TransactionKind::Expense);
        app.select_category(CUSTOM_SENTINEL, None);
        assert_eq!(app.category_selection(), "Food & Drinks");
    }

    #[test]
    fn unresolved_sentinel_blocks_submission() {
        let mut app = app();
        app.category_selection = CUSTOM_SENTINEL.to_string();
        let err = app.submit(10.0, date("2024-01-01"), "").unwrap_err();
        assert_eq!(err, AppError::Draft(DraftError::UnresolvedCategory));
        assert!(app.transactions().is_empty());
    }

    #[test]
    fn submit_uses_the_current_selections() {
        let mut app = app();
        app.set_kind(TransactionKind::Expense);
        app.choose_category("Rent");
        app.submit(2000.0, date("2024-01-02"), "January").unwrap();
        let tx = &app.transactions()[0];
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.category, "Rent");
        assert_eq!(tx.amount, -2000.0);
    }

    #[test]
    fn empty_export_is_a_user_notice() {
        let app = app();
        let err = app.export_csv().unwrap_err();
        assert!(is_user_notice(&err));
    }
}
