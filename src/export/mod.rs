//! CSV export of the transaction sequence.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use csv::WriterBuilder;
use tracing::info;

use crate::core::Transaction;

/// Header row of the export, fixed by the file format.
pub const CSV_HEADER: [&str; 6] = ["ID", "Date", "Type", "Category", "Amount (NGN)", "Note"];

/// Errors that can occur while exporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// There are no transactions to export; no file is produced.
    Empty,
    /// Writing the CSV output failed.
    Write(String),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Empty => write!(f, "no data to export"),
            ExportError::Write(e) => write!(f, "export write error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Serializes the sequence to CSV text.
///
/// Amounts are exported as the signed stored value with exactly two decimal
/// places, so expense rows carry a negative number even though the on-screen
/// expense total is a positive magnitude. Commas are stripped from notes, a
/// deliberately lossy transform that keeps the columns aligned for naive
/// consumers.
pub fn to_csv(transactions: &[Transaction]) -> Result<String, ExportError> {
    if transactions.is_empty() {
        return Err(ExportError::Empty);
    }
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());
    wtr.write_record(CSV_HEADER)
        .map_err(|e| ExportError::Write(e.to_string()))?;
    for tx in transactions {
        wtr.write_record([
            tx.id.to_string(),
            tx.date.to_string(),
            tx.kind.label().to_string(),
            tx.category.clone(),
            format!("{:.2}", tx.amount),
            tx.note.replace(',', ""),
        ])
        .map_err(|e| ExportError::Write(e.to_string()))?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| ExportError::Write(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Write(e.to_string()))
}

/// File name for an export produced on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("finance_tracker_export_{date}.csv")
}

/// Writes the dated export file under `dir` and returns its path.
pub fn write_csv_file(transactions: &[Transaction], dir: &Path) -> Result<PathBuf, ExportError> {
    let content = to_csv(transactions)?;
    std::fs::create_dir_all(dir).map_err(|e| ExportError::Write(e.to_string()))?;
    let path = dir.join(export_file_name(Utc::now().date_naive()));
    std::fs::write(&path, content).map_err(|e| ExportError::Write(e.to_string()))?;
    info!(path = %path.display(), rows = transactions.len(), "wrote csv export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionKind;
    use chrono::NaiveDate;

    fn tx(id: u64, kind: TransactionKind, category: &str, amount: f64, note: &str) -> Transaction {
        Transaction {
            id,
            kind,
            category: category.into(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 1, if kind == TransactionKind::Income { 1 } else { 2 })
                .unwrap(),
            note: note.into(),
        }
    }

    #[test]
    fn exports_header_and_signed_amounts() {
        let ts = vec![
            tx(1, TransactionKind::Income, "Salary", 5000.0, ""),
            tx(2, TransactionKind::Expense, "Rent", -2000.0, ""),
        ];
        let csv = to_csv(&ts).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,Date,Type,Category,Amount (NGN),Note");
        assert_eq!(lines[1], "1,2024-01-01,Income,Salary,5000.00,");
        assert_eq!(lines[2], "2,2024-01-02,Expense,Rent,-2000.00,");
    }

    #[test]
    fn strips_commas_from_notes() {
        let ts = vec![tx(
            7,
            TransactionKind::Expense,
            "Food & Drinks",
            -12.5,
            "bread, milk, eggs",
        )];
        let csv = to_csv(&ts).unwrap();
        assert!(csv.lines().nth(1).unwrap().ends_with("bread milk eggs"));
    }

    #[test]
    fn empty_sequence_signals_the_empty_export_condition() {
        assert_eq!(to_csv(&[]).unwrap_err(), ExportError::Empty);
    }

    #[test]
    fn file_name_embeds_the_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_file_name(date), "finance_tracker_export_2024-03-09.csv");
    }

    #[test]
    fn empty_export_produces_no_file() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            write_csv_file(&[], dir.path()).unwrap_err(),
            ExportError::Empty
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn writes_the_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let ts = vec![tx(1, TransactionKind::Income, "Salary", 5000.0, "")];
        let path = write_csv_file(&ts, dir.path()).unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("finance_tracker_export_"));
        assert!(name.ends_with(".csv"));
    }
}
