//! Rendering surfaces the controller projects onto.
//!
//! The surfaces are external collaborators behind narrow traits; the crate
//! ships a plain-text implementation for the CLI.

use std::io::Write;

use crate::core::{Totals, Transaction, TransactionKind, format_naira};

/// Styling applied to the balance figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Positive,
    Negative,
}

/// View model for one visual row of the transaction listing.
///
/// Rows carry only display text plus the opaque id the delete affordance is
/// keyed by; the surface never reaches back into ledger state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: u64,
    pub icon: &'static str,
    pub category: String,
    pub note: String,
    pub date: String,
    pub amount: String,
}

impl RowView {
    /// Projects a transaction into its listing row. The amount is shown as
    /// a formatted positive magnitude; the icon carries the sign.
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            id: tx.id,
            icon: match tx.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
            },
            category: tx.category.clone(),
            note: tx.note.clone(),
            date: tx.date.to_string(),
            amount: format_naira(tx.magnitude()),
        }
    }
}

/// External rendering surface for totals, the listing and user notices.
pub trait Surface {
    fn show_totals(&mut self, totals: &Totals, tone: BalanceTone);
    fn show_rows(&mut self, rows: &[RowView]);
    fn notice(&mut self, message: &str);
}

/// External two-bar chart surface, redrawn in full after every recompute.
pub trait Chart {
    fn draw(&mut self, income: f64, expense: f64);
}

/// Plain-text surface writing to any [`Write`] sink.
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for TextSurface<W> {
    fn show_totals(&mut self, totals: &Totals, tone: BalanceTone) {
        let marker = match tone {
            BalanceTone::Positive => "positive",
            BalanceTone::Negative => "negative",
        };
        let _ = writeln!(
            self.out,
            "Balance: {} ({marker})",
            format_naira(totals.balance)
        );
        let _ = writeln!(self.out, "Income:  {}", format_naira(totals.income));
        let _ = writeln!(self.out, "Expense: {}", format_naira(totals.expense));
    }

    fn show_rows(&mut self, rows: &[RowView]) {
        if rows.is_empty() {
            let _ = writeln!(self.out, "No transactions recorded. Add one above!");
            return;
        }
        for row in rows {
            let _ = writeln!(
                self.out,
                "{} {} | {} | {} | {} [#{}]",
                row.icon, row.category, row.note, row.date, row.amount, row.id
            );
        }
    }

    fn notice(&mut self, message: &str) {
        let _ = writeln!(self.out, "! {message}");
    }
}

/// ASCII rendering of the two-bar income/expense chart.
pub struct TextChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: 40 }
    }

    fn bar(&self, value: f64, max: f64) -> String {
        if max <= 0.0 {
            return String::new();
        }
        let len = ((value / max) * self.width as f64).round() as usize;
        "#".repeat(len.min(self.width))
    }
}

impl<W: Write> Chart for TextChart<W> {
    fn draw(&mut self, income: f64, expense: f64) {
        let max = income.max(expense);
        let _ = writeln!(
            self.out,
            "Total Income  | {:<width$} {}",
            self.bar(income, max),
            format_naira(income),
            width = self.width
        );
        let _ = writeln!(
            self.out,
            "Total Expense | {:<width$} {}",
            self.bar(expense, max),
            format_naira(expense),
            width = self.width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::totals;
    use chrono::NaiveDate;

    fn tx() -> Transaction {
        Transaction {
            id: 9,
            kind: TransactionKind::Expense,
            category: "Rent".into(),
            amount: -2000.0,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            note: "January".into(),
        }
    }

    #[test]
    fn row_view_shows_magnitude_with_sign_icon() {
        let row = RowView::from_transaction(&tx());
        assert_eq!(row.icon, "-");
        assert_eq!(row.amount, "₦2,000.00");
        assert_eq!(row.id, 9);
        assert_eq!(row.date, "2024-01-02");
    }

    #[test]
    fn text_surface_renders_totals_and_rows() {
        let mut buf = Vec::new();
        {
            let mut surface = TextSurface::new(&mut buf);
            let t = totals(std::slice::from_ref(&tx()));
            surface.show_totals(&t, BalanceTone::Negative);
            surface.show_rows(&[RowView::from_transaction(&tx())]);
        }
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Balance: -₦2,000.00 (negative)"));
        assert!(text.contains("- Rent | January | 2024-01-02 | ₦2,000.00 [#9]"));
    }

    #[test]
    fn empty_listing_renders_a_placeholder() {
        let mut buf = Vec::new();
        {
            let mut surface = TextSurface::new(&mut buf);
            surface.show_rows(&[]);
        }
        assert!(String::from_utf8(buf).unwrap().contains("No transactions recorded"));
    }

    #[test]
    fn chart_bars_scale_to_the_larger_total() {
        let mut buf = Vec::new();
        {
            let mut chart = TextChart::new(&mut buf);
            chart.draw(4000.0, 2000.0);
        }
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let income_line = lines.next().unwrap();
        let expense_line = lines.next().unwrap();
        assert_eq!(income_line.matches('#').count(), 40);
        assert_eq!(expense_line.matches('#').count(), 20);
    }

    #[test]
    fn chart_with_no_data_draws_empty_bars() {
        let mut buf = Vec::new();
        {
            let mut chart = TextChart::new(&mut buf);
            chart.draw(0.0, 0.0);
        }
        assert_eq!(String::from_utf8(buf).unwrap().matches('#').count(), 0);
    }
}
