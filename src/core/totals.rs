use super::{Transaction, TransactionKind};

/// Aggregate figures derived from a transaction sequence.
///
/// `expense` is a positive magnitude even though expense amounts are stored
/// negative; `balance` is always `income - expense`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Computes income, expense and balance in a single pass.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => expense += tx.magnitude(),
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tx(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            id: 0,
            kind,
            category: "test".into(),
            amount,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn empty_sequence_yields_zeroes() {
        assert_eq!(totals(&[]), Totals::default());
    }

    #[test]
    fn income_minus_expense_equals_balance() {
        let ts = vec![
            tx(TransactionKind::Income, 5000.0),
            tx(TransactionKind::Expense, -2000.0),
        ];
        let t = totals(&ts);
        assert_eq!(t.income, 5000.0);
        assert_eq!(t.expense, 2000.0);
        assert_eq!(t.balance, 3000.0);
    }

    #[test]
    fn expense_total_is_a_positive_magnitude() {
        let ts = vec![
            tx(TransactionKind::Expense, -30.0),
            tx(TransactionKind::Expense, -70.0),
        ];
        let t = totals(&ts);
        assert_eq!(t.expense, 100.0);
        assert_eq!(t.balance, -100.0);
    }
}
