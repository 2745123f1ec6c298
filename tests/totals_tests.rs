use chrono::NaiveDate;
use pocket_ledger::app::App;
use pocket_ledger::core::{TransactionKind, totals};
use pocket_ledger::storage::MemorySlot;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn salary_and_rent_scenario() {
    let mut app = App::open(MemorySlot::new()).unwrap();
    app.set_kind(TransactionKind::Income);
    app.choose_category("Salary");
    app.submit(5000.0, date("2024-01-01"), "").unwrap();
    app.set_kind(TransactionKind::Expense);
    app.choose_category("Rent");
    app.submit(2000.0, date("2024-01-02"), "").unwrap();

    let t = app.totals();
    assert_eq!(t.income, 5000.0);
    assert_eq!(t.expense, 2000.0);
    assert_eq!(t.balance, 3000.0);
}

#[test]
fn balance_invariant_holds_under_adds_and_removes() {
    let mut app = App::open(MemorySlot::new()).unwrap();
    let mut ids = Vec::new();
    for (kind, category, amount) in [
        (TransactionKind::Income, "Salary", 1200.0),
        (TransactionKind::Expense, "Transport", 80.0),
        (TransactionKind::Income, "Freelance", 300.0),
        (TransactionKind::Expense, "Utilities", 150.0),
    ] {
        app.set_kind(kind);
        app.choose_category(category);
        ids.push(app.submit(amount, date("2024-02-01"), "").unwrap());
    }
    app.delete(ids[1]).unwrap();
    app.delete(987654321).unwrap(); // unknown id, no-op

    let t = totals(app.transactions());
    assert_eq!(t.balance, t.income - t.expense);
    assert_eq!(t.income, 1500.0);
    assert_eq!(t.expense, 150.0);
}
