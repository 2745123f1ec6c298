//! Pocket Ledger
//!
//! This crate provides a single-user personal finance ledger: income and
//! expense entries are kept as an ordered sequence, mirrored wholesale to a
//! persistent key-value slot, and projected into running totals, a
//! filtered/sorted listing and a two-bar income/expense chart.

pub mod app;
pub mod core;
pub mod export;
pub mod render;
pub mod storage;
