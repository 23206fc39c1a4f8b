//! Core data models for expense-ledger

pub mod amount;
pub mod entry;

pub use amount::{parse_budget, parse_integer, Balance};
pub use entry::{EntryDraft, ExpenseEntry};
