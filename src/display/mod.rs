//! Display formatting for terminal output

pub mod ledger;

pub use ledger::{format_expense_table, format_ledger, format_remaining};
