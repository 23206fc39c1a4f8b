//! Expense ledger: budget, entries and the derived remaining balance

pub mod balance;
pub mod store;

pub use balance::remaining_balance;
pub use store::{LedgerSnapshot, LedgerStore};
