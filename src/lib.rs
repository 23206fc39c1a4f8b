//! expense-ledger - a terminal expense tracker
//!
//! A signed-in user declares a fixed budget, records dated expenses, and
//! sees the remaining amount. The expense list can be saved as a text file
//! or turned into an email addressed to the user.
//!
//! # Architecture
//!
//! - `ledger`: the in-memory budget and entry list, and the balance formula
//! - `export`: plain-text and `mailto:` renderings of a ledger
//! - `session`: the session gate and its file-backed implementation
//! - `dashboard`: one ledger bound to one session
//! - `config`: path resolution and settings
//! - `cli`, `display`: terminal front end
//!
//! The ledger is never persisted. It lives as long as the dashboard.
//!
//! # Example
//!
//! ```
//! use expense_ledger::export::to_plain_text;
//! use expense_ledger::ledger::LedgerStore;
//!
//! let mut ledger = LedgerStore::new();
//! ledger.set_budget("500");
//! ledger.add_entry("Groceries", "120", "2024-01-05");
//!
//! assert_eq!(ledger.remaining_balance().to_string(), "380");
//! assert_eq!(
//!     to_plain_text(&ledger.snapshot()),
//!     "Expense List:\n1. Item Name: Groceries, Expense Amount: 120, Date: 2024-01-05"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod session;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
