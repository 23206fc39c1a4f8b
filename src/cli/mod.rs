//! CLI command handlers
//!
//! Bridges clap argument parsing with the session gate and the dashboard.

pub mod account;
pub mod dashboard;

pub use account::{handle_account_command, sign_in, AccountCommands, PASSPHRASE_ENV};
pub use dashboard::{run as run_dashboard, SessionEnd};
