//! Storage layer for expense-ledger
//!
//! JSON files for settings and credentials. The expense ledger has no
//! storage counterpart: it lives only as long as the dashboard holding it.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic, write_json_atomic_with, FileAccess};
