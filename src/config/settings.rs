//! User settings for expense-ledger
//!
//! Export naming, passphrase policy, and the default log filter.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;
use crate::storage::file_io::{read_json, write_json_atomic};

/// Default name of the downloaded ledger file
pub const DEFAULT_EXPORT_FILE_NAME: &str = "expense-list.txt";

/// User settings for expense-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File name used by `download`
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,

    /// Directory `download` writes into (current directory when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Minimum passphrase length enforced at sign-up
    #[serde(default = "default_min_passphrase_len")]
    pub min_passphrase_len: usize,

    /// tracing filter used when RUST_LOG is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE_NAME.to_string()
}

fn default_min_passphrase_len() -> usize {
    8
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_file_name: default_export_file_name(),
            export_dir: None,
            min_passphrase_len: default_min_passphrase_len(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        read_json(paths.settings_file()).map_err(|e| {
            ExpenseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Directory the text export is written to
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
