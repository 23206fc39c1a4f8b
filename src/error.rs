//! Custom error types for expense-ledger
//!
//! The ledger itself never fails: malformed numbers flow through to the
//! balance as an undefined value. Errors come from the session gate, the
//! configuration layer, and the export file boundary.

use thiserror::Error;

/// The main error type for expense-ledger operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (credential and settings files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for user-supplied account data
    #[error("Validation error: {0}")]
    Validation(String),

    /// Sign-up / sign-in failures
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The session has been invalidated or was never established
    #[error("Not signed in")]
    NotAuthenticated,

    /// Session invalidation failed
    #[error("Session error: {0}")]
    Session(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Check if this is a session error
    pub fn is_session(&self) -> bool {
        matches!(self, Self::Session(_))
    }

    /// Check if this is an authentication error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_) | Self::NotAuthenticated)
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense-ledger operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
