//! Session gate
//!
//! The dashboard only runs behind an authenticated session. It needs two
//! things from it: the signed-in user's address (the recipient of shared
//! ledgers) and a way to end the session. Both are expressed by
//! [`SessionGate`], which is handed to the dashboard explicitly.

pub mod credentials;
pub mod local;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ExpenseResult;

pub use credentials::{Credential, CredentialStore};
pub use local::LocalSessionGate;

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Source of the current identity and the way to end a session
pub trait SessionGate {
    /// The signed-in user
    ///
    /// Fails with [`crate::ExpenseError::NotAuthenticated`] once the session
    /// has been invalidated.
    fn current_identity(&self) -> ExpenseResult<Identity>;

    /// End the session
    ///
    /// On failure the session stays valid and the error is returned to the
    /// caller.
    fn invalidate(&mut self) -> ExpenseResult<()>;
}
