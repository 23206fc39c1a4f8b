//! Dashboard view state
//!
//! Ties one [`LedgerStore`] to the session it lives under. The dashboard
//! is created after sign-in and dropped on logout or when the user leaves,
//! taking the ledger with it.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExpenseResult;
use crate::export::{to_mail_payload, write_text_export, MailPayload};
use crate::ledger::LedgerStore;
use crate::session::SessionGate;

/// Banner text shown when ending the session fails
pub const LOGOUT_FAILED: &str = "Failed to log out";

/// The signed-in expense calculator
pub struct Dashboard<G: SessionGate> {
    gate: G,
    ledger: LedgerStore,
    error: Option<String>,
    email_sent: bool,
}

impl<G: SessionGate> Dashboard<G> {
    /// Open a dashboard with an empty ledger
    ///
    /// Fails if the gate has no signed-in user.
    pub fn open(gate: G) -> ExpenseResult<Self> {
        let identity = gate.current_identity()?;
        info!(email = %identity.email, "dashboard opened");
        Ok(Self {
            gate,
            ledger: LedgerStore::new(),
            error: None,
            email_sent: false,
        })
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut LedgerStore {
        &mut self.ledger
    }

    /// The signed-in user's address
    pub fn email(&self) -> ExpenseResult<String> {
        Ok(self.gate.current_identity()?.email)
    }

    /// The error banner, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a mail payload has been handed out since the last logout attempt
    pub fn email_sent(&self) -> bool {
        self.email_sent
    }

    /// Add the entry held in the form
    pub fn submit(&mut self) {
        self.ledger.submit_draft();
    }

    /// Write the text export into `dir`
    pub fn download(&self, dir: &Path, file_name: &str) -> ExpenseResult<PathBuf> {
        write_text_export(dir, file_name, &self.ledger.snapshot())
    }

    /// Build the email addressed to the signed-in user
    pub fn share(&mut self) -> ExpenseResult<MailPayload> {
        let email = self.email()?;
        let payload = to_mail_payload(&self.ledger.snapshot(), &email);
        self.email_sent = true;
        Ok(payload)
    }

    /// End the session
    ///
    /// On failure the banner reads [`LOGOUT_FAILED`], the ledger is kept and
    /// the dashboard stays usable. On success the caller should drop the
    /// dashboard.
    pub fn logout(&mut self) -> ExpenseResult<()> {
        self.error = None;
        self.email_sent = false;

        match self.gate.invalidate() {
            Ok(()) => {
                info!(entries = self.ledger.len(), "ledger discarded on logout");
                Ok(())
            }
            Err(e) => {
                self.error = Some(LOGOUT_FAILED.to_string());
                Err(e)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn into_gate(self) -> G {
        self.gate
    }
}
