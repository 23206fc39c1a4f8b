//! File-backed session gate
//!
//! Sign-up, sign-in and passphrase changes against the local credential
//! store. A signed-in [`LocalSessionGate`] is what the dashboard receives.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use super::credentials::{Credential, CredentialStore};
use super::{Identity, SessionGate};
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};

/// Message shown for any failed sign-in, whatever the cause
pub const SIGN_IN_FAILED: &str = "Failed to log in";

/// An authenticated session backed by `credentials.json`
#[derive(Debug)]
pub struct LocalSessionGate {
    credentials_path: PathBuf,
    email: String,
    signed_in_at: DateTime<Utc>,
    active: bool,
}

fn validate_email(email: &str) -> ExpenseResult<()> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ExpenseError::Validation(format!(
            "Invalid email address: {}",
            email
        ))),
    }
}

fn validate_passphrase(passphrase: &str, settings: &Settings) -> ExpenseResult<()> {
    if passphrase.chars().count() < settings.min_passphrase_len {
        return Err(ExpenseError::Validation(format!(
            "Passphrase must be at least {} characters",
            settings.min_passphrase_len
        )));
    }
    Ok(())
}

impl LocalSessionGate {
    /// Register a new account
    pub fn sign_up(
        paths: &ExpensePaths,
        settings: &Settings,
        email: &str,
        passphrase: &str,
    ) -> ExpenseResult<()> {
        let email = email.trim();
        validate_email(email)?;
        validate_passphrase(passphrase, settings)?;

        let path = paths.credentials_file();
        let mut store = CredentialStore::load(&path)?;
        store.insert(Credential::new(email, passphrase)?)?;
        store.save(&path)?;

        info!(email, "account created");
        Ok(())
    }

    /// Authenticate and open a session
    pub fn sign_in(paths: &ExpensePaths, email: &str, passphrase: &str) -> ExpenseResult<Self> {
        let email = email.trim();
        let path = paths.credentials_file();
        let mut store = CredentialStore::load(&path)?;

        let credential = match store.find_mut(email) {
            Some(c) if c.verify(passphrase) => c,
            _ => {
                warn!(email, "sign-in rejected");
                return Err(ExpenseError::Auth(SIGN_IN_FAILED.into()));
            }
        };

        let now = Utc::now();
        credential.last_sign_in_at = Some(now);
        let email = credential.email.clone();
        store.save(&path)?;

        info!(email = %email, "signed in");
        Ok(Self {
            credentials_path: path,
            email,
            signed_in_at: now,
            active: true,
        })
    }

    /// Replace an account's passphrase after checking the current one
    pub fn change_passphrase(
        paths: &ExpensePaths,
        settings: &Settings,
        email: &str,
        current: &str,
        new: &str,
    ) -> ExpenseResult<()> {
        let email = email.trim();
        validate_passphrase(new, settings)?;

        let path = paths.credentials_file();
        let mut store = CredentialStore::load(&path)?;
        let credential = match store.find_mut(email) {
            Some(c) if c.verify(current) => c,
            _ => return Err(ExpenseError::Auth(SIGN_IN_FAILED.into())),
        };
        credential.set_passphrase(new)?;
        store.save(&path)?;

        info!(email, "passphrase changed");
        Ok(())
    }

    /// Check if the session is still valid
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn record_sign_out(&self) -> ExpenseResult<()> {
        let mut store = CredentialStore::load(&self.credentials_path)?;
        let credential = store
            .find_mut(&self.email)
            .ok_or_else(|| ExpenseError::Storage(format!("No account for {}", self.email)))?;
        credential.last_sign_out_at = Some(Utc::now());
        store.save(&self.credentials_path)
    }
}

impl SessionGate for LocalSessionGate {
    fn current_identity(&self) -> ExpenseResult<Identity> {
        if !self.active {
            return Err(ExpenseError::NotAuthenticated);
        }
        Ok(Identity {
            email: self.email.clone(),
            signed_in_at: self.signed_in_at,
        })
    }

    fn invalidate(&mut self) -> ExpenseResult<()> {
        if !self.active {
            return Ok(());
        }

        self.record_sign_out().map_err(|e| {
            warn!(email = %self.email, error = %e, "sign-out failed");
            ExpenseError::Session(e.to_string())
        })?;

        self.active = false;
        info!(email = %self.email, "signed out");
        Ok(())
    }
}
