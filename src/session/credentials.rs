//! Credential store
//!
//! Accounts are kept in `credentials.json`, one record per email address,
//! with the passphrase stored as an Argon2id PHC string.

use std::path::Path;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::file_io::{read_json, write_json_atomic_with, FileAccess};

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,

    /// Argon2id PHC string
    pub password_hash: String,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_in_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sign_out_at: Option<DateTime<Utc>>,
}

impl Credential {
    /// Create a credential, hashing the passphrase with a fresh salt
    pub fn new(email: impl Into<String>, passphrase: &str) -> ExpenseResult<Self> {
        Ok(Self {
            email: email.into(),
            password_hash: hash_passphrase(passphrase)?,
            created_at: Utc::now(),
            last_sign_in_at: None,
            last_sign_out_at: None,
        })
    }

    /// Check a passphrase against the stored hash
    pub fn verify(&self, passphrase: &str) -> bool {
        verify_passphrase(passphrase, &self.password_hash)
    }

    /// Replace the stored passphrase
    pub fn set_passphrase(&mut self, passphrase: &str) -> ExpenseResult<()> {
        self.password_hash = hash_passphrase(passphrase)?;
        Ok(())
    }
}

/// All registered accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    #[serde(default)]
    accounts: Vec<Credential>,
}

impl CredentialStore {
    /// Load the store, or an empty one if the file doesn't exist
    pub fn load(path: &Path) -> ExpenseResult<Self> {
        read_json(path)
    }

    /// Write the store, readable by the owner only
    pub fn save(&self, path: &Path) -> ExpenseResult<()> {
        write_json_atomic_with(path, self, FileAccess::Private)
    }

    /// Find an account by email (ASCII case-insensitive)
    pub fn find(&self, email: &str) -> Option<&Credential> {
        self.accounts
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    pub fn find_mut(&mut self, email: &str) -> Option<&mut Credential> {
        self.accounts
            .iter_mut()
            .find(|c| c.email.eq_ignore_ascii_case(email))
    }

    /// Register a new account
    pub fn insert(&mut self, credential: Credential) -> ExpenseResult<()> {
        if self.find(&credential.email).is_some() {
            return Err(ExpenseError::Validation(format!(
                "An account already exists for {}",
                credential.email
            )));
        }
        self.accounts.push(credential);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.accounts.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn hash_passphrase(passphrase: &str) -> ExpenseResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(passphrase.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ExpenseError::Auth(format!("Failed to hash passphrase: {}", e)))
}

fn verify_passphrase(passphrase: &str, phc: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(passphrase.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
