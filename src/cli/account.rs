//! Account CLI commands
//!
//! Sign-up and passphrase management against the local credential store,
//! plus the sign-in step that precedes the dashboard.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::session::LocalSessionGate;

/// Environment variable that supplies the passphrase non-interactively
pub const PASSPHRASE_ENV: &str = "EXPENSE_LEDGER_PASSPHRASE";

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Signup {
        /// Email address used to sign in and to receive shared ledgers
        email: String,
        /// Passphrase (prompted for when not given)
        #[arg(long, env = PASSPHRASE_ENV, hide_env_values = true)]
        passphrase: Option<String>,
    },
    /// Change an account's passphrase
    #[command(alias = "passwd")]
    ChangePassphrase {
        /// Email address of the account
        email: String,
    },
}

/// Handle an account command
pub fn handle_account_command(
    paths: &ExpensePaths,
    settings: &Settings,
    cmd: AccountCommands,
) -> ExpenseResult<()> {
    match cmd {
        AccountCommands::Signup { email, passphrase } => {
            let passphrase = match passphrase {
                Some(p) => Zeroizing::new(p),
                None => prompt_new_passphrase(settings)?,
            };
            LocalSessionGate::sign_up(paths, settings, &email, &passphrase)?;
            println!("Account created for {}", email.trim());
            println!("Run 'expenses login {}' to open your dashboard.", email.trim());
        }
        AccountCommands::ChangePassphrase { email } => {
            let current = prompt_passphrase("Current passphrase: ")?;
            let new = prompt_new_passphrase(settings)?;
            LocalSessionGate::change_passphrase(paths, settings, &email, &current, &new)?;
            println!("Passphrase updated.");
        }
    }

    Ok(())
}

/// Sign in, prompting for the passphrase unless one was supplied
pub fn sign_in(
    paths: &ExpensePaths,
    email: &str,
    passphrase: Option<String>,
) -> ExpenseResult<LocalSessionGate> {
    let passphrase = match passphrase {
        Some(p) => Zeroizing::new(p),
        None => prompt_passphrase("Passphrase: ")?,
    };
    LocalSessionGate::sign_in(paths, email, &passphrase)
}

fn prompt_new_passphrase(settings: &Settings) -> ExpenseResult<Zeroizing<String>> {
    loop {
        let first = prompt_passphrase("New passphrase: ")?;

        if first.chars().count() < settings.min_passphrase_len {
            println!(
                "Passphrase must be at least {} characters. Please try again.",
                settings.min_passphrase_len
            );
            continue;
        }

        let second = prompt_passphrase("Confirm passphrase: ")?;
        if *first != *second {
            println!("Passphrases do not match. Please try again.");
            continue;
        }

        return Ok(first);
    }
}

/// Prompt for a passphrase (hidden input)
fn prompt_passphrase(prompt: &str) -> ExpenseResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| ExpenseError::Auth(format!("Failed to read passphrase: {}", e)))
}
