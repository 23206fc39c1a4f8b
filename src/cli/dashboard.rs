//! Interactive dashboard loop
//!
//! Reads one command per line and applies it to a [`Dashboard`]. Field
//! values are taken verbatim from the rest of the line, so `budget  50`
//! stores `" 50"`.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::display::{format_ledger, format_remaining};
use crate::error::ExpenseResult;
use crate::session::SessionGate;

const HELP: &str = "\
Commands:
  budget <amount>               Set the fixed budget amount
  item <name>                   Set the item name field
  amount <amount>               Set the expense amount field
  date <YYYY-MM-DD>             Set the date field
  add                           Add the expense from the fields above
  add <item> <amount> <date>    Add an expense directly (quote names with spaces)
  list                          Show the expense list
  balance                       Show the remaining amount
  download [dir]                Save the expense list as a text file
  share                         Build an email of the expense list to yourself
  whoami                        Show the signed-in email
  logout                        Sign out and discard the ledger
  quit                          Leave without signing out (the ledger is discarded)
  help                          Show this help
";

/// How the dashboard loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The session was invalidated
    LoggedOut,
    /// The user left (quit or end of input); the session is still valid
    Left,
}

/// Split `add` arguments on whitespace, honouring double quotes
fn split_fields(text: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_field = false;

    for c in text.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_field = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_field {
                    fields.push(std::mem::take(&mut current));
                    has_field = false;
                }
            }
            c => {
                current.push(c);
                has_field = true;
            }
        }
    }
    if has_field {
        fields.push(current);
    }

    fields
}

/// Run the dashboard until logout, quit or end of input
pub fn run<G, R, W>(
    dashboard: &mut Dashboard<G>,
    settings: &Settings,
    input: R,
    output: &mut W,
) -> ExpenseResult<SessionEnd>
where
    G: SessionGate,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Expense Calculator")?;
    writeln!(output, "Email: {}", dashboard.email()?)?;
    writeln!(output, "Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(SessionEnd::Left);
        };
        let line = line?;
        let line = line.trim_end_matches('\r');
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        debug!(command, "dashboard command");

        match command {
            "" => {}
            "budget" => dashboard.ledger_mut().set_budget(rest),
            "item" => dashboard.ledger_mut().draft_mut().item_name = rest.to_string(),
            "amount" => dashboard.ledger_mut().draft_mut().amount = rest.to_string(),
            "date" => dashboard.ledger_mut().draft_mut().date = rest.to_string(),
            "add" if rest.is_empty() => {
                dashboard.submit();
                writeln!(output, "Added expense #{}", dashboard.ledger().len())?;
            }
            "add" => match <[String; 3]>::try_from(split_fields(rest)) {
                Ok([item_name, amount, date]) => {
                    dashboard.ledger_mut().add_entry(item_name, amount, date);
                    writeln!(output, "Added expense #{}", dashboard.ledger().len())?;
                }
                Err(_) => writeln!(output, "Usage: add <item> <amount> <date>")?,
            },
            "list" => write!(output, "{}", format_ledger(&dashboard.ledger().snapshot()))?,
            "balance" => write!(output, "{}", format_remaining(&dashboard.ledger().snapshot()))?,
            "download" => {
                let dir = if rest.trim().is_empty() {
                    settings.export_dir()
                } else {
                    rest.trim().into()
                };
                match dashboard.download(&dir, &settings.export_file_name) {
                    Ok(path) => writeln!(output, "Saved {}", path.display())?,
                    Err(e) => writeln!(output, "Error: {}", e)?,
                }
            }
            "share" => {
                let payload = dashboard.share()?;
                writeln!(output, "Open this link in your mail client:")?;
                writeln!(output, "{}", payload.to_mailto_uri())?;
            }
            "whoami" => writeln!(output, "Email: {}", dashboard.email()?)?,
            "logout" => match dashboard.logout() {
                Ok(()) => {
                    writeln!(output, "Logged out.")?;
                    return Ok(SessionEnd::LoggedOut);
                }
                Err(e) => {
                    debug!(error = %e, "logout failed");
                    writeln!(output, "Error: {}", dashboard.error().unwrap_or_default())?;
                }
            },
            "quit" | "exit" => return Ok(SessionEnd::Left),
            "help" => write!(output, "{}", HELP)?,
            other => writeln!(output, "Unknown command: {}. Type 'help' for commands.", other)?,
        }
    }
}
