//! Plain-text export
//!
//! Renders the ledger as a numbered list and writes it to the downloadable
//! `expense-list.txt` artifact.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ExpenseError, ExpenseResult};
use crate::ledger::LedgerSnapshot;

/// Heading line shared by both export formats
pub const HEADER: &str = "Expense List:";

/// The numbered entry lines, joined by newlines
pub(crate) fn entry_lines(snapshot: &LedgerSnapshot<'_>) -> String {
    snapshot
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the ledger as plain text
///
/// The output has no trailing newline and no balance line.
pub fn to_plain_text(snapshot: &LedgerSnapshot<'_>) -> String {
    format!("{}\n{}", HEADER, entry_lines(snapshot))
}

/// Write the plain-text export to any writer
pub fn export_text<W: Write>(snapshot: &LedgerSnapshot<'_>, writer: &mut W) -> ExpenseResult<()> {
    writer
        .write_all(to_plain_text(snapshot).as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

/// Write the plain-text export to `dir/file_name`, replacing any existing file
pub fn write_text_export(
    dir: &Path,
    file_name: &str,
    snapshot: &LedgerSnapshot<'_>,
) -> ExpenseResult<PathBuf> {
    let path = dir.join(file_name);
    let file = File::create(&path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    export_text(snapshot, &mut writer)?;
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    info!(
        path = %path.display(),
        entries = snapshot.entries.len(),
        "ledger exported"
    );
    Ok(path)
}
