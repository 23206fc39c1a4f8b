//! Ledger display formatting
//!
//! Renders the expense table and the remaining amount for the terminal.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::ledger::LedgerSnapshot;
use crate::models::ExpenseEntry;

#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Item Name")]
    item_name: &'a str,
    #[tabled(rename = "Expense Amount")]
    amount: &'a str,
    #[tabled(rename = "Date")]
    date: &'a str,
}

impl<'a> From<&'a ExpenseEntry> for ExpenseRow<'a> {
    fn from(entry: &'a ExpenseEntry) -> Self {
        Self {
            item_name: entry.item_name(),
            amount: entry.amount(),
            date: entry.date(),
        }
    }
}

/// Format the entries as a table
pub fn format_expense_table(entries: &[ExpenseEntry]) -> String {
    if entries.is_empty() {
        return "No expenses added yet.\n".to_string();
    }

    let mut table = Table::new(entries.iter().map(ExpenseRow::from));
    table.with(Style::modern());
    format!("{}\n", table)
}

/// Format the remaining amount line
pub fn format_remaining(snapshot: &LedgerSnapshot<'_>) -> String {
    format!("Remaining Amount: {}\n", snapshot.remaining_balance())
}

/// Format the full expense list view
///
/// The remaining amount is only shown once a budget has been entered.
pub fn format_ledger(snapshot: &LedgerSnapshot<'_>) -> String {
    let mut output = String::new();
    output.push_str("Expense List\n");
    output.push_str(&"=".repeat(12));
    output.push('\n');
    output.push_str(&format_expense_table(snapshot.entries));

    if !snapshot.budget.is_empty() {
        output.push('\n');
        output.push_str(&format_remaining(snapshot));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerStore;

    #[test]
    fn test_empty_ledger_message() {
        let ledger = LedgerStore::new();
        let output = format_ledger(&ledger.snapshot());
        assert!(output.contains("No expenses added yet."));
        assert!(!output.contains("Remaining Amount"));
    }

    #[test]
    fn test_table_lists_entries() {
        let mut ledger = LedgerStore::new();
        ledger.add_entry("Groceries", "120", "2024-01-05");
        ledger.add_entry("Transit", "40", "2024-01-06");

        let output = format_expense_table(ledger.entries());
        assert!(output.contains("Item Name"));
        assert!(output.contains("Expense Amount"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("2024-01-06"));
        assert!(output.find("Groceries").unwrap() < output.find("Transit").unwrap());
    }

    #[test]
    fn test_remaining_shown_with_budget() {
        let mut ledger = LedgerStore::new();
        ledger.set_budget("500");
        ledger.add_entry("Groceries", "120", "2024-01-05");

        let output = format_ledger(&ledger.snapshot());
        assert!(output.ends_with("Remaining Amount: 380\n"));
    }

    #[test]
    fn test_remaining_shows_nan() {
        let mut ledger = LedgerStore::new();
        ledger.set_budget("100");
        ledger.add_entry("Mystery", "abc", "2024-01-07");

        assert_eq!(
            format_remaining(&ledger.snapshot()),
            "Remaining Amount: NaN\n"
        );
    }
}
