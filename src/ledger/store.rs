//! The in-memory ledger
//!
//! `LedgerStore` owns the budget text, the ordered entries and the entry
//! form. Entries can only be appended. Nothing here touches the disk; a
//! store dies with the dashboard that owns it.

use tracing::debug;

use super::balance::remaining_balance;
use crate::models::{Balance, EntryDraft, ExpenseEntry};

/// Budget plus the append-only list of expenses
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    budget: String,
    entries: Vec<ExpenseEntry>,
    draft: EntryDraft,
}

/// Read-only view of a ledger, handed to formatters and views
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerSnapshot<'a> {
    pub budget: &'a str,
    pub entries: &'a [ExpenseEntry],
}

impl LedgerSnapshot<'_> {
    /// Balance at the instant of the snapshot
    pub fn remaining_balance(&self) -> Balance {
        remaining_balance(self.budget, self.entries)
    }
}

impl LedgerStore {
    /// Create an empty ledger with no budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the budget text
    pub fn set_budget(&mut self, value: impl Into<String>) {
        self.budget = value.into();
        debug!(budget = %self.budget, "budget updated");
    }

    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Check if a budget has been entered
    pub fn has_budget(&self) -> bool {
        !self.budget.is_empty()
    }

    /// Append an entry built from the given fields and clear the form
    pub fn add_entry(
        &mut self,
        item_name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) {
        let entry = ExpenseEntry::new(item_name, amount, date);
        debug!(
            index = self.entries.len() + 1,
            item = entry.item_name(),
            amount = entry.amount(),
            "expense added"
        );
        self.entries.push(entry);
        self.draft = EntryDraft::default();
    }

    /// Append the entry currently held in the form
    pub fn submit_draft(&mut self) {
        let (item_name, amount, date) = self.draft.take();
        self.add_entry(item_name, amount, date);
    }

    /// The entry form
    pub fn draft(&self) -> &EntryDraft {
        &self.draft
    }

    /// Mutable access to the entry form
    pub fn draft_mut(&mut self) -> &mut EntryDraft {
        &mut self.draft
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Budget minus the sum of all amounts, recomputed on every call
    pub fn remaining_balance(&self) -> Balance {
        self.snapshot().remaining_balance()
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            budget: &self.budget,
            entries: &self.entries,
        }
    }
}
