//! Expense entry model
//!
//! An entry keeps the three fields exactly as they were typed. Nothing is
//! trimmed or validated; the amount is interpreted only when the balance is
//! computed.

use std::fmt;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseEntry {
    item_name: String,
    amount: String,
    date: String,
}

impl ExpenseEntry {
    /// Create an entry from raw field text
    pub fn new(
        item_name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            item_name: item_name.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// The amount text as entered
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// The date text as entered (normally `YYYY-MM-DD`)
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item Name: {}, Expense Amount: {}, Date: {}",
            self.item_name, self.amount, self.date
        )
    }
}

/// The transient entry form
///
/// Fields are edited one at a time and emptied once the entry is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub item_name: String,
    pub amount: String,
    pub date: String,
}

impl EntryDraft {
    /// Check if every field is empty
    pub fn is_empty(&self) -> bool {
        self.item_name.is_empty() && self.amount.is_empty() && self.date.is_empty()
    }

    /// Move the field contents out, leaving the form empty
    pub fn take(&mut self) -> (String, String, String) {
        let draft = std::mem::take(self);
        (draft.item_name, draft.amount, draft.date)
    }
}
