//! Expense records as they live in the backing file.

use serde::Deserialize;

use crate::{MoneyCents, ResultStore};

/// Header row written at the top of every store file.
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount (Rs)", "Note"];

/// One expense entry.
///
/// Fields hold the text exactly as stored, so a record edited by hand can
/// still be listed and rewritten unchanged. Columns missing from a row are
/// loaded as empty strings; fields past the header are kept in `extra` and
/// written back after the note.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Expense {
    #[serde(rename = "Date", default)]
    pub date: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Amount (Rs)", default)]
    pub amount: String,
    #[serde(rename = "Note", default)]
    pub note: String,
    #[serde(skip)]
    pub extra: Vec<String>,
}

impl Expense {
    /// Parse the stored amount.
    pub fn amount_cents(&self) -> ResultStore<MoneyCents> {
        self.amount.parse()
    }

    /// Note shortened to `max` characters, for tabular display.
    #[must_use]
    pub fn note_preview(&self, max: usize) -> &str {
        match self.note.char_indices().nth(max) {
            Some((end, _)) => &self.note[..end],
            None => &self.note,
        }
    }

    pub(crate) fn as_row(&self) -> Vec<&str> {
        let mut row = vec![
            self.date.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.note.as_str(),
        ];
        row.extend(self.extra.iter().map(String::as_str));
        row
    }
}

/// Raw input for [`Store::add`](crate::Store::add).
///
/// Fields are validated by the store, not here: the shell passes user text
/// straight through.
#[derive(Clone, Debug, Default)]
pub struct AddExpense {
    pub date: Option<String>,
    pub category: String,
    pub amount: String,
    pub note: Option<String>,
}

impl AddExpense {
    #[must_use]
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            date: None,
            category: category.into(),
            amount: amount.into(),
            note: None,
        }
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}
