//! Plain-text rendering of store results.

use engine::{Expense, StoreError, Summary};

/// Fixed currency label shown before every amount.
pub const CURRENCY: &str = "Rs";

const NOTE_WIDTH: usize = 18;

/// Stored amount with two decimals, or the raw text when it does not parse.
pub fn amount(expense: &Expense) -> String {
    match expense.amount_cents() {
        Ok(cents) => cents.to_string(),
        Err(_) => expense.amount.clone(),
    }
}

/// Numbered table of every record.
pub fn expense_table(expenses: &[Expense]) -> String {
    let mut out = format!(
        "{:<4} {:<12} {:<15} {:<12} {:<20}\n",
        "No.", "Date", "Category", "Amount (Rs)", "Note"
    );
    out.push_str(&"-".repeat(65));
    out.push('\n');
    for (idx, expense) in expenses.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<12} {:<15} {:<12} {:<20}\n",
            idx + 1,
            expense.date,
            expense.category,
            amount(expense),
            expense.note_preview(NOTE_WIDTH)
        ));
    }
    out
}

/// One-line description used to confirm a deletion.
pub fn expense_line(expense: &Expense) -> String {
    let mut line = format!(
        "{} | {} | {CURRENCY} {}",
        expense.date,
        expense.category,
        amount(expense)
    );
    if !expense.note.is_empty() {
        line.push_str(" | ");
        line.push_str(&expense.note);
    }
    line
}

pub fn summary(summary: &Summary) -> String {
    let mut out = format!("Total spent: {CURRENCY} {}\n\nBy category:\n", summary.total);
    for (category, total) in &summary.by_category {
        out.push_str(&format!("  • {category}: {CURRENCY} {total}\n"));
    }
    out
}

/// Message shown to the user when a store operation fails.
pub fn error(err: &StoreError) -> String {
    match err {
        StoreError::IndexOutOfRange { count, .. } => {
            format!("Invalid index! Choose a number between 1 and {count}.")
        }
        StoreError::Aggregation(msg) => format!("Error calculating summary: {msg}"),
        other => other.to_string(),
    }
}
