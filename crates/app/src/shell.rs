//! Numbered menu driving the expense store.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use engine::{AddExpense, MoneyCents, Store};

use crate::render;

const MENU: &str = "\n--- Personal Expense Tracker ---\n\
1. Add Expense\n\
2. View Expenses\n\
3. Delete Expense\n\
4. Show Summary\n\
5. Exit\n";

/// Interactive loop reading choices from `input` and writing to `output`.
///
/// Store failures are reported and the loop continues; only I/O errors on
/// the console itself end it.
pub struct Shell<R, W> {
    store: Store,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            color: false,
        }
    }

    /// Style success and error lines with terminal colors.
    #[must_use]
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            let Some(choice) = self.prompt("Select an option: ")? else {
                break;
            };
            tracing::debug!("menu choice {choice:?}");

            match choice.as_str() {
                "1" => self.add()?,
                "2" => self.view()?,
                "3" => self.delete()?,
                "4" => self.summary()?,
                "5" => break,
                _ => writeln!(self.output, "Invalid input. Try again.")?,
            }
        }

        writeln!(
            self.output,
            "Bye! Your data is saved in {}",
            self.store.path().display()
        )?;
        self.output.flush()
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) [press Enter for today]: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter category (e.g., Food, Travel, Books): ")? else {
            return Ok(());
        };
        if category.is_empty() {
            return self.failure("Category cannot be empty!");
        }
        let Some(amount) = self.prompt(&format!("Enter amount ({}): ", render::CURRENCY))? else {
            return Ok(());
        };
        if amount.parse::<MoneyCents>().is_err() {
            return self.failure("Invalid amount! Please enter a number.");
        }
        let Some(note) = self.prompt("Enter note (optional): ")? else {
            return Ok(());
        };

        let cmd = AddExpense::new(category, amount).date(date).note(note);
        match self.store.add(cmd) {
            Ok(_) => self.success("✓ Expense added successfully!"),
            Err(err) => self.failure(&render::error(&err)),
        }
    }

    fn view(&mut self) -> io::Result<()> {
        let expenses = match self.store.load() {
            Ok(expenses) => expenses,
            Err(err) => return self.failure(&render::error(&err)),
        };
        if expenses.is_empty() {
            return writeln!(self.output, "No expenses recorded.");
        }
        write!(
            self.output,
            "\n--- All Expenses ---\n{}",
            render::expense_table(&expenses)
        )
    }

    fn delete(&mut self) -> io::Result<()> {
        let expenses = match self.store.load() {
            Ok(expenses) => expenses,
            Err(err) => return self.failure(&render::error(&err)),
        };
        if expenses.is_empty() {
            return writeln!(self.output, "No expenses to delete.");
        }
        write!(
            self.output,
            "\n--- All Expenses ---\n{}",
            render::expense_table(&expenses)
        )?;

        let Some(selector) = self.prompt("\nEnter the number of the expense to delete: ")? else {
            return Ok(());
        };
        match self.store.delete(&selector) {
            Ok(removed) => self.success(&format!("✓ Deleted: {}", render::expense_line(&removed))),
            Err(err) => self.failure(&render::error(&err)),
        }
    }

    fn summary(&mut self) -> io::Result<()> {
        let summary = match self.store.summarize() {
            Ok(summary) => summary,
            Err(err) => return self.failure(&render::error(&err)),
        };
        if summary.count == 0 {
            return writeln!(self.output, "No expenses to summarize.");
        }
        write!(
            self.output,
            "\n--- Spending Summary ---\n{}",
            render::summary(&summary)
        )
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn success(&mut self, msg: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.output, "{}", msg.green())
        } else {
            writeln!(self.output, "{msg}")
        }
    }

    fn failure(&mut self, msg: &str) -> io::Result<()> {
        tracing::debug!("reported to user: {msg}");
        if self.color {
            writeln!(self.output, "{}", msg.red())
        } else {
            writeln!(self.output, "{msg}")
        }
    }
}
