//! Flat-file expense store.
//!
//! A [`Store`] owns one comma-separated file: a fixed header row followed by
//! one [`Expense`] per line, in insertion order. Rows are appended by
//! [`Store::add`] and the whole file is rewritten only by [`Store::delete`].

use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

pub use error::StoreError;
pub use expense::{AddExpense, Expense, HEADER};
pub use money::MoneyCents;
pub use summary::{Summary, UNCATEGORIZED};

mod error;
mod expense;
mod money;
mod summary;
mod util;

type ResultStore<T> = Result<T, StoreError>;

/// Default file name, relative to the working directory.
pub const DEFAULT_PATH: &str = "expenses.csv";

#[derive(Clone, Debug)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Return a builder for `Store`. Help to build the struct.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Store backed by the file at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file with only the header row if it does not exist.
    ///
    /// Returns `true` when the file was created. An existing file is left
    /// byte-for-byte untouched.
    pub fn initialize(&self) -> ResultStore<bool> {
        if self.path.exists() {
            tracing::debug!("store {} already present", self.path.display());
            return Ok(false);
        }

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        let mut writer = csv_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        tracing::info!("created store {}", self.path.display());
        Ok(true)
    }

    /// Read every record in insertion order.
    ///
    /// A missing file is an empty store. Header names are matched ignoring
    /// surrounding spaces. Short rows are padded with empty fields instead of
    /// failing the load; fields past the header are kept as extras.
    pub fn load(&self) -> ResultStore<Vec<Expense>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("store {} not found, loading empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);
        let headers = reader.headers()?.clone();
        let columns = headers.len();

        let mut expenses = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() != columns {
                tracing::warn!(
                    "row {} of {} has {} fields, header has {columns}",
                    expenses.len() + 1,
                    self.path.display(),
                    record.len()
                );
            }
            let mut expense = record.deserialize::<Expense>(Some(&headers))?;
            expense.extra = record.iter().skip(columns).map(str::to_string).collect();
            expenses.push(expense);
        }

        tracing::debug!("loaded {} records from {}", expenses.len(), self.path.display());
        Ok(expenses)
    }

    /// Validate `cmd` and append it as a new row.
    ///
    /// Nothing is written when validation fails. The header is written first
    /// if the file is missing or empty.
    pub fn add(&self, cmd: AddExpense) -> ResultStore<Expense> {
        let category = util::validate_category(&cmd.category)?;
        let amount = util::validate_amount(&cmd.amount)?;
        let date = util::validate_date(cmd.date.as_deref())?;
        let note = cmd.note.as_deref().map(str::trim).unwrap_or_default().to_string();

        let expense = Expense {
            date,
            category,
            amount: amount.to_string(),
            note,
            extra: Vec::new(),
        };

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        let len = file.metadata()?.len();
        if len > 0 && !ends_with_newline(&mut file, len)? {
            file.write_all(b"\n")?;
        }

        let mut writer = csv_writer(file);
        if len == 0 {
            writer.write_record(HEADER)?;
        }
        writer.write_record(expense.as_row())?;
        writer.flush()?;

        tracing::info!(
            "added {} {} {} to {}",
            expense.date,
            expense.category,
            expense.amount,
            self.path.display()
        );
        Ok(expense)
    }

    /// Delete the record at the 1-based position typed by the user.
    pub fn delete(&self, selector: &str) -> ResultStore<Expense> {
        self.delete_at(util::parse_selector(selector)?)
    }

    /// Delete the record at 1-based `index`, rewriting the rest unchanged.
    pub fn delete_at(&self, index: i64) -> ResultStore<Expense> {
        let expenses = self.load()?;
        let position = checked_position(index, expenses.len())?;
        self.remove(expenses, position)
    }

    /// Totals over every stored record.
    pub fn summarize(&self) -> ResultStore<Summary> {
        let expenses = self.load()?;
        Summary::from_expenses(&expenses)
    }

    fn remove(&self, mut expenses: Vec<Expense>, position: usize) -> ResultStore<Expense> {
        let removed = expenses.remove(position);

        let mut writer = csv_writer(vec![]);
        writer.write_record(HEADER)?;
        for expense in &expenses {
            writer.write_record(expense.as_row())?;
        }
        let data = writer
            .into_inner()
            .map_err(|err| StoreError::Io(err.into_error()))?;
        fs::write(&self.path, data)?;

        tracing::info!(
            "deleted row {} ({} {} {}) from {}",
            position + 1,
            removed.date,
            removed.category,
            removed.amount,
            self.path.display()
        );
        Ok(removed)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

/// Map a 1-based index onto a `Vec` position.
fn checked_position(index: i64, count: usize) -> ResultStore<usize> {
    match usize::try_from(index) {
        Ok(position) if (1..=count).contains(&position) => Ok(position - 1),
        _ => Err(StoreError::IndexOutOfRange { index, count }),
    }
}

fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

fn ends_with_newline(file: &mut File, len: u64) -> ResultStore<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::Start(len - 1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[derive(Debug, Default)]
pub struct StoreBuilder {
    path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Pass the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> StoreBuilder {
        self.path = Some(path.into());
        self
    }

    /// Construct `Store`, falling back to [`DEFAULT_PATH`]
    pub fn build(self) -> Store {
        Store::new(self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_PATH)))
    }
}
