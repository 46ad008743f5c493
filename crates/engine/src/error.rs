//! The module contains the errors the store can throw.
//!
//! The errors are:
//!
//! - [`Validation`] thrown when user supplied input is rejected.
//! - [`IndexOutOfRange`] thrown when a delete selector points outside the store.
//! - [`Aggregation`] thrown when stored data cannot be summed.
//!
//!  [`Validation`]: StoreError::Validation
//!  [`IndexOutOfRange`]: StoreError::IndexOutOfRange
//!  [`Aggregation`]: StoreError::Aggregation
use thiserror::Error;

/// Store custom errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid index: {index} is not between 1 and {count}")]
    IndexOutOfRange { index: i64, count: usize },
    #[error("Cannot summarize: {0}")]
    Aggregation(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for StoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Validation(a), Self::Validation(b)) => a == b,
            (
                Self::IndexOutOfRange { index: a, count: c },
                Self::IndexOutOfRange { index: b, count: d },
            ) => a == b && c == d,
            (Self::Aggregation(a), Self::Aggregation(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.to_string() == b.to_string(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
