//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize the
//! checks `Store::add` and `Store::delete` run before touching the file.

use chrono::{Local, NaiveDate};

use crate::{MoneyCents, ResultStore, StoreError};

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Trimmed, non-empty category.
pub(crate) fn validate_category(raw: &str) -> ResultStore<String> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(StoreError::Validation(
            "category cannot be empty".to_string(),
        ));
    }
    Ok(category.to_string())
}

/// Amount rounded to cents.
pub(crate) fn validate_amount(raw: &str) -> ResultStore<MoneyCents> {
    raw.parse::<MoneyCents>()
}

/// Date in `YYYY-MM-DD`, defaulting to today when blank.
pub(crate) fn validate_date(raw: Option<&str>) -> ResultStore<String> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Ok(Local::now().date_naive().format(DATE_FORMAT).to_string());
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        StoreError::Validation(format!("invalid date '{raw}': expected YYYY-MM-DD"))
    })?;
    Ok(date.format(DATE_FORMAT).to_string())
}

/// Parse a delete selector typed by the user.
pub(crate) fn parse_selector(raw: &str) -> ResultStore<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .map_err(|_| StoreError::Validation(format!("'{raw}' is not a whole number")))
}
