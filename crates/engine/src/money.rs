use std::{fmt, str::FromStr};

use crate::StoreError;

/// Signed money amount represented as **integer cents**.
///
/// Every amount read from or written to the store goes through this type so
/// totals never accumulate floating-point drift.
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator and an
/// exponent; extra decimals are rounded half away from zero):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert_eq!("12.345".parse::<MoneyCents>().unwrap().cents(), 1235);
/// assert_eq!("1e3".parse::<MoneyCents>().unwrap().cents(), 100_000);
/// assert!("abc".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

/// Exponents beyond this magnitude are clamped; they round to zero or overflow anyway.
const MAX_EXPONENT: i64 = 10_000;

impl FromStr for MoneyCents {
    type Err = StoreError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator, an optional leading `+`/`-`
    /// directly before the digits and an optional `e`/`E` exponent, so text
    /// such as `1e+16` or `1e-05` reads like any other number.
    ///
    /// Validation rules:
    /// - digits only around a single separator (no `inf`/`nan`)
    /// - more than 2 fractional digits are rounded half away from zero
    /// - rejects empty strings and values that do not fit in `i64` cents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || StoreError::Validation("amount is empty".to_string());
        let invalid = || StoreError::Validation(format!("'{}' is not a number", s.trim()));
        let overflow = || StoreError::Validation("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let (mantissa, exponent) = match rest.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => (mantissa, parse_exponent(exponent).ok_or_else(invalid)?),
            None => (rest.as_str(), 0),
        };

        let (units_str, frac_str) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if units_str.is_empty() && frac_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let frac_len = i64::try_from(frac_str.len()).map_err(|_| overflow())?;
        let digits = format!("{units_str}{frac_str}");
        let total = scale_to_cents(&digits, exponent + 2 - frac_len).ok_or_else(overflow)?;

        let signed = if negative {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(MoneyCents(signed))
    }
}

/// Signed exponent digits, clamped to [`MAX_EXPONENT`].
fn parse_exponent(raw: &str) -> Option<i64> {
    let (negative, digits) = if let Some(stripped) = raw.strip_prefix('-') {
        (true, stripped)
    } else {
        (false, raw.strip_prefix('+').unwrap_or(raw))
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value = digits
        .parse::<i64>()
        .unwrap_or(MAX_EXPONENT)
        .min(MAX_EXPONENT);
    Some(if negative { -value } else { value })
}

/// Multiply the integer spelled by `digits` by `10^scale`, rounding half
/// away from zero when `scale` is negative. `None` on overflow.
fn scale_to_cents(digits: &str, scale: i64) -> Option<i64> {
    let digits = digits.trim_start_matches('0');
    if scale >= 0 {
        if digits.is_empty() {
            return Some(0);
        }
        let value: i64 = digits.parse().ok()?;
        let factor = 10i64.checked_pow(u32::try_from(scale).ok()?)?;
        return value.checked_mul(factor);
    }

    let drop = usize::try_from(scale.unsigned_abs()).ok()?;
    let (kept, dropped) = digits.split_at(digits.len().saturating_sub(drop));
    let value: i64 = if kept.is_empty() { 0 } else { kept.parse().ok()? };
    let round_up = drop <= digits.len() && dropped.bytes().next().is_some_and(|d| d >= b'5');
    value.checked_add(i64::from(round_up))
}
