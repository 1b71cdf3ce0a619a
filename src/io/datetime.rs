//! Datetime formatting for exported records
//!
//! Writers never format timestamps themselves; they receive a
//! [`DatetimeFormatter`] so the presentation can be swapped (or stubbed in
//! tests) without touching the format code.

use crate::types::ExportError;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write as _;

/// Default pattern for `datetime_utc` columns, e.g. `2020-01-01 00:00`
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Renders a timestamp as the `datetime_utc` string
pub trait DatetimeFormatter {
    /// Format a single timestamp
    fn format(&self, time: &NaiveDateTime) -> String;
}

impl<F> DatetimeFormatter for F
where
    F: Fn(&NaiveDateTime) -> String,
{
    fn format(&self, time: &NaiveDateTime) -> String {
        self(time)
    }
}

/// strftime-based formatter
///
/// The pattern is checked once at construction, so `format` never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct StrftimeFormatter {
    pattern: String,
}

impl StrftimeFormatter {
    /// Create a formatter for the given strftime pattern
    ///
    /// # Returns
    ///
    /// * `Ok(StrftimeFormatter)` if chrono can render the pattern
    /// * `Err(ExportError::InvalidDatetimeFormat)` otherwise
    pub fn new(pattern: &str) -> Result<Self, ExportError> {
        if !is_valid_pattern(pattern) {
            return Err(ExportError::invalid_datetime_format(pattern));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    /// The strftime pattern in use
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for StrftimeFormatter {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATETIME_FORMAT.to_string(),
        }
    }
}

impl DatetimeFormatter for StrftimeFormatter {
    fn format(&self, time: &NaiveDateTime) -> String {
        time.format(&self.pattern).to_string()
    }
}

/// Whether chrono can render every specifier in `pattern` for a naive time
///
/// Parsing alone is not enough: timezone specifiers (`%Z`, `%z`, `%:z`)
/// parse fine but fail at render time without an offset, so a sample time is
/// rendered as well.
pub fn is_valid_pattern(pattern: &str) -> bool {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return false;
    }

    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return false;
    };

    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(pattern)).is_ok()
}
