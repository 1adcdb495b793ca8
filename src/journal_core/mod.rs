//! Core date handling without I/O operations.
//!
//! This module turns the dates typed by the user into calendar dates. It
//! provides the `DateSpecifier` enum without touching the filesystem.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// `D[D]-M[M]-YYYY` or `D[D]/M[M]/YYYY`; separators may be mixed.
static DATE_INPUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4})$").expect("valid date regex"));

/// Represents the date a user asked for.
///
/// # Examples
///
/// ```
/// use journi::journal_core::DateSpecifier;
/// use chrono::NaiveDate;
///
/// let today = DateSpecifier::parse("").unwrap();
/// assert_eq!(today, DateSpecifier::Today);
///
/// let specific = DateSpecifier::parse("15/01/2024").unwrap();
/// assert_eq!(
///     specific,
///     DateSpecifier::Specific(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DateSpecifier {
    /// Represents today's journal entry.
    Today,

    /// Represents a specific date's journal entry.
    Specific(NaiveDate),
}

impl DateSpecifier {
    /// Parses user input where an empty answer means today.
    ///
    /// # Errors
    ///
    /// Returns `AppError::MalformedInput` if the text is neither empty nor a
    /// valid `DD-MM-YYYY` / `DD/MM/YYYY` date.
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(DateSpecifier::Today);
        }
        parse_date_input(trimmed).map(DateSpecifier::Specific)
    }

    /// Resolves to a concrete date relative to `reference_date`.
    pub fn resolve(&self, reference_date: NaiveDate) -> NaiveDate {
        match self {
            DateSpecifier::Today => reference_date,
            DateSpecifier::Specific(date) => *date,
        }
    }
}

/// Parses a date typed as `DD-MM-YYYY` or `DD/MM/YYYY`.
///
/// Day and month may have one or two digits. Dates that match the pattern
/// but do not exist on the calendar (e.g. `31-02-2024`) are rejected too.
///
/// # Errors
///
/// Returns `AppError::MalformedInput` describing the expected format.
pub fn parse_date_input(input: &str) -> AppResult<NaiveDate> {
    let malformed = || {
        AppError::MalformedInput(format!(
            "'{}' is not a date. Please enter date in DD-MM-YYYY or DD/MM/YYYY format",
            input
        ))
    };

    let caps = DATE_INPUT_RE.captures(input.trim()).ok_or_else(malformed)?;
    let day: u32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u32 = caps[2].parse().map_err(|_| malformed())?;
    let year: i32 = caps[3].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}
