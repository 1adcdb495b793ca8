//! On-disk naming contract: `root/YYYY/MM/journal-DD.txt`.
//!
//! Every path the store touches is built or parsed here.

use crate::constants::{JOURNAL_FILE_EXTENSION, JOURNAL_FILE_PREFIX};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static ENTRY_FILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^{}(\d+)\.{}$",
        regex::escape(JOURNAL_FILE_PREFIX),
        regex::escape(JOURNAL_FILE_EXTENSION)
    ))
    .expect("valid entry file regex")
});

/// Directory holding all entries of a year.
pub fn year_dir(root: &Path, year: i32) -> PathBuf {
    root.join(format!("{:04}", year))
}

/// Directory holding all entries of a month.
pub fn month_dir(root: &Path, year: i32, month: u32) -> PathBuf {
    year_dir(root, year).join(format!("{:02}", month))
}

/// File name for the entry of `day`, zero-padded to two digits.
pub fn entry_file_name(day: u32) -> String {
    format!("{}{:02}.{}", JOURNAL_FILE_PREFIX, day, JOURNAL_FILE_EXTENSION)
}

/// Full path of the entry for `date`.
///
/// # Examples
///
/// ```
/// use journi::store::layout::entry_path;
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(
///     entry_path(Path::new("/journal"), date),
///     Path::new("/journal/2024/03/journal-05.txt")
/// );
/// ```
pub fn entry_path(root: &Path, date: NaiveDate) -> PathBuf {
    month_dir(root, date.year(), date.month()).join(entry_file_name(date.day()))
}

/// Day number encoded in an entry file name, if the name follows the pattern.
pub fn parse_day(file_name: &str) -> Option<u32> {
    ENTRY_FILE_RE
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
}

/// Year encoded in a year directory name: exactly four ASCII digits.
pub fn parse_year_dir(name: &str) -> Option<i32> {
    if name.len() == 4 && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}

/// Month encoded in a month directory name: exactly two digits, `01..=12`.
pub fn parse_month_dir(name: &str) -> Option<u32> {
    if name.len() != 2 || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok().filter(|month| (1..=12).contains(month))
}

/// Recovers the entry date from a path of the form `.../YYYY/MM/journal-DD.txt`.
///
/// Returns `None` for anything that does not follow the layout or names a
/// day that does not exist.
pub fn date_from_path(path: &Path) -> Option<NaiveDate> {
    let file_name = path.file_name()?.to_str()?;
    let month_path = path.parent()?;
    let year_path = month_path.parent()?;

    let day = parse_day(file_name)?;
    let month = parse_month_dir(month_path.file_name()?.to_str()?)?;
    let year = parse_year_dir(year_path.file_name()?.to_str()?)?;

    NaiveDate::from_ymd_opt(year, month, day)
}
