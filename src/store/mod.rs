//! The journal store: one plain-text file per calendar date.
//!
//! Entries live under `root/YYYY/MM/journal-DD.txt`. Year and month
//! directories are created lazily on the first write for that period. The
//! store keeps no index; every read-side operation rescans the tree.
//!
//! Writes are plain `fs::write` calls. An append reads the entry and writes
//! the whole file back, so a crash mid-write can truncate the tail. Two
//! processes writing the same entry race with last-write-wins.

pub mod layout;
pub mod stats;


use crate::constants::{APPEND_SEPARATOR, ENTRY_DATE_FORMAT, ENTRY_TIME_FORMAT};
use crate::entry::{preview, title_line, word_count};
use crate::errors::StoreError;
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

pub use stats::{AggregateStats, DetailedStats, EntryRecord, PeriodStats};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// One row of a month listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntrySummary {
    pub date: NaiveDate,
    /// First line of the entry, used as its display title.
    pub title: String,
    pub word_count: usize,
    pub path: PathBuf,
}

/// An entry containing the search term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub date: NaiveDate,
    pub title: String,
    pub path: PathBuf,
    /// The first 100 characters of the entry.
    pub preview: String,
}

/// An entry file found while walking the tree, with its content.
#[derive(Debug, Clone)]
pub(crate) struct LoadedEntry {
    pub year: i32,
    pub month: u32,
    pub date: NaiveDate,
    pub path: PathBuf,
    pub content: String,
}

/// Date-keyed plain-text storage rooted at a directory.
///
/// # Examples
///
/// ```
/// use journi::store::JournalStore;
/// use chrono::NaiveDate;
///
/// let dir = tempfile::tempdir().unwrap();
/// let store = JournalStore::new(dir.path());
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// store.create(date, "Hello world", false).unwrap();
/// assert!(store.exists(date));
/// assert_eq!(store.read(date).unwrap(), "Hello world");
/// ```
#[derive(Debug, Clone)]
pub struct JournalStore {
    root: PathBuf,
}

impl JournalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JournalStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry for `date`, whether or not it exists.
    pub fn entry_path(&self, date: NaiveDate) -> PathBuf {
        layout::entry_path(&self.root, date)
    }

    /// True iff an entry file exists for `date`.
    pub fn exists(&self, date: NaiveDate) -> bool {
        self.entry_path(date).is_file()
    }

    /// Creates the root directory if it is missing.
    ///
    /// # Errors
    ///
    /// `StoreError::Io` if the directory cannot be created.
    pub fn ensure_root(&self) -> StoreResult<()> {
        create_private_dir_all(&self.root)
    }

    /// Writes `body` as the full content of the entry for `date`.
    ///
    /// # Errors
    ///
    /// - `StoreError::AlreadyExists` if an entry exists and `overwrite` is false;
    ///   the existing content is left untouched.
    /// - `StoreError::Io` if directories or the file cannot be written.
    pub fn create(&self, date: NaiveDate, body: &str, overwrite: bool) -> StoreResult<PathBuf> {
        let path = self.entry_path(date);
        if !overwrite && self.exists(date) {
            return Err(StoreError::AlreadyExists { date });
        }

        if let Some(parent) = path.parent() {
            create_private_dir_all(parent)?;
        }
        write_entry_file(&path, body)?;

        info!(date = %date, overwrite, "Entry created");
        Ok(path)
    }

    /// Appends `addition` to an existing entry below an "Updated on" marker.
    ///
    /// The previous content is kept verbatim as a prefix.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if there is no entry for `date`; nothing is created.
    /// - `StoreError::Io` if the entry cannot be read or written.
    pub fn append(
        &self,
        date: NaiveDate,
        addition: &str,
        edited_at: &DateTime<Local>,
    ) -> StoreResult<PathBuf> {
        let path = self.existing_entry_path(date)?;
        let existing = read_entry_file(&path)?;

        let updated = format!(
            "{}{}Updated on {} at {}\n\n{}",
            existing,
            APPEND_SEPARATOR,
            edited_at.format(ENTRY_DATE_FORMAT),
            edited_at.format(ENTRY_TIME_FORMAT),
            addition
        );
        write_entry_file(&path, &updated)?;

        info!(date = %date, "Entry appended");
        Ok(path)
    }

    /// Overwrites an existing entry with `body`.
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` if there is no entry for `date`,
    /// `StoreError::Io` if the write fails.
    pub fn replace(&self, date: NaiveDate, body: &str) -> StoreResult<PathBuf> {
        let path = self.existing_entry_path(date)?;
        write_entry_file(&path, body)?;

        info!(date = %date, "Entry replaced");
        Ok(path)
    }

    /// Full content of the entry for `date`.
    pub fn read(&self, date: NaiveDate) -> StoreResult<String> {
        let path = self.existing_entry_path(date)?;
        debug!(path = %path.display(), "Reading entry");
        read_entry_file(&path)
    }

    /// Years that have a directory under the root, ascending.
    ///
    /// Only directories named with exactly four digits count.
    pub fn list_years(&self) -> StoreResult<Vec<i32>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        Ok(subdirectories(&self.root)?
            .into_iter()
            .filter_map(|name| layout::parse_year_dir(&name))
            .collect())
    }

    /// Months that have a directory under `year`, ascending.
    ///
    /// Names other than `01`..`12` are skipped.
    pub fn list_months(&self, year: i32) -> StoreResult<Vec<u32>> {
        let dir = layout::year_dir(&self.root, year);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut months = Vec::new();
        for name in subdirectories(&dir)? {
            match layout::parse_month_dir(&name) {
                Some(month) => months.push(month),
                None => warn!(year, name = %name, "Skipping malformed month directory"),
            }
        }
        Ok(months)
    }

    /// Entries of a month in file-name order with their title and word count.
    pub fn list_entries(&self, year: i32, month: u32) -> StoreResult<Vec<EntrySummary>> {
        Ok(self
            .load_month(year, month)?
            .into_iter()
            .map(|entry| EntrySummary {
                date: entry.date,
                title: title_line(&entry.content),
                word_count: word_count(&entry.content),
                path: entry.path,
            })
            .collect())
    }

    /// Case-insensitive substring search over every entry.
    ///
    /// Hits come back in walk order: years ascending, then months ascending,
    /// then file names. An empty or blank term matches nothing.
    pub fn search(&self, term: &str) -> StoreResult<Vec<SearchHit>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let hits: Vec<SearchHit> = self
            .walk()?
            .into_iter()
            .filter(|entry| entry.content.to_lowercase().contains(&needle))
            .map(|entry| SearchHit {
                date: entry.date,
                title: title_line(&entry.content),
                preview: preview(&entry.content),
                path: entry.path,
            })
            .collect();

        debug!(term = %term, hits = hits.len(), "Search finished");
        Ok(hits)
    }

    /// Totals over the whole store.
    pub fn aggregate_stats(&self) -> StoreResult<AggregateStats> {
        let years = self.list_years()?;
        let entries = self.walk()?;
        Ok(AggregateStats {
            total_entries: entries.len(),
            total_words: entries.iter().map(|e| word_count(&e.content)).sum(),
            total_years: years.len(),
        })
    }

    /// Per-period totals, longest and shortest entries, and mood tally.
    pub fn detailed_stats(&self) -> StoreResult<DetailedStats> {
        let mut stats = DetailedStats::default();
        for year in self.list_years()? {
            stats.open_year(year);
            for month in self.list_months(year)? {
                stats.open_month(year, month);
                for entry in self.load_month(year, month)? {
                    stats.record(&entry);
                }
            }
        }
        Ok(stats)
    }

    fn existing_entry_path(&self, date: NaiveDate) -> StoreResult<PathBuf> {
        let path = self.entry_path(date);
        if path.is_file() {
            Ok(path)
        } else {
            Err(StoreError::NotFound { date })
        }
    }

    /// Loads every entry: years, then months, then files, all ascending.
    pub(crate) fn walk(&self) -> StoreResult<Vec<LoadedEntry>> {
        let mut entries = Vec::new();
        for year in self.list_years()? {
            for month in self.list_months(year)? {
                entries.extend(self.load_month(year, month)?);
            }
        }
        Ok(entries)
    }

    fn load_month(&self, year: i32, month: u32) -> StoreResult<Vec<LoadedEntry>> {
        let dir = layout::month_dir(&self.root, year, month);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for item in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let Some(item) = readable_child(item, "list entries in", &dir)? else {
                continue;
            };
            if !item.file_type().is_file() {
                continue;
            }

            let Some(name) = item.file_name().to_str() else {
                continue;
            };
            if layout::parse_day(name).is_none() {
                debug!(file = %name, "Ignoring non-entry file");
                continue;
            }
            let Some(date) = layout::date_from_path(item.path()) else {
                warn!(path = %item.path().display(), "Skipping entry with impossible date");
                continue;
            };

            let path = item.into_path();
            let content = read_entry_file(&path)?;
            entries.push(LoadedEntry {
                year,
                month,
                date,
                path,
                content,
            });
        }
        Ok(entries)
    }
}

/// Names of the immediate subdirectories of `dir`, sorted.
fn subdirectories(dir: &Path) -> StoreResult<Vec<String>> {
    let mut names = Vec::new();
    for item in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let Some(item) = readable_child(item, "list directory", dir)? else {
            continue;
        };
        if item.file_type().is_dir() {
            if let Some(name) = item.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}

/// Unwraps one walk result. A child that cannot be inspected (e.g. a
/// dangling symlink) is skipped; failing to read `dir` itself is an error.
fn readable_child(
    item: walkdir::Result<DirEntry>,
    action: &'static str,
    dir: &Path,
) -> StoreResult<Option<DirEntry>> {
    match item {
        Ok(item) => Ok(Some(item)),
        Err(e) if e.depth() > 0 => {
            warn!(
                path = %e.path().unwrap_or(dir).display(),
                error = %e,
                "Skipping unreadable directory entry"
            );
            Ok(None)
        }
        Err(e) => Err(StoreError::Io {
            action,
            path: dir.to_path_buf(),
            source: e.into(),
        }),
    }
}

/// Reads an entry, replacing invalid UTF-8 instead of failing.
fn read_entry_file(path: &Path) -> StoreResult<String> {
    let bytes = fs::read(path).map_err(StoreError::io("read entry", path))?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(path = %path.display(), "Entry is not valid UTF-8; decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

fn create_private_dir_all(dir: &Path) -> StoreResult<()> {
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
    }
    builder
        .create(dir)
        .map_err(StoreError::io("create directory", dir))?;
    debug!(dir = %dir.display(), "Created entry directory");
    Ok(())
}

fn write_entry_file(path: &Path, body: &str) -> StoreResult<()> {
    fs::write(path, body).map_err(StoreError::io("write entry", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let permissions = fs::Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
        fs::set_permissions(path, permissions)
            .map_err(StoreError::io("set permissions on", path))?;
    }

    debug!(path = %path.display(), bytes = body.len(), "Wrote entry");
    Ok(())
}
