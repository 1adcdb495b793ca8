//! User actions as typed commands.
//!
//! Each thing a user can do is a `Command`; executing it against a
//! `JournalStore` yields a `Response`. The interactive menu and the scripted
//! subcommands both build commands, so the store can be driven (and tested)
//! without a terminal.

pub mod menu;
pub mod prompt;
pub mod render;

use crate::errors::AppResult;
use crate::store::{AggregateStats, DetailedStats, EntrySummary, JournalStore, SearchHit};
use chrono::{DateTime, Local, NaiveDate};
use std::path::PathBuf;
use tracing::debug;

pub use menu::Menu;
pub use prompt::Prompt;

/// What an export would produce. Export itself is not available yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    SingleFile,
    SeparateFiles,
    Year,
    Month,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [
        ExportKind::SingleFile,
        ExportKind::SeparateFiles,
        ExportKind::Year,
        ExportKind::Month,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExportKind::SingleFile => "All entries to a single text file",
            ExportKind::SeparateFiles => "All entries to separate files in a folder",
            ExportKind::Year => "Entries from a specific year",
            ExportKind::Month => "Entries from a specific month",
        }
    }
}

/// A single request against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        date: NaiveDate,
        body: String,
        overwrite: bool,
    },
    Append {
        date: NaiveDate,
        addition: String,
    },
    Replace {
        date: NaiveDate,
        body: String,
    },
    Read {
        date: NaiveDate,
    },
    ListYears,
    ListMonths {
        year: i32,
    },
    ListEntries {
        year: i32,
        month: u32,
    },
    Search {
        term: String,
    },
    Summary,
    DetailedStats,
    Export {
        kind: ExportKind,
    },
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// An entry was created, appended to, or replaced.
    Saved { path: PathBuf },
    Entry { date: NaiveDate, content: String },
    Years(Vec<i32>),
    Months(Vec<u32>),
    Entries(Vec<EntrySummary>),
    SearchResults(Vec<SearchHit>),
    Summary(AggregateStats),
    Detailed(DetailedStats),
    ExportPending(ExportKind),
}

impl Command {
    /// Short name for logs; never includes entry text.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Create { .. } => "create",
            Command::Append { .. } => "append",
            Command::Replace { .. } => "replace",
            Command::Read { .. } => "read",
            Command::ListYears => "list_years",
            Command::ListMonths { .. } => "list_months",
            Command::ListEntries { .. } => "list_entries",
            Command::Search { .. } => "search",
            Command::Summary => "summary",
            Command::DetailedStats => "detailed_stats",
            Command::Export { .. } => "export",
        }
    }

    /// Runs the command. `now` stamps appended sections.
    ///
    /// # Errors
    ///
    /// Store failures are returned as `AppError::Store`.
    pub fn execute(self, store: &JournalStore, now: &DateTime<Local>) -> AppResult<Response> {
        debug!(command = self.name(), "Executing command");
        let response = match self {
            Command::Create {
                date,
                body,
                overwrite,
            } => Response::Saved {
                path: store.create(date, &body, overwrite)?,
            },
            Command::Append { date, addition } => Response::Saved {
                path: store.append(date, &addition, now)?,
            },
            Command::Replace { date, body } => Response::Saved {
                path: store.replace(date, &body)?,
            },
            Command::Read { date } => Response::Entry {
                date,
                content: store.read(date)?,
            },
            Command::ListYears => Response::Years(store.list_years()?),
            Command::ListMonths { year } => Response::Months(store.list_months(year)?),
            Command::ListEntries { year, month } => {
                Response::Entries(store.list_entries(year, month)?)
            }
            Command::Search { term } => Response::SearchResults(store.search(&term)?),
            Command::Summary => Response::Summary(store.aggregate_stats()?),
            Command::DetailedStats => Response::Detailed(store.detailed_stats()?),
            Command::Export { kind } => Response::ExportPending(kind),
        };
        Ok(response)
    }
}
