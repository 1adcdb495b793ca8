//! Statistics accumulated over a walk of the store.

use super::LoadedEntry;
use crate::entry::{moods_in, title_line, word_count, Mood};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Store-wide totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    pub total_entries: usize,
    pub total_words: usize,
    /// Number of year directories, including years without entries.
    pub total_years: usize,
}

impl AggregateStats {
    /// Average words per entry, rounded; 0 for an empty store.
    pub fn average_words(&self) -> usize {
        if self.total_entries == 0 {
            0
        } else {
            (self.total_words as f64 / self.total_entries as f64).round() as usize
        }
    }
}

/// Entry and word counts for a year or a month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PeriodStats {
    pub entries: usize,
    pub words: usize,
}

/// A single entry singled out by a statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub words: usize,
    pub date: NaiveDate,
    pub title: String,
}

/// Result of `JournalStore::detailed_stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedStats {
    pub totals: AggregateStats,
    pub per_year: BTreeMap<i32, PeriodStats>,
    /// Keyed by `"YYYY-MM"`.
    pub per_month: BTreeMap<String, PeriodStats>,
    /// Entry with the most words; the first one walked wins a tie.
    pub longest: Option<EntryRecord>,
    /// Entry with the fewest words; the first one walked wins a tie.
    pub shortest: Option<EntryRecord>,
    /// Number of entries containing each marker. Moods never seen are absent.
    pub mood_counts: BTreeMap<Mood, usize>,
}

pub(crate) fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

impl DetailedStats {
    pub(crate) fn open_year(&mut self, year: i32) {
        self.per_year.entry(year).or_default();
        self.totals.total_years += 1;
    }

    pub(crate) fn open_month(&mut self, year: i32, month: u32) {
        self.per_month.entry(month_key(year, month)).or_default();
    }

    pub(crate) fn record(&mut self, entry: &LoadedEntry) {
        let words = word_count(&entry.content);

        self.totals.total_entries += 1;
        self.totals.total_words += words;

        let year = self.per_year.entry(entry.year).or_default();
        year.entries += 1;
        year.words += words;

        let month = self
            .per_month
            .entry(month_key(entry.year, entry.month))
            .or_default();
        month.entries += 1;
        month.words += words;

        let record = || EntryRecord {
            words,
            date: entry.date,
            title: title_line(&entry.content),
        };
        if self.longest.as_ref().map_or(true, |l| words > l.words) {
            self.longest = Some(record());
        }
        if self.shortest.as_ref().map_or(true, |s| words < s.words) {
            self.shortest = Some(record());
        }

        for mood in moods_in(&entry.content) {
            *self.mood_counts.entry(mood).or_insert(0) += 1;
        }
    }
}
