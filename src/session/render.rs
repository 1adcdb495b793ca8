//! Plain-text rendering of responses.

use crate::constants::{APP_DESCRIPTION, BROWSE_TITLE_CHARS, DISPLAY_DATE_FORMAT};
use crate::entry::truncate_chars;
use crate::store::{AggregateStats, DetailedStats, EntrySummary, SearchHit};
use chrono::{Month, NaiveDate};
use std::fmt::Write as _;

const BANNER: &str = r"
     _  ___  _   _ ____  _   _ ___
    | |/ _ \| | | |  _ \| \ | |_ _|
 _  | | | | | | | | |_) |  \| || |
| |_| | |_| | |_| |  _ <| |\  || |
 \___/ \___/ \___/|_| \_\_| \_|___|
";

pub fn welcome() -> String {
    format!("{}\n✨ {} ✨\n", BANNER, APP_DESCRIPTION)
}

pub fn display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// "January 2024"; falls back to the number for out-of-range months.
pub fn month_label(year: i32, month: u32) -> String {
    match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
        Some(m) => format!("{} {}", m.name(), year),
        None => format!("{:02} {}", month, year),
    }
}

/// One line of the browse list: `Day 05 - Title (12 words)`.
pub fn browse_label(entry: &EntrySummary) -> String {
    format!(
        "Day {} - {} ({} words)",
        entry.date.format("%d"),
        truncate_chars(&entry.title, BROWSE_TITLE_CHARS),
        entry.word_count
    )
}

/// An entry framed for reading.
pub fn entry(heading: &str, content: &str) -> String {
    let rule = "═".repeat(60);
    format!("📖 {}\n{}\n{}\n{}", heading, rule, content, rule)
}

pub fn summary(stats: &AggregateStats) -> String {
    format!(
        "📊 Your Journal Statistics:\n   📝 Total Entries: {}\n   📚 Total Words: {}\n   🗓️  Years Journaling: {}\n",
        stats.total_entries, stats.total_words, stats.total_years
    )
}

pub fn search_results(term: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "🤷 No entries found containing your search term.".to_string();
    }

    let mut out = format!("🎉 Found {} entries containing \"{}\":\n", hits.len(), term);
    for (i, hit) in hits.iter().enumerate() {
        let _ = writeln!(out, "{}. {} - {}", i + 1, display_date(hit.date), hit.title);
        let _ = writeln!(out, "   Preview: {}...\n", hit.preview);
    }
    out
}

pub fn detailed(stats: &DetailedStats) -> String {
    let mut out = String::from("🎯 Overall Statistics:\n");
    let _ = writeln!(out, "   Total Entries: {}", stats.totals.total_entries);
    let _ = writeln!(out, "   Total Words: {}", stats.totals.total_words);
    let _ = writeln!(
        out,
        "   Average Words per Entry: {}",
        stats.totals.average_words()
    );

    if let (Some(longest), Some(shortest)) = (&stats.longest, &stats.shortest) {
        out.push_str("\n📏 Entry Records:\n");
        let _ = writeln!(
            out,
            "   Longest Entry: {} words on {}",
            longest.words,
            display_date(longest.date)
        );
        let _ = writeln!(
            out,
            "   Shortest Entry: {} words on {}",
            shortest.words,
            display_date(shortest.date)
        );
    }

    if !stats.mood_counts.is_empty() {
        out.push_str("\n🌈 Mood Distribution:\n");
        for (mood, count) in &stats.mood_counts {
            let _ = writeln!(out, "   {} {} times", mood.marker(), count);
        }
    }

    out.push_str("\n📅 Yearly Breakdown:\n");
    for (year, period) in &stats.per_year {
        let _ = writeln!(
            out,
            "   {}: {} entries, {} words",
            year, period.entries, period.words
        );
    }

    if !stats.per_month.is_empty() {
        out.push_str("\n🗓️  Monthly Breakdown:\n");
        for (month, period) in &stats.per_month {
            let _ = writeln!(
                out,
                "   {}: {} entries, {} words",
                month, period.entries, period.words
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Mood;
    use crate::store::{EntryRecord, PeriodStats};
    use std::path::PathBuf;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(2024, 1), "January 2024");
        assert_eq!(month_label(2023, 12), "December 2023");
        assert_eq!(month_label(2023, 13), "13 2023");
    }

    #[test]
    fn test_browse_label_truncates_title() {
        let entry = EntrySummary {
            date: date(2024, 1, 5),
            title: "x".repeat(50),
            word_count: 7,
            path: PathBuf::from("/j/2024/01/journal-05.txt"),
        };
        assert_eq!(
            browse_label(&entry),
            format!("Day 05 - {}... (7 words)", "x".repeat(40))
        );
    }

    #[test]
    fn test_search_results() {
        assert!(search_results("x", &[]).contains("No entries found"));

        let hits = vec![SearchHit {
            date: date(2024, 2, 1),
            title: "Walk".to_string(),
            path: PathBuf::from("/j/2024/02/journal-01.txt"),
            preview: "Walk\nwith the dog".to_string(),
        }];
        let out = search_results("dog", &hits);
        assert!(out.contains("Found 1 entries containing \"dog\""));
        assert!(out.contains("1. 01/02/2024 - Walk"));
    }

    #[test]
    fn test_detailed_rendering() {
        let mut stats = DetailedStats::default();
        stats.totals = AggregateStats {
            total_entries: 2,
            total_words: 6,
            total_years: 1,
        };
        stats.per_year.insert(2024, PeriodStats { entries: 2, words: 6 });
        stats
            .per_month
            .insert("2024-01".to_string(), PeriodStats { entries: 2, words: 6 });
        stats.longest = Some(EntryRecord {
            words: 4,
            date: date(2024, 1, 15),
            title: "A longer entry here".to_string(),
        });
        stats.shortest = Some(EntryRecord {
            words: 2,
            date: date(2024, 1, 1),
            title: "Hello world".to_string(),
        });
        stats.mood_counts.insert(Mood::Good, 3);

        let out = detailed(&stats);
        assert!(out.contains("Average Words per Entry: 3"));
        assert!(out.contains("Longest Entry: 4 words on 15/01/2024"));
        assert!(out.contains("Shortest Entry: 2 words on 01/01/2024"));
        assert!(out.contains("😊 3 times"));
        assert!(out.contains("2024: 2 entries, 6 words"));
        assert!(out.contains("2024-01: 2 entries, 6 words"));
    }

    #[test]
    fn test_detailed_rendering_empty_store() {
        let out = detailed(&DetailedStats::default());
        assert!(out.contains("Total Entries: 0"));
        assert!(!out.contains("Entry Records"));
        assert!(!out.contains("Mood Distribution"));
    }
}
