//! Entry text: the creation template and values derived from a body.
//!
//! Once written an entry is a flat text blob. Title, mood and tags are only
//! structured while the entry is being drafted; afterwards everything here
//! is recomputed from the text.

use crate::constants::{
    ENTRY_DATE_FORMAT, ENTRY_SIGNATURE, ENTRY_TIME_FORMAT, PREVIEW_CHARS, UNTITLED,
};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Coarse mood recorded with an entry.
///
/// Variants are ordered from best to worst; that order is used when
/// reporting mood counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Mood {
    Amazing,
    Good,
    Okay,
    NotGreat,
    Rough,
}

impl Mood {
    /// Every mood, in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Amazing,
        Mood::Good,
        Mood::Okay,
        Mood::NotGreat,
        Mood::Rough,
    ];

    /// The marker embedded in entry text.
    pub fn marker(self) -> &'static str {
        match self {
            Mood::Amazing => "😄",
            Mood::Good => "😊",
            Mood::Okay => "😐",
            Mood::NotGreat => "😔",
            Mood::Rough => "😞",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Amazing => "Amazing",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::NotGreat => "Not great",
            Mood::Rough => "Rough day",
        }
    }
}

/// An entry being written through the create flow.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub title: String,
    pub mood: Mood,
    pub body: String,
    /// Raw comma-separated tag input; may be empty.
    pub tags: String,
}

impl EntryDraft {
    /// Renders the draft into the text that is stored on disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use journi::entry::{EntryDraft, Mood};
    /// use chrono::{Local, NaiveDate, TimeZone};
    ///
    /// let at = Local
    ///     .from_local_datetime(&NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 5, 0).unwrap())
    ///     .single()
    ///     .unwrap();
    /// let draft = EntryDraft {
    ///     title: "Snow day".to_string(),
    ///     mood: Mood::Good,
    ///     body: "Built a snowman.".to_string(),
    ///     tags: "winter, family".to_string(),
    /// };
    /// let text = draft.render(&at);
    /// assert!(text.starts_with("Snow day\n😊 Mon Jan 15 2024 - 09:05:00\n\nBuilt a snowman.\n"));
    /// assert!(text.contains("Tags: #winter #family"));
    /// ```
    pub fn render(&self, created_at: &DateTime<Local>) -> String {
        let tags = format_tags(&self.tags);
        let tag_line = if tags.is_empty() {
            String::new()
        } else {
            format!("Tags: {}", tags)
        };

        format!(
            "{}\n{} {} - {}\n\n{}\n\n{}\n\n---\n{}",
            self.title.trim(),
            self.mood.marker(),
            created_at.format(ENTRY_DATE_FORMAT),
            created_at.format(ENTRY_TIME_FORMAT),
            self.body.trim_end(),
            tag_line,
            ENTRY_SIGNATURE
        )
    }
}

/// Turns `"a, b,,c "` into `"#a #b #c"`. Blank tags are dropped.
pub fn format_tags(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-separated tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First line of the text, or `Untitled` when it is blank.
pub fn title_line(text: &str) -> String {
    match text.lines().next().map(str::trim) {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => UNTITLED.to_string(),
    }
}

/// Moods whose marker occurs anywhere in the text.
pub fn moods_in(text: &str) -> Vec<Mood> {
    Mood::ALL
        .into_iter()
        .filter(|mood| text.contains(mood.marker()))
        .collect()
}

/// First `PREVIEW_CHARS` characters of the text.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Shortens `text` to `max` characters, marking the cut with `...`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    }
}
