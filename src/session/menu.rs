//! The interactive menu session.
//!
//! Every handler gathers answers through the `Prompt`, builds a `Command`,
//! executes it, and prints the result. A failing action is reported as one
//! line and the menu comes back; only terminal I/O failures end the session
//! with an error.

use super::prompt::Prompt;
use super::render;
use super::{Command, ExportKind, Response};
use crate::constants::ENTRY_DATE_FORMAT;
use crate::editor::Editor;
use crate::entry::{word_count, EntryDraft, Mood};
use crate::errors::{AppError, AppResult, EditorError};
use crate::journal_core::DateSpecifier;
use crate::store::JournalStore;
use chrono::{DateTime, Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Create,
    Edit,
    Read,
    Browse,
    Search,
    Stats,
    Export,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 8] = [
        MenuChoice::Create,
        MenuChoice::Edit,
        MenuChoice::Read,
        MenuChoice::Browse,
        MenuChoice::Search,
        MenuChoice::Stats,
        MenuChoice::Export,
        MenuChoice::Exit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Create => "📝 Create a new journal entry for today",
            MenuChoice::Edit => "✏️  Add to a previous journal entry",
            MenuChoice::Read => "📖 Read a previous journal entry",
            MenuChoice::Browse => "🗓️  Browse entries by date",
            MenuChoice::Search => "🔍 Search through your entries",
            MenuChoice::Stats => "📈 View detailed statistics",
            MenuChoice::Export => "🎨 Export entries",
            MenuChoice::Exit => "👋 Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditMode {
    Append,
    Replace,
    Cancel,
}

/// A menu-driven session over a store.
pub struct Menu<'a, R, W> {
    store: &'a JournalStore,
    prompt: Prompt<R, W>,
    editor: Option<Box<dyn Editor>>,
    now: DateTime<Local>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// `editor` composes entry text; without one, text is typed inline.
    /// `now` decides what "today" is and stamps edits.
    pub fn new(
        store: &'a JournalStore,
        prompt: Prompt<R, W>,
        editor: Option<Box<dyn Editor>>,
        now: DateTime<Local>,
    ) -> Self {
        Menu {
            store,
            prompt,
            editor,
            now,
        }
    }

    pub fn into_prompt(self) -> Prompt<R, W> {
        self.prompt
    }

    /// Shows the welcome screen, then serves menu choices until the user
    /// exits or input ends.
    ///
    /// # Errors
    ///
    /// Only failures to talk to the terminal are returned.
    pub fn run(&mut self) -> AppResult<()> {
        self.prompt.say(render::welcome())?;
        match self.execute(Command::Summary) {
            Ok(Response::Summary(stats)) => self.prompt.say(render::summary(&stats))?,
            Ok(_) => {}
            Err(e) => self.report(e)?,
        }

        let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        loop {
            let choice = match self.prompt.choose("What would you like to do today?", &labels) {
                Ok(index) => MenuChoice::ALL[index],
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };
            if choice == MenuChoice::Exit {
                break;
            }

            debug!(choice = ?choice, "Menu choice");
            match self.handle(choice) {
                Ok(()) => {}
                Err(e) if e.is_end_of_input() => break,
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.report(e)?,
            }
            self.prompt.say("")?;
        }

        self.prompt
            .say("👋 Thanks for journaling! See you next time...")?;
        info!("Session ended");
        Ok(())
    }

    fn handle(&mut self, choice: MenuChoice) -> AppResult<()> {
        match choice {
            MenuChoice::Create => self.handle_create(),
            MenuChoice::Edit => self.handle_edit(),
            MenuChoice::Read => self.handle_read(),
            MenuChoice::Browse => self.handle_browse(),
            MenuChoice::Search => self.handle_search(),
            MenuChoice::Stats => self.handle_stats(),
            MenuChoice::Export => self.handle_export(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn execute(&self, command: Command) -> AppResult<Response> {
        command.execute(self.store, &self.now)
    }

    fn report(&mut self, error: AppError) -> AppResult<()> {
        warn!(error = %error, "Action failed");
        self.prompt.say(format!("❌ {}", error))?;
        Ok(())
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// Asks for a date until it parses. Empty input means today only when
    /// `allow_today` is set.
    fn ask_date(&mut self, question: &str, allow_today: bool) -> AppResult<NaiveDate> {
        loop {
            let answer = self.prompt.ask(question)?;
            match DateSpecifier::parse(&answer) {
                Ok(DateSpecifier::Today) if !allow_today => self
                    .prompt
                    .say("Please enter date in DD-MM-YYYY or DD/MM/YYYY format")?,
                Ok(spec) => return Ok(spec.resolve(self.today())),
                Err(AppError::MalformedInput(msg)) => self.prompt.say(msg)?,
                Err(e) => return Err(e),
            }
        }
    }

    /// Collects free text through the editor, or inline without one.
    fn compose(&mut self, message: &str, initial: &str) -> AppResult<String> {
        match &self.editor {
            Some(editor) => {
                self.prompt
                    .say(format!("{} (opening your editor)", message))?;
                // I/O errors here come from the editor, not the terminal
                editor.compose(initial).map_err(|e| match e {
                    AppError::Io(source) => EditorError::TempFile { source }.into(),
                    other => other,
                })
            }
            None => Ok(self.prompt.read_block(message)?),
        }
    }

    fn show_entry(&mut self, date: NaiveDate) -> AppResult<()> {
        if let Response::Entry { date, content } = self.execute(Command::Read { date })? {
            let heading = format!("Journal Entry - {}", render::display_date(date));
            self.prompt.say(render::entry(&heading, &content))?;
        }
        Ok(())
    }

    fn handle_create(&mut self) -> AppResult<()> {
        let today = self.today();
        let mut overwrite = false;

        if self.store.exists(today) {
            let question = format!(
                "An entry for today ({}) already exists. Overwrite it?",
                today.format(ENTRY_DATE_FORMAT)
            );
            if !self.prompt.confirm(&question, false)? {
                self.prompt
                    .say("✅ No worries! Your existing entry is safe.")?;
                return Ok(());
            }
            overwrite = true;
        }

        let moods: Vec<String> = Mood::ALL
            .iter()
            .map(|m| format!("{} {}", m.marker(), m.label()))
            .collect();
        let mood = Mood::ALL[self.prompt.choose("🌈 How are you feeling today?", &moods)?];

        let title = self
            .prompt
            .ask_required("📝 Give your entry a title:", "Please enter a title")?;

        let body = loop {
            let text = self.compose("✍️  Tell me about your day", "")?;
            if !text.trim().is_empty() {
                break text;
            }
            self.prompt.say("Please write something about your day")?;
        };

        let tags = self
            .prompt
            .ask("🏷️  Add some tags (comma-separated, optional):")?;

        let words = word_count(&body);
        let draft = EntryDraft {
            title,
            mood,
            body,
            tags,
        };
        let command = Command::Create {
            date: today,
            body: draft.render(&self.now),
            overwrite,
        };

        if let Response::Saved { path } = self.execute(command)? {
            self.prompt.say("🎉 Entry saved successfully!")?;
            self.prompt
                .say(format!("📍 Saved to: {}", path.display()))?;
            self.prompt.say(format!("📊 Word count: {} words", words))?;
        }
        Ok(())
    }

    fn handle_edit(&mut self) -> AppResult<()> {
        self.prompt.say("✏️  Edit a Previous Entry\n")?;
        let date = self.ask_date("📅 Enter the date (DD-MM-YYYY or DD/MM/YYYY):", false)?;

        let existing = match self.execute(Command::Read { date })? {
            Response::Entry { content, .. } => content,
            _ => return Ok(()),
        };
        let rule = "─".repeat(50);
        self.prompt
            .say(format!("📖 Current content:\n{}\n{}\n{}", rule, existing, rule))?;

        let modes = [EditMode::Append, EditMode::Replace, EditMode::Cancel];
        let labels = [
            "➕ Append new content",
            "🔄 Replace entire entry",
            "🚫 Cancel",
        ];
        let mode = modes[self
            .prompt
            .choose("How would you like to edit this entry?", &labels)?];

        let command = match mode {
            EditMode::Cancel => {
                self.prompt.say("✋ Edit cancelled.")?;
                return Ok(());
            }
            EditMode::Append => Command::Append {
                date,
                addition: self.compose("➕ Add your new content", "")?,
            },
            EditMode::Replace => Command::Replace {
                date,
                body: self.compose("🔄 Enter the complete new content", &existing)?,
            },
        };
        self.execute(command)?;
        self.prompt.say("✅ Entry updated successfully!")?;
        Ok(())
    }

    fn handle_read(&mut self) -> AppResult<()> {
        self.prompt.say("📖 Read a Journal Entry\n")?;
        let date = self.ask_date(
            "📅 Enter the date (DD-MM-YYYY) or leave empty to read today's entry:",
            true,
        )?;
        self.show_entry(date)
    }

    fn handle_browse(&mut self) -> AppResult<()> {
        self.prompt.say("🗓️  Browse Your Entries\n")?;

        let mut years = match self.execute(Command::ListYears)? {
            Response::Years(years) => years,
            _ => Vec::new(),
        };
        if years.is_empty() {
            self.prompt
                .say("📝 No journal entries found yet. Create your first entry!")?;
            return Ok(());
        }
        years.reverse();
        let year_labels: Vec<String> = years.iter().map(|y| format!("📆 {}", y)).collect();
        let year = years[self.prompt.choose("📅 Select a year:", &year_labels)?];

        let mut months = match self.execute(Command::ListMonths { year })? {
            Response::Months(months) => months,
            _ => Vec::new(),
        };
        if months.is_empty() {
            self.prompt.say(format!("No months with entries in {}.", year))?;
            return Ok(());
        }
        months.reverse();
        let month_labels: Vec<String> = months
            .iter()
            .map(|m| format!("📅 {}", render::month_label(year, *m)))
            .collect();
        let month = months[self.prompt.choose("📅 Select a month:", &month_labels)?];

        let mut entries = match self.execute(Command::ListEntries { year, month })? {
            Response::Entries(entries) => entries,
            _ => Vec::new(),
        };
        if entries.is_empty() {
            self.prompt.say(format!(
                "No entries in {}.",
                render::month_label(year, month)
            ))?;
            return Ok(());
        }
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        let entry_labels: Vec<String> = entries
            .iter()
            .map(|e| format!("📝 {}", render::browse_label(e)))
            .collect();
        let selected = self
            .prompt
            .choose("📖 Select an entry to read:", &entry_labels)?;

        self.show_entry(entries[selected].date)
    }

    fn handle_search(&mut self) -> AppResult<()> {
        self.prompt.say("🔍 Search Your Entries\n")?;
        let term = self.prompt.ask_required(
            "🔍 What would you like to search for?",
            "Please enter a search term",
        )?;

        let hits = match self.execute(Command::Search { term: term.clone() })? {
            Response::SearchResults(hits) => hits,
            _ => Vec::new(),
        };
        self.prompt.say(render::search_results(&term, &hits))?;
        if hits.is_empty() {
            return Ok(());
        }

        if self
            .prompt
            .confirm("Would you like to read one of these entries?", true)?
        {
            let labels: Vec<String> = hits
                .iter()
                .map(|h| format!("{} - {}", render::display_date(h.date), h.title))
                .collect();
            let selected = self
                .prompt
                .choose("Which entry would you like to read?", &labels)?;
            self.show_entry(hits[selected].date)?;
        }
        Ok(())
    }

    fn handle_stats(&mut self) -> AppResult<()> {
        self.prompt.say("📈 Detailed Journal Statistics\n")?;
        if let Response::Detailed(stats) = self.execute(Command::DetailedStats)? {
            self.prompt.say(render::detailed(&stats))?;
        }
        Ok(())
    }

    fn handle_export(&mut self) -> AppResult<()> {
        self.prompt.say("📤 Export Your Entries\n")?;
        let labels: Vec<&str> = ExportKind::ALL.iter().map(|k| k.label()).collect();
        let kind = ExportKind::ALL[self
            .prompt
            .choose("How would you like to export your entries?", &labels)?];

        if let Response::ExportPending(kind) = self.execute(Command::Export { kind })? {
            debug!(kind = ?kind, "Export requested");
            self.prompt.say("🚧 Export functionality coming soon!")?;
        }
        Ok(())
    }
}
