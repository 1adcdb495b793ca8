//! Command-line interface.
//!
//! Without a subcommand journi opens the interactive menu. The subcommands
//! run a single action and exit, which makes the journal scriptable.

use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::errors::AppResult;
use crate::journal_core::{parse_date_input, DateSpecifier};
use crate::session::Command;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Your personal digital journal companion
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Journal root directory (overrides JOURNI_DIR)
    #[clap(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Type entry text in the terminal instead of launching an editor
    #[clap(long, global = true)]
    pub inline: bool,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(
        long,
        global = true,
        value_name = "FORMAT",
        default_value = LOG_FORMAT_TEXT,
        value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON]
    )]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Option<ScriptedCommand>,
}

/// One-shot actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ScriptedCommand {
    /// Print an entry
    Read {
        /// Date of the entry (DD-MM-YYYY or DD/MM/YYYY); defaults to today
        #[clap(short = 'd', long)]
        date: Option<String>,
    },
    /// Append text to an existing entry
    Append {
        /// Date of the entry (DD-MM-YYYY or DD/MM/YYYY)
        #[clap(short = 'd', long)]
        date: String,

        /// Text to add
        #[clap(short = 't', long)]
        text: String,
    },
    /// Search all entries (case-insensitive)
    Search {
        /// Text to look for
        term: String,

        /// Print results as JSON
        #[clap(long)]
        json: bool,
    },
    /// Print journal statistics
    Stats {
        /// Include per-period breakdowns, records and moods
        #[clap(long)]
        detailed: bool,

        /// Print statistics as JSON
        #[clap(long)]
        json: bool,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    pub fn wants_json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}

impl ScriptedCommand {
    /// Whether results should be printed as JSON.
    pub fn json_output(&self) -> bool {
        match self {
            ScriptedCommand::Search { json, .. } | ScriptedCommand::Stats { json, .. } => *json,
            _ => false,
        }
    }

    /// Builds the store command; `today` fills in a missing `--date`.
    ///
    /// # Errors
    ///
    /// `AppError::MalformedInput` if a date does not parse.
    pub fn to_command(&self, today: NaiveDate) -> AppResult<Command> {
        let command = match self {
            ScriptedCommand::Read { date } => {
                let spec = match date {
                    Some(input) => DateSpecifier::parse(input)?,
                    None => DateSpecifier::Today,
                };
                Command::Read {
                    date: spec.resolve(today),
                }
            }
            ScriptedCommand::Append { date, text } => Command::Append {
                date: parse_date_input(date)?,
                addition: text.clone(),
            },
            ScriptedCommand::Search { term, .. } => Command::Search { term: term.clone() },
            ScriptedCommand::Stats { detailed: true, .. } => Command::DetailedStats,
            ScriptedCommand::Stats { detailed: false, .. } => Command::Summary,
        };
        Ok(command)
    }
}
