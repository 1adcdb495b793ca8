/*!
# journi

journi is a command-line journal that keeps one plain-text entry per day in a
dated directory tree (`root/YYYY/MM/journal-DD.txt`). It offers an interactive
menu for writing, editing, browsing, searching and summarising entries, and a
few scripted subcommands for use from other tools.

## Architecture

- `store`: the on-disk journal; the only module that touches entry files
- `entry`: the creation template and values derived from entry text
- `journal_core`: date input parsing
- `session`: typed commands, the interactive menu and its prompt
- `editor`: composing text in an external editor
- `cli`: command-line interface handling using clap
- `config`: configuration loading and validation
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use journi::session::Command;
use journi::JournalStore;
use chrono::Local;

fn main() -> journi::AppResult<()> {
    let store = JournalStore::new("/home/me/Documents/journi");
    let response = Command::Summary.execute(&store, &Local::now())?;
    println!("{:?}", response);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// External editor integration
pub mod editor;
/// Entry template and text helpers
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// Date input parsing
pub mod journal_core;
/// Commands and the interactive menu
pub mod session;
/// The on-disk journal store
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::DateSpecifier;
pub use store::JournalStore;
