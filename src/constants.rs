//! Constants used throughout the application.
//!
//! This module contains all constants used in the journi application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "journi";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Your personal digital journal companion";
/// Signature line closing every newly created entry.
pub const ENTRY_SIGNATURE: &str = "Created with JOURNI ✨";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level. Kept quiet so logs do not interleave with the menu.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used with `--verbose`.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal root directory.
pub const ENV_VAR_JOURNI_DIR: &str = "JOURNI_DIR";
/// Environment variable for specifying the preferred editor.
pub const ENV_VAR_JOURNI_EDITOR: &str = "JOURNI_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal entries within the user's home directory.
pub const DEFAULT_JOURNAL_SUBDIR: &str = "Documents/journi";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Prefix of every entry file name.
pub const JOURNAL_FILE_PREFIX: &str = "journal-";
/// File extension for journal entries (without the dot).
pub const JOURNAL_FILE_EXTENSION: &str = "txt";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Date format used when displaying an entry date (DD/MM/YYYY).
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";
/// Long date format used inside entry text, e.g. "Mon Jan 15 2024".
pub const ENTRY_DATE_FORMAT: &str = "%a %b %d %Y";
/// Time format used inside entry text.
pub const ENTRY_TIME_FORMAT: &str = "%H:%M:%S";

// Entry Text
/// Separator written between existing content and an appended section.
pub const APPEND_SEPARATOR: &str = "\n\n---\n";
/// Title used when an entry's first line is empty.
pub const UNTITLED: &str = "Untitled";
/// Number of characters kept in a search preview.
pub const PREVIEW_CHARS: usize = 100;
/// Number of title characters shown when browsing.
pub const BROWSE_TITLE_CHARS: usize = 40;
/// Line that ends inline content entry.
pub const INLINE_TERMINATOR: &str = ".";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "journi";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
