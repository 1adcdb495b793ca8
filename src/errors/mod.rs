//! Error handling utilities for the journi application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, the store
//! taxonomy `StoreError`, and the convenience type alias `AppResult` for
//! functions that can return these errors.

use chrono::NaiveDate;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DISPLAY_DATE_FORMAT;

/// Represents specific error cases that can occur when interacting with external editors.
///
/// # Examples
///
/// ```
/// use journi::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "vim".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("not found"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}.")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}.")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor exits with a non-zero status code.
    #[error("Editor '{command}' exited with non-zero status code: {status_code}. Your text was not saved.")]
    NonZeroExit {
        /// The editor command that exited with a non-zero status
        command: String,
        /// The exit status code
        status_code: i32,
    },

    /// Error when the temporary file holding the text cannot be created,
    /// written, or read back after the editor exits.
    #[error("Could not use the editor's temporary file: {source}. Your text was not saved.")]
    TempFile {
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Failures surfaced by the journal store.
///
/// Every variant carries enough context to be shown to the user as is.
///
/// # Examples
///
/// ```
/// use journi::errors::StoreError;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let error = StoreError::NotFound { date };
/// assert_eq!(format!("{}", error), "No entry found for 15/01/2024");
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entry exists for the date and the caller did not ask to overwrite it.
    #[error("An entry for {} already exists", .date.format(DISPLAY_DATE_FORMAT))]
    AlreadyExists {
        /// Date of the existing entry
        date: NaiveDate,
    },

    /// No entry exists for the date.
    #[error("No entry found for {}", .date.format(DISPLAY_DATE_FORMAT))]
    NotFound {
        /// Date that was looked up
        date: NaiveDate,
    },

    /// The underlying filesystem call failed (unreadable directory,
    /// permission denied, disk full).
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        /// What the store was doing, e.g. "read entry"
        action: &'static str,
        /// The file or directory involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Builds a closure that wraps an `io::Error` with the action and path.
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io {
            action,
            path,
            source,
        }
    }
}

/// Represents all possible errors that can occur in the journi application.
///
/// Note: This type does not implement `Clone` to avoid losing error context when
/// cloning `std::io::Error` values.
///
/// # Examples
///
/// ```
/// use journi::errors::AppError;
///
/// let error = AppError::Config("Missing journal directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing journal directory");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors outside the store (terminal, startup directory).
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors raised by the journal store.
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// User input that does not follow the expected format (e.g. a date).
    #[error("Invalid input: {0}")]
    MalformedInput(String),
}

impl AppError {
    /// True when the error means the interactive input stream is exhausted.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use journi::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::MalformedInput("bad date".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let input_error = AppError::MalformedInput("31-02-2024".to_string());
        assert_eq!(format!("{}", input_error), "Invalid input: 31-02-2024");
    }

    #[test]
    fn test_store_error_display() {
        let exists = StoreError::AlreadyExists {
            date: sample_date(),
        };
        assert_eq!(format!("{}", exists), "An entry for 05/01/2024 already exists");

        let missing: AppError = StoreError::NotFound {
            date: sample_date(),
        }
        .into();
        assert_eq!(format!("{}", missing), "No entry found for 05/01/2024");
    }

    #[test]
    fn test_store_io_error_keeps_source() {
        let wrap = StoreError::io("read entry", "/journal/2024/01/journal-05.txt");
        let error = wrap(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        let message = format!("{}", error);
        assert!(message.contains("read entry"));
        assert!(message.contains("journal-05.txt"));
        assert!(message.contains("denied"));

        let source = error.source().expect("io source should be chained");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_editor_error_conversion_to_app_error() {
        let editor_error = EditorError::NonZeroExit {
            command: "vim".to_string(),
            status_code: 2,
        };
        let app_error: AppError = editor_error.into();

        match &app_error {
            AppError::Editor(EditorError::NonZeroExit { status_code, .. }) => {
                assert_eq!(*status_code, 2)
            }
            _ => panic!("Expected AppError::Editor variant"),
        }
        assert!(format!("{}", app_error).starts_with("Editor error: "));
    }

    #[test]
    fn test_end_of_input_detection() {
        let eof: AppError = io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into();
        assert!(eof.is_end_of_input());

        let other: AppError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(!other.is_end_of_input());
        assert!(!AppError::Config("x".to_string()).is_end_of_input());
    }
}
