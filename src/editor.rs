//! Editor abstraction for composing entry text.
//!
//! When an editor is configured, entry text is written in it: the initial
//! text goes into a temporary file, the editor is launched on that file, and
//! whatever the file holds once the editor exits is the result. The
//! interactive session takes the trait so tests can supply their own.

use crate::errors::{AppResult, EditorError};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Something that can turn an initial text into the text the user wants.
///
/// # Examples
///
/// ```
/// use journi::editor::Editor;
/// use journi::errors::AppResult;
///
/// struct Shouting;
///
/// impl Editor for Shouting {
///     fn compose(&self, initial: &str) -> AppResult<String> {
///         Ok(initial.to_uppercase())
///     }
/// }
///
/// assert_eq!(Shouting.compose("hi").unwrap(), "HI");
/// ```
pub trait Editor {
    /// Lets the user edit `initial` and returns the edited text.
    ///
    /// # Errors
    ///
    /// Implementations return `AppError::Editor` when the edit could not
    /// be completed, including temp-file failures (`EditorError::TempFile`).
    fn compose(&self, initial: &str) -> AppResult<String>;
}

/// Launches an external editor command on a temporary file.
///
/// ```no_run
/// use journi::editor::{Editor, SystemEditor};
///
/// let editor = SystemEditor {
///     editor_cmd: "vim".to_string(),
/// };
/// let text = editor.compose("").expect("editor failed");
/// ```
pub struct SystemEditor {
    /// The command to launch (e.g., "vim", "nano").
    pub editor_cmd: String,
}

impl Editor for SystemEditor {
    fn compose(&self, initial: &str) -> AppResult<String> {
        let temp_file_error = |source: std::io::Error| EditorError::TempFile { source };

        let mut file = tempfile::Builder::new()
            .prefix("journi-")
            .suffix(".txt")
            .tempfile()
            .map_err(temp_file_error)?;
        file.write_all(initial.as_bytes())
            .and_then(|_| file.flush())
            .map_err(temp_file_error)?;

        launch_editor(&self.editor_cmd, file.path())?;

        // Editors commonly replace the file rather than writing in place,
        // so read by path instead of through the open handle.
        let text = fs::read_to_string(file.path()).map_err(temp_file_error)?;
        Ok(text)
    }
}

/// Runs `editor path` and waits for it to exit.
///
/// # Errors
///
/// Returns `AppError::Editor` with a specific `EditorError` variant:
/// - `EditorError::CommandNotFound` if the editor command doesn't exist
/// - `EditorError::PermissionDenied` if permission is denied to execute the editor
/// - `EditorError::ExecutionFailed` for other I/O errors during execution
/// - `EditorError::NonZeroExit` if the editor exits with a non-zero status code
fn launch_editor(editor: &str, path: &Path) -> AppResult<()> {
    debug!(editor = %editor, "Launching editor");
    let editor_cmd = editor.to_string();

    match Command::new(editor).arg(path).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(EditorError::NonZeroExit {
            command: editor_cmd,
            status_code: status.code().unwrap_or(-1),
        }
        .into()),
        Err(e) => {
            let specific_error = match e.kind() {
                std::io::ErrorKind::NotFound => EditorError::CommandNotFound {
                    command: editor_cmd,
                    source: e,
                },
                std::io::ErrorKind::PermissionDenied => EditorError::PermissionDenied {
                    command: editor_cmd,
                    source: e,
                },
                _ => EditorError::ExecutionFailed {
                    command: editor_cmd,
                    source: e,
                },
            };
            Err(specific_error.into())
        }
    }
}
