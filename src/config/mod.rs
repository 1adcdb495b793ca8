//! Configuration management for the journi application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. Command-line flags are applied on top by `main`.
//!
//! # Environment Variables
//!
//! - `JOURNI_DIR`: Path to the journal root (defaults to ~/Documents/journi)
//! - `JOURNI_EDITOR`: Editor used to write entry text
//! - `EDITOR`: Fallback editor if JOURNI_EDITOR is not set. Without either, text
//!   is typed directly into the terminal.
//! - `HOME`: Used for expanding the default journal directory path

use crate::constants::{
    DEFAULT_JOURNAL_SUBDIR, EDITOR_FORBIDDEN_CHARS, ENV_VAR_EDITOR, ENV_VAR_HOME,
    ENV_VAR_JOURNI_DIR, ENV_VAR_JOURNI_EDITOR, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for the journi application.
///
/// # Examples
///
/// ```
/// use journi::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_dir: PathBuf::from("/path/to/journal"),
///     editor: Some("nano".to_string()),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Default)]
pub struct Config {
    /// Root directory of the journal store.
    pub journal_dir: PathBuf,

    /// Editor command used to compose entry text; `None` means inline entry.
    ///
    /// Loaded from `JOURNI_EDITOR`, then `EDITOR`.
    pub editor: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_dir", &REDACTED_PLACEHOLDER)
            .field("editor", &self.editor.as_ref().map(|_| REDACTED_PLACEHOLDER))
            .finish()
    }
}

impl Config {
    /// Validates an editor command string for security.
    ///
    /// The command must be non-empty and contain neither spaces nor shell
    /// metacharacters.
    fn validate_editor_command(editor_cmd: &str) -> AppResult<&str> {
        if editor_cmd.is_empty() {
            return Err(AppError::Config(
                "Editor command cannot be empty".to_string(),
            ));
        }

        if editor_cmd.contains(' ') {
            return Err(AppError::Config(
                "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
            ));
        }

        if let Some(ch) = editor_cmd
            .chars()
            .find(|ch| EDITOR_FORBIDDEN_CHARS.contains(ch))
        {
            return Err(AppError::Config(format!(
                "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
                ch
            )));
        }

        Ok(editor_cmd)
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal directory is expanded with `shellexpand` to handle `~` and
    /// environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal directory path expansion fails or yields an empty path
    /// - The editor command fails validation
    pub fn load() -> AppResult<Self> {
        // Blank variables count as unset
        let editor_raw = [ENV_VAR_JOURNI_EDITOR, ENV_VAR_EDITOR]
            .into_iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.trim().is_empty());
        let editor = match editor_raw {
            Some(raw) => Some(Config::validate_editor_command(raw.trim())?.to_string()),
            None => None,
        };

        let journal_dir_str = env::var(ENV_VAR_JOURNI_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_SUBDIR)
        });

        let expanded_path = shellexpand::full(&journal_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let journal_dir = PathBuf::from(expanded_path.into_owned());

        if journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        Ok(Config {
            journal_dir,
            editor,
        })
    }

    /// Points the store at `dir`, resolving relative paths against `cwd`.
    pub fn with_journal_dir(mut self, dir: &Path, cwd: &Path) -> Self {
        self.journal_dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            cwd.join(dir)
        };
        self
    }

    /// Drops the editor so entry text is always typed inline.
    pub fn without_editor(mut self) -> Self {
        self.editor = None;
        self
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the journal directory is empty or relative,
    /// or the editor command is invalid.
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_dir.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Journal directory path is empty".to_string(),
            ));
        }

        if !self.journal_dir.is_absolute() {
            return Err(AppError::Config(
                "Journal directory must be an absolute path".to_string(),
            ));
        }

        if let Some(editor) = &self.editor {
            Config::validate_editor_command(editor)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    /// Runs `f` with the journi variables cleared, restoring them afterwards.
    fn with_clean_env<T>(f: impl FnOnce() -> T) -> T {
        let keys = [ENV_VAR_JOURNI_DIR, ENV_VAR_JOURNI_EDITOR, ENV_VAR_EDITOR];
        let saved: Vec<(&str, Option<String>)> =
            keys.iter().map(|k| (*k, env::var(k).ok())).collect();
        for key in keys {
            env::remove_var(key);
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            journal_dir: PathBuf::from("/home/username/private/journal"),
            editor: Some("vim".to_string()),
        };

        let debug_output = format!("{:?}", config);

        assert!(debug_output.contains(REDACTED_PLACEHOLDER));
        assert!(!debug_output.contains("vim"));
        assert!(!debug_output.contains("/home/username/private/journal"));
    }

    #[test]
    #[serial]
    fn test_load_without_editor_is_inline() {
        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_JOURNI_DIR, "/tmp/journi-test");
            Config::load().unwrap()
        });
        assert_eq!(config.editor, None);
        assert_eq!(config.journal_dir, PathBuf::from("/tmp/journi-test"));
    }

    #[test]
    #[serial]
    fn test_journi_editor_takes_precedence() {
        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_EDITOR, "nano");
            let fallback = Config::load().unwrap();
            assert_eq!(fallback.editor.as_deref(), Some("nano"));

            env::set_var(ENV_VAR_JOURNI_EDITOR, "code");
            Config::load().unwrap()
        });
        assert_eq!(config.editor.as_deref(), Some("code"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_unsafe_editor() {
        let result = with_clean_env(|| {
            env::set_var(ENV_VAR_JOURNI_EDITOR, "vim; rm -rf /");
            Config::load()
        });
        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains("cannot contain")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_load_with_custom_dir() {
        let temp_dir = tempdir().unwrap();
        let dir_path = temp_dir.path().to_string_lossy().to_string();

        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_JOURNI_DIR, &dir_path);
            Config::load().unwrap()
        });
        assert_eq!(config.journal_dir, PathBuf::from(dir_path));
    }

    #[test]
    #[serial]
    fn test_load_default_dir_under_home() {
        let original_home = env::var(ENV_VAR_HOME).ok();
        let config = with_clean_env(|| {
            env::set_var(ENV_VAR_HOME, "/home/tester");
            Config::load().unwrap()
        });
        match original_home {
            Some(home) => env::set_var(ENV_VAR_HOME, home),
            None => env::remove_var(ENV_VAR_HOME),
        }

        assert_eq!(
            config.journal_dir,
            PathBuf::from("/home/tester/Documents/journi")
        );
    }

    #[test]
    fn test_validate() {
        let valid = Config {
            journal_dir: PathBuf::from("/absolute/path"),
            editor: None,
        };
        assert!(valid.validate().is_ok());

        let relative = Config {
            journal_dir: PathBuf::from("relative/path"),
            editor: None,
        };
        assert!(relative.validate().is_err());

        let empty = Config::default();
        match empty.validate() {
            Err(AppError::Config(msg)) => assert_eq!(msg, "Journal directory path is empty"),
            other => panic!("Expected config error, got {:?}", other),
        }

        let bad_editor = Config {
            journal_dir: PathBuf::from("/absolute/path"),
            editor: Some("my editor".to_string()),
        };
        assert!(bad_editor.validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config {
            journal_dir: PathBuf::from("/from/env"),
            editor: Some("vim".to_string()),
        };

        let config = config
            .with_journal_dir(Path::new("notes"), Path::new("/work"))
            .without_editor();
        assert_eq!(config.journal_dir, PathBuf::from("/work/notes"));
        assert_eq!(config.editor, None);

        let config = config.with_journal_dir(Path::new("/abs"), Path::new("/work"));
        assert_eq!(config.journal_dir, PathBuf::from("/abs"));
    }
}
