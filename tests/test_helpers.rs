#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Creates a `Command` for the `journi` binary with a clean, non-interactive environment.
/// Additional environment variables or arguments can be configured by the caller.
pub fn base_journi_command(journal_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("journi").expect("journi binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", journal_dir).env("JOURNI_DIR", journal_dir);
    cmd
}

/// Writes an entry file directly, bypassing the binary.
pub fn write_entry(root: &Path, year: i32, month: u32, day: u32, body: &str) -> PathBuf {
    let dir = root.join(format!("{:04}", year)).join(format!("{:02}", month));
    fs::create_dir_all(&dir).expect("Failed to create month directory");
    let path = dir.join(format!("journal-{:02}.txt", day));
    fs::write(&path, body).expect("Failed to write entry");
    path
}
