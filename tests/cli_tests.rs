use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

mod test_helpers;
use test_helpers::{base_journi_command, write_entry};

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = tempdir().unwrap();
    base_journi_command(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("append"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_stats_on_empty_journal() {
    let temp_dir = tempdir().unwrap();
    let journal_dir = temp_dir.path().join("journal");

    base_journi_command(&journal_dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Entries: 0"));

    assert!(journal_dir.is_dir(), "root should be created at startup");
}

#[test]
fn test_stats_json() {
    let temp_dir = tempdir().unwrap();
    write_entry(temp_dir.path(), 2024, 1, 1, "Hello world");
    write_entry(temp_dir.path(), 2024, 1, 15, "A longer entry here");

    let output = base_journi_command(temp_dir.path())
        .args(["stats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_entries"], 2);
    assert_eq!(value["total_words"], 6);
    assert_eq!(value["total_years"], 1);
}

#[test]
fn test_detailed_stats_text() {
    let temp_dir = tempdir().unwrap();
    write_entry(temp_dir.path(), 2024, 1, 1, "Hello world");
    write_entry(temp_dir.path(), 2024, 1, 15, "A longer entry here");

    base_journi_command(temp_dir.path())
        .args(["stats", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Longest Entry: 4 words on 15/01/2024"))
        .stdout(predicate::str::contains("Shortest Entry: 2 words on 01/01/2024"))
        .stdout(predicate::str::contains("2024-01: 2 entries, 6 words"));
}

#[test]
fn test_read_existing_and_missing_entry() {
    let temp_dir = tempdir().unwrap();
    write_entry(temp_dir.path(), 2024, 3, 5, "Spring is here");

    base_journi_command(temp_dir.path())
        .args(["read", "--date", "05-03-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Spring is here"));

    base_journi_command(temp_dir.path())
        .args(["read", "--date", "06/03/2024"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No entry found for 06/03/2024"));
}

#[test]
fn test_read_rejects_malformed_date() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .args(["read", "--date", "2024-03-05"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("DD-MM-YYYY"));
}

#[test]
fn test_append_to_missing_entry_fails_without_creating_files() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .args(["append", "--date", "01-01-2024", "--text", "more"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No entry found for 01/01/2024"));

    assert!(!temp_dir.path().join("2024").exists());
}

#[test]
fn test_append_keeps_existing_content() {
    let temp_dir = tempdir().unwrap();
    let path = write_entry(temp_dir.path(), 2024, 1, 1, "New year");

    base_journi_command(temp_dir.path())
        .args(["append", "--date", "1/1/2024", "--text", "Later that day"])
        .assert()
        .success()
        .stdout(predicate::str::contains("journal-01.txt"));

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("New year\n\n---\nUpdated on "));
    assert!(content.ends_with("Later that day"));
}

#[test]
fn test_search_text_and_json() {
    let temp_dir = tempdir().unwrap();
    write_entry(temp_dir.path(), 2023, 12, 31, "Walked the dog");
    write_entry(temp_dir.path(), 2024, 1, 2, "Cat nap");
    write_entry(temp_dir.path(), 2024, 2, 1, "Dog park again");

    base_journi_command(temp_dir.path())
        .args(["search", "DOG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 entries"))
        .stdout(predicate::str::contains("1. 31/12/2023 - Walked the dog"));

    let output = base_journi_command(temp_dir.path())
        .args(["search", "dog", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let hits: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let hits = hits.as_array().unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0]["date"], "2023-12-31");
    assert_eq!(hits[1]["title"], "Dog park again");
}

#[test]
fn test_interactive_session_creates_entry() {
    let temp_dir = tempdir().unwrap();

    let output = base_journi_command(temp_dir.path())
        .arg("--inline")
        .write_stdin("1\n1\nGreat day\nShipped the release.\n.\nwork\n8\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Entry saved successfully"));
    assert!(stdout.contains("Word count: 3 words"));
    assert!(stdout.contains("Thanks for journaling"));

    // The binary decides what "today" is, so take the path it reports
    let saved_to = stdout
        .lines()
        .find_map(|line| line.split("Saved to: ").nth(1))
        .expect("saved path should be printed");
    let path = Path::new(saved_to.trim());
    assert!(path.starts_with(temp_dir.path()));

    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("Great day\n😄 "));
    assert!(content.contains("Tags: #work"));
}

#[test]
fn test_interactive_session_survives_failed_action() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .arg("--inline")
        .write_stdin("2\n09-09-2009\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("❌ No entry found for 09/09/2009"))
        .stdout(predicate::str::contains("Thanks for journaling"));
}

#[test]
fn test_interactive_session_ends_on_closed_input() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .arg("--inline")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Entries: 0"));
}

#[test]
#[serial]
fn test_invalid_editor_aborts_startup() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .env("JOURNI_EDITOR", "vim; rm -rf /")
        .arg("stats")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_dir_flag_overrides_environment() {
    let temp_dir = tempdir().unwrap();
    let other = tempdir().unwrap();
    write_entry(other.path(), 2024, 5, 5, "Elsewhere");

    base_journi_command(temp_dir.path())
        .args(["read", "--date", "05-05-2024", "--dir"])
        .arg(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Elsewhere"));
}

#[test]
fn test_verbose_json_logs_carry_correlation_id() {
    let temp_dir = tempdir().unwrap();

    base_journi_command(temp_dir.path())
        .args(["stats", "--verbose", "--log-format", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("correlation_id"))
        .stderr(predicate::str::contains("app_invocation"));
}
