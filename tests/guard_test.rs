use exgen::error::{Error, Result};
use exgen::guard::{check_destination, Outcome};
use exgen::prompt::Prompter;
use std::fs;
use tempfile::TempDir;
use test_log::test;

/// Answers every confirmation with a fixed value.
struct ScriptedPrompter {
    answer: bool,
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(self.answer)
    }
}

/// Fails the test if the guard suspends at all.
struct UnreachablePrompter;

impl Prompter for UnreachablePrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        panic!("unexpected prompt: {message}");
    }
}

#[test]
fn test_missing_destination_counts_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("not-there");

    let outcome = check_destination(&missing, false, &UnreachablePrompter).unwrap();
    assert_eq!(outcome, Outcome::Proceed);
}

#[test]
fn test_empty_destination_proceeds_without_prompt() {
    let temp_dir = TempDir::new().unwrap();

    let outcome = check_destination(temp_dir.path(), false, &UnreachablePrompter).unwrap();
    assert_eq!(outcome, Outcome::Proceed);
}

#[test]
fn test_force_skips_the_prompt() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("occupied.txt"), "x").unwrap();

    let outcome = check_destination(temp_dir.path(), true, &UnreachablePrompter).unwrap();
    assert_eq!(outcome, Outcome::Proceed);
}

#[test]
fn test_non_empty_destination_asks_the_operator() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("occupied.txt"), "x").unwrap();

    let affirmed =
        check_destination(temp_dir.path(), false, &ScriptedPrompter { answer: true }).unwrap();
    assert_eq!(affirmed, Outcome::Proceed);

    let declined =
        check_destination(temp_dir.path(), false, &ScriptedPrompter { answer: false }).unwrap();
    assert_eq!(declined, Outcome::Aborted);
}

#[test]
fn test_unreadable_destination_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("plain-file");
    fs::write(&file_path, "x").unwrap();

    // Listing a regular file fails with something other than NotFound, so
    // the error must propagate instead of reading as an empty directory.
    let result = check_destination(&file_path, false, &UnreachablePrompter);
    assert!(matches!(result, Err(Error::Io(_))));
}
