#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn todoz_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_new_then_list() {
    let temp = TempDir::new().unwrap();

    todoz_cmd(&temp)
        .write_stdin("new\nbuy milk\nls\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to our ToDo app."))
        .stdout(predicate::str::contains("Your todo is created"))
        .stdout(predicate::str::contains("(1) buy milk"))
        .stdout(predicate::str::contains("Page 1 of 1"));

    let content = fs::read_to_string(temp.path().join("todos.txt")).unwrap();
    assert_eq!(content, "buy milk\n");
}

#[test]
fn test_status_markers_persist() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.txt"), "a\nb\nc\n").unwrap();

    todoz_cmd(&temp)
        .write_stdin("done 1\nstart 2\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked as done: (1) ✓ a"))
        .stdout(predicate::str::contains("Marked as started: (2) → b"));

    let content = fs::read_to_string(temp.path().join("todos.txt")).unwrap();
    assert_eq!(content, "::done::a\n::started::b\nc\n");
}

#[test]
fn test_removed_todo_is_gone_after_restart() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.txt"), "a\nb\nc\n").unwrap();

    todoz_cmd(&temp)
        .write_stdin("rm 2\nls\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed: (2) b"))
        .stdout(predicate::str::contains("(3) c"));

    todoz_cmd(&temp)
        .write_stdin("ls\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2) c"))
        .stdout(predicate::str::contains(") b").not());

    let content = fs::read_to_string(temp.path().join("todos.txt")).unwrap();
    assert_eq!(content, "a\nc\n");
}

#[test]
fn test_paging_with_custom_page_size() {
    let temp = TempDir::new().unwrap();
    let lines: String = (1..=5).map(|i| format!("todo {}\n", i)).collect();
    fs::write(temp.path().join("todos.txt"), lines).unwrap();

    todoz_cmd(&temp)
        .args(["--page-size", "2"])
        .write_stdin("ls\nnext\nnext\nnext\nprev\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("Page 2 of 3"))
        .stdout(predicate::str::contains("(5) todo 5"))
        .stdout(predicate::str::contains("There are no more pages."));
}

#[test]
fn test_config_file_sets_todos_path() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("todoz.json"),
        r#"{"file": "work.txt", "page_size": 1}"#,
    )
    .unwrap();
    fs::write(temp.path().join("work.txt"), "first\nsecond\n").unwrap();

    todoz_cmd(&temp)
        .write_stdin("ls\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("(1) first"))
        .stdout(predicate::str::contains("Page 1 of 2"));
}

#[test]
fn test_invalid_and_out_of_range_commands() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("todos.txt"), "only\n").unwrap();

    todoz_cmd(&temp)
        .write_stdin("dance\ndone 5\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not a valid action"))
        .stdout(predicate::str::contains("No item with such number"));

    let content = fs::read_to_string(temp.path().join("todos.txt")).unwrap();
    assert_eq!(content, "only\n");
}

#[test]
fn test_unreadable_todos_file_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("todos.txt")).unwrap();

    todoz_cmd(&temp)
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let temp = TempDir::new().unwrap();

    todoz_cmd(&temp)
        .args(["--page-size", "0"])
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size must be at least 1"));
}
