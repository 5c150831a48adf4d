use assert_cmd::Command;
use predicates::prelude::*;

fn assistant(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env("ASSISTANT_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_phone_scenario() {
    let temp_dir = tempfile::tempdir().unwrap();
    assistant(temp_dir.path())
        .write_stdin("add John\nadd_phone John 1234567890\nphone John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact john added"))
        .stdout(predicate::str::contains("Phone number: 1234567890"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_exit_words() {
    let temp_dir = tempfile::tempdir().unwrap();
    for word in ["exit", "close", "good bye"] {
        assistant(temp_dir.path())
            .write_stdin(format!("{}\nhello\n", word))
            .assert()
            .success()
            .stdout(predicate::str::contains("Good bye!"))
            .stdout(predicate::str::contains("How can I help you?").not());
    }
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp_dir = tempfile::tempdir().unwrap();
    assistant(temp_dir.path())
        .write_stdin("hello\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_unknown_command() {
    let temp_dir = tempfile::tempdir().unwrap();
    assistant(temp_dir.path())
        .write_stdin("dance\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown command. Type 'help' to see available commands.",
        ));
}

#[test]
fn test_book_persists_between_runs() {
    let temp_dir = tempfile::tempdir().unwrap();
    assistant(temp_dir.path())
        .write_stdin("add jane 0501234567\nadd_email jane jane@example.com\nexit\n")
        .assert()
        .success();
    assert!(temp_dir.path().join("address_book.json").exists());

    assistant(temp_dir.path())
        .write_stdin("search jane@\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search results:"))
        .stdout(predicate::str::contains(
            "Contact name: jane, phones: 0501234567, Email: jane@example.com",
        ));
}

#[test]
fn test_config_page_size() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), r#"{"page_size": 1}"#).unwrap();
    assistant(temp_dir.path())
        .write_stdin("add a\nadd b\nshow all\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2/2"));
}

#[test]
fn test_invalid_phone_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    assistant(temp_dir.path())
        .write_stdin("add bob 12345\ninfo bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("expected exactly 10 digits"));
}
