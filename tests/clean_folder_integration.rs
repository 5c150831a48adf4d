use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn clean_folder() -> Command {
    let mut cmd = Command::cargo_bin("clean-folder").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_no_argument() {
    clean_folder()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No argument"));
}

#[test]
fn test_missing_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    clean_folder()
        .arg(temp_dir.path().join("nope"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Does not exist"));
}

#[test]
fn test_path_is_a_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("a.txt");
    fs::write(&file, "x").unwrap();
    clean_folder()
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not a directory"));
}

#[test]
fn test_surplus_arguments() {
    clean_folder().args(["a", "b"]).assert().code(1);
}

#[test]
fn test_sorts_folder() {
    let temp_dir = tempfile::tempdir().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("a.jpg"), "img").unwrap();
    fs::write(root.join("b.xyz"), "???").unwrap();
    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("Звіт.pdf"), "pdf").unwrap();

    clean_folder()
        .arg(root)
        .assert()
        .success()
        .stdout(predicate::str::contains("a.jpg"))
        .stdout(predicate::str::contains("Unknown extensions: xyz"));

    assert!(root.join("images").join("a.jpg").exists());
    assert!(root.join("b.xyz").exists());
    assert!(root.join("documents").join("Zvit.pdf").exists());
    assert!(!root.join("nested").exists());
}
