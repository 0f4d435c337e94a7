//! Behavioral specs for file and directory search.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;
use tempfile::TempDir;

/// A single file is searched without a path prefix
#[test]
fn single_file_has_no_prefix() {
    let tmp = TempDir::new().unwrap();
    let file = write_file(tmp.path(), "log.txt", "nothing\nerror: boom\n");

    quarry_cmd()
        .args(["-E", "error"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicates::str::contains("error: boom\n"))
        .stdout(predicates::str::contains("log.txt:").not());
}

/// Searching two files prefixes each line with its path
#[test]
fn multiple_files_are_prefixed() {
    let tmp = TempDir::new().unwrap();
    let first = write_file(tmp.path(), "a.txt", "match here\n");
    let second = write_file(tmp.path(), "b.txt", "another match\n");

    let assert = quarry_cmd()
        .args(["-E", "match"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains(&format!("{}:match here", first.display())));
    assert!(stdout.contains(&format!("{}:another match", second.display())));
}

/// Files are searched in the order given on the command line
#[test]
fn files_are_searched_in_argument_order() {
    let tmp = TempDir::new().unwrap();
    let first = write_file(tmp.path(), "z.txt", "hit one\n");
    let second = write_file(tmp.path(), "a.txt", "hit two\n");

    let assert = quarry_cmd()
        .args(["-E", "hit"])
        .arg(&first)
        .arg(&second)
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let one = stdout.find("hit one").unwrap();
    let two = stdout.find("hit two").unwrap();
    assert!(one < two, "z.txt was listed first: {stdout}");
}

/// A missing path is reported and does not abort the run
#[test]
fn missing_path_is_reported_and_skipped() {
    let tmp = TempDir::new().unwrap();
    let good = write_file(tmp.path(), "good.txt", "findable\n");

    quarry_cmd()
        .args(["-E", "findable"])
        .arg(tmp.path().join("absent.txt"))
        .arg(&good)
        .assert()
        .success()
        .stderr(predicates::str::contains("Error: Path not found:"))
        .stdout(predicates::str::contains("findable"));
}

/// A missing path alone exits 1
#[test]
fn missing_path_without_matches_exits_one() {
    let tmp = TempDir::new().unwrap();

    quarry_cmd()
        .args(["-E", "x"])
        .arg(tmp.path().join("absent.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Error: Path not found:"));
}

/// A directory without -r is skipped with a warning
#[test]
fn directory_without_recursive_warns() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "inner.txt", "content\n");

    quarry_cmd()
        .args(["-E", "content"])
        .arg(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Warning: Skipping non-regular file:"));
}

/// -r descends into directories
#[test]
fn recursive_searches_nested_files() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "top.txt", "needle on top\n");
    write_file(tmp.path(), "sub/deep.txt", "needle below\n");

    quarry_cmd()
        .args(["-E", "needle", "-r"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("needle on top"))
        .stdout(predicates::str::contains("needle below"));
}

/// -r with no paths searches the current directory
#[test]
fn recursive_defaults_to_current_directory() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "here.txt", "needle here\n");

    quarry_cmd()
        .args(["-E", "needle", "-r"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("needle here"));
}

/// A single file found via -r still has no prefix
#[test]
fn recursive_single_file_has_no_prefix() {
    let tmp = TempDir::new().unwrap();
    write_file(tmp.path(), "only.txt", "lone needle\n");

    quarry_cmd()
        .args(["-E", "needle", "-r"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("only.txt:").not());
}
