//! Behavioral specs for `--profile`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// --profile prints the counter summary to stderr after processing
#[test]
fn profile_summary_lands_on_stderr() {
    quarry_cmd()
        .args(["-E", "a", "--profile"])
        .write_stdin("alpha\nbeta\n")
        .assert()
        .success()
        .stdout("alpha\nbeta\n")
        .stderr(predicates::str::contains("profile:"))
        .stderr(predicates::str::contains("lines processed: 2"))
        .stderr(predicates::str::contains("simulator steps:"))
        .stderr(predicates::str::contains("configurations visited:"))
        .stderr(predicates::str::contains("max live configurations:"));
}

/// Counters accumulate over every input line, matched or not
#[test]
fn profile_counts_all_lines() {
    quarry_cmd()
        .args(["-E", "zzz", "--profile"])
        .write_stdin("one\ntwo\nthree\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("lines processed: 3"));
}

/// Without --profile the diagnostic stream stays quiet
#[test]
fn no_profile_no_stderr() {
    quarry_cmd()
        .args(["-E", "a"])
        .write_stdin("alpha\n")
        .assert()
        .success()
        .stderr("");
}
