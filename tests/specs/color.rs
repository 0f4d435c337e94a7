//! Behavioral specs for `--color`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// --color=always highlights the matched substring
#[test]
fn always_wraps_the_match_in_escapes() {
    let output = quarry_cmd()
        .args(["-E", "wor", "--color=always"])
        .write_stdin("hello world\n")
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('\u{1b}'), "expected escape codes: {stdout:?}");

    // The highlighted section covers exactly the match: "wor" sits between
    // the color sequence and the reset, "ld" follows the reset.
    let reset_at = stdout.rfind("\u{1b}[0m").unwrap();
    assert!(stdout[..reset_at].ends_with("wor"));
    assert!(stdout[reset_at..].ends_with("ld\n"));
}

/// --color=never produces no escape bytes
#[test]
fn never_produces_plain_output() {
    let output = quarry_cmd()
        .args(["-E", "wor", "--color=never"])
        .write_stdin("hello world\n")
        .output()
        .expect("command should run");

    assert!(output.status.success());
    assert_eq!(output.stdout, b"hello world\n");
}

/// The prefix and the rest of the line stay uncolored
#[test]
fn highlight_covers_only_the_span() {
    let output = quarry_cmd()
        .args(["-E", "b", "--color=always"])
        .write_stdin("abc\n")
        .output()
        .expect("command should run");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first_escape = stdout.find('\u{1b}').unwrap();
    assert_eq!(&stdout[..first_escape], "a");
    assert!(stdout.ends_with("c\n"));
}
