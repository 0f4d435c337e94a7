// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The search command: compile the pattern once, then run every input line
//! through the engine and print the hits.
//!
//! Path problems are reported to stderr per path and never abort the run;
//! the exit code only says whether anything matched.

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use termcolor::WriteColor;

use quarry::cli::Cli;
use quarry::color;
use quarry::error::ExitCode;
use quarry::file_reader::FileContent;
use quarry::profile::Profiler;
use quarry::regex::{Matcher, Regex};
use quarry::report::MatchPrinter;
use quarry::walker::{FileWalker, WalkerConfig};

/// Run the search described by the parsed CLI.
pub fn run(args: &Cli) -> anyhow::Result<ExitCode> {
    if args.pattern.is_empty() {
        anyhow::bail!("pattern cannot be empty");
    }
    let regex = Regex::compile(args.pattern.as_bytes())
        .map_err(|err| anyhow::anyhow!("invalid pattern: {err}"))?;

    let mut matcher = regex.matcher();
    let profiler = Profiler::new(args.profile);
    let mut printer = MatchPrinter::stdout(color::resolve(args.color));

    let found_any = if args.paths.is_empty() && !args.recursive {
        search_stdin(&mut matcher, &mut printer)?
    } else {
        search_files(args, &mut matcher, &mut printer)?
    };

    profiler.emit(matcher.stats());

    Ok(if found_any { ExitCode::MatchFound } else { ExitCode::NoMatch })
}

fn search_stdin<W: WriteColor>(
    matcher: &mut Matcher<'_>,
    printer: &mut MatchPrinter<W>,
) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = Vec::new();
    let mut found = false;

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).context("reading stdin")?;
        if read == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if let Some(span) = matcher.find(&line) {
            printer.print(None, &line, span).context("writing output")?;
            found = true;
        }
    }

    Ok(found)
}

fn search_files<W: WriteColor>(
    args: &Cli,
    matcher: &mut Matcher<'_>,
    printer: &mut MatchPrinter<W>,
) -> anyhow::Result<bool> {
    let files = collect_files(&args.paths, args.recursive);
    let with_prefix = files.len() > 1;
    let mut found = false;

    for path in &files {
        let content = match FileContent::read(path) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Error: Could not open file {}: {}", path.display(), err);
                continue;
            }
        };
        for line in content.lines() {
            if let Some(span) = matcher.find(line) {
                let prefix = with_prefix.then_some(path.as_path());
                printer.print(prefix, line, span).context("writing output")?;
                found = true;
            }
        }
    }

    Ok(found)
}

/// Vet the positional paths and expand directories when recursing.
///
/// With no positional paths the recursive default is the current directory.
/// Missing paths and (outside `-r`) non-regular files produce a diagnostic
/// line and are skipped.
fn collect_files(paths: &[PathBuf], recursive: bool) -> Vec<PathBuf> {
    let mut targets: Vec<PathBuf> = paths.to_vec();
    if targets.is_empty() {
        targets.push(PathBuf::from("."));
    }

    let mut files = Vec::new();
    for path in &targets {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            continue;
        }
        if recursive {
            if path.is_dir() {
                let walker = FileWalker::new(WalkerConfig::default());
                let (found, _stats) = walker.walk_collect(path);
                files.extend(found);
            } else if path.is_file() {
                files.push(path.clone());
            } else {
                eprintln!("Warning: Skipping non-regular file: {}", path.display());
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            eprintln!("Warning: Skipping non-regular file: {}", path.display());
        }
    }
    files
}
