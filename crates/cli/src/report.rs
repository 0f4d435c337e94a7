// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match reporting.
//!
//! Writes each matching line to the output stream, wrapping the matched
//! span in the highlight color. The printer is generic over
//! [`termcolor::WriteColor`] so tests can drive it with in-memory buffers.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::color::scheme;
use crate::regex::Match;

/// Writes matching lines, optionally prefixed with their file path and with
/// the matched span highlighted.
pub struct MatchPrinter<W> {
    out: W,
}

impl MatchPrinter<StandardStream> {
    /// Printer over stdout with the resolved color choice.
    pub fn stdout(choice: ColorChoice) -> Self {
        Self { out: StandardStream::stdout(choice) }
    }
}

impl<W: WriteColor> MatchPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one matching line.
    ///
    /// The highlight wraps exactly `line[span.start..span.end]`; on a
    /// color-disabled stream the line goes out verbatim. `prefix` is the
    /// `path:` marker used when more than one file is searched.
    pub fn print(&mut self, prefix: Option<&Path>, line: &[u8], span: Match) -> io::Result<()> {
        if let Some(path) = prefix {
            write!(self.out, "{}:", path.display())?;
        }
        self.out.write_all(&line[..span.start])?;
        self.out.set_color(&scheme::highlight())?;
        self.out.write_all(&line[span.start..span.end])?;
        self.out.reset()?;
        self.out.write_all(&line[span.end..])?;
        self.out.write_all(b"\n")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
