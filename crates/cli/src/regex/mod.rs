// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The regex engine: pattern parsing, Thompson NFA construction, and a
//! capture-aware simulator with online backreference matching.
//!
//! Patterns are byte sequences; `^` and `$` refer to the start and end of
//! the text handed to the matcher (a single line), not embedded newlines.

pub mod nfa;
pub mod parser;
pub mod sim;

pub use self::parser::ParseError;
pub use self::sim::{Match, Matcher, SimStats};

use self::nfa::{Nfa, NfaBuilder, StateKind};
use self::parser::Parser;

/// A compiled pattern, immutable and shareable once built.
pub struct Regex {
    nfa: Nfa,
}

impl Regex {
    /// Compile `pattern` into an NFA.
    ///
    /// The empty pattern compiles to a bare `Accept` state and matches the
    /// empty string at the start of any text.
    pub fn compile(pattern: &[u8]) -> Result<Self, ParseError> {
        let mut builder = NfaBuilder::new();
        let accept = builder.push(StateKind::Accept);

        if pattern.is_empty() {
            return Ok(Self { nfa: builder.finish(accept, 0) });
        }

        let mut parser = Parser::new(pattern);
        let first = parser.parse_primary(&mut builder)?;
        let frag = parser.parse_expr(&mut builder, first, 0)?;

        if let Some(rest) = parser.peek() {
            return Err(match rest {
                b')' => ParseError::UnmatchedCloseParen,
                b']' => ParseError::UnmatchedCloseBracket,
                _ => ParseError::Syntax,
            });
        }

        builder.patch_all(&frag, accept);
        Ok(Self { nfa: builder.finish(frag.start, parser.group_count()) })
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// A matcher borrowing this pattern; reuse one across lines so the
    /// profiling counters accumulate over a whole run.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher::new(&self.nfa)
    }

    /// Convenience one-shot search.
    pub fn find(&self, text: &[u8]) -> Option<Match> {
        self.matcher().find(text)
    }

    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find(text).is_some()
    }
}
