// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color mode resolution and the highlight scheme.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// CLI `--color` modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

/// Resolve the CLI color mode to a termcolor choice for stdout.
///
/// `Auto` enables color only when stdout is a terminal, so piped output
/// stays free of escape bytes.
pub fn resolve(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if std::io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    }
}

/// Color specs for output elements.
pub mod scheme {
    use super::*;

    /// Matched substring: bold red, grep-style.
    pub fn highlight() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
