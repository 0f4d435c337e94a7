//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;

/// A line-oriented text search tool built on a Thompson NFA regex engine
#[derive(Parser, Debug)]
#[command(name = "quarry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Extended regex pattern to search for
    #[arg(short = 'E', value_name = "PATTERN", required = true)]
    pub pattern: String,

    /// Recurse into directories
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Print engine counters to stderr after processing
    #[arg(long)]
    pub profile: bool,

    /// Files or directories to search (stdin when empty and not recursive)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
