// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recursive file discovery for `-r`.
//!
//! Built on the `ignore` crate's walker with its standard filters turned
//! off: like classic grep, recursion visits hidden files and does not
//! consult gitignore rules. Entries are visited in file-name order so runs
//! are deterministic.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Walker settings.
pub struct WalkerConfig {
    /// Maximum directory depth to descend, `None` for unlimited.
    pub max_depth: Option<usize>,
    /// Follow symbolic links while descending.
    pub follow_links: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { max_depth: None, follow_links: false }
    }
}

/// Counters describing one walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub errors: usize,
}

/// Collects every regular file under a root.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect file paths in deterministic order.
    ///
    /// A `root` that is itself a file yields just that file. Unreadable
    /// entries are counted in the stats and skipped.
    pub fn walk_collect(&self, root: &Path) -> (Vec<PathBuf>, WalkStats) {
        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(self.config.follow_links)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        for entry in builder.build() {
            match entry {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|t| t.is_file());
                    if is_file {
                        files.push(entry.into_path());
                    }
                }
                Err(_) => stats.errors += 1,
            }
        }

        stats.files_found = files.len();
        (files, stats)
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
