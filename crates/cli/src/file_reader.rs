// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized file reading with size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for searching
#![allow(unsafe_code)]
//!
//! Small files are read into an owned buffer, large files are memory-mapped.
//! Content is raw bytes: lines are split on `\n` without any UTF-8
//! requirement, so binary-ish logs still search fine.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read whole.
const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(Vec<u8>),
    /// Large file memory-mapped.
    Mapped(Mmap),
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        let size = meta.len();

        if size < MMAP_THRESHOLD {
            let content = fs::read(path)?;
            Ok(FileContent::Owned(content))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the
            // mapped memory, and stale data on concurrent modification is
            // acceptable for searching.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(mmap))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            FileContent::Owned(bytes) => bytes,
            FileContent::Mapped(mmap) => mmap,
        }
    }

    /// Iterate over lines without their terminating `\n`. A trailing newline
    /// does not produce a final empty line.
    pub fn lines(&self) -> Lines<'_> {
        Lines { rest: Some(self.as_bytes()) }
    }
}

/// Iterator over `\n`-separated lines of a byte buffer.
pub struct Lines<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let rest = self.rest?;
        match rest.iter().position(|&b| b == b'\n') {
            Some(split) => {
                self.rest = Some(&rest[split + 1..]);
                Some(&rest[..split])
            }
            None => {
                self.rest = None;
                if rest.is_empty() { None } else { Some(rest) }
            }
        }
    }
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
