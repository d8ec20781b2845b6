// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Lossless reader for K12 text dumps (zero external dependencies).
//!
//! Wireshark's K12 text export renders every captured frame as a delimiter
//! line, a timestamp header and one or more `|offset|xx|xx|...|` hex rows.
//! [`Dump::parse`] splits such a file into records without losing a single
//! character: concatenating all chunks reproduces the input exactly, so a
//! dump whose bytes are rewritten through [`rewrite::splice`] keeps its
//! layout, whitespace and line endings.
//!
//! Supports:
//! - `\n`, `\r\n` and lone `\r` line endings (mixed within one file)
//! - Whitespace around the delimiter line
//! - Multiple payload rows per record
//! - Text before the first delimiter and empty delimiter blocks (kept verbatim)
//!
//! Does NOT interpret GOOSE / SV semantics; a record is just a flat byte
//! sequence.

pub mod error;
pub mod lexer;
pub mod record;
pub mod rewrite;

use std::fmt;

use lexer::{LineKind, LineSpan};
pub use record::{ByteCell, Record};

/// A contiguous piece of the dump text.
#[derive(Debug, Clone)]
pub enum Chunk {
    /// Text that does not form a record (preamble, empty delimiter blocks).
    Verbatim(String),
    /// A frame record.
    Record(Record),
}

/// A parsed dump: ordered chunks covering the whole input.
#[derive(Debug, Clone, Default)]
pub struct Dump {
    chunks: Vec<Chunk>,
}

impl Dump {
    /// Parse dump text into chunks and records.
    ///
    /// Never fails: a text without any delimiter yields a dump with zero
    /// records whose single verbatim chunk is the whole input.
    pub fn parse(text: &str) -> Self {
        let lines = lexer::split_lines(text);
        let starts: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, s)| lexer::classify(&text[s.start..s.end]) == LineKind::Delimiter)
            .map(|(i, _)| i)
            .collect();

        let mut chunks = Vec::new();
        let first_offset = starts.first().map_or(text.len(), |&i| lines[i].start);
        if first_offset > 0 {
            chunks.push(Chunk::Verbatim(text[..first_offset].to_string()));
        }

        let mut index = 0;
        for (k, &first) in starts.iter().enumerate() {
            let last = starts.get(k + 1).copied().unwrap_or(lines.len());
            let begin = lines[first].start;
            let end = starts.get(k + 1).map_or(text.len(), |&i| lines[i].start);
            let block = &text[begin..end];

            let rel: Vec<LineSpan> = lines[first..last]
                .iter()
                .map(|s| LineSpan {
                    start: s.start - begin,
                    end: s.end - begin,
                    next: s.next - begin,
                })
                .collect();

            let is_empty = rel.iter().skip(1).all(|s| block[s.start..s.end].trim().is_empty());
            if is_empty {
                chunks.push(Chunk::Verbatim(block.to_string()));
            } else {
                chunks.push(Chunk::Record(Record::from_block(index, block, &rel)));
                index += 1;
            }
        }

        Self { chunks }
    }

    /// All chunks in input order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Iterate over the records in dump order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.chunks.iter().filter_map(|c| match c {
            Chunk::Record(r) => Some(r),
            Chunk::Verbatim(_) => None,
        })
    }

    /// Number of records found.
    pub fn record_count(&self) -> usize {
        self.records().count()
    }

    /// Returns `true` if no record was found.
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

impl fmt::Display for Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.chunks {
            match chunk {
                Chunk::Verbatim(t) => f.write_str(t)?,
                Chunk::Record(r) => f.write_str(r.text())?,
            }
        }
        Ok(())
    }
}
