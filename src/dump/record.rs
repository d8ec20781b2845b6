// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! A single frame record of a dump.

use std::ops::Range;

use super::lexer::{self, LineKind, LineSpan};

/// One byte of a record, addressed by the positions of its two hex digits
/// in the record text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCell {
    /// Character offset of the high nibble inside [`Record::text`].
    pub hi: usize,
    /// Character offset of the low nibble. Equal to `hi` for a lone nibble.
    pub lo: usize,
    /// Parsed byte, `None` for a lone nibble.
    pub value: Option<u8>,
}

/// One frame entry: everything from its delimiter line up to (not including)
/// the next delimiter line.
#[derive(Debug, Clone)]
pub struct Record {
    index: usize,
    text: String,
    header: String,
    cells: Vec<ByteCell>,
    payload_lines: usize,
}

impl Record {
    /// Build a record from its verbatim block. `lines` are spans relative to
    /// `block`, the first one being the delimiter line.
    pub(crate) fn from_block(index: usize, block: &str, lines: &[LineSpan]) -> Self {
        let mut header = None;
        let mut cells = Vec::new();
        let mut payload_lines = 0;

        for span in lines.iter().skip(1) {
            let line = &block[span.start..span.end];
            match lexer::classify(line) {
                LineKind::Blank | LineKind::Delimiter => {}
                LineKind::Payload => {
                    payload_lines += 1;
                    if let Some(tokens) = lexer::payload_cells(line) {
                        cells.extend(tokens.into_iter().map(|t| ByteCell {
                            hi: span.start + t.hi,
                            lo: span.start + t.lo,
                            value: t.value,
                        }));
                    }
                }
                LineKind::Text => {
                    if header.is_none() && payload_lines == 0 {
                        header = Some(line.to_string());
                    }
                }
            }
        }

        Self {
            index,
            text: block.to_string(),
            header: header.unwrap_or_default(),
            cells,
            payload_lines,
        }
    }

    /// 0-based position of this record in the dump.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Verbatim source text, delimiter line included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The header line (first text line after the delimiter), verbatim.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Timestamp token of the header line.
    pub fn timestamp(&self) -> &str {
        lexer::timestamp(&self.header)
    }

    /// All byte cells in payload order.
    pub fn cells(&self) -> &[ByteCell] {
        &self.cells
    }

    /// Length of the flat byte sequence.
    pub fn byte_len(&self) -> usize {
        self.cells.len()
    }

    /// Number of payload lines found in the record.
    pub fn payload_lines(&self) -> usize {
        self.payload_lines
    }

    /// Returns `true` if the record holds at least one byte cell.
    pub fn has_payload(&self) -> bool {
        !self.cells.is_empty()
    }

    /// Flat byte values of `range`. Returns `None` if the range is out of
    /// bounds or any cell in it is malformed.
    pub fn bytes(&self, range: Range<usize>) -> Option<Vec<u8>> {
        self.cells.get(range)?.iter().map(|c| c.value).collect()
    }
}
