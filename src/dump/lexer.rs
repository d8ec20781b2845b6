// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Line lexer for K12 text dumps.
//!
//! Splits the dump into lines (keeping track of every line terminator so the
//! text can be rebuilt exactly) and classifies each line as a record
//! delimiter, a blank line, a payload line or free text. Payload lines are
//! further tokenized into hex digit pairs, each with the character offsets
//! of its two digits, which is what the rewriter later uses to splice new
//! bytes in.
//!
//! A typical record looks like:
//!
//! ```text
//! +---------+---------------+----------+
//! 09:13:24,114,546   ETHER
//! |0   |01|0c|cd|01|00|01|00|1b|...|
//! ```

/// The structural delimiter that opens every record.
pub const DELIMITER: &str = "+---------+---------------+----------+";

/// Minimum run of spaces separating the timestamp from the rest of a header.
const TIMESTAMP_GAP: &str = "   ";

/// Byte offsets of one line inside the dump text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Offset of the first character of the line.
    pub start: usize,
    /// Offset one past the last character, excluding the terminator.
    pub end: usize,
    /// Offset of the next line (after `\n`, `\r\n` or `\r`).
    pub next: usize,
}

/// Classification of a single dump line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Delimiter,
    Blank,
    Payload,
    Text,
}

/// One byte of a payload line: a pair of hex digits inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellToken {
    /// Offset of the high nibble digit, relative to the start of the line.
    pub hi: usize,
    /// Offset of the low nibble digit. Equal to `hi` for a lone nibble.
    pub lo: usize,
    /// Parsed byte, or `None` for a lone nibble left over at the end of a cell.
    pub value: Option<u8>,
}

/// Split `text` into lines. Handles `\n`, `\r\n` and lone `\r`.
///
/// A final line without terminator is included; an empty trailing remainder
/// is not.
pub fn split_lines(text: &str) -> Vec<LineSpan> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        match bytes[pos] {
            b'\n' => {
                spans.push(LineSpan { start, end: pos, next: pos + 1 });
                pos += 1;
                start = pos;
            }
            b'\r' => {
                let next = if bytes.get(pos + 1) == Some(&b'\n') { pos + 2 } else { pos + 1 };
                spans.push(LineSpan { start, end: pos, next });
                pos = next;
                start = pos;
            }
            _ => pos += 1,
        }
    }
    if start < bytes.len() {
        spans.push(LineSpan { start, end: bytes.len(), next: bytes.len() });
    }
    spans
}

/// Classify a line (without its terminator).
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed == DELIMITER {
        LineKind::Delimiter
    } else if payload_cells(line).is_some() {
        LineKind::Payload
    } else {
        LineKind::Text
    }
}

/// Tokenize a payload line of the form `|<offset>   |xx|xx|...|`.
///
/// Returns `None` if the line does not open with a pipe followed by a hex
/// offset column. Every cell after the offset column, including any text
/// after the last pipe, contributes its hex digits two at a time; other
/// characters are skipped. A cell with an odd number of hex digits ends in a
/// lone nibble, which still takes a byte position but carries no value.
pub fn payload_cells(line: &str) -> Option<Vec<CellToken>> {
    let lead = line.len() - line.trim_start().len();
    if !line[lead..].starts_with('|') {
        return None;
    }

    let pipes: Vec<usize> = line.match_indices('|').map(|(i, _)| i).skip_while(|&i| i < lead).collect();
    if pipes.len() < 2 {
        return None;
    }
    let col = line[pipes[0] + 1..pipes[1]].trim();
    if col.is_empty() || !col.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let end = line.len();
    let mut cells = Vec::new();
    let bounds = pipes[1..].iter().zip(pipes[2..].iter().chain(std::iter::once(&end)));
    for (&open, &close) in bounds {
        push_hex_pairs(line, open + 1, close, &mut cells);
    }
    Some(cells)
}

fn push_hex_pairs(line: &str, start: usize, end: usize, cells: &mut Vec<CellToken>) {
    let bytes = line.as_bytes();
    let digits: Vec<usize> = (start..end).filter(|&i| bytes[i].is_ascii_hexdigit()).collect();
    for pair in digits.chunks(2) {
        match *pair {
            [hi, lo] => cells.push(CellToken {
                hi,
                lo,
                value: Some(nibble(bytes[hi]) << 4 | nibble(bytes[lo])),
            }),
            [lone] => cells.push(CellToken { hi: lone, lo: lone, value: None }),
            _ => {}
        }
    }
}

fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => 0,
    }
}

/// The timestamp token of a header line: text up to the first run of three
/// or more spaces, or the whole trimmed line.
pub fn timestamp(header: &str) -> &str {
    let trimmed = header.trim();
    match trimmed.find(TIMESTAMP_GAP) {
        Some(i) => &trimmed[..i],
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_mixed_line_endings() {
        let text = "a\nb\r\nc\rd";
        let spans = split_lines(text);
        let lines: Vec<_> = spans.iter().map(|s| &text[s.start..s.end]).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);
        assert_eq!(spans[1].next - spans[1].end, 2);
        assert_eq!(spans[3].next, text.len());
    }

    #[test]
    fn split_trailing_newline() {
        let spans = split_lines("x\n\n");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].start, spans[1].end);
    }

    #[test]
    fn classify_lines() {
        assert_eq!(classify(DELIMITER), LineKind::Delimiter);
        assert_eq!(classify("  +---------+---------------+----------+  "), LineKind::Delimiter);
        assert_eq!(classify("   \t"), LineKind::Blank);
        assert_eq!(classify("|0   |01|0c|cd|"), LineKind::Payload);
        assert_eq!(classify("09:13:24,114,546   ETHER"), LineKind::Text);
        assert_eq!(classify("| hello | world |"), LineKind::Text);
    }

    #[test]
    fn payload_cell_offsets() {
        let line = "|0   |01|0C| zz |ab|";
        let cells = payload_cells(line).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(&line[cells[0].hi..=cells[0].lo], "01");
        assert_eq!(cells[1].value, Some(0x0c));
        assert_eq!(cells[2].value, Some(0xab));
        assert_eq!(cells[2].hi, 17);
    }

    #[test]
    fn multiple_pairs_in_one_cell() {
        let line = "|0   |01 02|0304|";
        let cells = payload_cells(line).unwrap();
        let values: Vec<_> = cells.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!((cells[1].hi, cells[1].lo), (9, 10));
        assert_eq!((cells[3].hi, cells[3].lo), (14, 15));
    }

    #[test]
    fn noise_inside_cells_is_skipped() {
        let line = "|0   |0x1f|-2-a-|g5|";
        let cells = payload_cells(line).unwrap();
        assert_eq!(cells.len(), 4);
        // `0x1f` holds the digits 0, 1 and f: one byte plus a lone nibble.
        assert_eq!(cells[0].value, Some(0x01));
        assert_eq!((cells[0].hi, cells[0].lo), (6, 8));
        assert_eq!(cells[1].value, None);
        assert_eq!(cells[1].hi, cells[1].lo);
        assert_eq!(cells[2].value, Some(0x2a));
        assert_eq!(&line[cells[2].hi..=cells[2].hi], "2");
        assert_eq!(&line[cells[2].lo..=cells[2].lo], "a");
        assert_eq!(cells[3].value, None);
        assert_eq!(payload_cells("|0 |g5|").unwrap()[0].value, None);
    }

    #[test]
    fn bytes_after_last_pipe() {
        let cells = payload_cells("|0   |01|02|03").unwrap();
        let values: Vec<_> = cells.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(payload_cells("|0   |01|  ").unwrap().len(), 1);
    }

    #[test]
    fn payload_with_leading_whitespace() {
        let cells = payload_cells("  |10  |ff|").unwrap();
        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].hi, 8);
    }

    #[test]
    fn offset_only_line_has_no_cells() {
        assert_eq!(payload_cells("|0   |"), Some(Vec::new()));
        assert_eq!(payload_cells("|0   "), None);
    }

    #[test]
    fn timestamp_token() {
        assert_eq!(timestamp("09:13:24,114,546   ETHER"), "09:13:24,114,546");
        assert_eq!(timestamp("  09:13:24,114,546    ETHER  "), "09:13:24,114,546");
        assert_eq!(timestamp("09:13:24 ETHER"), "09:13:24 ETHER");
    }
}
