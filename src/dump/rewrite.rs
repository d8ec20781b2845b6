// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Splice replacement bytes into a record's text.
//!
//! Only the two hex digits of each replaced byte change. Pipes, padding, noise
//! characters, line terminators and all other bytes are copied through
//! untouched, so the rewritten record has the same length and column layout
//! as the original.

use super::error::{DumpError, Result};
use super::record::Record;

const LOWER: &[u8; 16] = b"0123456789abcdef";
const UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Return the record text with the cells starting at byte index `start`
/// replaced by `bytes`.
///
/// The case of every written byte follows the case of the digits it replaces.
///
/// # Errors
/// - [`DumpError::CellOutOfRange`] if `start + bytes.len()` exceeds the record.
/// - [`DumpError::NotHex`] if a replaced byte is a lone nibble.
pub fn splice(record: &Record, start: usize, bytes: &[u8]) -> Result<String> {
    let cells = record.cells();
    let end = start + bytes.len();
    if end > cells.len() {
        return Err(DumpError::CellOutOfRange(end - 1));
    }

    let mut out = record.text().as_bytes().to_vec();
    for (i, (cell, &byte)) in cells[start..end].iter().zip(bytes).enumerate() {
        if cell.value.is_none() || cell.hi == cell.lo {
            return Err(DumpError::NotHex(start + i));
        }
        let digits = if is_upper(out[cell.hi]) || is_upper(out[cell.lo]) { UPPER } else { LOWER };
        out[cell.hi] = digits[(byte >> 4) as usize];
        out[cell.lo] = digits[(byte & 0x0f) as usize];
    }

    // Only ASCII hex digits were overwritten with ASCII hex digits.
    String::from_utf8(out).map_err(|_| DumpError::NotHex(start))
}

fn is_upper(digit: u8) -> bool {
    digit.is_ascii_uppercase()
}
