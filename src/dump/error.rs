// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for splicing bytes back into a dump record.

use std::fmt;

/// Errors that can occur while rewriting byte cells of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DumpError {
    /// The byte index lies beyond the record's flat byte sequence.
    CellOutOfRange(usize),
    /// The byte cell at this index is not a two-digit hex group.
    NotHex(usize),
}

impl fmt::Display for DumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfRange(i) => write!(f, "byte cell {i} out of range"),
            Self::NotHex(i) => write!(f, "byte cell {i} is not a hex pair"),
        }
    }
}

impl std::error::Error for DumpError {}

pub type Result<T> = std::result::Result<T, DumpError>;
