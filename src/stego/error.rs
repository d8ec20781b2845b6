// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Error types for the covert-channel pipeline.
//!
//! [`StegoError`] covers the fatal failures, all of which are detected before
//! any record is touched. Per-record problems are not errors: they are
//! reported as [`SkipReason`] and the record passes through verbatim.

use core::fmt;

use crate::dump::error::DumpError;

/// Fatal errors of an embed or extract run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// The bit stream length does not match what the variant requires.
    InvalidBitLength { expected: usize, actual: usize },
    /// A bit string literal contained something other than `0` or `1`.
    InvalidBitString(char),
    /// The protocol variant name is not recognized.
    UnknownVariant(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitLength { expected, actual } => {
                write!(f, "bit stream must be {expected} bits long, got {actual}")
            }
            Self::InvalidBitString(c) => write!(f, "invalid character {c:?} in bit string"),
            Self::UnknownVariant(name) => write!(f, "unknown protocol variant: {name}"),
        }
    }
}

impl std::error::Error for StegoError {}

/// Why a record was passed through without being used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The record has no payload line with byte cells.
    NoDataSegment,
    /// The record holds fewer bytes than the variant requires.
    InsufficientBytes { have: usize, need: usize },
    /// The target field reaches past the end of the byte sequence.
    OffsetOutOfRange,
    /// A cell inside the target field is not a two-digit hex group.
    NonHexTarget,
    /// No bits left in a fixed-length stream for this record.
    BitsExhausted,
    /// The mutated value no longer fits the field width.
    ValueOutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDataSegment => write!(f, "no data segment found"),
            Self::InsufficientBytes { have, need } => {
                write!(f, "insufficient bytes ({have} < {need})")
            }
            Self::OffsetOutOfRange => write!(f, "offset out of range"),
            Self::NonHexTarget => write!(f, "non-hex target bytes"),
            Self::BitsExhausted => write!(f, "bit stream exhausted"),
            Self::ValueOutOfRange => write!(f, "value out of range for field"),
        }
    }
}

impl From<DumpError> for SkipReason {
    fn from(e: DumpError) -> Self {
        match e {
            DumpError::CellOutOfRange(_) => Self::OffsetOutOfRange,
            DumpError::NotHex(_) => Self::NonHexTarget,
        }
    }
}
