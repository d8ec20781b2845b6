// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Per-record outcomes and run summaries.

use core::fmt;

use super::bits::BitStream;
use super::error::SkipReason;
use super::variant::Variant;

/// What happened to one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// The carrier field was rewritten.
    Modified,
    /// Eligible, but the digits already carried the requested bits.
    Unchanged,
    /// Bits were read from the record (extract path).
    Extracted,
    /// The record was passed through verbatim.
    Skipped(SkipReason),
}

impl RecordStatus {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Modified => write!(f, "modified"),
            Self::Unchanged => write!(f, "unchanged"),
            Self::Extracted => write!(f, "extracted"),
            Self::Skipped(reason) => write!(f, "skipped: {reason}"),
        }
    }
}

/// Outcome for a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    /// 0-based record index.
    pub index: usize,
    /// Timestamp token of the record header.
    pub timestamp: String,
    pub status: RecordStatus,
    /// Requested bits (embed) or read bits (extract); `(0, 0)` when skipped.
    pub bits: (u8, u8),
    /// Carrier value before embedding (or the value read).
    pub value_before: Option<u64>,
    /// Carrier value after embedding.
    pub value_after: Option<u64>,
}

/// Record counts of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Record count the variant expects, if any.
    pub expected: Option<usize>,
    pub detected: usize,
    pub modified: usize,
    pub unchanged: usize,
    pub extracted: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn from_reports(variant: Variant, reports: &[RecordReport]) -> Self {
        let mut summary = Self {
            expected: variant.expected_records(),
            detected: reports.len(),
            ..Self::default()
        };
        for r in reports {
            match r.status {
                RecordStatus::Modified => summary.modified += 1,
                RecordStatus::Unchanged => summary.unchanged += 1,
                RecordStatus::Extracted => summary.extracted += 1,
                RecordStatus::Skipped(_) => summary.skipped += 1,
            }
        }
        summary
    }

    /// Returns `true` if the variant fixes a record count and the dump differs.
    pub fn count_mismatch(&self) -> bool {
        self.expected.is_some_and(|e| e != self.detected)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expected {
            Some(e) => write!(f, "detected {}/{} records", self.detected, e)?,
            None => write!(f, "detected {} records", self.detected)?,
        }
        if self.extracted > 0 {
            write!(f, ", {} extracted", self.extracted)?;
        }
        if self.modified > 0 || self.unchanged > 0 {
            write!(f, ", {} modified, {} unchanged", self.modified, self.unchanged)?;
        }
        write!(f, ", {} skipped", self.skipped)
    }
}

/// Result of an embed run.
#[derive(Debug, Clone)]
pub struct EmbedOutput {
    /// The rewritten dump.
    pub text: String,
    pub records: Vec<RecordReport>,
    pub summary: Summary,
}

/// Result of an extract run.
#[derive(Debug, Clone)]
pub struct ExtractOutput {
    /// Two bits per record, `00` for skipped records.
    pub bits: BitStream,
    pub records: Vec<RecordReport>,
    pub summary: Summary,
}

/// Carrier field reading of one record, as returned by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub index: usize,
    pub timestamp: String,
    /// Length of the record's flat byte sequence.
    pub byte_len: usize,
    pub reading: Result<FieldReading, SkipReason>,
}

/// Decoded carrier field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReading {
    pub bytes: Vec<u8>,
    pub value: u64,
    pub bits: (u8, u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: RecordStatus) -> RecordReport {
        RecordReport {
            index: 0,
            timestamp: String::new(),
            status,
            bits: (0, 0),
            value_before: None,
            value_after: None,
        }
    }

    #[test]
    fn counts_and_display() {
        let reports = vec![
            report(RecordStatus::Modified),
            report(RecordStatus::Modified),
            report(RecordStatus::Unchanged),
            report(RecordStatus::Skipped(SkipReason::NoDataSegment)),
        ];
        let s = Summary::from_reports(Variant::Goose, &reports);
        assert_eq!((s.detected, s.modified, s.unchanged, s.skipped), (4, 2, 1, 1));
        assert!(s.count_mismatch());
        assert_eq!(s.to_string(), "detected 4/16 records, 2 modified, 1 unchanged, 1 skipped");
    }

    #[test]
    fn empty_run() {
        let s = Summary::from_reports(Variant::Goose, &[]);
        assert_eq!(s.to_string(), "detected 0/16 records, 0 skipped");
        let s = Summary::from_reports(Variant::SampledValues, &[]);
        assert!(!s.count_mismatch());
        assert_eq!(s.to_string(), "detected 0 records, 0 skipped");
    }

    #[test]
    fn status_display() {
        let st = RecordStatus::Skipped(SkipReason::InsufficientBytes { have: 12, need: 161 });
        assert_eq!(st.to_string(), "skipped: insufficient bytes (12 < 161)");
        assert!(st.is_skipped());
    }
}
