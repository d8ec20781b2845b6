// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Carrier field location.
//!
//! Purely structural: a record is eligible when it has a payload and enough
//! bytes to reach the variant's fixed field. No protocol semantics are
//! interpreted.

use std::ops::Range;

use crate::dump::Record;
use super::error::SkipReason;
use super::variant::Variant;

/// Byte range of the carrier field in a record's flat byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetField {
    pub start: usize,
    pub len: usize,
}

impl TargetField {
    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

/// Locate the carrier field of `record` for `variant`.
///
/// # Errors
/// - [`SkipReason::NoDataSegment`] if the record has no byte cells.
/// - [`SkipReason::InsufficientBytes`] if the record is shorter than the
///   variant's minimum frame length.
/// - [`SkipReason::OffsetOutOfRange`] if the field reaches past the last byte.
pub fn locate(record: &Record, variant: Variant) -> Result<TargetField, SkipReason> {
    if !record.has_payload() {
        return Err(SkipReason::NoDataSegment);
    }
    let have = record.byte_len();
    let need = variant.min_record_bytes();
    if have < need {
        return Err(SkipReason::InsufficientBytes { have, need });
    }
    let field = TargetField { start: variant.field_start(), len: variant.field_len() };
    if field.start + field.len > have {
        return Err(SkipReason::OffsetOutOfRange);
    }
    Ok(field)
}

/// Locate the carrier field and read its bytes.
///
/// # Errors
/// Any [`locate`] error, or [`SkipReason::NonHexTarget`] if a cell inside the
/// field is malformed.
pub fn field_bytes(record: &Record, variant: Variant) -> Result<(TargetField, Vec<u8>), SkipReason> {
    let field = locate(record, variant)?;
    let bytes = record.bytes(field.range()).ok_or(SkipReason::NonHexTarget)?;
    Ok((field, bytes))
}
