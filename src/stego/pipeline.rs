// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Embed / extract pipeline over a whole dump.
//!
//! Records are processed strictly in dump order; record `i` owns bits `2i`
//! and `2i + 1` of the stream. Per record:
//! 1. Locate the carrier field ([`locate`](super::locate)).
//! 2. Decode its bytes into the carrier value ([`codec`]).
//! 3. Steer (embed) or read (extract) the tens/units parities.
//! 4. Re-encode and splice the new bytes into the text (embed only).
//!
//! Any failure along the way skips that record: it is copied through
//! verbatim, reported, and reads back as `00`. Only a bit stream of the
//! wrong length aborts a run, and it does so before anything is parsed.

use crate::dump::{rewrite, Chunk, Dump, Record};
use super::bits::BitStream;
use super::codec;
use super::error::{SkipReason, StegoError};
use super::locate::field_bytes;
use super::parity::{embed_parity, extract_parity, DigitChooser, RandomDigits};
use super::report::{
    EmbedOutput, ExtractOutput, FieldReading, FieldReport, RecordReport, RecordStatus, Summary,
};
use super::variant::{BitBudget, Variant, BITS_PER_RECORD};

/// Hide `bits` in a dump, drawing replacement digits from the thread RNG.
///
/// # Errors
/// - [`StegoError::InvalidBitLength`] if the variant fixes a stream length
///   and `bits` has a different one.
pub fn embed(input: &str, bits: &BitStream, variant: Variant) -> Result<EmbedOutput, StegoError> {
    embed_with(input, bits, variant, &mut RandomDigits::thread())
}

/// Hide `bits` in a dump using `chooser` for replacement digits.
///
/// # Errors
/// - [`StegoError::InvalidBitLength`] if the variant fixes a stream length
///   and `bits` has a different one.
pub fn embed_with<C: DigitChooser + ?Sized>(
    input: &str,
    bits: &BitStream,
    variant: Variant,
    chooser: &mut C,
) -> Result<EmbedOutput, StegoError> {
    if let BitBudget::Fixed(expected) = variant.bit_budget() {
        if bits.len() != expected {
            return Err(StegoError::InvalidBitLength { expected, actual: bits.len() });
        }
    }

    let dump = Dump::parse(input);
    log_detected(&dump, variant);

    let mut text = String::with_capacity(input.len());
    let mut records = Vec::with_capacity(dump.record_count());

    for chunk in dump.chunks() {
        let record = match chunk {
            Chunk::Verbatim(t) => {
                text.push_str(t);
                continue;
            }
            Chunk::Record(r) => r,
        };

        let mut report = RecordReport {
            index: record.index(),
            timestamp: record.timestamp().to_string(),
            status: RecordStatus::Unchanged,
            bits: (0, 0),
            value_before: None,
            value_after: None,
        };

        match embed_record(record, bits, variant, chooser, &mut report) {
            Ok(Some(rewritten)) => {
                report.status = RecordStatus::Modified;
                text.push_str(&rewritten);
            }
            Ok(None) => text.push_str(record.text()),
            Err(reason) => {
                log::warn!("record {} ({}): {reason}, passed through", record.index() + 1, report.timestamp);
                report.status = RecordStatus::Skipped(reason);
                report.value_after = None;
                text.push_str(record.text());
            }
        }
        records.push(report);
    }

    let summary = Summary::from_reports(variant, &records);
    log::info!("embed ({variant}): {summary}");
    Ok(EmbedOutput { text, records, summary })
}

/// Returns the rewritten record text, or `None` when the digits already
/// carried the requested bits.
fn embed_record<C: DigitChooser + ?Sized>(
    record: &Record,
    bits: &BitStream,
    variant: Variant,
    chooser: &mut C,
    report: &mut RecordReport,
) -> Result<Option<String>, SkipReason> {
    let (field, raw) = field_bytes(record, variant)?;
    let before = codec::decode(&raw, variant.scale());
    report.value_before = Some(before);

    let wanted = match variant.bit_budget() {
        BitBudget::Fixed(_) => bits.pair(record.index()).ok_or(SkipReason::BitsExhausted)?,
        BitBudget::PerRecord => bits.pair(record.index()).unwrap_or((0, 0)),
    };
    report.bits = wanted;

    let after = embed_parity(before, wanted.0, wanted.1, chooser);
    report.value_after = Some(after);
    log::debug!(
        "record {} ({}): field {:02x?} value {before} -> {after}, bits {}{}",
        record.index() + 1,
        record.timestamp(),
        raw,
        wanted.0,
        wanted.1
    );

    if after == before {
        return Ok(None);
    }

    let new_raw = codec::encode(after, field.len, variant.scale()).ok_or(SkipReason::ValueOutOfRange)?;
    debug_assert_eq!(codec::decode(&new_raw, variant.scale()), after);
    let rewritten = rewrite::splice(record, field.start, &new_raw)?;
    Ok(Some(rewritten))
}

/// Read the hidden bits back out of a dump.
///
/// Produces two bits per record; skipped records contribute `00`.
pub fn extract(input: &str, variant: Variant) -> ExtractOutput {
    let dump = Dump::parse(input);
    log_detected(&dump, variant);

    let mut bits = BitStream::new();
    let mut records = Vec::with_capacity(dump.record_count());

    for record in dump.records() {
        let mut report = RecordReport {
            index: record.index(),
            timestamp: record.timestamp().to_string(),
            status: RecordStatus::Extracted,
            bits: (0, 0),
            value_before: None,
            value_after: None,
        };

        match read_field(record, variant) {
            Ok(reading) => {
                log::debug!(
                    "record {} ({}): field {:02x?} value {} bits {}{}",
                    record.index() + 1,
                    report.timestamp,
                    reading.bytes,
                    reading.value,
                    reading.bits.0,
                    reading.bits.1
                );
                report.bits = reading.bits;
                report.value_before = Some(reading.value);
            }
            Err(reason) => {
                log::warn!("record {} ({}): {reason}, reading 00", record.index() + 1, report.timestamp);
                report.status = RecordStatus::Skipped(reason);
            }
        }
        bits.push_pair(report.bits);
        records.push(report);
    }

    let summary = Summary::from_reports(variant, &records);
    log::info!("extract ({variant}): {summary}, {} bits", bits.len());
    ExtractOutput { bits, records, summary }
}

/// Number of bits the dump can carry for `variant`.
///
/// Counts eligible records; for a fixed-length variant only records inside
/// the stream count.
pub fn capacity(input: &str, variant: Variant) -> usize {
    let dump = Dump::parse(input);
    let eligible = dump
        .records()
        .filter(|r| match variant.bit_budget() {
            BitBudget::Fixed(n) => r.index() < n / BITS_PER_RECORD,
            BitBudget::PerRecord => true,
        })
        .filter(|r| field_bytes(r, variant).is_ok())
        .count();
    eligible * BITS_PER_RECORD
}

/// Decode the carrier field of every record without touching anything.
pub fn inspect(input: &str, variant: Variant) -> Vec<FieldReport> {
    Dump::parse(input)
        .records()
        .map(|r| FieldReport {
            index: r.index(),
            timestamp: r.timestamp().to_string(),
            byte_len: r.byte_len(),
            reading: read_field(r, variant),
        })
        .collect()
}

fn read_field(record: &Record, variant: Variant) -> Result<FieldReading, SkipReason> {
    let (_, bytes) = field_bytes(record, variant)?;
    let value = codec::decode(&bytes, variant.scale());
    Ok(FieldReading { bits: extract_parity(value), bytes, value })
}

fn log_detected(dump: &Dump, variant: Variant) {
    let found = dump.record_count();
    match variant.expected_records() {
        Some(expected) if expected != found => {
            log::warn!("record count mismatch: expected {expected}, found {found}");
        }
        Some(expected) => log::info!("detected {found} records, expected {expected}"),
        None => log::info!("detected {found} records"),
    }
}
