// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Digit-parity covert channel over K12 dump records.
//!
//! Every record of a GOOSE or Sampled Values capture carries two bits in a
//! fixed byte field: the parity of the tens digit and of the units digit of
//! the field's decimal value (odd = 1, even = 0).
//!
//! - **GOOSE** (`Variant::Goose`): bytes 157..160, normalized through
//!   `raw / 2^24 * 10^7`, exactly 32 bits over 16 records.
//! - **SV** (`Variant::SampledValues`): bytes 164..168 used as a raw
//!   integer, two bits per record for as many records as the dump holds.
//!
//! This is obfuscation, not encryption: anyone who knows the scheme can read
//! the bits back with [`extract`].

pub mod bits;
pub mod codec;
pub mod error;
pub mod locate;
pub mod parity;
pub mod report;
pub mod variant;
mod pipeline;

pub use bits::BitStream;
pub use error::{SkipReason, StegoError};
pub use parity::{DigitChooser, RandomDigits};
pub use pipeline::{capacity, embed, embed_with, extract, inspect};
pub use report::{
    EmbedOutput, ExtractOutput, FieldReading, FieldReport, RecordReport, RecordStatus, Summary,
};
pub use variant::{BitBudget, Variant};
