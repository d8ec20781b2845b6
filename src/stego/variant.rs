// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Protocol variants and their fixed channel parameters.
//!
//! Each variant pins down where the carrier field sits in a frame, how its
//! bytes are turned into a decimal value, and how many bits a run carries.

use core::fmt;
use core::str::FromStr;

use super::codec::Scale;
use super::error::StegoError;

/// Bits carried by one record (tens digit, units digit).
pub const BITS_PER_RECORD: usize = 2;

/// First byte of the GOOSE carrier field.
pub const GOOSE_FIELD_START: usize = 157;
/// Width of the GOOSE carrier field in bytes.
pub const GOOSE_FIELD_LEN: usize = 3;
/// Minimum frame length for a GOOSE record to be used.
pub const GOOSE_MIN_BYTES: usize = 161;
/// Number of records a GOOSE capture is expected to contain.
pub const GOOSE_EXPECTED_RECORDS: usize = 16;
/// Exact bit stream length for GOOSE embedding.
pub const GOOSE_BITS: usize = GOOSE_EXPECTED_RECORDS * BITS_PER_RECORD;

/// First byte of the SV carrier field.
pub const SV_FIELD_START: usize = 164;
/// Width of the SV carrier field in bytes.
pub const SV_FIELD_LEN: usize = 4;
/// Minimum frame length for an SV record to be used.
pub const SV_MIN_BYTES: usize = 168;

/// How many bits an embed run expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitBudget {
    /// Exactly this many bits; records past the end are skipped.
    Fixed(usize),
    /// Any length; record `i` takes bits `2i, 2i+1`, missing bits read as `0`.
    PerRecord,
}

/// The dump conventions the channel understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// IEC 61850 GOOSE capture, 3-byte normalized field.
    Goose,
    /// IEC 61850-9-2 Sampled Values capture, 4-byte raw field.
    SampledValues,
}

impl Variant {
    /// Byte offset of the carrier field.
    pub const fn field_start(self) -> usize {
        match self {
            Self::Goose => GOOSE_FIELD_START,
            Self::SampledValues => SV_FIELD_START,
        }
    }

    /// Width of the carrier field in bytes.
    pub const fn field_len(self) -> usize {
        match self {
            Self::Goose => GOOSE_FIELD_LEN,
            Self::SampledValues => SV_FIELD_LEN,
        }
    }

    /// Minimum number of bytes a record must hold to be eligible.
    pub const fn min_record_bytes(self) -> usize {
        match self {
            Self::Goose => GOOSE_MIN_BYTES,
            Self::SampledValues => SV_MIN_BYTES,
        }
    }

    /// Transform between field bytes and the parity-carrying decimal.
    ///
    /// GOOSE fields are normalized by 2^24 and scaled to seven decimals.
    /// Sampled Values fields are read as the raw integer.
    pub const fn scale(self) -> Scale {
        match self {
            Self::Goose => Scale::Normalized,
            Self::SampledValues => Scale::Raw,
        }
    }

    pub const fn bit_budget(self) -> BitBudget {
        match self {
            Self::Goose => BitBudget::Fixed(GOOSE_BITS),
            Self::SampledValues => BitBudget::PerRecord,
        }
    }

    /// Record count the capture is expected to have, if the variant fixes one.
    pub const fn expected_records(self) -> Option<usize> {
        match self {
            Self::Goose => Some(GOOSE_EXPECTED_RECORDS),
            Self::SampledValues => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Goose => "goose",
            Self::SampledValues => "sv",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = StegoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "goose" => Ok(Self::Goose),
            "sv" | "sampled-values" | "sampledvalues" => Ok(Self::SampledValues),
            _ => Err(StegoError::UnknownVariant(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_fits_minimum_length() {
        for v in [Variant::Goose, Variant::SampledValues] {
            assert!(v.field_start() + v.field_len() <= v.min_record_bytes(), "{v}");
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("goose".parse::<Variant>(), Ok(Variant::Goose));
        assert_eq!("SV".parse::<Variant>(), Ok(Variant::SampledValues));
        assert_eq!(
            "mms".parse::<Variant>(),
            Err(StegoError::UnknownVariant("mms".to_string()))
        );
        assert_eq!(Variant::SampledValues.to_string(), "sv");
    }

    #[test]
    fn goose_budget() {
        assert_eq!(Variant::Goose.bit_budget(), BitBudget::Fixed(32));
        assert_eq!(Variant::SampledValues.expected_records(), None);
    }
}
