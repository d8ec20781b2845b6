// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Conversion between carrier field bytes and the parity-carrying decimal.
//!
//! The GOOSE field is remapped through `raw / 2^24 * 10^7` so that its
//! decimal tens and units digits move quickly and independently of the high
//! bytes. The SV field is used as a plain big-endian integer.
//!
//! All arithmetic is exact integer math with round-half-away-from-zero. For
//! the normalized scale every decimal value maps to a distinct raw value
//! (one decimal step is ~1.68 raw steps), so `decode(encode(v)) == v` for
//! every `v` that fits the field.

/// Normalization constant of the GOOSE field (2^24).
pub const NORMALIZATION: u128 = 1 << 24;

/// Decimal scale applied after normalization (10^7).
pub const DECIMAL_SCALE: u128 = 10_000_000;

/// Transform between field bytes and the decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// `round(raw / 2^24 * 10^7)`.
    Normalized,
    /// The raw integer itself. Sampled Values fields carry their measurement
    /// as a plain integer, so the digits are read without normalization.
    Raw,
}

/// Decode field bytes (big-endian) into the decimal value.
///
/// Fields are at most 8 bytes wide.
pub fn decode(bytes: &[u8], scale: Scale) -> u64 {
    debug_assert!(bytes.len() <= 8, "field wider than 8 bytes");
    let raw = bytes.iter().fold(0u128, |acc, &b| (acc << 8) | b as u128);
    let value = match scale {
        Scale::Normalized => div_round(raw * DECIMAL_SCALE, NORMALIZATION),
        Scale::Raw => raw,
    };
    value as u64
}

/// Encode a decimal value back into `width` big-endian bytes.
///
/// Returns `None` if the resulting raw value does not fit in `width` bytes.
pub fn encode(value: u64, width: usize, scale: Scale) -> Option<Vec<u8>> {
    if width == 0 || width > 8 {
        return None;
    }
    let raw = match scale {
        Scale::Normalized => div_round(value as u128 * NORMALIZATION, DECIMAL_SCALE),
        Scale::Raw => value as u128,
    };
    if raw >> (8 * width) != 0 {
        return None;
    }
    Some(raw.to_be_bytes()[16 - width..].to_vec())
}

/// `round(n / d)` with halves rounded away from zero, for non-negative `n`.
fn div_round(n: u128, d: u128) -> u128 {
    (2 * n + d) / (2 * d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_known_values() {
        // 10_108_287 / 2^24 * 10^7 = 6_025_008.559...
        assert_eq!(decode(&[0x9a, 0x3d, 0x7f], Scale::Normalized), 6_025_009);
        // 10_109_645 / 2^24 * 10^7 = 6_025_817.99...
        assert_eq!(decode(&[0x9a, 0x42, 0xcd], Scale::Normalized), 6_025_818);
        assert_eq!(decode(&[0, 0, 0], Scale::Normalized), 0);
        assert_eq!(decode(&[0xff, 0xff, 0xff], Scale::Normalized), 9_999_999);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(div_round(5, 2), 3);
        assert_eq!(div_round(4, 2), 2);
        assert_eq!(div_round(7, 4), 2);
        assert_eq!(div_round(5, 4), 1);
    }

    #[test]
    fn normalized_encode_inverts_decode() {
        assert_eq!(encode(6_025_818, 3, Scale::Normalized), Some(vec![0x9a, 0x42, 0xcd]));
        for v in (0..10_000_000u64).step_by(9_973).chain(9_999_900..10_000_000) {
            let bytes = encode(v, 3, Scale::Normalized).unwrap();
            assert_eq!(decode(&bytes, Scale::Normalized), v, "value {v}");
        }
    }

    #[test]
    fn normalized_overflow() {
        assert_eq!(encode(10_000_000, 3, Scale::Normalized), None);
        assert!(encode(10_000_000, 4, Scale::Normalized).is_some());
    }

    #[test]
    fn raw_width_and_padding() {
        assert_eq!(decode(&[0x00, 0x01, 0x00, 0x00], Scale::Raw), 65_536);
        assert_eq!(encode(65_536, 4, Scale::Raw), Some(vec![0, 1, 0, 0]));
        assert_eq!(encode(u32::MAX as u64 + 1, 4, Scale::Raw), None);
        assert_eq!(encode(1, 0, Scale::Raw), None);
    }
}
