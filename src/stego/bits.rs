// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Bit stream carried by the channel.
//!
//! Bits are stored one per `u8` (0 or 1), the same convention the STC-style
//! coders use. Record `i` owns bits `2i` (tens digit) and `2i + 1` (units
//! digit).

use core::fmt;
use core::str::FromStr;

use super::error::StegoError;
use super::variant::BITS_PER_RECORD;

/// An ordered sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitStream {
    bits: Vec<u8>,
}

impl BitStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw bit values; anything non-zero counts as 1.
    pub fn from_bits(bits: impl IntoIterator<Item = u8>) -> Self {
        Self { bits: bits.into_iter().map(|b| (b != 0) as u8).collect() }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bits
    }

    /// Append the two bits of one record.
    pub fn push_pair(&mut self, (bit10, bit1): (u8, u8)) {
        self.bits.push(bit10 & 1);
        self.bits.push(bit1 & 1);
    }

    /// The `(tens, units)` bits owned by record `index`, if both exist.
    pub fn pair(&self, index: usize) -> Option<(u8, u8)> {
        let at = index.checked_mul(BITS_PER_RECORD)?;
        let end = at.checked_add(BITS_PER_RECORD)?;
        match self.bits.get(at..end)? {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

impl FromStr for BitStream {
    type Err = StegoError;

    /// Parse a literal such as `"11001100"`. Whitespace and `_` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for c in s.chars() {
            match c {
                '0' => bits.push(0),
                '1' => bits.push(1),
                '_' => {}
                c if c.is_whitespace() => {}
                c => return Err(StegoError::InvalidBitString(c)),
            }
        }
        Ok(Self { bits })
    }
}

impl fmt::Display for BitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            f.write_str(if b == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}
