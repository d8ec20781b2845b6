// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Decimal digit parity coding.
//!
//! Each carrier value holds two bits: the parity of its tens digit and the
//! parity of its units digit (odd = 1, even = 0). The embedder only rewrites
//! a digit whose parity is wrong, and picks the replacement through a
//! [`DigitChooser`] so that callers can swap the random source for a
//! deterministic one.

pub mod chooser;
pub mod embed;
pub mod extract;

pub use chooser::{DigitChooser, RandomDigits};
pub use embed::embed_parity;
pub use extract::extract_parity;

/// Parity bit of a decimal digit: 1 for odd, 0 for even.
#[inline]
pub fn digit_bit(digit: u64) -> u8 {
    (digit & 1) as u8
}
