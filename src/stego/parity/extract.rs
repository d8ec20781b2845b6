// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Parity read-out, the decoder counterpart to [`super::embed`].

use super::digit_bit;

/// Read the `(tens, units)` parity bits of a carrier value.
pub fn extract_parity(value: u64) -> (u8, u8) {
    (digit_bit((value / 10) % 10), digit_bit(value % 10))
}
