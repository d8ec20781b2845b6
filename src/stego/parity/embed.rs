// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Parity embedding into the tens and units digits.

use super::chooser::DigitChooser;
use super::digit_bit;

/// Steer the tens digit of `value` to parity `bit10` and the units digit to
/// parity `bit1`.
///
/// Digits from the hundreds upward are never touched. A digit whose parity
/// already matches is kept; otherwise `chooser` supplies a replacement. The
/// two digits are decided independently. When both parities already match,
/// `value` is returned unchanged.
pub fn embed_parity<C: DigitChooser + ?Sized>(
    value: u64,
    bit10: u8,
    bit1: u8,
    chooser: &mut C,
) -> u64 {
    let high = value / 100 * 100;
    let tens = (value / 10) % 10;
    let units = value % 10;

    let new_tens = if digit_bit(tens) == bit10 & 1 {
        tens
    } else {
        fresh_digit(chooser, bit10)
    };
    let new_units = if digit_bit(units) == bit1 & 1 {
        units
    } else {
        fresh_digit(chooser, bit1)
    };

    // Low pair stays in 0..100 so nothing carries into the hundreds.
    high + (new_tens * 10 + new_units) % 100
}

/// A digit from `chooser`, forced to parity `bit` so that a misbehaving
/// chooser can never embed the wrong bit.
fn fresh_digit<C: DigitChooser + ?Sized>(chooser: &mut C, bit: u8) -> u64 {
    let digit = chooser.choose(bit & 1) as u64 % 10;
    digit / 2 * 2 + (bit & 1) as u64
}
