// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Replacement digit sources.
//!
//! [`RandomDigits`] draws uniformly from the five digits of the requested
//! parity. Production runs use the thread-local RNG; a ChaCha20 PRNG seeded
//! from a fixed key gives reproducible output for tests and `--seed` runs.

use rand::rngs::ThreadRng;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Supplies a decimal digit (0–9) with a requested parity.
pub trait DigitChooser {
    /// Return a digit whose parity equals `bit` (1 = odd, 0 = even).
    fn choose(&mut self, bit: u8) -> u8;
}

/// Uniform random digit of the requested parity.
pub struct RandomDigits<R> {
    rng: R,
}

impl<R: Rng> RandomDigits<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDigits<ThreadRng> {
    /// Chooser backed by `rand::thread_rng()`.
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RandomDigits<ChaCha20Rng> {
    /// Reproducible chooser seeded with a 32-byte key.
    pub fn seeded(seed: [u8; 32]) -> Self {
        Self::new(ChaCha20Rng::from_seed(seed))
    }

    /// Reproducible chooser seeded with a `u64`.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> DigitChooser for RandomDigits<R> {
    fn choose(&mut self, bit: u8) -> u8 {
        // u32 range keeps the draw identical on 32- and 64-bit targets.
        self.rng.gen_range(0..5u32) as u8 * 2 + (bit & 1)
    }
}
