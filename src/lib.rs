// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! # phasm-parity
//!
//! Pure-Rust covert channel for K12 text dumps of IEC 61850 substation
//! traffic. Hides a bit string in the decimal digit parity of one fixed byte
//! field per frame while leaving every other character of the dump intact.
//!
//! - **GOOSE**: 3-byte field at offset 157, normalized scale, 32 bits.
//! - **SV**: 4-byte field at offset 164, raw scale, 2 bits per frame.
//!
//! The dump reader (`dump` module) is zero-dependency (std only). The
//! channel layer (`stego` module) uses `rand` / `rand_chacha` for
//! replacement digits and `log` for diagnostics.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use phasm_parity::{embed, extract, BitStream, Variant};
//!
//! let dump = std::fs::read_to_string("IL001_P2_ML1001.txt").unwrap();
//! let bits: BitStream = "11001100000000001111111100000000".parse().unwrap();
//! let out = embed(&dump, &bits, Variant::Goose).unwrap();
//! let back = extract(&out.text, Variant::Goose);
//! assert_eq!(back.bits, bits);
//! ```

pub mod dump;
pub mod stego;

pub use dump::{Chunk, Dump, Record};
pub use dump::error::DumpError;
pub use stego::{capacity, embed, embed_with, extract, inspect};
pub use stego::{BitStream, DigitChooser, RandomDigits, SkipReason, StegoError, Variant};
pub use stego::{EmbedOutput, ExtractOutput, FieldReading, FieldReport, RecordReport, RecordStatus, Summary};
