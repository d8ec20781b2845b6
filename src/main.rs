// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Command-line front end: embed, extract and inspect K12 dump files.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use phasm_parity::{BitStream, RandomDigits, RecordStatus, Variant};

#[derive(Parser)]
#[command(author, version, about = "Digit-parity covert channel for K12 capture dumps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// GOOSE capture, 32 bits over 16 frames
    Goose,
    /// Sampled Values capture, 2 bits per frame
    Sv,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Goose => Variant::Goose,
            VariantArg::Sv => Variant::SampledValues,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Hide a bit string in a dump
    Embed {
        input: PathBuf,
        output: PathBuf,
        /// Bits to hide, e.g. 11001100000000001111111100000000
        bits: String,

        #[arg(long, value_enum, default_value_t = VariantArg::Goose)]
        variant: VariantArg,

        /// Seed for reproducible replacement digits
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Read the hidden bit string back
    Extract {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = VariantArg::Goose)]
        variant: VariantArg,
    },

    /// Show the carrier field of every record
    Inspect {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = VariantArg::Goose)]
        variant: VariantArg,
    },
}

fn read_dump(path: &PathBuf) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    match cli.command {
        Commands::Embed { input, output, bits, variant, seed } => {
            let text = read_dump(&input)?;
            let bits: BitStream = bits.parse()?;
            let variant = Variant::from(variant);
            let out = match seed {
                Some(seed) => phasm_parity::embed_with(&text, &bits, variant, &mut RandomDigits::seed_from_u64(seed))?,
                None => phasm_parity::embed(&text, &bits, variant)?,
            };
            fs::write(&output, &out.text).with_context(|| format!("writing {}", output.display()))?;
            println!("{}", out.summary);
            println!("written to {}", output.display());
        }
        Commands::Extract { input, variant } => {
            let text = read_dump(&input)?;
            let out = phasm_parity::extract(&text, variant.into());
            for r in out.records.iter().filter(|r| r.status.is_skipped()) {
                println!("record {:>3} {}: {}", r.index + 1, r.timestamp, r.status);
            }
            println!("{}", out.summary);
            println!("covert bit string: {}", out.bits);
            println!("length: {}", out.bits.len());
        }
        Commands::Inspect { input, variant } => {
            let text = read_dump(&input)?;
            let variant = Variant::from(variant);
            let fields = phasm_parity::inspect(&text, variant);
            for f in &fields {
                match &f.reading {
                    Ok(r) => {
                        let hex: String = r.bytes.iter().map(|b| format!("{b:02x}")).collect();
                        println!(
                            "record {:>3} {} ({} bytes): field {hex} value {} bits {}{}",
                            f.index + 1,
                            f.timestamp,
                            f.byte_len,
                            r.value,
                            r.bits.0,
                            r.bits.1
                        );
                    }
                    Err(reason) => {
                        println!(
                            "record {:>3} {} ({} bytes): {}",
                            f.index + 1,
                            f.timestamp,
                            f.byte_len,
                            RecordStatus::Skipped(*reason)
                        );
                    }
                }
            }
            println!("capacity: {} bits", phasm_parity::capacity(&text, variant));
        }
    }
    Ok(())
}
