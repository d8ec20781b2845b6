// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! K12 dump parsing and lossless reconstruction tests.

use phasm_parity::{embed, extract, BitStream, Chunk, Dump, Variant};

fn load_test_dump(name: &str) -> String {
    std::fs::read_to_string(format!("test-vectors/{name}")).unwrap()
}

#[test]
fn parse_test_vectors() {
    let cases = [("goose_16.txt", 16), ("goose_mixed.txt", 17), ("sv_20.txt", 20)];
    for (name, count) in cases {
        let text = load_test_dump(name);
        let dump = Dump::parse(&text);
        assert_eq!(dump.record_count(), count, "{name}");
        assert_eq!(dump.to_string(), text, "{name} did not round-trip");
    }
}

#[test]
fn record_metadata() {
    let text = load_test_dump("goose_16.txt");
    let dump = Dump::parse(&text);
    for (i, r) in dump.records().enumerate() {
        assert_eq!(r.index(), i);
        assert_eq!(r.byte_len(), 190);
        assert_eq!(r.payload_lines(), 1);
        assert!(r.header().ends_with("ETHER"));
        assert!(r.timestamp().starts_with("10:00:42,"), "timestamp {}", r.timestamp());
        // Destination MAC of a GOOSE multicast.
        assert_eq!(r.bytes(0..4), Some(vec![0x01, 0x0c, 0xcd, 0x01]));
    }
}

#[test]
fn line_ending_styles_roundtrip() {
    let lf = load_test_dump("goose_16.txt");
    for ending in ["\r\n", "\r"] {
        let text = lf.replace('\n', ending);
        let dump = Dump::parse(&text);
        assert_eq!(dump.record_count(), 16);
        assert_eq!(dump.to_string(), text);
        assert_eq!(
            extract(&text, Variant::Goose).bits,
            extract(&lf, Variant::Goose).bits
        );
    }
}

#[test]
fn whitespace_around_delimiters() {
    let lf = load_test_dump("goose_16.txt");
    let text = lf.replace(
        "+---------+---------------+----------+\n",
        "\n  +---------+---------------+----------+   \n",
    );
    let dump = Dump::parse(&text);
    assert_eq!(dump.record_count(), 16);
    assert_eq!(dump.to_string(), text);
    assert_eq!(extract(&text, Variant::Goose).bits, extract(&lf, Variant::Goose).bits);
}

#[test]
fn grouped_and_unterminated_cells() {
    let lf = load_test_dump("goose_16.txt");
    // Two bytes share a cell and every payload row loses its closing pipe.
    let text = lf.replace("|0c|cd|", "|0c cd|").replace("|\n", "\n");
    assert_ne!(text, lf);

    let dump = Dump::parse(&text);
    assert_eq!(dump.record_count(), 16);
    for (a, b) in dump.records().zip(Dump::parse(&lf).records()) {
        assert_eq!(a.byte_len(), 190);
        assert_eq!(a.bytes(0..190), b.bytes(0..190));
    }
    assert_eq!(extract(&text, Variant::Goose).bits, extract(&lf, Variant::Goose).bits);

    let wanted: BitStream = "10".repeat(16).parse().unwrap();
    let out = embed(&text, &wanted, Variant::Goose).unwrap();
    assert_eq!(out.summary.skipped, 0);
    assert_eq!(out.text.len(), text.len());
    assert_eq!(extract(&out.text, Variant::Goose).bits, wanted);
}

#[test]
fn preamble_and_trailer_are_chunks() {
    let text = load_test_dump("goose_mixed.txt");
    let dump = Dump::parse(&text);
    let chunks = dump.chunks();
    assert!(matches!(&chunks[0], Chunk::Verbatim(t) if t.starts_with("Capture")));
    assert!(matches!(chunks.last(), Some(Chunk::Verbatim(_))));
    assert_eq!(chunks.len(), 17 + 2);
}

#[test]
fn garbage_input_has_no_records() {
    for text in ["", "\n\n", "hello\nworld", "|0 |01|02|\n"] {
        let dump = Dump::parse(text);
        assert!(dump.is_empty(), "{text:?}");
        assert_eq!(dump.to_string(), text);
        let out = extract(text, Variant::SampledValues);
        assert!(out.bits.is_empty());
        assert_eq!(out.summary.detected, 0);
    }
}
