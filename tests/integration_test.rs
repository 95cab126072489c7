//! End-to-end encoding scenarios over the public API.

use rand::{rngs::StdRng, Rng, SeedableRng};
use rustyaztec::{encode, encode_with_details, AztecEncodeError, Configuration, EncodeOptions};

/// Side length the configuration implies, straight from the size rules.
fn expected_size(config: &Configuration) -> usize {
    let layers = config.layers as usize;
    if config.compact {
        11 + 4 * layers
    } else {
        let base = 14 + 4 * layers;
        base + 1 + 2 * ((base / 2 - 1) / 15)
    }
}

#[test]
fn single_letter_is_a_compact_l1_symbol() {
    let (symbol, config) = encode_with_details("A", &EncodeOptions::default()).unwrap();
    assert!(config.compact);
    assert_eq!(config.layers, 1);
    assert_eq!(config.word_size, 6);
    assert_eq!(symbol.size(), 15);
    assert!(symbol.get(7, 7), "center module must be dark");
}

#[test]
fn hello_world_fits_a_compact_symbol() {
    let (symbol, config) =
        encode_with_details("Hello, World!", &EncodeOptions::default()).unwrap();
    assert!(config.compact);
    assert_eq!(symbol.size(), expected_size(&config));
}

#[test]
fn digit_payload_uses_the_smallest_compact_symbol() {
    let (_, config) = encode_with_details("12345", &EncodeOptions::default()).unwrap();
    assert!(config.compact);
    assert_eq!(config.layers, 1);
    assert_eq!(config.word_size, 6);
}

#[test]
fn single_zero_byte_encodes() {
    let payload: &[u8] = &[0x00];
    let (symbol, config) = encode_with_details(payload, &EncodeOptions::default()).unwrap();
    assert!(config.compact);
    assert_eq!(symbol.size(), expected_size(&config));
}

#[test]
fn long_base64_payload_needs_a_full_symbol() {
    // 366 base64 characters, deterministically generated
    let charset: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut rng = StdRng::seed_from_u64(366);
    let payload: Vec<u8> = (0..366)
        .map(|_| charset[rng.random_range(0..charset.len())])
        .collect();

    let (symbol, config) = encode_with_details(&payload, &EncodeOptions::default()).unwrap();
    assert!(!config.compact);
    assert_eq!(config.word_size, 10, "payloads this size land in the 10-bit range");
    assert_eq!(symbol.size(), expected_size(&config));
}

#[test]
fn ten_thousand_characters_exceed_every_symbol() {
    let payload = "X".repeat(10_000);
    match encode(payload.as_bytes(), &EncodeOptions::default()) {
        Err(AztecEncodeError::PayloadTooLarge { bit_count }) => assert_eq!(bit_count, 50_000),
        other => panic!("expected PayloadTooLarge, got {:?}", other.map(|s| s.size())),
    }
}

#[test]
fn msb_export_is_a_per_byte_reversal_of_lsb() {
    let lsb = encode("A", &EncodeOptions::default()).unwrap();
    let msb = encode(
        "A",
        &EncodeOptions {
            msb_first: true,
            ..EncodeOptions::default()
        },
    )
    .unwrap();

    assert_eq!(lsb.size(), msb.size());
    for (a, b) in lsb.bytes().iter().zip(msb.bytes()) {
        assert_eq!(a.reverse_bits(), *b);
    }
    for y in 0..lsb.size() {
        for x in 0..lsb.size() {
            assert_eq!(lsb.get(x, y), msb.get(x, y), "module ({}, {})", x, y);
        }
    }
}

#[test]
fn finder_rings_alternate_out_to_the_radius() {
    for (payload, radius) in [("A".to_string(), 4usize), ("W".repeat(200), 6)] {
        let (symbol, config) =
            encode_with_details(payload.as_bytes(), &EncodeOptions::default()).unwrap();
        assert_eq!(config.compact, radius == 4);
        let c = symbol.size() / 2;
        for x in c - radius..=c + radius {
            for y in c - radius..=c + radius {
                let d = c.abs_diff(x).max(c.abs_diff(y));
                assert_eq!(symbol.get(x, y), d % 2 == 0, "({}, {})", x, y);
            }
        }
    }
}

#[test]
fn raising_error_correction_never_shrinks_the_symbol() {
    let payload = "error correction budget";
    let mut last_size = 0;
    for ec in [5u32, 23, 50, 95] {
        let options = EncodeOptions {
            error_correction_percentage: ec,
            ..EncodeOptions::default()
        };
        let symbol = encode(payload, &options).unwrap();
        assert!(symbol.size() >= last_size, "ec {}%", ec);
        last_size = symbol.size();
    }
}

#[test]
fn random_payloads_obey_the_universal_invariants() {
    rustyaztec::tracing_init::init_test_tracing();
    let mut rng = StdRng::seed_from_u64(24778);
    for round in 0..200 {
        let len = rng.random_range(1..=220);
        let payload: Vec<u8> = (0..len)
            .map(|_| {
                if rng.random_range(0..8) == 0 {
                    rng.random_range(0x00..=0xFF)
                } else {
                    rng.random_range(0x20..=0x7E)
                }
            })
            .collect();

        let options = EncodeOptions::default();
        let (symbol, config) = encode_with_details(&payload, &options)
            .unwrap_or_else(|e| panic!("round {}: {}", round, e));

        assert_eq!(
            config.data_codewords + config.parity_codewords,
            config.total_codewords
        );
        assert!(config.data_codewords <= if config.compact { 64 } else { 2048 });
        assert!(matches!(config.word_size, 6 | 8 | 10 | 12));
        assert_eq!(symbol.row_stride(), symbol.size().div_ceil(8));
        assert_eq!(symbol.bytes().len(), symbol.size() * symbol.row_stride());
        assert_eq!(symbol.size(), expected_size(&config));
        assert!(symbol.get(symbol.size() / 2, symbol.size() / 2));

        // same input, same bytes
        let again = encode(&payload, &options).unwrap();
        assert_eq!(symbol, again, "round {}", round);
    }
}

#[test]
fn forcing_full_symbols_still_round_trips_the_geometry() {
    let options = EncodeOptions {
        prefer_compact: false,
        ..EncodeOptions::default()
    };
    let (symbol, config) = encode_with_details("A", &options).unwrap();
    assert!(!config.compact);
    assert_eq!(config.layers, 4);
    assert_eq!(symbol.size(), 31);
}
