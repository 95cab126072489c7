//! Mode message: the short RS-protected header in the ring around the
//! finder that tells a decoder the layer count and data codeword count.
//!
//! Compact symbols pack (layers-1, dataWords-1) into 2+6 bits, two
//! nibbles plus five parity nibbles over GF(16), 28 bits on the ring.
//! Full symbols use 5+11 bits, four nibbles plus six parity, 40 bits.

use crate::galois;
use crate::reed_solomon::ReedSolomonEncoder;
use crate::util::bit_buffer::BitBuffer;

const MODE_WORD_SIZE: u32 = 4;

/// Encode the mode message for the chosen configuration as a bit stream
/// ready for the ring (nibbles MSB-first, parity appended).
pub fn encode(compact: bool, layers: u32, data_words: usize) -> BitBuffer {
    if compact {
        assert!((1..=4).contains(&layers), "compact symbols have 1..=4 layers");
        assert!((1..=64).contains(&data_words), "compact data word count out of range");
    } else {
        assert!((1..=32).contains(&layers), "full symbols have 1..=32 layers");
        assert!((1..=2048).contains(&data_words), "full data word count out of range");
    }

    let mut header = BitBuffer::new();
    if compact {
        header.append_msb((layers - 1) as u64, 2);
        header.append_msb((data_words - 1) as u64, 6);
    } else {
        header.append_msb((layers - 1) as u64, 5);
        header.append_msb((data_words - 1) as u64, 11);
    }

    let data_nibbles = header.len() / 4;
    let total_nibbles = if compact { 7 } else { 10 };
    let mut nibbles: Vec<u16> = (0..data_nibbles)
        .map(|i| header.read_msb(i * 4, 4) as u16)
        .collect();

    let field = galois::field_for_word_size(MODE_WORD_SIZE);
    let rs = ReedSolomonEncoder::new(field);
    let parity = rs.encode(&nibbles, total_nibbles - data_nibbles);
    nibbles.extend(parity);

    let mut bits = BitBuffer::with_capacity(total_nibbles * 4);
    for nibble in nibbles {
        bits.append_msb(nibble as u64, 4);
    }
    bits
}
