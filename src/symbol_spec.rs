//! Symbol capacity table and sizer.
//!
//! One row per legal symbol: the four compact sizes and the full sizes
//! from four layers up (smaller full symbols would collide with the
//! 13-module core). Totals are the standard's figures, equal to
//! floor(total layer bits / word size). The table is ordered by bit
//! capacity so the sizer can take the first row that fits.

use tracing::debug;

use crate::packer;
use crate::util::bit_buffer::BitBuffer;

/// Mode-message data field width caps compact symbols at 64 data words.
pub const COMPACT_DATA_WORD_LIMIT: usize = 64;
/// Full-symbol cap from the 11-bit mode-message field.
pub const FULL_DATA_WORD_LIMIT: usize = 2048;
/// Every symbol carries at least this many parity words.
pub const MIN_PARITY_WORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSpec {
    pub compact: bool,
    pub layers: u32,
    pub word_size: u32,
    pub total_codewords: usize,
}

impl SymbolSpec {
    pub const fn bit_capacity(&self) -> usize {
        self.total_codewords * self.word_size as usize
    }

    /// Exact bit count of the data spiral: (88 + 16L)L compact,
    /// (112 + 16L)L full.
    pub const fn total_layer_bits(&self) -> usize {
        let layers = self.layers as usize;
        ((if self.compact { 88 } else { 112 }) + 16 * layers) * layers
    }

    /// Side length before reference-grid rows are inserted.
    pub const fn base_matrix_size(&self) -> usize {
        (if self.compact { 11 } else { 14 }) + 4 * self.layers as usize
    }

    /// Reference-grid line pairs a full symbol inserts on each side of
    /// the center line.
    pub const fn reference_lines(&self) -> usize {
        if self.compact {
            0
        } else {
            (self.base_matrix_size() / 2 - 1) / 15
        }
    }

    /// Final side length in modules.
    pub const fn matrix_size(&self) -> usize {
        if self.compact {
            self.base_matrix_size()
        } else {
            self.base_matrix_size() + 1 + 2 * self.reference_lines()
        }
    }
}

const fn spec(compact: bool, layers: u32, word_size: u32, total_codewords: usize) -> SymbolSpec {
    SymbolSpec { compact, layers, word_size, total_codewords }
}

/// All symbol sizes, smallest bit capacity first.
pub const SYMBOL_SPECS: [SymbolSpec; 33] = [
    spec(true, 1, 6, 17),
    spec(true, 2, 6, 40),
    spec(true, 3, 8, 51),
    spec(true, 4, 8, 76),
    spec(false, 4, 8, 88),
    spec(false, 5, 8, 120),
    spec(false, 6, 8, 156),
    spec(false, 7, 8, 196),
    spec(false, 8, 8, 240),
    spec(false, 9, 10, 230),
    spec(false, 10, 10, 272),
    spec(false, 11, 10, 316),
    spec(false, 12, 10, 364),
    spec(false, 13, 10, 416),
    spec(false, 14, 10, 470),
    spec(false, 15, 10, 528),
    spec(false, 16, 10, 588),
    spec(false, 17, 10, 652),
    spec(false, 18, 10, 720),
    spec(false, 19, 10, 790),
    spec(false, 20, 10, 864),
    spec(false, 21, 10, 940),
    spec(false, 22, 10, 1020),
    spec(false, 23, 12, 920),
    spec(false, 24, 12, 992),
    spec(false, 25, 12, 1066),
    spec(false, 26, 12, 1144),
    spec(false, 27, 12, 1224),
    spec(false, 28, 12, 1306),
    spec(false, 29, 12, 1392),
    spec(false, 30, 12, 1480),
    spec(false, 31, 12, 1570),
    spec(false, 32, 12, 1664),
];

/// A sizing decision: the chosen spec, the payload packed at its word
/// size, and the parity count filling the remaining capacity.
#[derive(Debug, Clone)]
pub struct SpecChoice {
    pub spec: SymbolSpec,
    pub data_words: Vec<u16>,
    pub parity_count: usize,
}

/// Pick the smallest spec whose capacity holds the packed payload plus
/// the requested error-correction fraction (never fewer than
/// `MIN_PARITY_WORDS` parity words). With `prefer_compact` unset the
/// compact rows are skipped. Returns `None` when nothing fits.
pub fn choose_spec(bits: &BitBuffer, ec_percent: u32, prefer_compact: bool) -> Option<SpecChoice> {
    let mut words: Vec<u16> = Vec::new();
    let mut stuffed_for: u32 = 0;

    for spec in &SYMBOL_SPECS {
        if spec.compact && !prefer_compact {
            continue;
        }
        if spec.word_size != stuffed_for {
            words = packer::stuff(bits, spec.word_size);
            // the mode message cannot describe zero data words
            packer::pad_words(&mut words, 1);
            stuffed_for = spec.word_size;
        }
        let data_count = words.len();
        let limit = if spec.compact {
            COMPACT_DATA_WORD_LIMIT
        } else {
            FULL_DATA_WORD_LIMIT
        };
        if data_count > limit {
            continue;
        }
        let min_parity = MIN_PARITY_WORDS.max((data_count * ec_percent as usize + 99) / 100);
        if data_count + min_parity <= spec.total_codewords {
            debug!(
                compact = spec.compact,
                layers = spec.layers,
                word_size = spec.word_size,
                data_words = data_count,
                parity_words = spec.total_codewords - data_count,
                "selected symbol spec"
            );
            return Some(SpecChoice {
                spec: *spec,
                parity_count: spec.total_codewords - data_count,
                data_words: words,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    #[test]
    fn totals_follow_from_layer_bits() {
        for spec in &SYMBOL_SPECS {
            assert_eq!(
                spec.total_codewords,
                spec.total_layer_bits() / spec.word_size as usize,
                "L{} {}",
                spec.layers,
                if spec.compact { "compact" } else { "full" }
            );
        }
    }

    #[test]
    fn table_is_sorted_by_bit_capacity() {
        for pair in SYMBOL_SPECS.windows(2) {
            assert!(pair[0].bit_capacity() < pair[1].bit_capacity());
        }
    }

    #[test]
    fn matrix_sizes() {
        // compact L1 and the reference-grid cases around the insertion
        // threshold
        let compact_l1 = &SYMBOL_SPECS[0];
        assert_eq!(compact_l1.matrix_size(), 15);
        for spec in &SYMBOL_SPECS {
            match (spec.compact, spec.layers) {
                (true, 4) => assert_eq!(spec.matrix_size(), 27),
                (false, 4) => assert_eq!(spec.matrix_size(), 31),
                (false, 5) => assert_eq!(spec.matrix_size(), 37),
                (false, 12) => assert_eq!(spec.matrix_size(), 67),
                (false, 32) => assert_eq!(spec.matrix_size(), 151),
                _ => {}
            }
        }
    }

    #[test]
    fn tiny_payload_selects_compact_l1() {
        let bits = text::encode(b"A");
        let choice = choose_spec(&bits, 23, true).unwrap();
        assert!(choice.spec.compact);
        assert_eq!(choice.spec.layers, 1);
        assert_eq!(choice.spec.word_size, 6);
        assert_eq!(choice.data_words.len(), 1);
        assert_eq!(choice.parity_count, 16);
    }

    #[test]
    fn prefer_full_skips_compact_rows() {
        let bits = text::encode(b"A");
        let choice = choose_spec(&bits, 23, false).unwrap();
        assert!(!choice.spec.compact);
        assert_eq!(choice.spec.layers, 4);
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let payload = "X".repeat(10_000);
        let bits = text::encode(payload.as_bytes());
        assert!(choose_spec(&bits, 23, true).is_none());
    }

    #[test]
    fn parity_fills_remaining_capacity() {
        let bits = text::encode(b"Hello, World!");
        let choice = choose_spec(&bits, 23, true).unwrap();
        assert_eq!(
            choice.data_words.len() + choice.parity_count,
            choice.spec.total_codewords
        );
    }

    #[test]
    fn empty_payload_pads_to_one_filler_word() {
        let bits = BitBuffer::new();
        let choice = choose_spec(&bits, 23, true).unwrap();
        assert_eq!(choice.data_words, vec![packer::FILLER_WORD]);
        assert!(choice.spec.compact);
        assert_eq!(choice.spec.layers, 1);
    }

    #[test]
    fn zero_percent_still_gets_minimum_parity() {
        let bits = text::encode(b"ABCDEFGH");
        let choice = choose_spec(&bits, 0, true).unwrap();
        assert!(choice.parity_count >= MIN_PARITY_WORDS);
    }
}
