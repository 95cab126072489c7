//! Systematic Reed-Solomon encoder over a supplied Galois field.
//!
//! The generator polynomial is the monic product of (x + alpha^(1+i)) for
//! i in 0..parity_count; Aztec fixes the starting exponent at 1 for both
//! the data codewords and the mode message. Parity is the remainder of
//! D(x) * x^t divided by the generator, computed with a right-shifting
//! LFSR whose taps are the generator coefficients below the monic term.

use crate::galois::GaloisField;

/// Generator starting exponent; the first root is alpha^1.
pub const START_EXPONENT: usize = 1;

pub struct ReedSolomonEncoder<'a> {
    field: &'a GaloisField,
}

impl<'a> ReedSolomonEncoder<'a> {
    pub fn new(field: &'a GaloisField) -> Self {
        ReedSolomonEncoder { field }
    }

    /// Coefficients of the monic generator of degree `parity_count`,
    /// highest degree first (`g[0]` is always 1).
    fn generator(&self, parity_count: usize) -> Vec<u16> {
        assert!(
            parity_count < self.field.size() - 1,
            "parity count must be below the field order"
        );
        let mut gen = vec![1u16];
        for i in 0..parity_count {
            let root = self.field.exp(START_EXPONENT + i);
            let mut next = vec![0u16; gen.len() + 1];
            for (j, item) in next.iter_mut().enumerate() {
                let shifted = if j < gen.len() { gen[j] } else { 0 };
                let scaled = if j > 0 { self.field.mul(root, gen[j - 1]) } else { 0 };
                *item = shifted ^ scaled;
            }
            gen = next;
        }
        gen
    }

    /// Compute `parity_count` parity words for `data`. The caller appends
    /// them after the data words to form the systematic codeword.
    pub fn encode(&self, data: &[u16], parity_count: usize) -> Vec<u16> {
        if parity_count == 0 {
            return Vec::new();
        }
        for &word in data {
            assert!(
                (word as usize) < self.field.size(),
                "data word exceeds the field"
            );
        }

        let gen = self.generator(parity_count);
        let t = parity_count;
        let mut remainder = vec![0u16; t];
        for &word in data {
            let factor = word ^ remainder[0];
            for j in 0..t - 1 {
                remainder[j] = remainder[j + 1] ^ self.field.mul(factor, gen[j + 1]);
            }
            remainder[t - 1] = self.field.mul(factor, gen[t]);
        }
        remainder
    }
}
