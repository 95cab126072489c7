//! Finite field arithmetic for the Reed-Solomon layers.
//!
//! Aztec symbols draw their codewords from GF(2^m) with m in {6, 8, 10, 12}
//! depending on symbol size, plus GF(16) for the mode message. Each field is
//! represented by exp/log tables built from its primitive polynomial; the
//! exp table is doubled so a product never needs a modular reduction.

use once_cell::sync::Lazy;

/// Primitive polynomials, leading x^m term included.
///
/// | m  | polynomial                          |
/// |----|-------------------------------------|
/// | 4  | x^4 + x + 1                         |
/// | 6  | x^6 + x + 1                         |
/// | 8  | x^8 + x^5 + x^3 + x^2 + 1           |
/// | 10 | x^10 + x^3 + 1                      |
/// | 12 | x^12 + x^6 + x^5 + x^3 + 1          |
pub const POLY_GF16: u32 = 0x13;
pub const POLY_GF64: u32 = 0x43;
pub const POLY_GF256: u32 = 0x12D;
pub const POLY_GF1024: u32 = 0x409;
pub const POLY_GF4096: u32 = 0x1069;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    m: u32,
    size: usize,
    poly: u32,
    exp: Vec<u16>,
    log: Vec<u16>,
}

impl GaloisField {
    /// Build the exp/log tables for GF(2^m) under the given primitive
    /// polynomial, with generator alpha = 2.
    pub fn new(m: u32, poly: u32) -> Self {
        assert!(matches!(m, 4 | 6 | 8 | 10 | 12), "unsupported field order");
        let size = 1usize << m;
        let mut exp = vec![0u16; 2 * (size - 1)];
        let mut log = vec![0u16; size];

        let mut x: u32 = 1;
        for i in 0..size - 1 {
            exp[i] = x as u16;
            exp[i + size - 1] = x as u16;
            log[x as usize] = i as u16;
            x <<= 1;
            if x >= size as u32 {
                x ^= poly;
            }
        }
        // log[0] stays 0 and is never consulted; zero has no logarithm.

        GaloisField { m, size, poly, exp, log }
    }

    pub fn word_size(&self) -> u32 {
        self.m
    }

    /// Number of field elements, 2^m.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn polynomial(&self) -> u32 {
        self.poly
    }

    /// alpha^i, for 0 <= i < 2*(2^m - 1).
    pub fn exp(&self, i: usize) -> u16 {
        self.exp[i]
    }

    /// Discrete logarithm of a nonzero element.
    pub fn log(&self, a: u16) -> usize {
        assert!(a != 0, "zero has no logarithm");
        self.log[a as usize] as usize
    }

    pub fn add(&self, a: u16, b: u16) -> u16 {
        a ^ b
    }

    pub fn mul(&self, a: u16, b: u16) -> u16 {
        if a == 0 || b == 0 {
            return 0;
        }
        self.exp[self.log[a as usize] as usize + self.log[b as usize] as usize]
    }
}

static GF16: Lazy<GaloisField> = Lazy::new(|| GaloisField::new(4, POLY_GF16));
static GF64: Lazy<GaloisField> = Lazy::new(|| GaloisField::new(6, POLY_GF64));
static GF256: Lazy<GaloisField> = Lazy::new(|| GaloisField::new(8, POLY_GF256));
static GF1024: Lazy<GaloisField> = Lazy::new(|| GaloisField::new(10, POLY_GF1024));
static GF4096: Lazy<GaloisField> = Lazy::new(|| GaloisField::new(12, POLY_GF4096));

/// The shared field instance for a codeword width. Width 4 is the mode
/// message field; 6/8/10/12 are the data codeword fields.
pub fn field_for_word_size(word_size: u32) -> &'static GaloisField {
    match word_size {
        4 => &GF16,
        6 => &GF64,
        8 => &GF256,
        10 => &GF1024,
        12 => &GF4096,
        _ => panic!("no Aztec field with {}-bit codewords", word_size),
    }
}
