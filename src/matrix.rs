//! Matrix builder: paints the finder, orientation marks, mode-message
//! ring, reference grid and the data spiral into a square module grid.
//!
//! All drawing happens in (x, y) module coordinates with y growing
//! downward. Data placement works in "base matrix" coordinates and goes
//! through an alignment map that inserts the reference-grid skips for
//! full symbols; the map is built once per configuration and is the only
//! arbiter of where a base coordinate lands.

use bitvec::prelude::*;
use tracing::trace;

use crate::symbol_spec::SymbolSpec;
use crate::util::bit_buffer::BitBuffer;

/// A square grid of dark/light modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMatrix {
    size: usize,
    modules: BitVec<u8, Msb0>,
}

impl ModuleMatrix {
    fn new(size: usize) -> Self {
        ModuleMatrix {
            size,
            modules: bitvec![u8, Msb0; 0; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.size && y < self.size, "module out of range");
        self.modules[y * self.size + x]
    }

    fn set(&mut self, x: usize, y: usize) {
        assert!(x < self.size && y < self.size, "module out of range");
        self.modules.set(y * self.size + x, true);
    }
}

/// Paint a complete symbol matrix from the final codeword sequence
/// (data followed by parity) and the mode-message bit stream.
pub fn build(spec: &SymbolSpec, codewords: &[u16], mode_bits: &BitBuffer) -> ModuleMatrix {
    assert_eq!(
        codewords.len(),
        spec.total_codewords,
        "codeword sequence must fill the symbol"
    );
    assert_eq!(
        mode_bits.len(),
        if spec.compact { 28 } else { 40 },
        "mode message length"
    );

    let size = spec.matrix_size();
    let mut matrix = ModuleMatrix::new(size);
    let alignment = alignment_map(spec);

    let stream = layer_bit_stream(spec, codewords);
    draw_data(&mut matrix, spec, &stream, &alignment);
    draw_mode_message(&mut matrix, spec.compact, mode_bits);
    draw_finder(&mut matrix, spec.compact);
    if !spec.compact {
        draw_reference_grid(&mut matrix);
    }

    trace!(size, layers = spec.layers, compact = spec.compact, "matrix painted");
    matrix
}

/// Base-coordinate to matrix-coordinate translation. Identity for
/// compact symbols; full symbols skip the center row/column and one
/// extra row/column every 15 base positions outward, which is where the
/// reference grid lives.
fn alignment_map(spec: &SymbolSpec) -> Vec<usize> {
    let base = spec.base_matrix_size();
    if spec.compact {
        return (0..base).collect();
    }
    let orig_center = base / 2;
    let center = spec.matrix_size() / 2;
    let mut map = vec![0usize; base];
    for i in 0..orig_center {
        let offset = i + i / 15;
        map[orig_center - i - 1] = center - offset - 1;
        map[orig_center + i] = center + offset + 1;
    }
    map
}

/// The bit stream the spiral consumes: an alignment pad of
/// `totalBits mod wordSize` zeros, then every codeword MSB-first. The
/// pad keeps decoder codeword boundaries on the ring partition.
fn layer_bit_stream(spec: &SymbolSpec, codewords: &[u16]) -> BitBuffer {
    let total_bits = spec.total_layer_bits();
    let word_size = spec.word_size as usize;
    let mut stream = BitBuffer::with_capacity(total_bits);
    stream.append_msb(0, total_bits % word_size);
    for &word in codewords {
        stream.append_msb(word as u64, word_size);
    }
    assert_eq!(stream.len(), total_bits, "stream must fill the layers exactly");
    stream
}

/// Walk the data region as L nested two-module-wide rings, outward ring
/// first, four sides counter-clockwise, two columns per step.
fn draw_data(matrix: &mut ModuleMatrix, spec: &SymbolSpec, stream: &BitBuffer, alignment: &[usize]) {
    let layers = spec.layers as usize;
    let base = spec.base_matrix_size();
    let mut index = 0;

    for i in 0..layers {
        let row_size = (layers - i) * 4 + if spec.compact { 9 } else { 12 };
        for j in 0..row_size {
            let column = j * 2;
            for k in 0..2 {
                let low = 2 * i + k;
                let run = 2 * i + j;
                let high = base - 1 - 2 * i - k;
                let far = base - 1 - 2 * i - j;
                if stream.get(index + column + k) {
                    matrix.set(alignment[low], alignment[run]);
                }
                if stream.get(index + 2 * row_size + column + k) {
                    matrix.set(alignment[run], alignment[high]);
                }
                if stream.get(index + 4 * row_size + column + k) {
                    matrix.set(alignment[high], alignment[far]);
                }
                if stream.get(index + 6 * row_size + column + k) {
                    matrix.set(alignment[far], alignment[low]);
                }
            }
        }
        index += row_size * 8;
    }
    assert_eq!(index, stream.len(), "spiral must consume the whole stream");
}

/// Mode-message ring one module outside the finder, painted clockwise
/// beginning at the top-right corner: down the right side, leftward
/// along the bottom, up the left side, rightward along the top. Full
/// symbols skip the shared center row/column in each ten-bit segment.
fn draw_mode_message(matrix: &mut ModuleMatrix, compact: bool, mode_bits: &BitBuffer) {
    let center = matrix.size() / 2;
    if compact {
        for i in 0..7 {
            let offset = center - 3 + i;
            if mode_bits.get(i) {
                matrix.set(center + 5, offset);
            }
            if mode_bits.get(i + 7) {
                matrix.set(center + 3 - i, center + 5);
            }
            if mode_bits.get(i + 14) {
                matrix.set(center - 5, center + 3 - i);
            }
            if mode_bits.get(i + 21) {
                matrix.set(offset, center - 5);
            }
        }
    } else {
        for i in 0..10 {
            let offset = center - 5 + i + i / 5;
            if mode_bits.get(i) {
                matrix.set(center + 7, offset);
            }
            if mode_bits.get(i + 10) {
                matrix.set(center + 5 - i - i / 5, center + 7);
            }
            if mode_bits.get(i + 20) {
                matrix.set(center - 7, center + 5 - i - i / 5);
            }
            if mode_bits.get(i + 30) {
                matrix.set(offset, center - 7);
            }
        }
    }
}

/// Central bull's-eye plus the three orientation corners. Rings are dark
/// at even Chebyshev distances up to radius 4 (compact) or 6 (full); the
/// corner marks sit one module further out and are rotationally
/// asymmetric so a decoder can fix the reading direction.
fn draw_finder(matrix: &mut ModuleMatrix, compact: bool) {
    let center = matrix.size() / 2;
    let radius = if compact { 4 } else { 6 };

    for ring in (0..=radius).step_by(2) {
        for j in center - ring..=center + ring {
            matrix.set(j, center - ring);
            matrix.set(j, center + ring);
            matrix.set(center - ring, j);
            matrix.set(center + ring, j);
        }
    }

    let o = radius + 1;
    // one dark at the top-left corner
    matrix.set(center - o, center - o);
    // two darks along the top row at the top-right
    matrix.set(center + o, center - o);
    matrix.set(center + o - 1, center - o);
    // three darks around the bottom-right corner
    matrix.set(center + o, center + o);
    matrix.set(center + o - 1, center + o);
    matrix.set(center + o, center + o - 1);
}

/// Reference grid for full symbols: rows and columns every 16 modules
/// from the center line, dark wherever the running coordinate shares the
/// center's parity. These rows/columns are exactly the ones the
/// alignment map skips, so nothing else ever paints them.
fn draw_reference_grid(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    let center = size / 2;
    let mut gap = 0;
    while center + gap < size {
        let mut k = center % 2;
        while k < size {
            matrix.set(center - gap, k);
            matrix.set(center + gap, k);
            matrix.set(k, center - gap);
            matrix.set(k, center + gap);
            k += 2;
        }
        gap += 16;
    }
}
