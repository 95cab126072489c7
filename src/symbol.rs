//! The exported symbol: a row-packed byte bitmap of the module matrix.

use crate::matrix::ModuleMatrix;

/// A finished Aztec symbol. Rows are packed into `row_stride` bytes each;
/// bit order within a byte is LSB-first by default or MSB-first when the
/// caller asked for it. Module (x, y) is dark iff its bit is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    size: usize,
    row_stride: usize,
    bytes: Vec<u8>,
    msb_first: bool,
}

impl Symbol {
    pub(crate) fn from_matrix(matrix: &ModuleMatrix, msb_first: bool) -> Symbol {
        let size = matrix.size();
        let row_stride = size.div_ceil(8);
        let mut bytes = vec![0u8; size * row_stride];
        for y in 0..size {
            for x in 0..size {
                if matrix.get(x, y) {
                    let shift = if msb_first { 7 - (x % 8) } else { x % 8 };
                    bytes[y * row_stride + x / 8] |= 1 << shift;
                }
            }
        }
        Symbol { size, row_stride, bytes, msb_first }
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Bytes per packed row.
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn msb_first(&self) -> bool {
        self.msb_first
    }

    /// Whether module (x, y) is dark.
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.size && y < self.size, "module out of range");
        let byte = self.bytes[y * self.row_stride + x / 8];
        let shift = if self.msb_first { 7 - (x % 8) } else { x % 8 };
        byte & (1 << shift) != 0
    }

    /// Text rendering for terminals and debugging; two characters per
    /// module so the aspect ratio survives.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.size * 2 + 1) * self.size);
        for y in 0..self.size {
            for x in 0..self.size {
                out.push_str(if self.get(x, y) { "██" } else { "  " });
            }
            out.push('\n');
        }
        out
    }
}
