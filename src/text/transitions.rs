//! Latch and shift transitions between character modes.
//!
//! A latch changes the mode for the rest of the stream, a shift only for
//! the next code. Not every pair of modes has a direct latch code; the
//! missing ones are spelled as a fixed sequence of direct latches, so a
//! single table drives both emission and cost accounting.

use super::mode::Mode;

/// Byte shift code, valid in Upper, Lower and Mixed.
pub const BYTE_SHIFT_CODE: u32 = 31;
pub const BYTE_SHIFT_WIDTH: usize = 5;

/// The latch codes taking `from` to `to`, in emission order. Multi-step
/// routes (e.g. Upper to Punct via Mixed) are spelled out. Empty for the
/// identity transition.
pub fn latch_sequence(from: Mode, to: Mode) -> &'static [(u32, usize)] {
    use Mode::*;
    match (from, to) {
        (Upper, Lower) => &[(28, 5)],
        (Upper, Mixed) => &[(29, 5)],
        (Upper, Digit) => &[(30, 5)],
        (Upper, Punct) => &[(29, 5), (30, 5)],

        // Lower has no direct Upper latch; go via Digit.
        (Lower, Upper) => &[(30, 5), (14, 4)],
        (Lower, Mixed) => &[(29, 5)],
        (Lower, Digit) => &[(30, 5)],
        (Lower, Punct) => &[(29, 5), (30, 5)],

        (Mixed, Upper) => &[(29, 5)],
        (Mixed, Lower) => &[(28, 5)],
        (Mixed, Digit) => &[(29, 5), (30, 5)],
        (Mixed, Punct) => &[(30, 5)],

        // Punct can only latch to Upper; everything else goes through it.
        (Punct, Upper) => &[(31, 5)],
        (Punct, Lower) => &[(31, 5), (28, 5)],
        (Punct, Mixed) => &[(31, 5), (29, 5)],
        (Punct, Digit) => &[(31, 5), (30, 5)],

        (Digit, Upper) => &[(14, 4)],
        (Digit, Lower) => &[(14, 4), (28, 5)],
        (Digit, Mixed) => &[(14, 4), (29, 5)],
        (Digit, Punct) => &[(14, 4), (29, 5), (30, 5)],

        _ => &[],
    }
}

/// Total bit cost of latching `from` to `to`.
pub fn latch_cost(from: Mode, to: Mode) -> usize {
    latch_sequence(from, to).iter().map(|&(_, width)| width).sum()
}

/// The single-code shift from `from` to `to`, when one exists.
pub fn shift_code(from: Mode, to: Mode) -> Option<(u32, usize)> {
    use Mode::*;
    match (from, to) {
        (Upper, Punct) | (Lower, Punct) | (Mixed, Punct) => Some((0, 5)),
        (Digit, Punct) => Some((0, 4)),
        (Digit, Upper) => Some((15, 4)),
        (Lower, Upper) => Some((28, 5)),
        _ => None,
    }
}

/// Latches required before a byte shift can be issued from `mode`, and
/// the latch mode the stream is in once the run ends. Digit and Punct
/// carry no byte shift code, so those routes pass through Upper.
pub fn byte_route(mode: Mode) -> (&'static [(u32, usize)], Mode) {
    use Mode::*;
    match mode {
        Upper => (&[], Upper),
        Lower => (&[], Lower),
        Mixed => (&[], Mixed),
        Digit => (&[(14, 4)], Upper),
        Punct => (&[(31, 5)], Upper),
    }
}
