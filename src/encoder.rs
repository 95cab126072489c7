//! Top-level encoder: wires the pipeline together and exposes the public
//! encode API.
//!
//! Stages run strictly in order: high-level text encoding, symbol sizing
//! (which packs the stream into codewords), Reed-Solomon parity, mode
//! message, matrix painting, bitmap export. Each stage owns its output;
//! the same payload and options always produce a byte-identical symbol.

use snafu::Snafu;
use tracing::debug;

use crate::galois;
use crate::matrix;
use crate::mode_message;
use crate::reed_solomon::{ReedSolomonEncoder, START_EXPONENT};
use crate::symbol::Symbol;
use crate::symbol_spec;
use crate::text;

/// Default error-correction budget, the standard's recommended 23%.
pub const DEFAULT_EC_PERCENTAGE: u32 = 23;
/// Largest accepted error-correction percentage.
pub const MAX_EC_PERCENTAGE: u32 = 95;

#[derive(Debug, Snafu)]
pub enum AztecEncodeError {
    /// No symbol spec has capacity for the payload
    #[snafu(display("payload of {bit_count} bits does not fit any Aztec symbol"))]
    PayloadTooLarge { bit_count: usize },

    /// The options fail a sanity check
    #[snafu(display("invalid encoder configuration: {reason}"))]
    InvalidConfiguration { reason: String },
}

/// Caller-facing knobs. `Default` gives the standard 23% error
/// correction, compact symbols where they fit, and LSB-first row bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Requested parity fraction in percent, 0..=95.
    pub error_correction_percentage: u32,
    /// Prefer a fitting compact spec; unset forces a full symbol.
    pub prefer_compact: bool,
    /// Pack row bytes MSB-first instead of the default LSB-first.
    pub msb_first: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            error_correction_percentage: DEFAULT_EC_PERCENTAGE,
            prefer_compact: true,
            msb_first: false,
        }
    }
}

/// The symbol parameters the sizer settled on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub compact: bool,
    pub layers: u32,
    pub word_size: u32,
    pub total_codewords: usize,
    pub data_codewords: usize,
    pub parity_codewords: usize,
    pub primitive_polynomial: u32,
    pub rs_start_exponent: u32,
}

/// Encode `payload` into an Aztec symbol.
pub fn encode(
    payload: impl AsRef<[u8]>,
    options: &EncodeOptions,
) -> Result<Symbol, AztecEncodeError> {
    encode_with_details(payload, options).map(|(symbol, _)| symbol)
}

/// Encode `payload` and also report the chosen symbol parameters.
pub fn encode_with_details(
    payload: impl AsRef<[u8]>,
    options: &EncodeOptions,
) -> Result<(Symbol, Configuration), AztecEncodeError> {
    if options.error_correction_percentage > MAX_EC_PERCENTAGE {
        return Err(AztecEncodeError::InvalidConfiguration {
            reason: format!(
                "error correction percentage {} exceeds {}",
                options.error_correction_percentage, MAX_EC_PERCENTAGE
            ),
        });
    }

    let bits = text::encode(payload.as_ref());
    let choice = symbol_spec::choose_spec(
        &bits,
        options.error_correction_percentage,
        options.prefer_compact,
    )
    .ok_or(AztecEncodeError::PayloadTooLarge { bit_count: bits.len() })?;

    let spec = choice.spec;
    let mut words = choice.data_words;
    let data_count = words.len();

    let field = galois::field_for_word_size(spec.word_size);
    let rs = ReedSolomonEncoder::new(field);
    let parity = rs.encode(&words, choice.parity_count);
    words.extend(parity);

    let mode_bits = mode_message::encode(spec.compact, spec.layers, data_count);
    let matrix = matrix::build(&spec, &words, &mode_bits);
    let symbol = Symbol::from_matrix(&matrix, options.msb_first);

    let configuration = Configuration {
        compact: spec.compact,
        layers: spec.layers,
        word_size: spec.word_size,
        total_codewords: spec.total_codewords,
        data_codewords: data_count,
        parity_codewords: choice.parity_count,
        primitive_polynomial: field.polynomial(),
        rs_start_exponent: START_EXPONENT as u32,
    };
    debug!(
        size = symbol.size(),
        layers = configuration.layers,
        compact = configuration.compact,
        data_codewords = configuration.data_codewords,
        parity_codewords = configuration.parity_codewords,
        "symbol encoded"
    );
    Ok((symbol, configuration))
}
