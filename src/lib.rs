
pub mod encoder;
pub mod galois;
pub mod matrix;
pub mod mode_message;
pub mod packer;
pub mod reed_solomon;
pub mod symbol;
pub mod symbol_spec;
pub mod text;
pub mod tracing_init;
pub mod util;

pub use encoder::{encode, encode_with_details, AztecEncodeError, Configuration, EncodeOptions};
pub use symbol::Symbol;
