//! Flat tokenizer for the Python pickle wire format.
//!
//! Decodes a pickle byte stream into an ordered sequence of opcode frames
//! without running the pickle virtual machine over them. A higher-level
//! reconstruction layer can consume the frame sequence; this crate only
//! answers "which opcodes, with which bytes".

mod decode;
mod error;
mod json;
pub mod opcodes;
mod types;

pub use crate::decode::decode_from_bytes;
pub use crate::error::DecodeError;
pub use crate::json::stream_to_json;
pub use crate::types::{Frame, PickleStream};

use std::path::Path;

/// Read the whole file at `path` into memory and tokenize it.
///
/// One blocking read; the input stays resident for the duration of the
/// decode. Read failures surface as `DecodeError::Io`.
pub fn decode_from_path(path: impl AsRef<Path>) -> Result<PickleStream, DecodeError> {
    let data = std::fs::read(path)?;
    decode_from_bytes(&data)
}
