/// One decoded record of the opcode stream: the tag byte plus the payload
/// bytes that belong to it. The payload excludes any length-prefix bytes
/// that preceded it on the wire; for newline-terminated fields it is the
/// scanned text, line feeds included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub opcode: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    /// Byte count of the payload (not counting the opcode or prefix bytes).
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }
}

/// A fully tokenized pickle stream.
///
/// Frames appear in stream order and are never reordered. `total_length`
/// counts every input byte consumed, from the 2-byte header through the
/// STOP terminator inclusive; bytes past the terminator are not inspected.
/// A value of this type only exists for streams that decoded completely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickleStream {
    /// Raw protocol version byte (no range check at this layer).
    pub protocol: u8,
    pub frames: Vec<Frame>,
    pub total_length: usize,
}
