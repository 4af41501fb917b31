use crate::error::DecodeError;
use crate::opcodes::*;
use crate::types::{Frame, PickleStream};

/// Tokenize a pickle byte stream into its flat frame sequence.
///
/// Walks the stream one opcode at a time, recording each opcode together
/// with its payload bytes. Nothing is evaluated and no object graph is
/// built. Decoding either reaches STOP and returns the complete stream,
/// or fails with the first error; a partial result never escapes.
pub fn decode_from_bytes(data: &[u8]) -> Result<PickleStream, DecodeError> {
    let mut scanner = Scanner::new(data);
    scanner.run()
}

struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn run(&mut self) -> Result<PickleStream, DecodeError> {
        if self.data.len() < 2 {
            return Err(DecodeError::Format(
                "buffer shorter than the 2-byte header".to_string(),
            ));
        }
        if self.data[0] != PROTO {
            return Err(DecodeError::Format(
                "first byte is not the PROTO (0x80) start marker".to_string(),
            ));
        }
        // Raw protocol byte; no range check at this layer
        let protocol = self.data[1];
        self.pos = 2;

        let mut frames = Vec::with_capacity(16);
        loop {
            if self.pos >= self.data.len() {
                return Err(DecodeError::UnterminatedStream);
            }
            let op = self.data[self.pos];
            if op == STOP {
                return Ok(PickleStream {
                    protocol,
                    frames,
                    total_length: self.pos + 1,
                });
            }

            let (prefix_width, payload_len) = payload_span(op, &self.data[self.pos + 1..])?;
            let start = self.pos + 1 + prefix_width;
            let end = start + payload_len;
            if end > self.data.len() {
                return Err(DecodeError::UnterminatedStream);
            }
            frames.push(Frame {
                opcode: op,
                payload: self.data[start..end].to_vec(),
            });
            self.pos = end;
        }
    }
}

/// Payload geometry of one opcode: `(prefix_width, payload_len)`, where
/// `prefix_width` is the number of length-prefix bytes between the opcode
/// and its payload. `rest` is the input immediately after the opcode byte.
///
/// Opcodes outside the table fail with `UnsupportedOpcode`; a length
/// prefix cut off by the end of input fails with `UnterminatedStream`.
fn payload_span(op: u8, rest: &[u8]) -> Result<(usize, usize), DecodeError> {
    match op {
        // Structural / stack opcodes: recorded with an empty payload
        MARK | NONE | NEWTRUE | NEWFALSE | EMPTY_DICT | EMPTY_LIST | EMPTY_TUPLE | TUPLE
        | TUPLE1 | TUPLE2 | TUPLE3 | LIST | DICT | SETITEM | SETITEMS | APPEND | APPENDS
        | POP | DUP | REDUCE | BUILD | NEWOBJ | BINPERSID => Ok((0, 0)),

        // 1-byte argument
        BININT1 | BINPUT | BINGET => Ok((0, 1)),

        // 2-byte argument
        BININT2 => Ok((0, 2)),

        // 4-byte argument
        BININT | LONG_BINPUT | LONG_BINGET => Ok((0, 4)),

        // 8-byte argument
        BINFLOAT => Ok((0, 8)),

        // Counted binary data, 1-byte length
        LONG1 | SHORT_BINSTRING | SHORT_BINBYTES => {
            let n = *rest.first().ok_or(DecodeError::UnterminatedStream)?;
            Ok((1, n as usize))
        }

        // Counted binary data, 4-byte little-endian length
        BINUNICODE | BINSTRING | BINBYTES | LONG4 => {
            let n = le_u32(rest).ok_or(DecodeError::UnterminatedStream)?;
            Ok((4, n as usize))
        }

        // Newline-terminated text argument
        INT | LONG | FLOAT | STRING | UNICODE | PUT | GET | PERSID => {
            Ok((0, scan_lines(rest, 1)?))
        }

        // GLOBAL carries TWO newline-terminated lines (module, qualname);
        // both are captured as the payload so the text round-trips
        GLOBAL => Ok((0, scan_lines(rest, 2)?)),

        _ => Err(DecodeError::UnsupportedOpcode(op)),
    }
}

/// Byte count of a newline-terminated field spanning `lines` lines,
/// measured from the start of `rest` and including each line feed.
fn scan_lines(rest: &[u8], lines: usize) -> Result<usize, DecodeError> {
    let mut seen = 0;
    for (i, &b) in rest.iter().enumerate() {
        if b == b'\n' {
            seen += 1;
            if seen == lines {
                return Ok(i + 1);
            }
        }
    }
    Err(DecodeError::UnterminatedStream)
}

// -- Wire integers --
//
// Multi-byte integer fields are little-endian on the wire; the byte order
// is fixed by the pickle format, never by the decoding host.

pub(crate) fn le_u16(bytes: &[u8]) -> Option<u16> {
    let arr: [u8; 2] = bytes.get(..2)?.try_into().ok()?;
    Some(u16::from_le_bytes(arr))
}

pub(crate) fn le_u32(bytes: &[u8]) -> Option<u32> {
    let arr: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(u32::from_le_bytes(arr))
}

pub(crate) fn le_i32(bytes: &[u8]) -> Option<i32> {
    let arr: [u8; 4] = bytes.get(..4)?.try_into().ok()?;
    Some(i32::from_le_bytes(arr))
}
