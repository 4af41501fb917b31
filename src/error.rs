use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DecodeError {
    /// Buffer too short for the 2-byte header, or missing the 0x80 start marker
    Format(String),
    /// Opcode outside the scanner's deliberately partial table
    UnsupportedOpcode(u8),
    /// Input exhausted before the STOP terminator was seen
    UnterminatedStream,
    /// File could not be read (path-based entry point only)
    Io(io::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Format(msg) => write!(f, "malformed pickle header: {msg}"),
            DecodeError::UnsupportedOpcode(op) => {
                write!(f, "unsupported pickle opcode: 0x{op:02x}")
            }
            DecodeError::UnterminatedStream => {
                write!(f, "pickle stream ended before STOP terminator")
            }
            DecodeError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Io(err)
    }
}
