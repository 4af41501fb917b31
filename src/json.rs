use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serialize;
use serde_json::Value;

use crate::decode::{le_i32, le_u16, le_u32};
use crate::opcodes;
use crate::types::{Frame, PickleStream};

/// JSON view of one frame. Payloads render as `text` when they are valid
/// UTF-8 and as `{"@b": <base64>}`-style blobs otherwise; the fixed-width
/// integer and float opcodes additionally render their decoded `value`.
#[derive(Serialize)]
struct FrameRepr {
    op: String,
    size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "@b", skip_serializing_if = "Option::is_none")]
    blob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

#[derive(Serialize)]
struct StreamRepr {
    protocol: u8,
    total_length: usize,
    frames: Vec<FrameRepr>,
}

/// Render a tokenized stream as a JSON value:
/// `{"protocol": .., "total_length": .., "frames": [..]}`.
pub fn stream_to_json(stream: &PickleStream) -> Value {
    let repr = StreamRepr {
        protocol: stream.protocol,
        total_length: stream.total_length,
        frames: stream.frames.iter().map(frame_repr).collect(),
    };
    serde_json::to_value(repr).unwrap_or(Value::Null)
}

fn frame_repr(frame: &Frame) -> FrameRepr {
    let op = match opcodes::name(frame.opcode) {
        Some(name) => name.to_string(),
        None => format!("0x{:02x}", frame.opcode),
    };
    let mut repr = FrameRepr {
        op,
        size: frame.payload_len(),
        text: None,
        blob: None,
        value: None,
    };

    match frame.opcode {
        opcodes::BININT1 | opcodes::BINPUT | opcodes::BINGET => {
            repr.value = frame.payload.first().map(|&b| Value::from(b));
        }
        opcodes::BININT2 => {
            repr.value = le_u16(&frame.payload).map(Value::from);
        }
        opcodes::BININT => {
            repr.value = le_i32(&frame.payload).map(Value::from);
        }
        opcodes::LONG_BINPUT | opcodes::LONG_BINGET => {
            repr.value = le_u32(&frame.payload).map(Value::from);
        }
        opcodes::BINFLOAT => {
            // BINFLOAT is the one big-endian field in the format
            let bytes: Option<[u8; 8]> =
                frame.payload.get(..8).and_then(|b| b.try_into().ok());
            repr.value = bytes.map(|b| Value::from(f64::from_be_bytes(b)));
        }
        _ if frame.payload.is_empty() => {}
        _ => match std::str::from_utf8(&frame.payload) {
            Ok(s) => repr.text = Some(s.to_string()),
            Err(_) => repr.blob = Some(BASE64.encode(&frame.payload)),
        },
    }
    repr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_from_bytes;

    #[test]
    fn test_stream_shape() {
        let data = b"\x80\x03X\x0c\x00\x00\x00hello world!q\x00.";
        let stream = decode_from_bytes(data).unwrap();
        let json = stream_to_json(&stream);

        assert_eq!(json["protocol"], 3);
        assert_eq!(json["total_length"], 22);
        assert_eq!(json["frames"].as_array().unwrap().len(), 2);

        assert_eq!(json["frames"][0]["op"], "BINUNICODE");
        assert_eq!(json["frames"][0]["size"], 12);
        assert_eq!(json["frames"][0]["text"], "hello world!");

        assert_eq!(json["frames"][1]["op"], "BINPUT");
        assert_eq!(json["frames"][1]["value"], 0);
    }

    #[test]
    fn test_integer_values() {
        let data = b"\x80\x02M\xe9\x03J\xff\xff\xff\xff.";
        let stream = decode_from_bytes(data).unwrap();
        let json = stream_to_json(&stream);

        assert_eq!(json["frames"][0]["op"], "BININT2");
        assert_eq!(json["frames"][0]["value"], 1001);
        assert_eq!(json["frames"][1]["op"], "BININT");
        assert_eq!(json["frames"][1]["value"], -1);
    }

    #[test]
    fn test_binary_payload_is_base64() {
        // LONG1 payload is arbitrary bytes, not UTF-8
        let data = b"\x80\x02\x8a\x0a\x6c\xfc\x9c\x46\xf9\x20\x6a\xa8\x50\x19.";
        let stream = decode_from_bytes(data).unwrap();
        let json = stream_to_json(&stream);

        assert_eq!(json["frames"][0]["op"], "LONG1");
        assert_eq!(json["frames"][0]["size"], 10);
        let blob = json["frames"][0]["@b"].as_str().unwrap();
        assert_eq!(BASE64.decode(blob).unwrap(), stream.frames[0].payload);
        assert!(json["frames"][0].get("text").is_none());
    }

    #[test]
    fn test_structural_frames_render_bare() {
        let data = b"\x80\x02}(u.";
        let stream = decode_from_bytes(data).unwrap();
        let json = stream_to_json(&stream);

        for frame in json["frames"].as_array().unwrap() {
            assert_eq!(frame["size"], 0);
            assert!(frame.get("text").is_none());
            assert!(frame.get("@b").is_none());
            assert!(frame.get("value").is_none());
        }
    }
}
