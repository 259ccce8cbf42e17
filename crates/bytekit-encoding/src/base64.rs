///
/// base64 - Base64 Encoding/Decoding
///
/// Provides bytes <-> base64 string conversion (RFC 4648) using the `base64` crate.
/// - encode_base64(data) -> string: standard alphabet, `=` padding, no line wrapping
/// - decode_base64(s) -> bytes: strict; whitespace is rejected like any other foreign character
/// - decode_base64_lenient(s) -> bytes: strips ASCII whitespace first, for MIME-wrapped text
///

use base64::{Engine, engine::general_purpose::STANDARD};
use bytekit_core::{ByteBuffer, CodecError};

/// Encode bytes to base64 string
pub fn encode_base64(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a padded base64 string to bytes
pub fn decode_base64(s: &str) -> Result<ByteBuffer, CodecError> {
    decode_stripped(s.as_bytes(), None, s.len())
}

/// Decode base64 after dropping spaces, tabs and line breaks.
/// Reported positions refer to the original text.
pub fn decode_base64_lenient(s: &str) -> Result<ByteBuffer, CodecError> {
    let mut stripped = Vec::with_capacity(s.len());
    let mut origin = Vec::with_capacity(s.len());
    for (i, b) in s.bytes().enumerate() {
        if !b.is_ascii_whitespace() {
            stripped.push(b);
            origin.push(i);
        }
    }
    decode_stripped(&stripped, Some(&origin), s.len())
}

fn decode_stripped(
    data: &[u8],
    origin: Option<&[usize]>,
    text_len: usize,
) -> Result<ByteBuffer, CodecError> {
    let at = |pos: usize| origin.and_then(|o| o.get(pos).copied()).unwrap_or(pos);

    STANDARD.decode(data).map(ByteBuffer::from).map_err(|e| {
        let err = match e {
            base64::DecodeError::InvalidByte(pos, byte) => {
                CodecError::invalid_encoding(at(pos), format!("invalid base64 symbol {:?}", byte as char))
            }
            base64::DecodeError::InvalidLength(len) => {
                CodecError::invalid_encoding(text_len, format!("invalid base64 length {}", len))
            }
            base64::DecodeError::InvalidLastSymbol(pos, byte) => CodecError::invalid_encoding(
                at(pos),
                format!("non-canonical final base64 symbol {:?}", byte as char),
            ),
            base64::DecodeError::InvalidPadding => {
                CodecError::invalid_encoding(text_len, "invalid base64 padding")
            }
        };
        tracing::debug!(error = %err, "base64 decode rejected input");
        err
    })
}

/// Buffer-centric call shape for the base64 codec
pub trait Base64Buffer: Sized {
    fn from_base64(s: &str) -> Result<Self, CodecError>;
    fn to_base64(&self) -> String;
}

impl Base64Buffer for ByteBuffer {
    fn from_base64(s: &str) -> Result<Self, CodecError> {
        decode_base64(s)
    }

    fn to_base64(&self) -> String {
        encode_base64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encode() {
        assert_eq!(encode_base64(b"Hello"), "SGVsbG8=");
        assert_eq!(encode_base64(b"Hi"), "SGk=");
        assert_eq!(encode_base64(b"abc"), "YWJj");
    }

    #[test]
    fn test_base64_encode_empty() {
        assert_eq!(encode_base64(b""), "");
        assert_eq!(decode_base64("").unwrap(), ByteBuffer::new());
    }

    #[test]
    fn test_base64_encode_no_wrapping() {
        let encoded = encode_base64(&[0u8; 200]);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }

    #[test]
    fn test_base64_decode_valid() {
        let decoded = decode_base64("SGVsbG8=").unwrap();
        assert_eq!(decoded, b"Hello".to_vec());
    }

    #[test]
    fn test_base64_decode_invalid() {
        let err = decode_base64("!!!").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_base64_decode_not_base64() {
        let err = decode_base64("not base64!!").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { position: 3, .. }));
    }

    #[test]
    fn test_base64_decode_bad_length() {
        let err = decode_base64("SGVsbG8").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_base64_decode_internal_padding() {
        let err = decode_base64("SG=sbG8=").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_base64_decode_non_canonical_tail() {
        // "SGk=" is canonical for "Hi"; "SGl=" sets trailing bits
        let err = decode_base64("SGl=").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { position: 2, .. }));
    }

    #[test]
    fn test_base64_decode_rejects_whitespace() {
        let err = decode_base64("SGVs\nbG8=").unwrap_err();
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_base64_lenient_strips_whitespace() {
        let decoded = decode_base64_lenient(" SGVs\r\nbG8=\t\n").unwrap();
        assert_eq!(decoded, b"Hello".to_vec());
    }

    #[test]
    fn test_base64_lenient_reports_original_position() {
        let err = decode_base64_lenient("SG\nV*bG8=").unwrap_err();
        assert_eq!(err.position(), Some(4));
    }

    #[test]
    fn test_base64_lenient_still_rejects_bad_padding() {
        let err = decode_base64_lenient("SGVsbG8\n").unwrap_err();
        assert!(matches!(err, CodecError::InvalidEncoding { .. }));
    }

    #[test]
    fn test_base64_buffer_call_shape() {
        let buf = ByteBuffer::from_base64("AAH/").unwrap();
        assert_eq!(buf, vec![0x00u8, 0x01, 0xff]);
        assert_eq!(buf.to_base64(), "AAH/");
    }
}
