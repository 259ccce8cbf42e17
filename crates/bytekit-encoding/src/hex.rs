///
/// hex - Hexadecimal Encoding/Decoding
///
/// Provides bytes <-> hex string conversion using the `hex` crate.
/// - to_hex_string(data) -> string: two lowercase digits per byte, no separator or prefix
/// - decode_hex(s) -> bytes: accepts either case, rejects odd length and non-hex characters
///

use bytekit_core::{ByteBuffer, CodecError};

/// Encode bytes to lowercase hexadecimal string
pub fn to_hex_string(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode hexadecimal string to bytes
pub fn decode_hex(s: &str) -> Result<ByteBuffer, CodecError> {
    hex::decode(s).map(ByteBuffer::from).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => {
            CodecError::invalid_encoding(index, format!("invalid hex character {:?}", c))
        }
        hex::FromHexError::OddLength => {
            CodecError::invalid_encoding(s.len().saturating_sub(1), "odd number of hex digits")
        }
        _ => {
            CodecError::invalid_encoding(s.len(), "invalid hex string length")
        }
    })
}
