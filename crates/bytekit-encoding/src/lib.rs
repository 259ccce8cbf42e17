///
/// bytekit-encoding - Encoding/Decoding Operations
///
/// This crate converts byte buffers to and from text:
/// - base64: Bytes <-> base64 string conversion
/// - hex: Bytes <-> hex string conversion
///
/// Encoders never fail. Decoders return `CodecError::InvalidEncoding` with the
/// position of the first offending character.
///

pub mod base64;
pub mod hex;

pub use self::base64::*;
pub use self::hex::*;
