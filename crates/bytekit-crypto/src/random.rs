///
/// Secure Random Bytes
///
/// Cryptographically secure random byte generation using OS entropy
/// via the `rand` crate's OsRng.
///
/// `random_bytes(n) -> ByteBuffer` — n bytes, or `RandomGenerationFailure` if the OS source errors
///

use bytekit_core::{ByteBuffer, CodecError};
use rand::RngCore;
use rand::rngs::OsRng;

pub fn random_bytes(len: usize) -> Result<ByteBuffer, CodecError> {
    fill_from(&mut OsRng, len)
}

fn fill_from<R: RngCore>(rng: &mut R, len: usize) -> Result<ByteBuffer, CodecError> {
    let mut buf = vec![0u8; len];
    if len > 0 {
        rng.try_fill_bytes(&mut buf).map_err(|e| {
            tracing::warn!(error = %e, len, "secure random source failed");
            CodecError::RandomGenerationFailure(e.to_string())
        })?;
    }
    Ok(ByteBuffer::from(buf))
}
