///
/// Legacy Digest
///
/// 16-byte MD5 digest kept only for callers that stored keys derived from it.
/// MD5 is broken as a cryptographic hash; use `sha256` for anything new.
/// Deliberately not re-exported from the crate root.
///

use bytekit_core::ByteBuffer;
use md5::{Digest, Md5};

pub const LEGACY_DIGEST_LEN: usize = 16;

#[deprecated(note = "MD5 is not a secure hash; use bytekit_crypto::sha256")]
pub fn legacy_digest(data: &[u8]) -> ByteBuffer {
    ByteBuffer::from(Md5::digest(data).to_vec())
}

#[deprecated(note = "MD5 is not a secure hash; use bytekit_crypto::sha256_hex")]
pub fn legacy_digest_hex(data: &[u8]) -> String {
    hex::encode(Md5::digest(data))
}
