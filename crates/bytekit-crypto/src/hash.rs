///
/// Hashing Functions
///
/// SHA-1, SHA-224 and SHA-256 with both raw byte and hex string output.
/// Uses the RustCrypto digest crates (sha1, sha2).
///
/// Each algorithm has two variants:
/// - `<algo>(data) -> ByteBuffer` — raw digest bytes
/// - `<algo>_hex(data) -> String` — lowercase hex-encoded digest string
///

use bytekit_core::ByteBuffer;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256};

pub const SHA1_LEN: usize = 20;
pub const SHA224_LEN: usize = 28;
pub const SHA256_LEN: usize = 32;

fn digest_of<D: Digest>(data: &[u8]) -> ByteBuffer {
    ByteBuffer::from(D::digest(data).to_vec())
}

fn digest_hex_of<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

pub fn sha1(data: &[u8]) -> ByteBuffer {
    digest_of::<Sha1>(data)
}

pub fn sha1_hex(data: &[u8]) -> String {
    digest_hex_of::<Sha1>(data)
}

pub fn sha224(data: &[u8]) -> ByteBuffer {
    digest_of::<Sha224>(data)
}

pub fn sha224_hex(data: &[u8]) -> String {
    digest_hex_of::<Sha224>(data)
}

pub fn sha256(data: &[u8]) -> ByteBuffer {
    digest_of::<Sha256>(data)
}

pub fn sha256_hex(data: &[u8]) -> String {
    digest_hex_of::<Sha256>(data)
}
