///
/// bytekit-crypto - Cryptographic Operations
///
/// Provides cryptographic helpers over byte buffers using the RustCrypto ecosystem:
///
/// - **Hashing**: SHA-1, SHA-224, SHA-256 (raw bytes + hex string variants)
/// - **Legacy**: MD5 digest for callers that predate the SHA family; deprecated
/// - **Random**: Cryptographically secure random byte generation
///
/// Digests are for identity and integrity checks. Nothing here is constant-time.
///

pub mod hash;
pub mod legacy;
pub mod random;

pub use hash::*;
pub use random::*;
