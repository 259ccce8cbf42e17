///
/// bytekit Runtime Library
///
/// Bundles every bytekit crate for host applications. This crate produces a static
/// library (libbytekit_runtime.a) with a C ABI and also re-exports the Rust API.
///
/// Contains:
/// - Buffer handles (bytekit_bytes_from, bytekit_bytes_len, bytekit_bytes_free, etc.)
/// - Codec entry points (bytekit_base64_encode, bytekit_gzip_inflate, bytekit_sha256, etc.)
/// - Logging setup (init_logging, bytekit_init_logging)
///

mod bytes;
mod codec;
pub mod logging;

pub use bytekit_core::*;
pub use bytekit_encoding::*;
pub use bytekit_compress::*;
pub use bytekit_crypto::*;

pub use bytes::*;
pub use codec::*;
pub use logging::init_logging;
