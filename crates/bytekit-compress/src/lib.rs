///
/// bytekit-compress - Compression Operations
///
/// Gzip-framed DEFLATE over whole buffers, backed by `flate2`.
///
/// Compressor and decompressor state lives only for the duration of one call and is
/// released by drop on every exit path, including errors.
///

pub mod gzip;

pub use gzip::*;
