//!
//! bytekit-core - Core Types
//!
//! This crate provides the fundamental types shared across all bytekit crates:
//!
//! - `ByteBuffer` for immutable, cheaply cloned byte sequences
//! - `CodecError` for failures reported by encoders, decoders, compressors and the random source
//! - `CodecConfig` for gzip and logging settings, loadable from TOML
//!
//! Every transform in the workspace is a pure function over `&[u8]`; buffers are values,
//! not resources, and are safe to share across threads.
//!

pub mod bytes;
pub mod config;
pub mod error;

pub use bytes::*;
pub use config::*;
pub use error::*;
