///
/// Error types.
///
/// `CodecError` covers every failure a transform can report: malformed text input,
/// compressor and decompressor errors, and an unavailable secure random source.
/// `ConfigError` covers loading and validating `CodecConfig`.
///

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid encoding at position {position}: {reason}")]
    InvalidEncoding { position: usize, reason: String },

    #[error("Compression failed: {0}")]
    CompressionFailure(String),

    #[error("Decompression failed: {0}")]
    DecompressionFailure(String),

    #[error("Random generation failed: {0}")]
    RandomGenerationFailure(String),
}

impl CodecError {
    pub fn invalid_encoding(position: usize, reason: impl Into<String>) -> Self {
        CodecError::InvalidEncoding {
            position,
            reason: reason.into(),
        }
    }

    /// Offending position for encoding errors, `None` otherwise
    pub fn position(&self) -> Option<usize> {
        match self {
            CodecError::InvalidEncoding { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config not found at {path}")]
    NotFound { path: PathBuf },

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
