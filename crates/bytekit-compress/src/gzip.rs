///
/// gzip - Gzip Stream Codec
///
/// - deflate(data) -> bytes: gzip header + DEFLATE body + CRC-32/ISIZE trailer
/// - inflate(data) -> bytes: verifies header, body and trailer; never returns partial output
///
/// Concatenated members decode to the concatenation of their payloads, as gunzip does.
/// Bytes after the last member that do not form another complete member are an error.
///
/// Output of `inflate` is drained through a scratch buffer of `GzipConfig::chunk_size` bytes
/// and appended to a growing vector, so streams of any size are handled without a fixed
/// output limit other than `GzipConfig::max_output_size`.
///

use std::io::{ErrorKind, Read, Write};

use bytekit_core::{ByteBuffer, CodecError, GzipConfig};
use flate2::Compression;
use flate2::bufread::MultiGzDecoder;
use flate2::write::GzEncoder;

/// Compress bytes into a gzip stream with default settings
pub fn deflate(data: &[u8]) -> Result<ByteBuffer, CodecError> {
    deflate_with(&GzipConfig::default(), data)
}

/// Decompress a gzip stream with default settings
pub fn inflate(data: &[u8]) -> Result<ByteBuffer, CodecError> {
    inflate_with(&GzipConfig::default(), data)
}

/// Compress bytes into a gzip stream using the level and chunk size from `config`
pub fn deflate_with(config: &GzipConfig, data: &[u8]) -> Result<ByteBuffer, CodecError> {
    config
        .validate()
        .map_err(|e| CodecError::CompressionFailure(e.to_string()))?;

    let mut encoder = GzEncoder::new(
        Vec::with_capacity(data.len() / 2 + 32),
        Compression::new(config.level),
    );
    for chunk in data.chunks(config.chunk_size) {
        encoder.write_all(chunk).map_err(compression_failure)?;
    }
    let compressed = encoder.finish().map_err(compression_failure)?;

    tracing::debug!(
        input = data.len(),
        output = compressed.len(),
        level = config.level,
        "gzip deflate complete"
    );
    Ok(ByteBuffer::from(compressed))
}

/// Decompress a gzip stream using the chunk size and output limit from `config`
pub fn inflate_with(config: &GzipConfig, data: &[u8]) -> Result<ByteBuffer, CodecError> {
    config
        .validate()
        .map_err(|e| CodecError::DecompressionFailure(e.to_string()))?;

    if data.is_empty() {
        return Err(decompression_failure("empty input is not a gzip stream"));
    }

    let mut decoder = MultiGzDecoder::new(data);
    let mut scratch = vec![0u8; config.chunk_size];
    let mut out = Vec::with_capacity(initial_capacity(data.len(), config.max_output_size));

    // Ok(0) is only returned once every member's trailer has been read and its
    // CRC-32 and length checked; a stream that runs out early surfaces as an error.
    loop {
        let n = match decoder.read(&mut scratch) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(decompression_failure(describe(&e))),
        };
        if out.len() + n > config.max_output_size {
            return Err(decompression_failure(format!(
                "inflated size exceeds limit of {} bytes",
                config.max_output_size
            )));
        }
        out.extend_from_slice(&scratch[..n]);
    }

    let unread = decoder.into_inner().len();
    if unread > 0 {
        return Err(decompression_failure(format!(
            "{} trailing bytes after gzip stream",
            unread
        )));
    }

    tracing::debug!(input = data.len(), output = out.len(), "gzip inflate complete");
    Ok(ByteBuffer::from(out))
}

fn initial_capacity(input_len: usize, limit: usize) -> usize {
    input_len.saturating_mul(2).min(limit)
}

fn describe(e: &std::io::Error) -> String {
    match e.kind() {
        ErrorKind::UnexpectedEof => "truncated gzip stream".to_string(),
        _ => e.to_string(),
    }
}

fn compression_failure(e: std::io::Error) -> CodecError {
    tracing::warn!(error = %e, "gzip deflate failed");
    CodecError::CompressionFailure(e.to_string())
}

fn decompression_failure(reason: impl Into<String>) -> CodecError {
    let reason = reason.into();
    tracing::warn!(reason = %reason, "gzip inflate failed");
    CodecError::DecompressionFailure(reason)
}
