///
/// # Configuration
///
/// Settings for the transforms that have tunable behavior, loaded from a TOML document.
/// Every field has a default, so an empty document (or no document at all) is valid.
///
/// ## Example bytekit.toml
///
/// ```toml
/// [gzip]
/// level = 6
/// chunk_size = 16384
/// max_output_size = 536870912
///
/// [logging]
/// level = "debug"
/// ```
///
/// `gzip.chunk_size` bounds the scratch buffer used while draining the decompressor, and
/// `gzip.max_output_size` caps the inflated size so a small hostile stream cannot exhaust
/// memory.
///

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_COMPRESSION_LEVEL: u32 = 6;
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;
pub const DEFAULT_MAX_OUTPUT_SIZE: usize = 512 * 1024 * 1024;
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CodecConfig {
    pub gzip: GzipConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GzipConfig {
    pub level: u32,
    pub chunk_size: usize,
    pub max_output_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for GzipConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_COMPRESSION_LEVEL,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_output_size: DEFAULT_MAX_OUTPUT_SIZE,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl GzipConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level > MAX_COMPRESSION_LEVEL {
            return Err(ConfigError::Invalid(format!(
                "gzip.level must be between 0 and {}, got {}",
                MAX_COMPRESSION_LEVEL, self.level
            )));
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "gzip.chunk_size must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.level.trim()).map_err(|_| {
            ConfigError::Invalid(format!("unknown logging.level '{}'", self.level))
        })
    }
}

impl CodecConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CodecConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Render as a TOML document accepted by `from_toml_str`
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gzip.validate()?;
        self.logging.level()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.gzip.level, 6);
        assert_eq!(config.gzip.chunk_size, 16 * 1024);
        assert_eq!(config.gzip.max_output_size, 512 * 1024 * 1024);
        assert_eq!(config.logging.level().unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = CodecConfig::from_toml_str("").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = CodecConfig::from_toml_str(
            r#"
[gzip]
level = 9

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.gzip.level, 9);
        assert_eq!(config.gzip.chunk_size, DEFAULT_CHUNK_SIZE);
        assert_eq!(config.logging.level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_rejects_out_of_range_level() {
        let err = CodecConfig::from_toml_str("[gzip]\nlevel = 12\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("gzip.level"));
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let err = CodecConfig::from_toml_str("[gzip]\nchunk_size = 0\n").unwrap_err();
        assert!(err.to_string().contains("chunk_size"));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let err = CodecConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = CodecConfig::from_toml_str("[gzip\nlevel = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gzip]\nchunk_size = 1024").unwrap();
        let config = CodecConfig::load(file.path()).unwrap();
        assert_eq!(config.gzip.chunk_size, 1024);
    }

    #[test]
    fn test_toml_string_roundtrip() {
        let config = CodecConfig {
            gzip: GzipConfig {
                level: 1,
                chunk_size: 512,
                max_output_size: 1 << 20,
            },
            logging: LoggingConfig {
                level: "trace".to_string(),
            },
        };
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[gzip]"));
        assert!(rendered.contains("chunk_size = 512"));
        assert!(rendered.contains("[logging]"));
        assert_eq!(CodecConfig::from_toml_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_default_renders_and_reloads() {
        let rendered = CodecConfig::default().to_toml_string().unwrap();
        assert_eq!(CodecConfig::from_toml_str(&rendered).unwrap(), CodecConfig::default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = CodecConfig::load(&dir.path().join("bytekit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
