///
/// Logging Setup
///
/// Library crates only emit `tracing` events. Hosts that want to see them call
/// `init_logging` once; events go to stderr without ANSI colors.
///

use std::ffi::{CStr, c_char};

use bytekit_core::{ConfigError, LoggingConfig};

/// Install the global subscriber.
/// Returns `Ok(false)` if a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, ConfigError> {
    let level = config.level()?;
    let installed = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Install the global subscriber at the given level ("error" .. "trace").
/// A null level uses the default. Returns 1 if installed, 0 if already
/// installed, -1 on an unknown level.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytekit_init_logging(level: *const c_char) -> i32 {
    let mut config = LoggingConfig::default();
    if !level.is_null() {
        let raw = unsafe { CStr::from_ptr(level) };
        config.level = raw.to_string_lossy().into_owned();
    }
    match init_logging(&config) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => -1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_level_rejected() {
        let config = LoggingConfig {
            level: "chatty".to_string(),
        };
        assert!(init_logging(&config).is_err());
        unsafe {
            assert_eq!(bytekit_init_logging(c"chatty".as_ptr()), -1);
        }
    }

    #[test]
    fn test_second_init_is_noop() {
        let config = LoggingConfig {
            level: "debug".to_string(),
        };
        // Another test may have installed the subscriber first
        let _ = init_logging(&config).unwrap();
        assert!(!init_logging(&config).unwrap());
        unsafe {
            assert_eq!(bytekit_init_logging(std::ptr::null()), 0);
        }
    }
}
