//! # Config stage
//!
//! First stage of a request: load the application config named by a
//! resource identifier. Failures are always a [`ConfigError`] so callers can
//! recover the operation and file regardless of what went wrong underneath.

use crate::markers;
use errchain_error::{ConfigError, Message, Wrapped, PATH_DOES_NOT_EXIST};
use tracing::{debug, info};

/// Source of application configs
pub trait ConfigSource {
    fn load(&self, resource: &str) -> Result<(), ConfigError>;
}

/// Config source that fails on the reserved markers and accepts anything else
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedConfig;

impl ConfigSource for SimulatedConfig {
    fn load(&self, resource: &str) -> Result<(), ConfigError> {
        load_app_config(resource)
    }
}

/// Load the config at `resource`.
///
/// - [`markers::MISSING_CONFIG`] fails in `open file` with
///   `PATH_DOES_NOT_EXIST` under a `failed to open` wrap
/// - [`markers::INVALID_CONFIG`] fails in `parse content` with a plain
///   `invalid JSON structure` message
/// - anything else loads
pub fn load_app_config(resource: &str) -> Result<(), ConfigError> {
    debug!(resource, "loading config");

    match resource {
        markers::MISSING_CONFIG => Err(ConfigError::new(
            resource,
            "open file",
            Wrapped::new("failed to open", &PATH_DOES_NOT_EXIST),
        )),
        markers::INVALID_CONFIG => Err(ConfigError::new(
            resource,
            "parse content",
            Message::new("invalid JSON structure"),
        )),
        _ => {
            info!(resource, "Successfully loaded config");
            Ok(())
        }
    }
}
