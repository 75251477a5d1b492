//! Run configuration with documented defaults
//!
//! There are no config files or flags. Everything the binary can tune lives
//! here with its default value.

use crate::core::error::{BeingError, Result};
use tracing_subscriber::EnvFilter;

/// Configuration for a demo run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directive string handed to the tracing filter
    ///
    /// Diagnostics are written to stderr, so raising this to `debug` or
    /// `trace` never changes what lands on stdout.
    pub log_filter: String,

    /// Whether narrated lines are echoed to stdout
    pub echo_to_stdout: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_filter: "living_beings=warn".to_string(),
            echo_to_stdout: true,
        }
    }
}

impl RunConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(BeingError::InvalidConfig("log_filter must not be empty".into()));
        }

        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            BeingError::InvalidConfig(format!("log_filter {:?}: {}", self.log_filter, e))
        })?;

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RunConfig> = OnceLock::new();

/// Get the global run config (initializes with defaults if not set)
pub fn config() -> &'static RunConfig {
    CONFIG.get_or_init(RunConfig::default)
}

/// Set the global run config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RunConfig) -> std::result::Result<(), RunConfig> {
    CONFIG.set(config)
}
