//! Main application configuration

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::registry::RegistryConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Registry assembly configuration
    pub registry: RegistryConfig,
}
