//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vmf.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vmf";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VMF";

/// Separator between prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "VMF_LOG";

/// Fallback log file stem when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "vmf";
