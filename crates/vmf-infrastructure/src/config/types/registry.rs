//! Registry assembly configuration types

use serde::{Deserialize, Serialize};

/// Controls which bindings a container's registry receives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Bind holders registered in the `STATE_HOLDERS` slice
    pub discover: bool,

    /// Names of registered holders to leave out of discovery
    pub disabled: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            discover: true,
            disabled: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Whether the registered holder `name` is excluded from discovery
    pub fn is_disabled(&self, name: &str) -> bool {
        self.disabled.iter().any(|disabled| disabled == name)
    }
}
