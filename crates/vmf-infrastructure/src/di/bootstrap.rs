//! Container bootstrap
//!
//! Builds the registry from binding modules and discovered holders, then
//! creates the one factory the container hands out.
//!
//! ## Usage
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! init_logging(&config.logging)?;
//!
//! let container = HolderContainer::build(config, &[&EditorModule])?;
//! let editor = container.provider().get::<EditorHolder>()?;
//! ```

use std::sync::Arc;

use tracing::{info, warn};
use vmf_application::RegistryHolderFactory;
use vmf_application::registry::{HolderRegistry, RegistryBuilder, registered_state_holders};
use vmf_domain::error::Result;
use vmf_domain::ports::HolderFactory;

use super::modules::HolderModule;
use super::provider::HolderProvider;
use crate::config::AppConfig;

/// Owns the configuration, registry and factory for one host
///
/// Constructed explicitly and passed to whatever needs it; there is no
/// global instance.
#[derive(Debug, Clone)]
pub struct HolderContainer {
    config: Arc<AppConfig>,
    registry: Arc<HolderRegistry>,
    factory: Arc<RegistryHolderFactory>,
}

impl HolderContainer {
    /// Build a container
    ///
    /// Module bindings come first, in the order given, followed by the
    /// holders registered in the `STATE_HOLDERS` slice when
    /// `registry.discover` is set. Names listed in `registry.disabled` are
    /// skipped during discovery.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when two bindings share a descriptor.
    pub fn build(config: AppConfig, modules: &[&dyn HolderModule]) -> Result<Self> {
        let mut builder = RegistryBuilder::new();

        for module in modules {
            let before = builder.len();
            builder = module.bind(builder);
            info!(
                module = module.name(),
                bindings = builder.len() - before,
                "Applied holder module"
            );
        }

        if config.registry.discover {
            warn_unknown_disabled(&config);
            let registry_config = &config.registry;
            builder = builder
                .discover_filtered(|entry| !registry_config.is_disabled(entry.descriptor.name()));
        }

        let registry = Arc::new(builder.build()?);
        if registry.is_empty() {
            warn!("Holder registry is empty; every state holder request will fail");
        }

        let factory = Arc::new(RegistryHolderFactory::new(Arc::clone(&registry)));

        info!(holders = registry.len(), "Built holder container");

        Ok(Self {
            config: Arc::new(config),
            registry,
            factory,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registry shared with the factory
    pub fn registry(&self) -> &Arc<HolderRegistry> {
        &self.registry
    }

    /// The container's factory, as the port the host consumes
    pub fn factory(&self) -> Arc<dyn HolderFactory> {
        self.factory.clone()
    }

    /// Typed access over the container's factory
    pub fn provider(&self) -> HolderProvider {
        HolderProvider::new(self.factory())
    }
}

fn warn_unknown_disabled(config: &AppConfig) {
    let registered = registered_state_holders();
    for name in &config.registry.disabled {
        if !registered
            .iter()
            .any(|entry| entry.descriptor.name() == name.as_str())
        {
            warn!(holder = %name, "Disabled state holder is not registered");
        }
    }
}
