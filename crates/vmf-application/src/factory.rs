//! Registry-backed state holder factory
//!
//! Bridges a [`HolderRegistry`] to the [`HolderFactory`] port the host calls.
//!
//! ```text
//! create(descriptor)
//!        │
//!        ▼
//! exact binding? ──yes──┐
//!        │ no           │
//!        ▼              │
//! first broader  ──yes──┤
//! binding?              │
//!        │ no           ▼
//!        ▼        supplier.get()
//! Configuration         │
//! error          ok ────┴──── err
//!                 │            │
//!                 ▼            ▼
//!             instance   FactoryInvocation
//! ```

use std::sync::Arc;

use tracing::{debug, error, warn};
use vmf_domain::error::{Error, Result};
use vmf_domain::ports::{HolderFactory, StateHolder};
use vmf_domain::value_objects::Descriptor;

use crate::registry::HolderRegistry;

/// Creates state holders from the suppliers of a shared registry
///
/// Every call invokes a supplier; caching instances is the host's concern.
#[derive(Debug, Clone)]
pub struct RegistryHolderFactory {
    registry: Arc<HolderRegistry>,
}

impl RegistryHolderFactory {
    pub fn new(registry: Arc<HolderRegistry>) -> Self {
        Self { registry }
    }

    /// Registry this factory reads from
    pub fn registry(&self) -> &Arc<HolderRegistry> {
        &self.registry
    }
}

impl HolderFactory for RegistryHolderFactory {
    fn create(&self, descriptor: &Descriptor) -> Result<Box<dyn StateHolder>> {
        let Some((entry, matched)) = self.registry.lookup(descriptor) else {
            warn!(holder = %descriptor, "No binding matches requested state holder");
            return Err(Error::unknown_holder(descriptor));
        };

        debug!(
            holder = %descriptor,
            binding = %entry.descriptor(),
            matched = ?matched,
            "Creating state holder"
        );

        entry.supplier().get().map_err(|source| {
            error!(holder = %descriptor, error = %source, "State holder supplier failed");
            Error::factory_invocation(descriptor, source)
        })
    }
}
