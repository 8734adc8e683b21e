//! Registry builder

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use vmf_domain::error::{Error, Result};
use vmf_domain::ports::{Supplier, SupplierResult};
use vmf_domain::value_objects::Descriptor;

use super::entry::{StateHolderEntry, registered_state_holders};
use super::holders::{HolderRegistry, RegistryEntry};

/// Collects descriptor bindings in order and validates them on [`build`](Self::build)
///
/// ```
/// use vmf_application::registry::RegistryBuilder;
/// use vmf_domain::{Descriptor, StateHolder};
///
/// struct Main;
///
/// impl StateHolder for Main {
///     fn descriptor(&self) -> Descriptor {
///         Descriptor::new("main")
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .bind(Descriptor::new("main"), || Ok(Box::new(Main)))
///     .build()
///     .unwrap();
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    entries: Vec<RegistryEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a closure or function as the supplier for `descriptor`
    pub fn bind<F>(self, descriptor: Descriptor, supplier: F) -> Self
    where
        F: Fn() -> SupplierResult + Send + Sync + 'static,
    {
        self.bind_described(descriptor, "", supplier)
    }

    /// Bind a supplier together with a description
    pub fn bind_described<F>(self, descriptor: Descriptor, description: &'static str, supplier: F) -> Self
    where
        F: Fn() -> SupplierResult + Send + Sync + 'static,
    {
        self.bind_supplier(descriptor, description, Arc::new(supplier))
    }

    /// Bind an already shared supplier
    pub fn bind_supplier(
        mut self,
        descriptor: Descriptor,
        description: &'static str,
        supplier: Arc<dyn Supplier>,
    ) -> Self {
        self.entries.push(RegistryEntry {
            descriptor,
            description,
            supplier,
        });
        self
    }

    /// Bind a compile-time registered entry
    pub fn bind_entry(self, entry: &StateHolderEntry) -> Self {
        self.bind_supplier(entry.descriptor, entry.description, Arc::new(entry.factory))
    }

    /// Bind every entry of the `STATE_HOLDERS` slice, sorted by name
    pub fn discover(self) -> Self {
        self.discover_filtered(|_| true)
    }

    /// Bind the `STATE_HOLDERS` entries accepted by `keep`, sorted by name
    pub fn discover_filtered<P>(self, keep: P) -> Self
    where
        P: Fn(&StateHolderEntry) -> bool,
    {
        registered_state_holders()
            .into_iter()
            .filter(|entry| keep(entry))
            .fold(self, |builder, entry| {
                debug!(holder = %entry.descriptor, "Discovered registered state holder");
                builder.bind_entry(entry)
            })
    }

    /// Number of bindings collected so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build the registry
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a descriptor is bound twice.
    pub fn build(self) -> Result<HolderRegistry> {
        let mut index = HashMap::with_capacity(self.entries.len());
        for (position, entry) in self.entries.iter().enumerate() {
            if index.insert(entry.descriptor, position).is_some() {
                return Err(Error::duplicate_binding(entry.descriptor));
            }
        }
        Ok(HolderRegistry::from_parts(self.entries, index))
    }
}
