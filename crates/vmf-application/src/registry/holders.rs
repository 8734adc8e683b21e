//! Read-only state holder registry

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use vmf_domain::ports::Supplier;
use vmf_domain::value_objects::Descriptor;

use super::builder::RegistryBuilder;

/// How a registry entry was selected for a requested descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    /// The entry key equals the requested descriptor
    Exact,
    /// The requested descriptor refines the entry key
    Broader,
}

/// A single descriptor binding
#[derive(Clone)]
pub struct RegistryEntry {
    pub(crate) descriptor: Descriptor,
    pub(crate) description: &'static str,
    pub(crate) supplier: Arc<dyn Supplier>,
}

impl RegistryEntry {
    /// Registry key
    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    /// Human-readable description, empty when none was given
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Supplier bound to this key
    pub fn supplier(&self) -> &dyn Supplier {
        self.supplier.as_ref()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("descriptor", &self.descriptor.name())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Mapping from descriptor to supplier
///
/// Entries keep the order they were bound in. That order decides which entry
/// wins when several broader keys match a descriptor.
pub struct HolderRegistry {
    entries: Vec<RegistryEntry>,
    index: HashMap<Descriptor, usize>,
}

impl HolderRegistry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// A registry without bindings
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Caller guarantees `index` maps every key to its position in `entries`.
    pub(crate) fn from_parts(entries: Vec<RegistryEntry>, index: HashMap<Descriptor, usize>) -> Self {
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `descriptor` has an exact binding
    pub fn contains(&self, descriptor: &Descriptor) -> bool {
        self.index.contains_key(descriptor)
    }

    /// All entries in registry order
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entry bound to exactly `descriptor`
    pub fn find_exact(&self, descriptor: &Descriptor) -> Option<&RegistryEntry> {
        self.index.get(descriptor).map(|&position| &self.entries[position])
    }

    /// First entry, in registry order, whose key `descriptor` satisfies
    pub fn find_broader(&self, descriptor: &Descriptor) -> Option<&RegistryEntry> {
        self.entries
            .iter()
            .find(|entry| descriptor.satisfies(&entry.descriptor))
    }

    /// Select the entry serving `descriptor`: exact binding first, then the
    /// first broader binding
    pub fn lookup(&self, descriptor: &Descriptor) -> Option<(&RegistryEntry, Match)> {
        if let Some(entry) = self.find_exact(descriptor) {
            return Some((entry, Match::Exact));
        }
        self.find_broader(descriptor)
            .map(|entry| (entry, Match::Broader))
    }

    /// Registry key with the given tag
    pub fn descriptor_named(&self, name: &str) -> Option<Descriptor> {
        self.entries
            .iter()
            .map(RegistryEntry::descriptor)
            .find(|descriptor| descriptor.name() == name)
    }
}

impl fmt::Debug for HolderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|entry| entry.descriptor.name()))
            .finish()
    }
}
