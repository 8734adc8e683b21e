//! Compile-time state holder registration
//!
//! Crates contribute state holders by adding a [`StateHolderEntry`] to the
//! [`STATE_HOLDERS`] distributed slice. The slice is read when a registry is
//! built with [`RegistryBuilder::discover`](super::RegistryBuilder::discover).

use vmf_domain::ports::SupplierResult;
use vmf_domain::value_objects::Descriptor;

/// Registry entry for compile-time registered state holders
///
/// ```ignore
/// use vmf_application::registry::{STATE_HOLDERS, StateHolderEntry};
///
/// #[linkme::distributed_slice(STATE_HOLDERS)]
/// static MAIN_HOLDER: StateHolderEntry = StateHolderEntry {
///     descriptor: MainHolder::DESCRIPTOR,
///     description: "Main screen state",
///     factory: || Ok(Box::new(MainHolder::default())),
/// };
/// ```
pub struct StateHolderEntry {
    /// Registry key of the produced type
    pub descriptor: Descriptor,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function producing a new instance
    pub factory: fn() -> SupplierResult,
}

/// Auto-collection via linkme distributed slices
#[linkme::distributed_slice]
pub static STATE_HOLDERS: [StateHolderEntry] = [..];

/// Registered entries sorted by descriptor name
///
/// Link order of distributed slices is unspecified, so every consumer reads
/// the slice through this function to get a stable order.
pub fn registered_state_holders() -> Vec<&'static StateHolderEntry> {
    let mut entries: Vec<&'static StateHolderEntry> = STATE_HOLDERS.iter().collect();
    entries.sort_by_key(|entry| entry.descriptor.name());
    entries
}

/// List all registered state holders
///
/// Returns `(name, description)` pairs sorted by name. Useful for CLI help
/// and diagnostics.
pub fn list_state_holders() -> Vec<(&'static str, &'static str)> {
    registered_state_holders()
        .into_iter()
        .map(|entry| (entry.descriptor.name(), entry.description))
        .collect()
}
