//! Null state holder
//!
//! Registered in `STATE_HOLDERS` so every container built with discovery has
//! at least one binding that is known to resolve.

use vmf_application::registry::{STATE_HOLDERS, StateHolderEntry};
use vmf_domain::ports::{HolderType, StateHolder};
use vmf_domain::value_objects::Descriptor;

/// Holder with no state
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStateHolder;

impl StateHolder for NullStateHolder {
    fn descriptor(&self) -> Descriptor {
        Self::DESCRIPTOR
    }
}

impl HolderType for NullStateHolder {
    const DESCRIPTOR: Descriptor = Descriptor::refining("null", &[Descriptor::STATE_HOLDER]);
}

#[linkme::distributed_slice(STATE_HOLDERS)]
static NULL_STATE_HOLDER: StateHolderEntry = StateHolderEntry {
    descriptor: NullStateHolder::DESCRIPTOR,
    description: "Stateless holder for diagnostics and smoke tests",
    factory: || Ok(Box::new(NullStateHolder)),
};
