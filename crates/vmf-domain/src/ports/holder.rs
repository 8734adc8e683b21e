//! State holder port
//!
//! A state holder is a host-managed object that survives configuration
//! changes of the scope it belongs to. Instances are produced by suppliers and
//! handed to callers as `Box<dyn StateHolder>`; typed access goes through
//! [`HolderType`] and the downcasting support from `downcast-rs`.

use downcast_rs::{DowncastSync, impl_downcast};

use crate::value_objects::Descriptor;

/// Base capability of every state holder
pub trait StateHolder: DowncastSync {
    /// Descriptor of the concrete type of this instance
    fn descriptor(&self) -> Descriptor;
}

impl_downcast!(sync StateHolder);

/// A concrete state holder type with a statically known descriptor
///
/// # Example
///
/// ```
/// use vmf_domain::ports::{HolderType, StateHolder};
/// use vmf_domain::value_objects::Descriptor;
///
/// struct Counter;
///
/// impl StateHolder for Counter {
///     fn descriptor(&self) -> Descriptor {
///         Self::DESCRIPTOR
///     }
/// }
///
/// impl HolderType for Counter {
///     const DESCRIPTOR: Descriptor = Descriptor::new("counter");
/// }
/// ```
pub trait HolderType: StateHolder + Sized {
    /// Registry key for this type
    const DESCRIPTOR: Descriptor;
}
