//! Typed state holder access
//!
//! Wraps a [`HolderFactory`] so callers can ask for a concrete type instead
//! of a descriptor and receive it already downcast.

use std::fmt;
use std::sync::Arc;

use vmf_domain::error::{Error, Result};
use vmf_domain::ports::{HolderFactory, HolderType, StateHolder};
use vmf_domain::value_objects::Descriptor;

/// Typed front end over a shared factory
#[derive(Clone)]
pub struct HolderProvider {
    factory: Arc<dyn HolderFactory>,
}

impl HolderProvider {
    pub fn new(factory: Arc<dyn HolderFactory>) -> Self {
        Self { factory }
    }

    /// Create an untyped instance for `descriptor`
    pub fn create(&self, descriptor: &Descriptor) -> Result<Box<dyn StateHolder>> {
        self.factory.create(descriptor)
    }

    /// Create an instance of `T`
    ///
    /// # Errors
    ///
    /// Besides the factory's errors, returns
    /// [`Error::HolderTypeMismatch`] when the binding serving
    /// `T::DESCRIPTOR` produces a different concrete type, which happens when
    /// `T` resolves through a broader binding.
    pub fn get<T: HolderType>(&self) -> Result<Box<T>> {
        let holder = self.factory.create(&T::DESCRIPTOR)?;
        holder
            .downcast::<T>()
            .map_err(|other| Error::holder_type_mismatch(T::DESCRIPTOR, other.descriptor()))
    }
}

impl fmt::Debug for HolderProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolderProvider").finish_non_exhaustive()
    }
}
