//! State holder factory port
//!
//! The host framework calls a [`HolderFactory`] whenever a scope needs a new
//! state holder. Instance caching across configuration changes belongs to the
//! host, so implementations create a fresh instance on every call.

use crate::error::Result;
use crate::ports::holder::StateHolder;
use crate::value_objects::Descriptor;

/// Creates state holders on demand
pub trait HolderFactory: Send + Sync {
    /// Create a new instance for `descriptor`
    ///
    /// # Errors
    ///
    /// * [`Error::Configuration`](crate::error::Error::Configuration) when no
    ///   binding matches the descriptor
    /// * [`Error::FactoryInvocation`](crate::error::Error::FactoryInvocation)
    ///   when the selected supplier fails
    fn create(&self, descriptor: &Descriptor) -> Result<Box<dyn StateHolder>>;
}
