//! Zero-argument state holder suppliers

use crate::error::BoxError;
use crate::ports::holder::StateHolder;

/// Outcome of a single supplier invocation
pub type SupplierResult = std::result::Result<Box<dyn StateHolder>, BoxError>;

/// Zero-argument factory producing one state holder per call
///
/// Closures and `fn` pointers returning [`SupplierResult`] are suppliers.
pub trait Supplier: Send + Sync {
    /// Produce a new instance, transferring ownership to the caller
    fn get(&self) -> SupplierResult;
}

impl<F> Supplier for F
where
    F: Fn() -> SupplierResult + Send + Sync,
{
    fn get(&self) -> SupplierResult {
        self()
    }
}
