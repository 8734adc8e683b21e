//! Domain ports
//!
//! | Port | Description |
//! |------|-------------|
//! | [`StateHolder`] | Base capability of produced instances |
//! | [`Supplier`] | Zero-argument instance factory stored in the registry |
//! | [`HolderFactory`] | Entry point the host calls to create instances |

pub mod factory;
pub mod holder;
pub mod supplier;

pub use factory::HolderFactory;
pub use holder::{HolderType, StateHolder};
pub use supplier::{Supplier, SupplierResult};
