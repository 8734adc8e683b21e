//! Domain Layer - vmf
//!
//! Core types shared by every other layer:
//!
//! - [`value_objects::Descriptor`]: type tag naming a state holder type
//! - [`ports`]: `StateHolder`, `Supplier` and `HolderFactory` traits
//! - [`error`]: the crate-wide `Error` enum and `Result` alias
//!
//! This crate has no knowledge of registries, configuration or logging.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{BoxError, Error, Result};
pub use ports::{HolderFactory, HolderType, StateHolder, Supplier, SupplierResult};
pub use value_objects::Descriptor;
