//! Dependency Injection Wiring
//!
//! Assembles the state holder registry and the single factory instance that
//! the host uses for its whole lifetime.
//!
//! ```text
//! HolderModule::bind ──┐
//!                      ├──► RegistryBuilder ──► HolderRegistry (Arc)
//! STATE_HOLDERS ───────┘                              │
//!   (minus disabled)                                  ▼
//!                                           RegistryHolderFactory
//!                                                     │
//!                                                     ▼
//!                                 HolderContainer ──► HolderProvider::get::<T>()
//! ```
//!
//! **ARCHITECTURE**: This module contains ONLY wiring logic. Lookup and
//! creation rules live in `vmf-application`.

pub mod bootstrap;
pub mod modules;
pub mod provider;

pub use bootstrap::HolderContainer;
pub use modules::HolderModule;
pub use provider::HolderProvider;
