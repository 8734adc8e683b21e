//! # vmf
//!
//! A registry-backed factory for state holders: host-managed objects that
//! outlive configuration changes of the scope they belong to.
//!
//! ## Example
//!
//! ```
//! use vmf::application::HolderRegistry;
//! use vmf::application::RegistryHolderFactory;
//! use vmf::{Descriptor, HolderFactory, StateHolder};
//! use std::sync::Arc;
//!
//! const SCREEN: Descriptor = Descriptor::new("screen");
//! const EDITOR: Descriptor = Descriptor::refining("editor", &[SCREEN]);
//!
//! struct Screen;
//!
//! impl StateHolder for Screen {
//!     fn descriptor(&self) -> Descriptor {
//!         SCREEN
//!     }
//! }
//!
//! let registry = HolderRegistry::builder()
//!     .bind(SCREEN, || Ok(Box::new(Screen)))
//!     .build()
//!     .unwrap();
//! let factory = RegistryHolderFactory::new(Arc::new(registry));
//!
//! // No binding for EDITOR, so the broader SCREEN binding serves it
//! let holder = factory.create(&EDITOR).unwrap();
//! assert_eq!(holder.descriptor(), SCREEN);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - descriptors, ports and errors
//! - `application` - registry and the registry-backed factory
//! - `infrastructure` - configuration, logging, container wiring
//! - `cli` - the `vmf` command line

pub mod cli;

/// Domain layer - descriptors, ports and errors
pub mod domain {
    pub use vmf_domain::*;
}

/// Application layer - registry and factory
pub mod application {
    pub use vmf_application::*;
}

/// Infrastructure layer - config, logging and DI
pub mod infrastructure {
    pub use vmf_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export container types for convenience
pub use infrastructure::{HolderContainer, HolderModule, HolderProvider};
