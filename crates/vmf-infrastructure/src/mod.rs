//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the state holder factory.
//!
//! ## Module Categories
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`di`] | Container bootstrap, binding modules, typed provider |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Holders
//! | Module | Description |
//! |--------|-------------|
//! | [`holders`] | Built-in holders registered at compile time |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod holders;
pub mod logging;

// Re-export commonly used types
pub use di::{HolderContainer, HolderModule, HolderProvider};
pub use error_ext::ErrorContext;
