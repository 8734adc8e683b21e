//! Application Layer - vmf
//!
//! Orchestrates the domain ports:
//!
//! - [`registry`]: descriptor → supplier bindings, built explicitly or
//!   discovered from the `STATE_HOLDERS` distributed slice
//! - [`factory`]: [`RegistryHolderFactory`], the `HolderFactory`
//!   implementation backed by a registry
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `vmf-domain`: descriptors, ports and errors
//! - `tracing` and `linkme`

pub mod factory;
pub mod registry;

pub use factory::RegistryHolderFactory;
pub use registry::{HolderRegistry, Match, RegistryBuilder, RegistryEntry, StateHolderEntry};
