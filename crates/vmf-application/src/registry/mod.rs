//! State Holder Registry
//!
//! Maps descriptors to the suppliers that produce state holders. Bindings come
//! from two places: explicit [`RegistryBuilder::bind`] calls and entries
//! registered at compile time in the [`STATE_HOLDERS`] distributed slice.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    State Holder Binding Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Crate defines:     #[linkme::distributed_slice(STATE_HOLDERS)]
//! │                        static ENTRY: StateHolderEntry = ...     │
//! │                              ↓                                  │
//! │  2. Builder collects:  RegistryBuilder::bind(..) / discover()   │
//! │                              ↓                                  │
//! │  3. build():           duplicate keys rejected                  │
//! │                              ↓                                  │
//! │  4. Factory queries:   lookup(descriptor) → exact or broader    │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod builder;
pub mod entry;
pub mod holders;

pub use builder::RegistryBuilder;
pub use entry::{STATE_HOLDERS, StateHolderEntry, list_state_holders, registered_state_holders};
pub use holders::{HolderRegistry, Match, RegistryEntry};
