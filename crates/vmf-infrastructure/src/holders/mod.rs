//! Built-in state holders
//!
//! | Name | Description |
//! |------|-------------|
//! | `null` | Stateless holder for diagnostics and smoke tests |

pub mod null;

pub use null::NullStateHolder;
