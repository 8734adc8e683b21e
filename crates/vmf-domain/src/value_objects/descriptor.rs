//! State holder descriptors
//!
//! A [`Descriptor`] names a state holder type by a stable string tag and lists
//! the broader capability sets it refines. Registry lookups compare tags only,
//! so no runtime type introspection is involved.
//!
//! ```
//! use vmf_domain::value_objects::Descriptor;
//!
//! const SCREEN: Descriptor = Descriptor::new("screen");
//! const MAIN: Descriptor = Descriptor::refining("main", &[SCREEN]);
//!
//! assert!(MAIN.satisfies(&SCREEN));
//! assert!(!SCREEN.satisfies(&MAIN));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier of a state holder type and the capability sets it refines
#[derive(Clone, Copy)]
pub struct Descriptor {
    name: &'static str,
    refines: &'static [Descriptor],
}

impl Descriptor {
    /// Root descriptor every state holder type may refine
    pub const STATE_HOLDER: Descriptor = Descriptor::new("state_holder");

    /// Create a descriptor that refines nothing
    pub const fn new(name: &'static str) -> Self {
        Self { name, refines: &[] }
    }

    /// Create a descriptor refining the given broader descriptors
    pub const fn refining(name: &'static str, refines: &'static [Descriptor]) -> Self {
        Self { name, refines }
    }

    /// Stable type tag
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Directly refined descriptors, in declaration order
    pub const fn refines(&self) -> &'static [Descriptor] {
        self.refines
    }

    /// Whether this descriptor equals `broader` or transitively refines it
    pub fn satisfies(&self, broader: &Descriptor) -> bool {
        self == broader || self.refines.iter().any(|parent| parent.satisfies(broader))
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("name", &self.name)
            .field(
                "refines",
                &self.refines.iter().map(Descriptor::name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
