//! Binding modules
//!
//! A module groups the explicit bindings one feature contributes to the
//! registry. Modules are applied in the order they are passed to
//! [`HolderContainer::build`](super::HolderContainer::build), and that order
//! is the registry order used for broader-type fallback.

use vmf_application::registry::RegistryBuilder;

/// Contributes descriptor bindings to a registry
///
/// # Example
///
/// ```ignore
/// struct EditorModule;
///
/// impl HolderModule for EditorModule {
///     fn name(&self) -> &'static str {
///         "editor"
///     }
///
///     fn bind(&self, builder: RegistryBuilder) -> RegistryBuilder {
///         builder.bind(EditorHolder::DESCRIPTOR, || Ok(Box::new(EditorHolder::default())))
///     }
/// }
/// ```
pub trait HolderModule: Send + Sync {
    /// Module name for diagnostics
    fn name(&self) -> &'static str;

    /// Add this module's bindings to `builder`
    fn bind(&self, builder: RegistryBuilder) -> RegistryBuilder;
}
