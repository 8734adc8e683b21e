//! Tests for container bootstrap

use vmf_domain::ports::HolderType;
use vmf_infrastructure::config::{AppConfig, RegistryConfig};
use vmf_infrastructure::di::HolderContainer;

use crate::fixtures::{EditorHolder, EditorModule, SCREEN, ScratchpadHolder, ScratchpadModule, ScreenModule};

fn without_discovery() -> AppConfig {
    AppConfig {
        registry: RegistryConfig {
            discover: false,
            disabled: Vec::new(),
        },
        ..AppConfig::default()
    }
}

#[test]
fn test_modules_bind_in_order() {
    let container = HolderContainer::build(without_discovery(), &[&ScreenModule, &EditorModule])
        .expect("container should build");

    let names: Vec<&str> = container
        .registry()
        .entries()
        .iter()
        .map(|entry| entry.descriptor().name())
        .collect();
    assert_eq!(names, vec!["screen", "editor"]);
}

#[test]
fn test_without_modules_or_discovery_registry_is_empty() {
    let container = HolderContainer::build(without_discovery(), &[]).expect("container should build");

    assert!(container.registry().is_empty());
    let err = container
        .factory()
        .create(&SCREEN)
        .err()
        .expect("nothing is bound");
    assert!(err.is_configuration());
}

#[test]
fn test_discovery_binds_registered_holders_after_modules() {
    let container =
        HolderContainer::build(AppConfig::default(), &[&EditorModule]).expect("container should build");

    let registry = container.registry();
    assert!(registry.contains(&ScratchpadHolder::DESCRIPTOR));
    assert_eq!(
        registry.entries()[0].descriptor(),
        EditorHolder::DESCRIPTOR,
        "module bindings come before discovered ones"
    );
}

#[test]
fn test_disabled_holders_are_not_discovered() {
    let config = AppConfig {
        registry: RegistryConfig {
            discover: true,
            disabled: vec!["scratchpad".to_string(), "not_registered".to_string()],
        },
        ..AppConfig::default()
    };

    let container = HolderContainer::build(config, &[]).expect("container should build");

    assert!(!container.registry().contains(&ScratchpadHolder::DESCRIPTOR));
    assert_eq!(container.config().registry.disabled.len(), 2);
}

#[test]
fn test_module_colliding_with_discovered_holder_fails() {
    let err = HolderContainer::build(AppConfig::default(), &[&ScratchpadModule])
        .expect_err("duplicate binding must fail");

    assert!(err.is_configuration());
    assert!(err.to_string().contains("scratchpad"));
}

#[test]
fn test_disabling_resolves_module_collision() {
    let config = AppConfig {
        registry: RegistryConfig {
            discover: true,
            disabled: vec!["scratchpad".to_string()],
        },
        ..AppConfig::default()
    };

    let container =
        HolderContainer::build(config, &[&ScratchpadModule]).expect("container should build");

    assert!(container.registry().contains(&ScratchpadHolder::DESCRIPTOR));
}

#[test]
fn test_factory_shares_container_registry() {
    let container = HolderContainer::build(without_discovery(), &[&EditorModule])
        .expect("container should build");

    let holder = container
        .factory()
        .create(&EditorHolder::DESCRIPTOR)
        .expect("editor is bound");
    assert_eq!(holder.descriptor(), EditorHolder::DESCRIPTOR);

    let cloned = container.clone();
    assert!(std::sync::Arc::ptr_eq(cloned.registry(), container.registry()));
}
