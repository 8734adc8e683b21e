//! Tests for typed holder access

use vmf_domain::error::Error;
use vmf_domain::ports::HolderType;
use vmf_infrastructure::config::{AppConfig, RegistryConfig};
use vmf_infrastructure::di::HolderContainer;

use crate::fixtures::{EditorHolder, EditorModule, ScreenHolder, ScreenModule, ViewerHolder};

fn container() -> HolderContainer {
    let config = AppConfig {
        registry: RegistryConfig {
            discover: false,
            disabled: Vec::new(),
        },
        ..AppConfig::default()
    };
    HolderContainer::build(config, &[&ScreenModule, &EditorModule]).expect("container should build")
}

#[test]
fn test_get_returns_concrete_type() {
    let editor = container()
        .provider()
        .get::<EditorHolder>()
        .expect("editor is bound");

    assert_eq!(editor.lines, vec!["PUSH 1".to_string()]);
}

#[test]
fn test_get_broad_type() {
    let screen = container().provider().get::<ScreenHolder>();
    assert!(screen.is_ok());
}

#[test]
fn test_get_through_broader_binding_reports_mismatch() {
    let err = container()
        .provider()
        .get::<ViewerHolder>()
        .expect_err("viewer resolves to the screen binding");

    match err {
        Error::HolderTypeMismatch { requested, produced } => {
            assert_eq!(requested, "viewer");
            assert_eq!(produced, "screen");
        }
        other => panic!("expected HolderTypeMismatch, got {other:?}"),
    }
}

#[test]
fn test_untyped_create_through_broader_binding_succeeds() {
    let holder = container()
        .provider()
        .create(&ViewerHolder::DESCRIPTOR)
        .expect("viewer refines screen");

    assert!(holder.is::<ScreenHolder>());
}

#[test]
fn test_get_unknown_type_is_configuration_error() {
    let config = AppConfig {
        registry: RegistryConfig {
            discover: false,
            disabled: Vec::new(),
        },
        ..AppConfig::default()
    };
    let container = HolderContainer::build(config, &[&EditorModule]).expect("container should build");

    let err = container
        .provider()
        .get::<ScreenHolder>()
        .expect_err("screen is not bound");
    assert!(err.is_configuration());
}
