//! Tests for the domain error type

use std::error::Error as _;
use std::io;

use vmf_domain::error::Error;
use vmf_domain::value_objects::Descriptor;

#[test]
fn test_unknown_holder_is_configuration_error() {
    let err = Error::unknown_holder(Descriptor::new("editor"));

    assert!(err.is_configuration());
    assert!(!err.is_factory_invocation());
    assert_eq!(
        err.to_string(),
        "Configuration error: unknown state holder type 'editor'"
    );
    assert!(err.source().is_none());
}

#[test]
fn test_duplicate_binding_message() {
    let err = Error::duplicate_binding("editor");
    assert!(err.is_configuration());
    assert!(err.to_string().contains("'editor' is bound more than once"));
}

#[test]
fn test_factory_invocation_keeps_cause() {
    let cause = io::Error::new(io::ErrorKind::Other, "backing store offline");
    let err = Error::factory_invocation("editor", Box::new(cause));

    assert!(err.is_factory_invocation());
    assert_eq!(
        err.to_string(),
        "Failed to create state holder 'editor': backing store offline"
    );
    let source = err.source().expect("cause should be chained");
    let io_err = source
        .downcast_ref::<io::Error>()
        .expect("cause keeps its concrete type");
    assert_eq!(io_err.kind(), io::ErrorKind::Other);
}

#[test]
fn test_configuration_with_source() {
    let err = Error::configuration_with_source("bad file", io::Error::other("eof"));

    assert!(err.is_configuration());
    assert_eq!(err.source().map(ToString::to_string), Some("eof".to_string()));
}

#[test]
fn test_holder_type_mismatch_message() {
    let err = Error::holder_type_mismatch("viewer", "screen");
    assert_eq!(
        err.to_string(),
        "State holder type mismatch: requested 'viewer', produced 'screen'"
    );
    assert!(!err.is_configuration());
}

#[test]
fn test_infrastructure_errors() {
    let plain = Error::infrastructure("disk");
    assert!(matches!(plain, Error::Infrastructure { source: None, .. }));

    let sourced = Error::infrastructure_with_source("disk", io::Error::other("full"));
    assert!(sourced.source().is_some());
}
