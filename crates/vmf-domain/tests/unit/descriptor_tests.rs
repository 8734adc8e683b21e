//! Tests for descriptor refinement

use std::collections::HashSet;

use vmf_domain::value_objects::Descriptor;

const SCREEN: Descriptor = Descriptor::refining("screen", &[Descriptor::STATE_HOLDER]);
const PERSISTENT: Descriptor = Descriptor::new("persistent");
const EDITOR: Descriptor = Descriptor::refining("editor", &[SCREEN, PERSISTENT]);

#[test]
fn test_multiple_refinements() {
    assert!(EDITOR.satisfies(&SCREEN));
    assert!(EDITOR.satisfies(&PERSISTENT));
    assert!(EDITOR.satisfies(&Descriptor::STATE_HOLDER));
    assert!(!PERSISTENT.satisfies(&Descriptor::STATE_HOLDER));
}

#[test]
fn test_unrelated_descriptors_do_not_satisfy_each_other() {
    let viewer = Descriptor::refining("viewer", &[SCREEN]);
    assert!(!viewer.satisfies(&EDITOR));
    assert!(!EDITOR.satisfies(&viewer));
}

#[test]
fn test_refines_lists_direct_parents() {
    let parents: Vec<&str> = EDITOR.refines().iter().map(Descriptor::name).collect();
    assert_eq!(parents, vec!["screen", "persistent"]);
    assert!(Descriptor::STATE_HOLDER.refines().is_empty());
}

#[test]
fn test_hashing_follows_tag() {
    let mut set = HashSet::new();
    set.insert(EDITOR);
    set.insert(Descriptor::new("editor"));
    set.insert(SCREEN);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_debug_shows_parents_by_name() {
    let debug = format!("{EDITOR:?}");
    assert!(debug.contains("\"editor\""));
    assert!(debug.contains("\"screen\""));
}
