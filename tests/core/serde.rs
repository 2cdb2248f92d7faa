//! Serialization through MessagePack

use genvars_core::Generic;
use genvars_foundation::{Array, Name, SoftObjectRef, Transform};

fn round_trip(g: &Generic) -> Generic {
    let bytes = rmp_serde::to_vec(g).unwrap();
    rmp_serde::from_slice(&bytes).unwrap()
}

#[test]
fn plain_survives() {
    let g = Generic::from(Transform::IDENTITY);
    let back = round_trip(&g);
    assert_eq!(back, g);
    assert_eq!(back.as_::<Transform>(), Transform::IDENTITY);
}

#[test]
fn text_survives_and_recaches_lazily() {
    let g = Generic::from(Array::from(vec![Name::new("A"), Name::new("B")]));
    let back = round_trip(&g);
    assert!(!back.is_cached());
    assert_eq!(back.as_::<Array<Name>>(), g.as_::<Array<Name>>());
}

#[test]
fn empty_survives() {
    assert!(round_trip(&Generic::new()).is_empty());
}

#[test]
fn references_survive() {
    let g = Generic::from(SoftObjectRef::new("/Serde/Thing.Thing".into()));
    assert_eq!(round_trip(&g).references(), g.references());
}
