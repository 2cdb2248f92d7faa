//! Reference tracking

use genvars_core::{Classifier, Generic, GenericConfig, impl_storable};
use genvars_foundation::{
    Array, Map, Name, ObjectRef, ObjectRegistry, SoftClassRef, SoftObjectPath, SoftObjectRef,
    Vector, WeakObjectRef,
};
use std::sync::Arc;

genvars_foundation::reflect_struct! {
    pub struct Waypoint as "Waypoint" {
        pub target: SoftObjectRef => "Target",
        pub location: Vector => "Location",
    }
}

genvars_foundation::reflect_struct! {
    pub struct Route as "Route" {
        pub owner: WeakObjectRef => "Owner",
        pub points: Array<Waypoint> => "Points",
        pub tags: Map<Name, SoftClassRef> => "Tags",
    }
}

impl_storable!(value: Waypoint, Route);

fn paths(g: &Generic) -> Vec<&str> {
    g.references().iter().map(SoftObjectPath::as_str).collect()
}

#[test]
fn plain_values_have_no_references() {
    let g = Generic::from(Vector::ONE);
    assert!(g.references().is_empty());
}

#[test]
fn top_level_references() {
    let obj = ObjectRegistry::global().spawn("/Refs/Top.Top").unwrap();
    let g = Generic::from(ObjectRef::new(&obj));
    assert_eq!(paths(&g), vec!["/Refs/Top.Top"]);

    let g = Generic::from(ObjectRef::default());
    assert!(g.references().is_empty());
}

#[test]
fn nested_references_in_order_without_duplicates() {
    let owner = ObjectRegistry::global().spawn("/Refs/Owner.Owner").unwrap();
    let route = Route {
        owner: WeakObjectRef::new(&owner),
        points: Array::from(vec![
            Waypoint {
                target: SoftObjectRef::new("/Refs/P1.P1".into()),
                location: Vector::ZERO,
            },
            Waypoint {
                target: SoftObjectRef::new("/Refs/Owner.Owner".into()),
                location: Vector::ONE,
            },
            Waypoint::default(),
        ]),
        tags: Map::new().insert(Name::new("kind"), SoftClassRef::new("/Refs/K.K_C".into())),
    };

    let g = Generic::from(route);
    assert_eq!(paths(&g), vec!["/Refs/Owner.Owner", "/Refs/P1.P1", "/Refs/K.K_C"]);
}

#[test]
fn storing_again_replaces_references() {
    let mut g = Generic::from(SoftObjectRef::new("/Refs/Old.Old".into()));
    g.set(&SoftObjectRef::new("/Refs/New.New".into()));
    assert_eq!(paths(&g), vec!["/Refs/New.New"]);

    g.set(&1i32);
    assert!(g.references().is_empty());
}

#[test]
fn allowlisted_custom_struct_is_not_scanned() {
    let classifier = Classifier::new().with_plain_struct("Waypoint");
    let mut g = Generic::with_config(GenericConfig::new().with_classifier(classifier));
    g.set(&Array::from(vec![Waypoint {
        target: SoftObjectRef::new("/Refs/Hidden.Hidden".into()),
        location: Vector::ZERO,
    }]));
    assert!(g.references().is_empty());
}

#[test]
fn weak_reference_reads_back_while_alive() {
    let obj = ObjectRegistry::global().spawn("/Refs/Alive.Alive").unwrap();
    let g = Generic::from(WeakObjectRef::new(&obj));
    let back = g.as_::<WeakObjectRef>();
    assert!(Arc::ptr_eq(&back.get().unwrap(), &obj));
}
