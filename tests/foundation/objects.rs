//! Integration tests for objects and reference flavours

use genvars_foundation::{
    ClassRef, ErrorKind, LazyObjectRef, ObjectRef, ObjectRegistry, Reflect, SoftClassRef,
    SoftObjectPath, SoftObjectRef, WeakObjectRef, from_text, to_text,
};

#[test]
fn spawn_returns_live_object() {
    let registry = ObjectRegistry::default();
    let a = registry.spawn("/Game/Items/Sword.Sword").unwrap();
    let b = registry.spawn("/Game/Items/Sword.Sword").unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), "Sword");
    assert_eq!(registry.live_count(), 1);
}

#[test]
fn dropped_objects_are_not_found() {
    let registry = ObjectRegistry::default();
    let path = SoftObjectPath::new("/Game/Temp.Temp");
    drop(registry.spawn(path.as_str()).unwrap());
    assert!(registry.find(&path).is_none());
}

#[test]
fn null_path_cannot_spawn() {
    assert!(ObjectRegistry::default().spawn("None").is_err());
}

#[test]
fn every_flavour_reports_its_soft_path() {
    let obj = ObjectRegistry::global().spawn("/Game/Refs/Thing.Thing").unwrap();
    let class = ObjectRegistry::global().spawn_class("/Game/Refs/Kind.Kind_C").unwrap();
    let expected = Some(obj.path().clone());

    assert_eq!(ObjectRef::new(&obj).soft_reference(), expected);
    assert_eq!(WeakObjectRef::new(&obj).soft_reference(), expected);
    assert_eq!(LazyObjectRef::new(&obj).soft_reference(), expected);
    assert_eq!(SoftObjectRef::from_object(&obj).soft_reference(), expected);
    assert_eq!(ClassRef::new(&class).soft_reference(), Some(class.path().clone()));
    assert_eq!(
        SoftClassRef::new(class.path().clone()).soft_reference(),
        Some(class.path().clone())
    );
    assert_eq!(ObjectRef::default().soft_reference(), None);
}

#[test]
fn hard_reference_text_resolves() {
    let obj = ObjectRegistry::global().spawn("/Game/Refs/Lamp.Lamp").unwrap();
    let text = to_text(&ObjectRef::new(&obj));

    let mut back = ObjectRef::default();
    from_text(&mut back, &text).unwrap();
    assert_eq!(back, ObjectRef::new(&obj));
}

#[test]
fn hard_reference_to_missing_object_fails() {
    let mut back = ObjectRef::default();
    let err = from_text(&mut back, "/Game/Refs/Missing.Missing").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ObjectNotFound(_)));
}

#[test]
fn soft_reference_does_not_resolve_on_import() {
    let mut back = SoftObjectRef::default();
    from_text(&mut back, "/Game/Refs/Unloaded.Unloaded").unwrap();
    assert_eq!(back.path().as_str(), "/Game/Refs/Unloaded.Unloaded");
    assert!(back.load().is_none());
}

#[test]
fn class_ref_rejects_non_class() {
    let obj = ObjectRegistry::global().spawn("/Game/Refs/Plain.Plain").unwrap();
    assert!(ClassRef::new(&obj).is_null());
    assert!(SoftClassRef::new(obj.path().clone()).load().is_none());
}
