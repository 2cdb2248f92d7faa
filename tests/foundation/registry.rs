//! Integration tests for the type registry

use genvars_foundation::{
    Array, ErrorKind, Map, Name, Reflected, Transform, TypeDesc, TypeRegistry, to_text,
};

#[test]
fn builtins_cover_math_and_containers() {
    let registry = TypeRegistry::with_builtins();
    for ty in [
        Transform::static_type(),
        Array::<Name>::static_type(),
        Map::<String, i32>::static_type(),
        bool::static_type(),
    ] {
        assert!(registry.contains(&ty), "missing {ty}");
    }
}

#[test]
fn instantiate_gives_defaults() {
    let registry = TypeRegistry::with_builtins();
    let value = registry.instantiate(&Transform::static_type()).unwrap();
    assert_eq!(to_text(&*value), to_text(&Transform::default()));
}

#[test]
fn unknown_type_is_not_supported() {
    let registry = TypeRegistry::new();
    assert!(registry.is_empty());
    let err = registry.instantiate(&TypeDesc::int32()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeNotSupported(_)));
}

#[test]
fn register_custom_instantiation() {
    let mut registry = TypeRegistry::new();
    registry.register::<Array<Array<i32>>>();
    assert_eq!(registry.len(), 1);
    assert!(registry.instantiate(&Array::<Array<i32>>::static_type()).is_ok());
}
