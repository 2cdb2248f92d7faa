//! Integration tests for the function library

use genvars_core::Generic;
use genvars_foundation::{Array, ErrorKind, Map, Name, Reflect, Vector};
use genvars_script::statics;

#[test]
fn wildcard_round_trip_through_dyn_values() {
    let values: Vec<Box<dyn Reflect>> = vec![
        Box::new(42i32),
        Box::new(String::from("text")),
        Box::new(Vector::new(1.0, 2.0, 3.0)),
        Box::new(Array::from(vec![Name::new("A")])),
        Box::new(Map::new().insert(1i32, String::from("one"))),
    ];

    for value in &values {
        let variable = statics::value_to_generic(Some(&**value));
        let mut out = value.clone();
        out.clear_value();
        statics::generic_to_value(&variable, Some(&mut *out)).unwrap();
        assert_eq!(format!("{out:?}"), format!("{value:?}"));
    }
}

#[test]
fn wrong_destination_resets() {
    let variable = statics::string_to_generic("(1,2");
    let mut out = Array::from(vec![9i32]);
    let err = statics::generic_to_value(&variable, Some(&mut out)).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnparsableText { .. }));
    assert!(out.is_empty());
}

#[test]
fn set_overwrites_and_none_clears() {
    let mut variable = statics::int_to_generic(1);
    statics::set_generic_value(&mut variable, Some(&String::from("now text")));
    assert_eq!(statics::generic_to_string(&variable), "now text");
    assert_eq!(statics::generic_to_int(&variable), 0);

    statics::set_generic_value(&mut variable, None);
    assert!(statics::is_empty(&variable));
}

#[test]
fn equality_matches_operator() {
    let a = statics::name_to_generic(Name::new("Same"));
    let b = Generic::from(Name::new("Same"));
    assert!(statics::equal(&a, &b));
    assert!(statics::not_equal(&a, &statics::name_to_generic(Name::new("Other"))));
}
