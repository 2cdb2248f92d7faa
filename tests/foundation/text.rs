//! Integration tests for the canonical text codec

use genvars_foundation::{
    Array, Color, ErrorKind, FloatRange, FloatRangeBound, LocText, Map, Name, RangeBoundType, Set,
    Transform, Vector, from_text, to_text,
};

// =============================================================================
// Strings
// =============================================================================

#[test]
fn top_level_strings_are_raw() {
    for s in ["", "plain", "with, comma", "(parens)", "日本語 ✓", "tab\tnewline\n"] {
        let text = to_text(&s.to_string());
        assert_eq!(text, s);

        let mut back = String::from("junk");
        from_text(&mut back, &text).unwrap();
        assert_eq!(back, s);
    }
}

#[test]
fn nested_strings_are_quoted() {
    let arr = Array::from(vec!["a".to_string(), "b, c".to_string(), String::new()]);
    assert_eq!(to_text(&arr), r#"("a","b, c","")"#);

    let mut back = Array::new();
    from_text(&mut back, &to_text(&arr)).unwrap();
    assert_eq!(back, arr);
}

#[test]
fn control_characters_survive_nesting() {
    let s = "\u{1}\u{7f}\"\\\r".to_string();
    let arr = Array::from(vec![s.clone()]);
    let mut back = Array::<String>::new();
    from_text(&mut back, &to_text(&arr)).unwrap();
    assert_eq!(back.get(0), Some(&s));
}

// =============================================================================
// Aggregates
// =============================================================================

#[test]
fn vector_text() {
    let v = Vector::new(1.0, -2.5, 0.0);
    assert_eq!(to_text(&v), "(X=1,Y=-2.5,Z=0)");
}

#[test]
fn transform_round_trip() {
    let t = Transform {
        translation: Vector::new(10.0, 20.0, 30.0),
        ..Transform::IDENTITY
    };
    let mut back = Transform::default();
    from_text(&mut back, &to_text(&t)).unwrap();
    assert_eq!(back, t);
}

#[test]
fn color_and_enum_fields() {
    let c = Color::rgba(1, 2, 3, 4);
    let mut back = Color::default();
    from_text(&mut back, &to_text(&c)).unwrap();
    assert_eq!(back, c);

    let range = FloatRange {
        lower: FloatRangeBound {
            kind: RangeBoundType::Inclusive,
            value: 0.5,
        },
        upper: FloatRangeBound {
            kind: RangeBoundType::Open,
            value: 0.0,
        },
    };
    let text = to_text(&range);
    assert!(text.contains("Type=Inclusive"));
    let mut back = FloatRange::default();
    from_text(&mut back, &text).unwrap();
    assert_eq!(back, range);
}

#[test]
fn aggregate_missing_fields_keep_defaults() {
    let mut v = Vector::default();
    from_text(&mut v, "(Y=4)").unwrap();
    assert_eq!(v, Vector::new(0.0, 4.0, 0.0));
}

#[test]
fn aggregate_import_overlays_existing_fields() {
    let mut v = Vector::new(9.0, 9.0, 9.0);
    from_text(&mut v, "(Y=4)").unwrap();
    assert_eq!(v, Vector::new(9.0, 4.0, 9.0));
}

// =============================================================================
// Containers
// =============================================================================

#[test]
fn empty_containers() {
    assert_eq!(to_text(&Array::<i32>::new()), "");
    let mut back = Array::from(vec![1]);
    from_text(&mut back, "").unwrap();
    assert!(back.is_empty());

    let nested = Array::from(vec![Array::<i32>::new()]);
    assert_eq!(to_text(&nested), "(())");
}

#[test]
fn sets_and_maps() {
    let set: Set<Name> = ["B", "A"].into_iter().map(Name::new).collect();
    let mut back = Set::new();
    from_text(&mut back, &to_text(&set)).unwrap();
    assert_eq!(back, set);

    let map = Map::new()
        .insert("one".to_string(), 1i32)
        .insert("two".to_string(), 2);
    let text = to_text(&map);
    assert_eq!(text, r#"(("one",1),("two",2))"#);
    let mut back = Map::new();
    from_text(&mut back, &text).unwrap();
    assert_eq!(back, map);
}

// =============================================================================
// Localized Text and Errors
// =============================================================================

#[test]
fn loc_text_escapes() {
    let t = LocText::localized("NS", "Key", "Say \"hi\"");
    let mut back = LocText::default();
    from_text(&mut back, &to_text(&t)).unwrap();
    assert_eq!(back, t);
}

#[test]
fn parse_errors_carry_type_and_offset() {
    let mut arr = Array::<i32>::new();
    let err = from_text(&mut arr, "(1,x)").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Parse { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("array<int32>"));
    assert!(context.offset.is_some());
}
