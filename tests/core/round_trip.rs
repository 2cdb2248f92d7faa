//! Round trips through every storage path

use genvars_core::{Generic, GenericConfig, Storable};
use genvars_foundation::{
    Array, Box3, Color, Guid, InterpCurveMode, IntPoint, LinearColor, LocText, Map, Name, Quat,
    Rotator, Set, Transform, Vector, Vector2D,
};
use std::fmt::Debug;

/// Checks a value survives storage with the cache on, invalidated before the
/// read, and disabled.
pub fn check<T: Storable + PartialEq + Debug>(value: &T) {
    let mut cached = Generic::new();
    cached.set(value);
    assert_eq!(&cached.as_::<T>(), value, "cached");

    let mut invalidated = Generic::new();
    invalidated.set(value);
    invalidated.invalidate_cache();
    assert!(!invalidated.is_cached());
    assert_eq!(&invalidated.as_::<T>(), value, "invalidated");

    let mut uncached = Generic::with_config(GenericConfig::uncached());
    uncached.set(value);
    assert!(!uncached.is_cached());
    assert_eq!(&uncached.as_::<T>(), value, "uncached");

    assert_eq!(cached, invalidated);
    assert_eq!(cached, uncached);
}

// =============================================================================
// Plain Values
// =============================================================================

#[test]
fn integers_all_widths() {
    for v in [i8::MIN, -1, 0, 1, i8::MAX] {
        check(&v);
    }
    for v in [i16::MIN, 0, i16::MAX] {
        check(&v);
    }
    for v in [i32::MIN, -123_456, 0, i32::MAX] {
        check(&v);
    }
    for v in [i64::MIN, 0, i64::MAX] {
        check(&v);
    }
    for v in [0u8, u8::MAX] {
        check(&v);
    }
    for v in [0u16, u16::MAX] {
        check(&v);
    }
    for v in [0u32, u32::MAX] {
        check(&v);
    }
    for v in [0u64, u64::MAX] {
        check(&v);
    }
}

#[test]
fn floats_and_bools() {
    for v in [0.0f32, -0.0, 1.5, f32::MIN_POSITIVE, f32::MAX] {
        check(&v);
    }
    for v in [0.1f64, -1e300, f64::EPSILON] {
        check(&v);
    }
    check(&true);
    check(&false);
}

#[test]
fn allowlisted_aggregates_are_plain() {
    let values: Vec<Generic> = vec![
        Generic::from(Vector::new(1.0, 2.0, 3.0)),
        Generic::from(Vector2D::new(0.5, 0.25)),
        Generic::from(Rotator { pitch: 10.0, yaw: 20.0, roll: 30.0 }),
        Generic::from(Quat::IDENTITY),
        Generic::from(Transform::IDENTITY),
        Generic::from(Color::rgba(1, 2, 3, 4)),
        Generic::from(LinearColor { r: 1.0, g: 0.5, b: 0.25, a: 1.0 }),
        Generic::from(IntPoint::new(-3, 4)),
        Generic::from(Guid::new(1, 2, 3, 4)),
    ];
    for g in &values {
        assert!(g.string_data().is_empty(), "{g:?}");
        assert!(g.plain_size() > 0);
    }

    check(&Vector::new(1.0, 2.0, 3.0));
    check(&Transform::IDENTITY);
    check(&Guid::new(1, 2, 3, 4));
    check(&Box3 {
        min: Vector::ZERO,
        max: Vector::ONE,
        is_valid: true,
    });
}

#[test]
fn enums() {
    check(&InterpCurveMode::CurveAutoClamped);
    check(&InterpCurveMode::default());
}

// =============================================================================
// Text Values
// =============================================================================

#[test]
fn strings() {
    for s in ["", "x", "日本語", "emoji 🦀", "ctl \u{1}\u{2}\n\t", "quote \" and \\"] {
        check(&s.to_string());
    }
}

#[test]
fn names_and_text() {
    check(&Name::new("Some_Name"));
    check(&Name::NONE);
    check(&LocText::invariant("Hello"));
    check(&LocText::localized("Game", "Title", "The \"Game\""));
}

#[test]
fn containers() {
    check(&Array::from(vec![1i32, -2, 3]));
    check(&Array::<f64>::new());
    check(&Array::from(vec!["a, b".to_string(), "(c)".to_string()]));
    check(&Array::from(vec![Vector::ONE, Vector::ZERO]));
    check(&Array::from(vec![Array::from(vec![1i64]), Array::new()]));

    let set: Set<Name> = ["X", "Y"].into_iter().map(Name::new).collect();
    check(&set);

    let map = Map::new()
        .insert("k".to_string(), Array::from(vec![true, false]))
        .insert(String::new(), Array::new());
    check(&map);
}
