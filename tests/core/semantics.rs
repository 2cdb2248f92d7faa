//! Emptiness, equality, hashing and move semantics

use genvars_core::Generic;
use genvars_foundation::{ErrorKind, Name, Vector};
use std::collections::HashSet;

#[test]
fn default_is_empty() {
    let g = Generic::default();
    assert!(g.is_empty());
    assert_eq!(g.as_::<i32>(), 0);
    assert_eq!(g.as_::<String>(), "");
    assert!(!g.as_::<bool>());
}

#[test]
fn clear_is_idempotent() {
    let mut g = Generic::from(5i32);
    g.clear();
    let once = g.clone();
    g.clear();
    assert_eq!(g, once);
    assert!(g.is_empty());
}

#[test]
fn number_and_string_never_equal() {
    let number = Generic::from(100i32);
    let text = Generic::from("100");
    assert_ne!(number, text);
    assert_eq!(number.as_::<i32>(), text.as_::<i32>());
}

#[test]
fn equal_values_hash_equal() {
    let set: HashSet<Generic> = [
        Generic::from(1i32),
        Generic::from(1i32),
        Generic::from("1"),
        Generic::from(Name::new("One")),
        Generic::from(Name::new("One")),
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 3);
}

#[test]
fn type_hash_combines_both_stores() {
    let g = Generic::from("abc");
    assert_eq!(g.type_hash(), crc32fast::hash(b"abc") ^ crc32fast::hash(b""));

    let g = Generic::from(7u8);
    assert_eq!(g.type_hash(), crc32fast::hash(b"") ^ crc32fast::hash(&[7]));
}

#[test]
fn take_moves_contents() {
    let mut source = Generic::from(Vector::ONE);
    let moved = source.take();
    assert!(source.is_empty());
    assert_eq!(moved.as_::<Vector>(), Vector::ONE);
}

#[test]
fn mem_take_moves_contents() {
    let mut source = Generic::from("moved");
    let moved = std::mem::take(&mut source);
    assert!(source.is_empty());
    assert_eq!(moved.as_::<String>(), "moved");
}

#[test]
fn coercions() {
    assert_eq!(Generic::from(3.14159f32).as_::<f32>().to_bits(), 3.14159f32.to_bits());
    assert_eq!(Generic::from("123").as_::<i32>(), 123);
    assert_eq!(Generic::from("not_a_number").as_::<i32>(), 0);
    assert_eq!(Generic::from("  2.5").as_::<f32>(), 2.5);
    assert_eq!(Generic::from(2.5f64).as_::<f32>(), 2.5);
    assert_eq!(Generic::from(-1i32).as_::<u32>(), u32::MAX);
}

#[test]
fn truthiness() {
    assert!(Generic::from(1u8).as_::<bool>());
    assert!(!Generic::from(0u8).as_::<bool>());
    assert!(Generic::from(0x0100i16).as_::<bool>());
    assert!(!Generic::from(0.0f64).as_::<bool>());
    assert!(Generic::from(-0.0f64).as_::<bool>());
    assert!(Generic::from(" ").as_::<bool>());
    assert!(!Generic::from("").as_::<bool>());
}

#[test]
fn undersized_reads_reset() {
    let g = Generic::from(1u8);
    assert_eq!(g.as_::<Vector>(), Vector::default());
    assert!(matches!(
        g.try_as::<Vector>().unwrap_err().kind,
        ErrorKind::UndersizedSource { needed: 24, available: 1 }
    ));
}

#[test]
fn unparsable_text_reads_default() {
    let g = Generic::from("(X=1,Y=");
    assert_eq!(g.as_::<Vector>(), Vector::default());
    assert!(matches!(
        g.try_as::<Vector>().unwrap_err().kind,
        ErrorKind::UndersizedSource { .. } | ErrorKind::UnparsableText { .. }
    ));
}

#[test]
fn generic_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Generic>();
}
