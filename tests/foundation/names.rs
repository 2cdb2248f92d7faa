//! Integration tests for interned names

use genvars_foundation::{Name, from_text, to_text};
use std::collections::HashSet;

#[test]
fn interning_is_stable() {
    let a = Name::new("Integration_Name");
    let b = Name::new("Integration_Name");
    assert_eq!(a, b);
    assert_eq!(a.index(), b.index());
    assert_eq!(&*a.as_str(), "Integration_Name");
}

#[test]
fn names_are_case_sensitive() {
    assert_ne!(Name::new("Case"), Name::new("case"));
}

#[test]
fn none_aliases() {
    assert!(Name::new("").is_none());
    assert!(Name::new("None").is_none());
    assert_eq!(Name::default(), Name::NONE);
    assert_eq!(Name::NONE.to_string(), "None");
}

#[test]
fn names_hash_by_identity() {
    let set: HashSet<Name> = ["A", "B", "A"].into_iter().map(Name::new).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn text_round_trip() {
    let name = Name::new("Hero_01");
    let text = to_text(&name);
    assert_eq!(text, "Hero_01");

    let mut back = Name::NONE;
    from_text(&mut back, &text).unwrap();
    assert_eq!(back, name);
}

#[test]
fn concurrent_interning() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                (0..100)
                    .map(|i| Name::new(&format!("Thread_{}", (i + t) % 50)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let all: HashSet<Name> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
    assert_eq!(all.len(), 50);
}
