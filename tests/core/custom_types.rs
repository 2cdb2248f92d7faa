//! User-declared types

use genvars_core::{Classifier, Generic, GenericConfig, impl_storable};
use genvars_foundation::{Array, ErrorKind};

genvars_foundation::reflect_struct! {
    pub struct Stats as "Stats" {
        pub health: i32 => "Health",
        pub speed: f32 => "Speed",
    }
}

genvars_foundation::reflect_struct! {
    pub struct Tagged as "Tagged" {
        pub label: String => "Label",
        pub stats: Stats => "Stats",
    }
}

genvars_foundation::reflect_enum! {
    pub enum Faction as "EFaction" : i16 {
        Neutral = 0,
        Friendly = 5,
        Hostile = -3,
    }
}

impl_storable!(value: Stats, Tagged);
impl_storable!(enum: Faction);

#[test]
fn unlisted_struct_is_text() {
    let g = Generic::from(Stats { health: 10, speed: 1.5 });
    assert_eq!(g.string_data(), "(Health=10,Speed=1.5)");
    assert_eq!(g.as_::<Stats>(), Stats { health: 10, speed: 1.5 });
}

#[test]
fn allowlisted_struct_is_plain() {
    let config = GenericConfig::new().with_classifier(Classifier::new().with_plain_struct("Stats"));
    let mut g = Generic::with_config(config);
    g.set(&Stats { health: 10, speed: 1.5 });
    assert_eq!(g.plain_size(), 8);
    assert_eq!(g.as_::<Stats>(), Stats { health: 10, speed: 1.5 });
}

#[test]
fn allowlisted_struct_without_image_falls_back_to_text() {
    let config = GenericConfig::new().with_classifier(Classifier::new().with_plain_struct("Tagged"));
    let mut g = Generic::with_config(config);
    let value = Tagged {
        label: "boss".into(),
        stats: Stats { health: 99, speed: 0.5 },
    };
    g.set(&value);
    assert_eq!(g.plain_size(), 0);
    assert_eq!(g.as_::<Tagged>(), value);
}

#[test]
fn nested_struct_text() {
    let value = Tagged {
        label: "a \"quoted\" label".into(),
        stats: Stats { health: -1, speed: 0.0 },
    };
    let g = Generic::from(value.clone());
    assert_eq!(g.as_::<Tagged>(), value);
    assert_eq!(g.as_::<Array<Tagged>>(), Array::new());
}

#[test]
fn custom_enum() {
    let g = Generic::from(Faction::Hostile);
    assert_eq!(g.plain_data(), &(-3i16).to_ne_bytes());
    assert_eq!(g.as_::<Faction>(), Faction::Hostile);
    assert_eq!(g.as_::<i64>(), -3);

    assert_eq!(Generic::from("Friendly").as_::<Faction>(), Faction::Friendly);
    assert_eq!(Generic::from("EFaction::Friendly").as_::<Faction>(), Faction::Friendly);
    assert_eq!(Generic::from("5").as_::<Faction>(), Faction::Friendly);
    assert_eq!(Generic::from("sideways").as_::<Faction>(), Faction::Neutral);
    assert!(matches!(
        Generic::from("sideways").try_as::<Faction>().unwrap_err().kind,
        ErrorKind::UnparsableText { .. }
    ));
}
