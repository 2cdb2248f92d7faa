//! Integration tests for editor sessions

use genvars_core::Generic;
use genvars_editor::{EditorSession, PinType};
use genvars_foundation::{Array, Name, Reflected, SoftObjectRef, Transform, Vector};

#[test]
fn edit_cycle_for_each_pin_type() {
    let mut session = EditorSession::new();
    let cases: Vec<(PinType, &str, &str)> = vec![
        (i32::static_type(), "(Value=17)", "17"),
        (bool::static_type(), "(Value=True)", "True"),
        (String::static_type(), "(Value=\"hi\")", "hi"),
        (Name::static_type(), "(Value=Tag)", "Tag"),
        (Array::<i32>::static_type(), "(Value=(1,2,3))", "(1,2,3)"),
    ];

    for (pin, edit, expected_text) in cases {
        let mut g = Generic::new();
        g.set_edit_type(Some(pin.clone()));
        let mut inst = session.instance_for(&mut g).unwrap();
        assert_eq!(inst.value_type(), pin);

        inst.edit_text(edit).unwrap();
        session.commit(&inst, &mut g);
        assert_eq!(g.edit_type(), Some(&pin));
        assert_eq!(
            genvars_foundation::to_text(inst.value()),
            expected_text,
            "pin {pin}"
        );
    }
    assert_eq!(session.cached_struct_count(), 5);
}

#[test]
fn committed_values_read_back_typed() {
    let mut session = EditorSession::new();
    let mut g = Generic::from(Transform::IDENTITY);
    let mut inst = session.instance_for(&mut g).unwrap();
    inst.edit_text("(Value=(Translation=(X=5,Y=6,Z=7)))").unwrap();
    session.commit(&inst, &mut g);

    let t = g.as_::<Transform>();
    assert_eq!(t.translation, Vector::new(5.0, 6.0, 7.0));
    assert_eq!(t.scale, Vector::ONE);
}

#[test]
fn change_type_then_reinterpret() {
    let mut session = EditorSession::new();
    let mut g = Generic::from(SoftObjectRef::new("/Editor/Asset.Asset".into()));
    assert_eq!(g.references().len(), 1);

    session.change_type(&mut g, String::static_type());
    assert!(g.references().is_empty());

    let inst = session.instance_for(&mut g).unwrap();
    assert_eq!(inst.render(), "(Value=\"/Editor/Asset.Asset\")");
}

#[test]
fn generated_struct_is_shared_by_pin_type() {
    let mut session = EditorSession::new();
    let mut a = Generic::from(1.0f32);
    let mut b = Generic::from(2.0f32);
    let ia = session.instance_for(&mut a).unwrap();
    let ib = session.instance_for(&mut b).unwrap();
    assert!(std::sync::Arc::ptr_eq(ia.desc(), ib.desc()));
    assert!(ia.desc().name().starts_with("Generic_GEN_"));
    assert_eq!(ia.desc().fields()[0].name.as_ref(), "Value");
}

#[test]
fn multi_selection_requires_a_common_pin() {
    let mut session = EditorSession::new();
    let mut gs = vec![Generic::from(1u8), Generic::from(2u8), Generic::from(3u8)];
    let pin = EditorSession::common_pin_type(&gs).unwrap();
    assert_eq!(pin, u8::static_type());

    let mut inst = session.instance_for(&mut gs[2]).unwrap();
    inst.edit_text("(Value=200)").unwrap();
    session.commit_all(&inst, &mut gs);
    assert!(gs.iter().all(|g| g.as_::<u8>() == 200));

    gs.push(Generic::from("odd one out"));
    assert!(EditorSession::common_pin_type(&gs).is_none());
}
