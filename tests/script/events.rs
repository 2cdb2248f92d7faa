//! Integration tests for generic events

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use genvars_core::Generic;
use genvars_foundation::{Name, ObjectRef, ObjectRegistry};
use genvars_script::{EventDispatcher, GenericEventHandler};

/// Counts calls and answers `Greet` with a greeting built from the argument.
#[derive(Default)]
struct Greeter {
    calls: AtomicUsize,
}

impl GenericEventHandler for Greeter {
    fn handle_generic_event(&self, source: &ObjectRef, event_name: Name, args: &Generic) -> Generic {
        self.calls.fetch_add(1, Ordering::Relaxed);
        if event_name != Name::new("Greet") {
            return Generic::new();
        }
        let from = source.get().map_or_else(|| "nobody".to_string(), |o| o.name().to_string());
        Generic::from(format!("hello {} from {from}", args.as_::<String>()).as_str())
    }
}

struct Ignorer;

impl GenericEventHandler for Ignorer {}

#[test]
fn handlers_see_every_event() {
    let greeter = Arc::new(Greeter::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher
        .register(greeter.clone())
        .register(Arc::new(Ignorer))
        .register(greeter.clone());

    let npc = ObjectRegistry::global().spawn("/Events/Npc.Npc").unwrap();
    let replies = dispatcher.dispatch(&ObjectRef::new(&npc), Name::new("Greet"), &Generic::from("player"));

    assert_eq!(greeter.calls.load(Ordering::Relaxed), 2);
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].as_::<String>(), "hello player from Npc");
}

#[test]
fn unanswered_events_give_no_replies() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Greeter::default()));
    let replies = dispatcher.dispatch(&ObjectRef::default(), Name::new("Wave"), &Generic::new());
    assert!(replies.is_empty());
}

#[test]
fn null_source() {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Greeter::default()));
    let replies = dispatcher.dispatch(&ObjectRef::default(), Name::new("Greet"), &Generic::from("you"));
    assert_eq!(replies[0].as_::<String>(), "hello you from nobody");
}
