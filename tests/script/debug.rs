//! Integration tests for debug dumps

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use genvars_core::Generic;
use genvars_script::{describe_value, log_value_details};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

/// Records the message of every event on the `genvars::debug` target.
struct Capture(Arc<Mutex<Vec<String>>>);

struct Message<'a>(&'a mut String);

impl Visit for Message<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, "{value:?}");
        }
    }
}

impl Subscriber for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if event.metadata().target() != "genvars::debug" {
            return;
        }
        let mut line = String::new();
        event.record(&mut Message(&mut line));
        self.0.lock().unwrap().push(line);
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn capture(f: impl FnOnce()) -> Vec<String> {
    let lines = Arc::new(Mutex::new(Vec::new()));
    tracing::subscriber::with_default(Capture(Arc::clone(&lines)), f);
    let lines = lines.lock().unwrap().clone();
    lines
}

#[test]
fn logged_line_matches_description() {
    let g = Generic::from(0x0102_0304u32);
    let lines = capture(|| log_value_details("Mask", &g, "dbg: "));
    assert_eq!(lines, vec![describe_value("Mask", &g, "dbg: ")]);
}

#[test]
fn one_event_per_call() {
    let lines = capture(|| {
        log_value_details("A", &Generic::from("a"), "");
        log_value_details("B", &Generic::new(), "");
    });
    assert_eq!(lines, vec![r#"[A] = "a" (string)"#.to_string(), "[B] = null".to_string()]);
}

#[test]
fn eight_byte_interpretations() {
    let line = describe_value("D", &Generic::from(1.0f64), "");
    assert!(line.starts_with("[D] = binary (8 bytes): "));
    assert!(line.ends_with(&format!(
        " | f64: 1, i64: {0}, u64: {0}",
        1.0f64.to_bits()
    )));
}
