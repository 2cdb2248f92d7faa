//! Value dumps for debugging.
//!
//! Text values print as the string. Plain values print as a hex dump
//! followed by the value read at every primitive type matching the buffer
//! width, since the stored bytes carry no type of their own.

use std::fmt::Write as _;

use genvars_core::Generic;
use tracing::info;

/// Formats one line describing `value`, labelled `name` and prefixed with
/// `prefix`.
#[must_use]
pub fn describe_value(name: &str, value: &Generic, prefix: &str) -> String {
    let mut line = format!("{prefix}[{name}] = ");

    let text = value.string_data();
    if !text.is_empty() {
        let _ = write!(line, "{text:?} (string)");
        return line;
    }

    let bytes = value.plain_data();
    if bytes.is_empty() {
        line.push_str("null");
        return line;
    }

    let _ = write!(line, "binary ({} bytes):", bytes.len());
    for b in bytes {
        let _ = write!(line, " {b:02X}");
    }

    let _ = match bytes.len() {
        4 => write!(
            line,
            " | f32: {}, i32: {}, u32: {}",
            value.as_::<f32>(),
            value.as_::<i32>(),
            value.as_::<u32>()
        ),
        8 => write!(
            line,
            " | f64: {}, i64: {}, u64: {}",
            value.as_::<f64>(),
            value.as_::<i64>(),
            value.as_::<u64>()
        ),
        2 => write!(line, " | i16: {}, u16: {}", value.as_::<i16>(), value.as_::<u16>()),
        1 => write!(
            line,
            " | i8: {}, u8: {}, bool: {}",
            value.as_::<i8>(),
            value.as_::<u8>(),
            value.as_::<bool>()
        ),
        _ => Ok(()),
    };
    line
}

/// Emits [`describe_value`] as an `info` event on the `genvars::debug`
/// target.
pub fn log_value_details(name: &str, value: &Generic, prefix: &str) {
    info!(target: "genvars::debug", variable = name, "{}", describe_value(name, value, prefix));
}
