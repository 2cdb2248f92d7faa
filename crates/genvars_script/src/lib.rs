//! Script-facing surface for genvars.
//!
//! This crate provides:
//! - [`statics`] - The callable function library (set/get, auto-casts, equality)
//! - [`debug`] - Value dumps through `tracing`
//! - [`event`] - Generic events carrying a [`Generic`](genvars_core::Generic) payload

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod debug;
pub mod event;
pub mod statics;

pub use debug::{describe_value, log_value_details};
pub use event::{EventDispatcher, GenericEventHandler};
