//! The genvars type-erased value container.
//!
//! This crate provides:
//! - [`Generic`] - A container that holds one value of any reflected type
//! - [`Classifier`] - Decides between the byte path and the text path
//! - [`PlainBuffer`] - Native byte images of plain values
//! - [`StoreGeneric`] / [`FromGeneric`] - Typed, coercing accessors
//! - [`GenericConfig`] - Per-container runtime configuration
//!
//! Plain values (numbers, booleans, enums and allowlisted aggregates such as
//! vectors) are stored as raw native-endian bytes. Everything else is stored
//! as canonical text and, with the `cache` feature, materialized once so that
//! repeated reads skip the import. With the `editor` feature the container
//! also remembers the last stored type and the object paths the value refers
//! to.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod access;
#[cfg(feature = "cache")]
pub mod cache;
pub mod classify;
pub mod config;
mod generic;
pub mod plain;
#[cfg(feature = "editor")]
pub mod scan;
#[cfg(feature = "serde")]
mod serde_repr;
mod text;

pub use access::{FromGeneric, Storable, StoreGeneric};
pub use classify::Classifier;
pub use config::GenericConfig;
pub use generic::Generic;
pub use plain::PlainBuffer;

pub use genvars_foundation;
pub use genvars_foundation::{Error, ErrorKind, Result};
