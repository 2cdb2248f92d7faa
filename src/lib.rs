//! genvars - Type-erased value container
//!
//! This crate re-exports all layers of the genvars system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: genvars_script      - Function library, debug dumps, generic events
//!          genvars_editor      - Pin types and generated edit structs
//! Layer 1: genvars_core        - Generic container, classifier, cache, accessors
//! Layer 0: genvars_foundation  - Reflection, text codec, names, objects, math types
//! ```

pub use genvars_core as core;
pub use genvars_editor as editor;
pub use genvars_foundation as foundation;
pub use genvars_script as script;

pub use genvars_core::{FromGeneric, Generic, GenericConfig, StoreGeneric};
