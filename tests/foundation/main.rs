//! Integration tests for Layer 0: Foundation
//!
//! Tests for the text codec, names, object references and the type registry.

mod names;
mod objects;
mod registry;
mod text;
