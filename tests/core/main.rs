//! Integration tests for Layer 1: Core
//!
//! Tests for the Generic container: storage paths, coercion, the
//! deserialization cache, reference tracking and serialization.

mod custom_types;
mod references;
mod round_trip;
mod semantics;
mod serde;
