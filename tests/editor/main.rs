//! Integration tests for Layer 2: Editor
//!
//! Tests for editing containers through generated single-field structs.

mod session;
