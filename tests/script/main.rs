//! Integration tests for Layer 2: Script
//!
//! Tests for the function library, debug dumps and generic events.

mod debug;
mod events;
mod statics;
