//! The script-callable function library.
//!
//! Thin wrappers over [`Generic`] in the shape a scripting layer binds:
//! wildcard set/get taking any reflected value, conversion nodes, and typed
//! auto-casts for the common primitive types.

use genvars_core::Generic;
use genvars_foundation::{ClassRef, Error, ErrorKind, Name, ObjectRef, Reflect, Result};

// =============================================================================
// Wildcard Set / Get
// =============================================================================

/// Assigns `value` to `variable`. A missing value clears the variable.
pub fn set_generic_value(variable: &mut Generic, value: Option<&dyn Reflect>) {
    variable.set_property(value);
}

/// Reads `variable` into `value`. A missing destination is ignored.
pub fn get_generic_value(variable: &Generic, value: Option<&mut dyn Reflect>) {
    variable.get_property(value);
}

/// Wraps `value` in a new container; a missing value gives an empty one.
#[must_use]
pub fn value_to_generic(value: Option<&dyn Reflect>) -> Generic {
    let mut variable = Generic::new();
    variable.set_property(value);
    variable
}

/// Reads `variable` into `value`.
///
/// # Errors
///
/// Returns `NullPropertyOrAddress` if there is no destination, otherwise
/// whatever [`Generic::try_get`] reports. The destination is reset to its
/// default on failure.
pub fn generic_to_value(variable: &Generic, value: Option<&mut dyn Reflect>) -> Result<()> {
    let value = value.ok_or_else(|| Error::new(ErrorKind::NullPropertyOrAddress))?;
    variable.try_get(value)
}

// =============================================================================
// Auto-casts
// =============================================================================

macro_rules! auto_cast {
    ($($to:ident / $from:ident : $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Wraps a `", stringify!($ty), "`.")]
            #[must_use]
            pub fn $to(value: $ty) -> Generic {
                Generic::from(value)
            }

            #[doc = concat!("Reads a `", stringify!($ty), "`, coercing where possible.")]
            #[must_use]
            pub fn $from(variable: &Generic) -> $ty {
                variable.as_::<$ty>()
            }
        )*
    };
}

auto_cast! {
    float_to_generic / generic_to_float: f32,
    int_to_generic / generic_to_int: i32,
    int64_to_generic / generic_to_int64: i64,
    bool_to_generic / generic_to_bool: bool,
    byte_to_generic / generic_to_byte: u8,
    name_to_generic / generic_to_name: Name,
    object_ref_to_generic / generic_to_object_ref: ObjectRef,
    class_ref_to_generic / generic_to_class_ref: ClassRef,
}

/// Wraps a string.
#[must_use]
pub fn string_to_generic(value: &str) -> Generic {
    Generic::from(value)
}

/// Reads a string. Plain values read as the empty string.
#[must_use]
pub fn generic_to_string(variable: &Generic) -> String {
    variable.as_::<String>()
}

// =============================================================================
// Comparison and State
// =============================================================================

/// Returns true if both hold the same stored data.
#[must_use]
pub fn equal(a: &Generic, b: &Generic) -> bool {
    a == b
}

/// Returns true unless both hold the same stored data.
#[must_use]
pub fn not_equal(a: &Generic, b: &Generic) -> bool {
    a != b
}

/// Empties `variable`.
pub fn clear(variable: &mut Generic) {
    variable.clear();
}

/// Returns true if `variable` holds nothing.
#[must_use]
pub fn is_empty(variable: &Generic) -> bool {
    variable.is_empty()
}
