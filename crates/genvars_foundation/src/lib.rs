//! Host reflection layer for genvars.
//!
//! This crate provides:
//! - [`TypeDesc`] - Type descriptors for every storable value
//! - [`Reflect`] - Object-safe description, text and byte-image access
//! - [`text`] - The canonical text codec
//! - [`Name`] - Interned identifiers
//! - Objects and references ([`ObjectRegistry`], [`ObjectRef`], [`SoftObjectRef`], ...)
//! - Containers ([`Array`], [`Set`], [`Map`]) and math aggregates
//! - [`TypeRegistry`] - Default-value factories keyed by descriptor
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod intern;
pub mod math;
pub mod object;
pub mod reflect;
pub mod registry;
pub mod text;
pub mod types;

pub use collections::{Array, Map, Set};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use intern::Name;
pub use math::{
    Box2D, Box3, Color, DateTime, FloatInterval, FloatRange, FloatRangeBound, Guid, Int32Interval,
    Int32Range, Int32RangeBound, IntPoint, IntVector, InterpCurveMode, InterpCurvePointFloat,
    LinearColor, Matrix, Plane, Quat, RangeBoundType, Rotator, Timespan, Transform, Vector,
    Vector2D, Vector4,
};
pub use object::{
    ClassRef, LazyObjectRef, Object, ObjectRef, ObjectRegistry, SoftClassRef, SoftObjectPath,
    SoftObjectRef, WeakObjectRef,
};
pub use reflect::{LocText, Reflect, ReflectClone, ReflectEnum, Reflected, from_text, to_text};
pub use registry::TypeRegistry;
pub use types::{EnumDesc, FieldDesc, StructDesc, TypeDesc, TypeKind};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
