//! Default-value factories keyed by type descriptor.
//!
//! Descriptor-driven callers (script wrappers, the editor) only have a
//! [`TypeDesc`] in hand; the registry turns it back into a fresh value.

use std::collections::HashMap;

use crate::collections::{Array, Map, Set};
use crate::error::{Error, Result};
use crate::intern::Name;
use crate::math::{
    Box2D, Box3, Color, DateTime, FloatInterval, FloatRange, FloatRangeBound, Guid, Int32Interval,
    Int32Range, Int32RangeBound, IntPoint, IntVector, InterpCurveMode, InterpCurvePointFloat,
    LinearColor, Matrix, Plane, Quat, RangeBoundType, Rotator, Timespan, Transform, Vector,
    Vector2D, Vector4,
};
use crate::object::{ClassRef, LazyObjectRef, ObjectRef, SoftClassRef, SoftObjectRef, WeakObjectRef};
use crate::reflect::{LocText, Reflect, Reflected};
use crate::types::TypeDesc;

/// Creates a default value of one type.
pub type Factory = fn() -> Box<dyn Reflect>;

fn make<T: Reflected + Clone>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

/// Table of default-value factories.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    factories: HashMap<TypeDesc, Factory>,
}

macro_rules! register_all {
    ($registry:expr, $($ty:ty),* $(,)?) => {
        $( $registry.register::<$ty>(); )*
    };
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in type.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_all!(
            registry,
            bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64,
            Name, String, LocText,
            ObjectRef, WeakObjectRef, LazyObjectRef, SoftObjectRef, ClassRef, SoftClassRef,
            Vector2D, Vector, Vector4, IntPoint, IntVector, Rotator, Quat, Transform, Plane,
            Matrix, LinearColor, Color, Guid, Box3, Box2D, DateTime, Timespan,
            RangeBoundType, FloatRangeBound, FloatRange, Int32RangeBound, Int32Range,
            FloatInterval, Int32Interval, InterpCurveMode, InterpCurvePointFloat,
            Array<bool>, Array<i32>, Array<i64>, Array<f32>, Array<f64>, Array<String>,
            Array<Name>, Array<ObjectRef>, Array<SoftObjectRef>, Array<Vector>,
            Set<i32>, Set<String>, Set<Name>,
            Map<String, i32>, Map<Name, String>, Map<String, String>,
        );
        registry
    }

    /// Registers `T`, replacing any previous factory for its descriptor.
    pub fn register<T: Reflected + Clone>(&mut self) -> &mut Self {
        self.factories.insert(T::static_type(), make::<T>);
        self
    }

    /// Registers a factory for an arbitrary descriptor.
    pub fn register_factory(&mut self, ty: TypeDesc, factory: Factory) -> &mut Self {
        self.factories.insert(ty, factory);
        self
    }

    /// Returns true if `ty` has a factory.
    #[must_use]
    pub fn contains(&self, ty: &TypeDesc) -> bool {
        self.factories.contains_key(ty)
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Creates a default value of `ty`.
    ///
    /// # Errors
    ///
    /// Returns `TypeNotSupported` when `ty` has no factory.
    pub fn instantiate(&self, ty: &TypeDesc) -> Result<Box<dyn Reflect>> {
        self.factories
            .get(ty)
            .map(|factory| factory())
            .ok_or_else(|| Error::type_not_supported(ty.clone()))
    }
}
