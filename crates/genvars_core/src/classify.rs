//! Plain/text classification of type descriptors.
//!
//! A plain type is stored as its raw native byte image. Everything else is
//! stored as canonical text. Primitive numbers and booleans are always plain,
//! references, strings, names, text, enums and containers never are, and
//! aggregates are plain only when their name is allowlisted.

use std::collections::HashSet;
use std::sync::Arc;

use genvars_foundation::{StructDesc, TypeDesc, TypeKind};
use once_cell::sync::Lazy;

/// Aggregates stored as raw bytes by default.
pub const DEFAULT_PLAIN_STRUCTS: &[&str] = &[
    "Vector2f",
    "Vector3f",
    "Vector4f",
    "Matrix44f",
    "Vector",
    "Vector2D",
    "Vector4",
    "IntVector",
    "IntPoint",
    "Rotator",
    "Quat",
    "Transform",
    "Matrix",
    "LinearColor",
    "Color",
    "Plane",
    "Guid",
    "Box",
    "Box2D",
    "BoxSphereBounds",
    "OrientedBox",
    "FloatRange",
    "FloatRangeBound",
    "Int32Range",
    "Int32RangeBound",
    "FloatInterval",
    "Int32Interval",
    "DateTime",
    "Timespan",
    "RandomStream",
    "FrameNumber",
    "FrameTime",
    "TwoVectors",
    "InterpCurvePointFloat",
    "InterpCurvePointVector2D",
    "InterpCurvePointVector",
    "InterpCurvePointQuat",
    "InterpCurvePointTwoVectors",
    "InterpCurvePointLinearColor",
];

static STANDARD: Lazy<Classifier> = Lazy::new(Classifier::new);

/// Decides whether a type is stored plain or as text.
#[derive(Clone, Debug)]
pub struct Classifier {
    plain_structs: HashSet<Arc<str>>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Creates a classifier with the default allowlist.
    #[must_use]
    pub fn new() -> Self {
        Self {
            plain_structs: DEFAULT_PLAIN_STRUCTS.iter().map(|&s| Arc::from(s)).collect(),
        }
    }

    /// Creates a classifier that treats every aggregate as text.
    #[must_use]
    pub fn without_plain_structs() -> Self {
        Self {
            plain_structs: HashSet::new(),
        }
    }

    /// Returns the shared classifier holding the default allowlist.
    #[must_use]
    pub fn standard() -> &'static Classifier {
        &STANDARD
    }

    /// Builder method to allowlist an aggregate by name.
    #[must_use]
    pub fn with_plain_struct(mut self, name: &str) -> Self {
        self.plain_structs.insert(Arc::from(name));
        self
    }

    /// Returns true if values of `ty` are stored as raw bytes.
    #[must_use]
    pub fn is_plain(&self, ty: &TypeDesc) -> bool {
        match ty.kind() {
            TypeKind::Bool
            | TypeKind::Int8
            | TypeKind::Int16
            | TypeKind::Int32
            | TypeKind::Int64
            | TypeKind::UInt8
            | TypeKind::UInt16
            | TypeKind::UInt32
            | TypeKind::UInt64
            | TypeKind::Float
            | TypeKind::Double => true,
            TypeKind::Struct(desc) => self.is_plain_struct(desc),
            _ => false,
        }
    }

    /// Returns true if the aggregate is allowlisted.
    #[must_use]
    pub fn is_plain_struct(&self, desc: &StructDesc) -> bool {
        self.plain_structs.contains(desc.name())
    }

    /// Returns the number of allowlisted aggregates.
    #[must_use]
    pub fn plain_struct_count(&self) -> usize {
        self.plain_structs.len()
    }
}
