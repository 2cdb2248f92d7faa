//! Type descriptors for reflected values.
//!
//! A [`TypeDesc`] is the opaque handle the storage engine receives alongside
//! a value: it names the kind of the value, its byte size, and for aggregates
//! the field layout. Descriptors are cheap to clone.

use std::fmt;
use std::sync::Arc;

/// Descriptor identifying a concrete type's shape and size.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDesc {
    kind: TypeKind,
    size: usize,
}

/// The kind of a described type.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Boolean.
    Bool,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 8-bit unsigned integer.
    UInt8,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Interned name.
    Name,
    /// Owned string.
    Str,
    /// Localizable text.
    Text,
    /// Strong object reference.
    Object,
    /// Weak object reference.
    WeakObject,
    /// Lazily resolved object reference.
    LazyObject,
    /// Path-based soft object reference.
    SoftObject,
    /// Class reference.
    Class,
    /// Path-based soft class reference.
    SoftClass,
    /// Reflected enum.
    Enum(Arc<EnumDesc>),
    /// Dynamic array.
    Array(Arc<TypeDesc>),
    /// Dynamic set.
    Set(Arc<TypeDesc>),
    /// Dynamic map.
    Map(Arc<TypeDesc>, Arc<TypeDesc>),
    /// Aggregate with named fields.
    Struct(Arc<StructDesc>),
}

/// Layout of a reflected aggregate.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StructDesc {
    name: Arc<str>,
    size: usize,
    fields: Vec<FieldDesc>,
}

/// A single aggregate field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldDesc {
    /// Field name as it appears in canonical text.
    pub name: Arc<str>,
    /// Field type.
    pub ty: TypeDesc,
}

/// Layout of a reflected enum.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumDesc {
    /// Enum name.
    pub name: Arc<str>,
    /// Width of the underlying integer in bytes.
    pub width: usize,
    /// Variant names with their underlying values.
    pub variants: Vec<(Arc<str>, i64)>,
}

impl TypeDesc {
    /// Creates a descriptor from a kind and a byte size.
    #[must_use]
    pub const fn new(kind: TypeKind, size: usize) -> Self {
        Self { kind, size }
    }

    /// Boolean descriptor.
    #[must_use]
    pub const fn bool() -> Self {
        Self::new(TypeKind::Bool, 1)
    }

    /// 32-bit signed integer descriptor.
    #[must_use]
    pub const fn int32() -> Self {
        Self::new(TypeKind::Int32, 4)
    }

    /// 32-bit float descriptor.
    #[must_use]
    pub const fn float() -> Self {
        Self::new(TypeKind::Float, 4)
    }

    /// 64-bit float descriptor.
    #[must_use]
    pub const fn double() -> Self {
        Self::new(TypeKind::Double, 8)
    }

    /// Creates an array descriptor.
    #[must_use]
    pub fn array(element: TypeDesc, size: usize) -> Self {
        Self::new(TypeKind::Array(Arc::new(element)), size)
    }

    /// Creates a set descriptor.
    #[must_use]
    pub fn set(element: TypeDesc, size: usize) -> Self {
        Self::new(TypeKind::Set(Arc::new(element)), size)
    }

    /// Creates a map descriptor.
    #[must_use]
    pub fn map(key: TypeDesc, value: TypeDesc, size: usize) -> Self {
        Self::new(TypeKind::Map(Arc::new(key), Arc::new(value)), size)
    }

    /// Creates an aggregate descriptor; the size comes from the layout.
    #[must_use]
    pub fn structure(desc: StructDesc) -> Self {
        let size = desc.size;
        Self::new(TypeKind::Struct(Arc::new(desc)), size)
    }

    /// Creates an enum descriptor; the size is the underlying width.
    #[must_use]
    pub fn enumeration(desc: EnumDesc) -> Self {
        let size = desc.width;
        Self::new(TypeKind::Enum(Arc::new(desc)), size)
    }

    /// Returns the kind of this type.
    #[must_use]
    pub const fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Returns the byte size of this type.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if both descriptors name the same type.
    #[must_use]
    pub fn same_type(&self, other: &TypeDesc) -> bool {
        match (&self.kind, &other.kind) {
            (TypeKind::Struct(a), TypeKind::Struct(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => self.kind == other.kind,
        }
    }

    /// Returns the aggregate layout if this is a struct.
    #[must_use]
    pub fn as_struct(&self) -> Option<&StructDesc> {
        match &self.kind {
            TypeKind::Struct(desc) => Some(desc),
            _ => None,
        }
    }

    /// Returns true for any object reference flavour.
    #[must_use]
    pub const fn is_object_reference(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Object
                | TypeKind::WeakObject
                | TypeKind::LazyObject
                | TypeKind::SoftObject
                | TypeKind::Class
                | TypeKind::SoftClass
        )
    }

    /// Returns true for dynamic arrays, sets and maps.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Array(_) | TypeKind::Set(_) | TypeKind::Map(_, _)
        )
    }
}

impl StructDesc {
    /// Creates an aggregate layout with an explicit byte size.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, size: usize, fields: Vec<FieldDesc>) -> Self {
        Self {
            name: name.into(),
            size,
            fields,
        }
    }

    /// Creates an aggregate layout whose size is the packed sum of its fields.
    #[must_use]
    pub fn packed(name: impl Into<Arc<str>>, fields: Vec<FieldDesc>) -> Self {
        let size = fields.iter().map(|f| f.ty.size()).sum();
        Self::new(name, size, fields)
    }

    /// Returns the aggregate name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the byte size.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Returns the field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDesc> {
        self.fields.iter().find(|f| &*f.name == name)
    }
}

impl FieldDesc {
    /// Creates a field descriptor.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, ty: TypeDesc) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

impl EnumDesc {
    /// Returns the variant name for an underlying value.
    #[must_use]
    pub fn name_of(&self, value: i64) -> Option<&str> {
        self.variants
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(n, _)| &**n)
    }

    /// Returns the underlying value for a variant name.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.variants
            .iter()
            .find(|(n, _)| &**n == name)
            .map(|(_, v)| *v)
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Bool => write!(f, "bool"),
            TypeKind::Int8 => write!(f, "int8"),
            TypeKind::Int16 => write!(f, "int16"),
            TypeKind::Int32 => write!(f, "int32"),
            TypeKind::Int64 => write!(f, "int64"),
            TypeKind::UInt8 => write!(f, "uint8"),
            TypeKind::UInt16 => write!(f, "uint16"),
            TypeKind::UInt32 => write!(f, "uint32"),
            TypeKind::UInt64 => write!(f, "uint64"),
            TypeKind::Float => write!(f, "float"),
            TypeKind::Double => write!(f, "double"),
            TypeKind::Name => write!(f, "name"),
            TypeKind::Str => write!(f, "string"),
            TypeKind::Text => write!(f, "text"),
            TypeKind::Object => write!(f, "object"),
            TypeKind::WeakObject => write!(f, "weak-object"),
            TypeKind::LazyObject => write!(f, "lazy-object"),
            TypeKind::SoftObject => write!(f, "soft-object"),
            TypeKind::Class => write!(f, "class"),
            TypeKind::SoftClass => write!(f, "soft-class"),
            TypeKind::Enum(e) => write!(f, "enum {}", e.name),
            TypeKind::Array(t) => write!(f, "array<{t:?}>"),
            TypeKind::Set(t) => write!(f, "set<{t:?}>"),
            TypeKind::Map(k, v) => write!(f, "map<{k:?}, {v:?}>"),
            TypeKind::Struct(s) => write!(f, "struct {}", s.name),
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&TypeDesc::new(self.clone(), 0), f)
    }
}

impl fmt::Debug for StructDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructDesc")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("fields", &self.fields.len())
            .finish()
    }
}
