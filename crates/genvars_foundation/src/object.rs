//! Objects, object paths and the reference flavours that point at them.
//!
//! Objects live in a process-wide [`ObjectRegistry`] keyed by path. The
//! registry holds weak handles only, so an object disappears when its last
//! strong reference is dropped.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::intern::NONE_TEXT;
use crate::reflect::{Reflect, Reflected};
use crate::text::{TextReader, write_string};
use crate::types::{TypeDesc, TypeKind};

/// Path naming an object, e.g. `/Game/Items/Sword.Sword`. Empty means null.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SoftObjectPath(Arc<str>);

impl SoftObjectPath {
    /// Creates a path. `""` and `"None"` produce the null path.
    #[must_use]
    pub fn new(path: &str) -> Self {
        if path.is_empty() || path == NONE_TEXT {
            Self::null()
        } else {
            Self(path.into())
        }
    }

    /// The null path.
    #[must_use]
    pub fn null() -> Self {
        Self(Arc::from(""))
    }

    /// Returns true for the null path.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the path text (empty when null).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn export(&self, out: &mut String, nested: bool) {
        let text = if self.is_null() { NONE_TEXT } else { self.as_str() };
        write_string(out, text, nested);
    }

    fn import(reader: &mut TextReader<'_>, nested: bool) -> Result<Self> {
        Ok(Self::new(reader.read_string(nested)?.trim()))
    }
}

impl From<&str> for SoftObjectPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl fmt::Debug for SoftObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "SoftObjectPath(null)")
        } else {
            write!(f, "SoftObjectPath({})", self.0)
        }
    }
}

impl fmt::Display for SoftObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str(NONE_TEXT)
        } else {
            f.write_str(&self.0)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SoftObjectPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SoftObjectPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

/// A live object.
#[derive(Debug)]
pub struct Object {
    path: SoftObjectPath,
    is_class: bool,
}

impl Object {
    /// Returns the object's path.
    #[must_use]
    pub fn path(&self) -> &SoftObjectPath {
        &self.path
    }

    /// Returns true if this object is a class.
    #[must_use]
    pub const fn is_class(&self) -> bool {
        self.is_class
    }

    /// Returns the short name: the text after the last `.` or `/`.
    #[must_use]
    pub fn name(&self) -> &str {
        let path = self.path.as_str();
        path.rsplit(['.', '/']).next().unwrap_or(path)
    }
}

/// Table of live objects keyed by path.
#[derive(Debug, Default)]
pub struct ObjectRegistry {
    objects: RwLock<HashMap<SoftObjectPath, Weak<Object>>>,
}

static OBJECTS: Lazy<ObjectRegistry> = Lazy::new(ObjectRegistry::default);

impl ObjectRegistry {
    /// Returns the process-wide registry.
    #[must_use]
    pub fn global() -> &'static ObjectRegistry {
        &OBJECTS
    }

    /// Creates (or returns the live) object at `path`.
    ///
    /// # Errors
    ///
    /// Fails when `path` is null.
    pub fn spawn(&self, path: &str) -> Result<Arc<Object>> {
        self.spawn_inner(path, false)
    }

    /// Creates (or returns the live) class object at `path`.
    ///
    /// # Errors
    ///
    /// Fails when `path` is null.
    pub fn spawn_class(&self, path: &str) -> Result<Arc<Object>> {
        self.spawn_inner(path, true)
    }

    fn spawn_inner(&self, path: &str, is_class: bool) -> Result<Arc<Object>> {
        let path = SoftObjectPath::new(path);
        if path.is_null() {
            return Err(Error::object_not_found(path));
        }
        let mut objects = self.objects.write();
        if let Some(live) = objects.get(&path).and_then(Weak::upgrade) {
            return Ok(live);
        }
        objects.retain(|_, slot| slot.strong_count() > 0);
        let object = Arc::new(Object {
            path: path.clone(),
            is_class,
        });
        objects.insert(path, Arc::downgrade(&object));
        Ok(object)
    }

    /// Resolves a path to a live object.
    #[must_use]
    pub fn find(&self, path: &SoftObjectPath) -> Option<Arc<Object>> {
        if path.is_null() {
            return None;
        }
        self.objects.read().get(path).and_then(Weak::upgrade)
    }

    /// Returns the number of live objects.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.objects
            .read()
            .values()
            .filter(|w| w.strong_count() > 0)
            .count()
    }
}

fn resolve(path: &SoftObjectPath) -> Result<Option<Arc<Object>>> {
    if path.is_null() {
        return Ok(None);
    }
    ObjectRegistry::global()
        .find(path)
        .map(Some)
        .ok_or_else(|| Error::object_not_found(path.clone()))
}

fn same_object(a: Option<&Arc<Object>>, b: Option<&Arc<Object>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Strong object reference; null by default.
#[derive(Clone, Debug, Default)]
pub struct ObjectRef(Option<Arc<Object>>);

impl ObjectRef {
    /// Creates a reference to `object`.
    #[must_use]
    pub fn new(object: &Arc<Object>) -> Self {
        Self(Some(object.clone()))
    }

    /// Returns the referenced object.
    #[must_use]
    pub fn get(&self) -> Option<&Arc<Object>> {
        self.0.as_ref()
    }

    /// Returns true if null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the referenced object's path, or the null path.
    #[must_use]
    pub fn path(&self) -> SoftObjectPath {
        self.0
            .as_ref()
            .map_or_else(SoftObjectPath::null, |o| o.path.clone())
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        same_object(self.get(), other.get())
    }
}

impl From<Option<Arc<Object>>> for ObjectRef {
    fn from(object: Option<Arc<Object>>) -> Self {
        Self(object)
    }
}

/// Weak object reference; does not keep the object alive.
#[derive(Clone, Debug, Default)]
pub struct WeakObjectRef(Weak<Object>);

impl WeakObjectRef {
    /// Creates a weak reference to `object`.
    #[must_use]
    pub fn new(object: &Arc<Object>) -> Self {
        Self(Arc::downgrade(object))
    }

    /// Returns the object if it is still alive.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Object>> {
        self.0.upgrade()
    }

    /// Returns the live object's path, or the null path.
    #[must_use]
    pub fn path(&self) -> SoftObjectPath {
        self.get()
            .map_or_else(SoftObjectPath::null, |o| o.path.clone())
    }
}

impl PartialEq for WeakObjectRef {
    fn eq(&self, other: &Self) -> bool {
        same_object(self.get().as_ref(), other.get().as_ref())
    }
}

/// Reference that remembers its path and resolves on demand.
#[derive(Clone, Debug, Default)]
pub struct LazyObjectRef {
    path: SoftObjectPath,
    cached: Weak<Object>,
}

impl LazyObjectRef {
    /// Creates a lazy reference to `object`.
    #[must_use]
    pub fn new(object: &Arc<Object>) -> Self {
        Self {
            path: object.path.clone(),
            cached: Arc::downgrade(object),
        }
    }

    /// Creates an unresolved lazy reference.
    #[must_use]
    pub fn from_path(path: SoftObjectPath) -> Self {
        Self {
            path,
            cached: Weak::new(),
        }
    }

    /// Resolves the object, consulting the registry if the cached handle died.
    #[must_use]
    pub fn get(&self) -> Option<Arc<Object>> {
        self.cached
            .upgrade()
            .or_else(|| ObjectRegistry::global().find(&self.path))
    }

    /// Returns the remembered path.
    #[must_use]
    pub fn path(&self) -> &SoftObjectPath {
        &self.path
    }
}

impl PartialEq for LazyObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

/// Path-only object reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SoftObjectRef {
    path: SoftObjectPath,
}

impl SoftObjectRef {
    /// Creates a soft reference from a path.
    #[must_use]
    pub fn new(path: SoftObjectPath) -> Self {
        Self { path }
    }

    /// Creates a soft reference to `object`.
    #[must_use]
    pub fn from_object(object: &Arc<Object>) -> Self {
        Self::new(object.path.clone())
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &SoftObjectPath {
        &self.path
    }

    /// Returns true if the path is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.path.is_null()
    }

    /// Resolves synchronously; `None` when null or not loaded.
    #[must_use]
    pub fn load(&self) -> Option<Arc<Object>> {
        ObjectRegistry::global().find(&self.path)
    }
}

/// Strong class reference; null by default.
#[derive(Clone, Debug, Default)]
pub struct ClassRef(Option<Arc<Object>>);

impl ClassRef {
    /// Creates a class reference. Returns null unless `object` is a class.
    #[must_use]
    pub fn new(object: &Arc<Object>) -> Self {
        Self(object.is_class.then(|| object.clone()))
    }

    /// Returns the referenced class.
    #[must_use]
    pub fn get(&self) -> Option<&Arc<Object>> {
        self.0.as_ref()
    }

    /// Returns true if null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the class path, or the null path.
    #[must_use]
    pub fn path(&self) -> SoftObjectPath {
        self.0
            .as_ref()
            .map_or_else(SoftObjectPath::null, |o| o.path.clone())
    }
}

impl PartialEq for ClassRef {
    fn eq(&self, other: &Self) -> bool {
        same_object(self.get(), other.get())
    }
}

/// Path-only class reference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SoftClassRef {
    path: SoftObjectPath,
}

impl SoftClassRef {
    /// Creates a soft class reference from a path.
    #[must_use]
    pub fn new(path: SoftObjectPath) -> Self {
        Self { path }
    }

    /// Returns the path.
    #[must_use]
    pub fn path(&self) -> &SoftObjectPath {
        &self.path
    }

    /// Resolves synchronously to a live class.
    #[must_use]
    pub fn load(&self) -> Option<Arc<Object>> {
        ObjectRegistry::global()
            .find(&self.path)
            .filter(|o| o.is_class)
    }
}

macro_rules! impl_reflect_reference {
    ($ty:ty, $kind:ident, |$this:ident| $path:expr, |$reader_path:ident| $build:expr) => {
        impl Reflected for $ty {
            fn static_type() -> TypeDesc {
                TypeDesc::new(TypeKind::$kind, std::mem::size_of::<$ty>())
            }
        }

        impl Reflect for $ty {
            fn type_desc(&self) -> TypeDesc {
                <Self as Reflected>::static_type()
            }

            fn export_text(&self, out: &mut String, nested: bool) {
                let $this = self;
                SoftObjectPath::export(&$path, out, nested);
            }

            fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
                let $reader_path = SoftObjectPath::import(reader, nested)?;
                *self = $build;
                Ok(())
            }

            fn clear_value(&mut self) {
                *self = Self::default();
            }

            fn soft_reference(&self) -> Option<SoftObjectPath> {
                let $this = self;
                let path: SoftObjectPath = $path;
                (!path.is_null()).then_some(path)
            }
        }
    };
}

impl_reflect_reference!(ObjectRef, Object, |this| this.path(), |path| ObjectRef(
    resolve(&path)?
));
impl_reflect_reference!(WeakObjectRef, WeakObject, |this| this.path(), |path| {
    WeakObjectRef(resolve(&path)?.as_ref().map_or_else(Weak::new, Arc::downgrade))
});
impl_reflect_reference!(LazyObjectRef, LazyObject, |this| this.path.clone(), |path| {
    LazyObjectRef::from_path(path)
});
impl_reflect_reference!(SoftObjectRef, SoftObject, |this| this.path.clone(), |path| {
    SoftObjectRef::new(path)
});
impl_reflect_reference!(ClassRef, Class, |this| this.path(), |path| {
    ClassRef(resolve(&path)?.filter(|o| o.is_class))
});
impl_reflect_reference!(SoftClassRef, SoftClass, |this| this.path.clone(), |path| {
    SoftClassRef::new(path)
});
