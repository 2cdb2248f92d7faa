//! Dynamic containers: arrays, sets and maps.
//!
//! Thin wrappers around the `im` crate's persistent structures. Cloning is
//! O(1) and sets and maps iterate in key order, so their canonical text is
//! deterministic.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::error::Result;
use crate::reflect::{Reflect, Reflected};
use crate::text::{TextReader, write_list};
use crate::types::TypeDesc;

/// Persistent dynamic array.
#[derive(Clone, Default)]
pub struct Array<T>(im::Vector<T>)
where
    T: Clone;

impl<T: Clone> Array<T> {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a new array with the element appended.
    #[must_use]
    pub fn push_back(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.push_back(value);
        Self(new)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone + PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Eq> Eq for Array<T> {}

impl<T: Clone + Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl<T: Clone> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T: Clone> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = im::vector::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Persistent ordered set.
#[derive(Clone, Default)]
pub struct Set<T>(im::OrdSet<T>)
where
    T: Clone + Ord;

impl<T: Clone + Ord> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the set contains the value.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Returns a new set with the value inserted.
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        let mut new = self.0.clone();
        new.insert(value);
        Self(new)
    }

    /// Returns a new set with the value removed.
    #[must_use]
    pub fn remove(&self, value: &T) -> Self {
        let mut new = self.0.clone();
        new.remove(value);
        Self(new)
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Clone + Ord> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Clone + Ord> Eq for Set<T> {}

impl<T: Clone + Ord + Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: Clone + Ord> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}

/// Persistent ordered map.
#[derive(Clone, Default)]
pub struct Map<K, V>(im::OrdMap<K, V>)
where
    K: Clone + Ord,
    V: Clone;

impl<K: Clone + Ord, V: Clone> Map<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets a value by key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.get(key)
    }

    /// Returns a new map with the key-value pair inserted.
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self {
        let mut new = self.0.clone();
        new.insert(key, value);
        Self(new)
    }

    /// Returns a new map with the key removed.
    #[must_use]
    pub fn remove(&self, key: &K) -> Self {
        let mut new = self.0.clone();
        new.remove(key);
        Self(new)
    }

    /// Returns an iterator over key-value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter()
    }
}

impl<K: Clone + Ord + fmt::Debug, V: Clone + fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Clone + Ord, V: Clone + PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Clone + Ord, V: Clone + Eq> Eq for Map<K, V> {}

impl<K: Clone + Ord + Hash, V: Clone + Hash> Hash for Map<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self.iter() {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: Clone + Ord, V: Clone> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(im::OrdMap::from_iter(iter))
    }
}

fn import_element<T: Reflected>(reader: &mut TextReader<'_>) -> Result<T> {
    let mut value = T::default();
    value.import_text(reader, true)?;
    Ok(value)
}

impl<T: Reflected + Clone> Reflected for Array<T> {
    fn static_type() -> TypeDesc {
        TypeDesc::array(T::static_type(), std::mem::size_of::<Self>())
    }
}

impl<T: Reflected + Clone> Reflect for Array<T> {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, nested: bool) {
        write_list(out, nested, self.iter().map(|v| v as &dyn Reflect));
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        let mut items = im::Vector::new();
        reader.read_list(nested, |r| {
            items.push_back(import_element::<T>(r)?);
            Ok(())
        })?;
        self.0 = items;
        Ok(())
    }

    fn clear_value(&mut self) {
        self.0.clear();
    }

    fn visit_children<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn Reflect)) {
        for item in self.iter() {
            visit(item);
        }
    }
}

impl<T: Reflected + Clone + Ord> Reflected for Set<T> {
    fn static_type() -> TypeDesc {
        TypeDesc::set(T::static_type(), std::mem::size_of::<Self>())
    }
}

impl<T: Reflected + Clone + Ord> Reflect for Set<T> {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, nested: bool) {
        write_list(out, nested, self.iter().map(|v| v as &dyn Reflect));
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        let mut items = im::OrdSet::new();
        reader.read_list(nested, |r| {
            items.insert(import_element::<T>(r)?);
            Ok(())
        })?;
        self.0 = items;
        Ok(())
    }

    fn clear_value(&mut self) {
        self.0 = im::OrdSet::new();
    }

    fn visit_children<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn Reflect)) {
        for item in self.iter() {
            visit(item);
        }
    }
}

impl<K: Reflected + Clone + Ord, V: Reflected + Clone> Reflected for Map<K, V> {
    fn static_type() -> TypeDesc {
        TypeDesc::map(K::static_type(), V::static_type(), std::mem::size_of::<Self>())
    }
}

impl<K: Reflected + Clone + Ord, V: Reflected + Clone> Reflect for Map<K, V> {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, nested: bool) {
        if self.is_empty() && !nested {
            return;
        }
        out.push('(');
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('(');
            k.export_text(out, true);
            out.push(',');
            v.export_text(out, true);
            out.push(')');
        }
        out.push(')');
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        let mut entries = im::OrdMap::new();
        reader.read_list(nested, |r| {
            r.expect('(')?;
            let key = import_element::<K>(r)?;
            r.expect(',')?;
            let value = import_element::<V>(r)?;
            r.expect(')')?;
            entries.insert(key, value);
            Ok(())
        })?;
        self.0 = entries;
        Ok(())
    }

    fn clear_value(&mut self) {
        self.0 = im::OrdMap::new();
    }

    fn visit_children<'a>(&'a self, visit: &mut dyn FnMut(&'a dyn Reflect)) {
        for (k, v) in self.iter() {
            visit(k);
            visit(v);
        }
    }
}
