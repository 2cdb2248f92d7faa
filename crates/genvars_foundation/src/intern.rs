//! Interned names.
//!
//! A [`Name`] is a case-preserving identifier stored once in a process-wide
//! table and compared by index. Index 0 is reserved for the empty name, which
//! exports as `None`.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::Result;
use crate::reflect::{Reflect, Reflected};
use crate::text::{TextReader, write_string};
use crate::types::{TypeDesc, TypeKind};

/// Text form of the empty name.
pub const NONE_TEXT: &str = "None";

static NAMES: Lazy<RwLock<NameTable>> = Lazy::new(|| RwLock::new(NameTable::new()));

/// Interned identifier.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name(u32);

impl Name {
    /// The empty name.
    pub const NONE: Name = Name(0);

    /// Interns `s` in the global table. `""` and `"None"` map to [`Name::NONE`].
    #[must_use]
    pub fn new(s: &str) -> Self {
        if s.is_empty() || s == NONE_TEXT {
            return Self::NONE;
        }
        if let Some(name) = NAMES.read().lookup(s) {
            return name;
        }
        NAMES.write().intern(s)
    }

    /// Returns the raw index of this name.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns true for the empty name.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Returns the interned string.
    #[must_use]
    pub fn as_str(self) -> Arc<str> {
        NAMES.read().resolve(self)
    }
}

impl From<&str> for Name {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.as_str())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

/// Table mapping strings to name indices and back.
#[derive(Debug)]
pub struct NameTable {
    strings: Vec<Arc<str>>,
    index: HashMap<Arc<str>, Name>,
}

impl NameTable {
    fn new() -> Self {
        let none: Arc<str> = NONE_TEXT.into();
        let mut index = HashMap::new();
        index.insert(none.clone(), Name::NONE);
        Self {
            strings: vec![none],
            index,
        }
    }

    fn lookup(&self, s: &str) -> Option<Name> {
        self.index.get(s).copied()
    }

    fn intern(&mut self, s: &str) -> Name {
        if let Some(name) = self.lookup(s) {
            return name;
        }
        // The table would need four billion distinct names to overflow.
        let idx = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        let arc: Arc<str> = s.into();
        self.strings.push(arc.clone());
        let name = Name(idx);
        self.index.insert(arc, name);
        name
    }

    fn resolve(&self, name: Name) -> Arc<str> {
        self.strings
            .get(name.0 as usize)
            .cloned()
            .unwrap_or_else(|| self.strings[0].clone())
    }

    /// Returns the number of interned names, including `None`.
    #[must_use]
    pub fn global_len() -> usize {
        NAMES.read().strings.len()
    }
}

impl Reflected for Name {
    fn static_type() -> TypeDesc {
        TypeDesc::new(TypeKind::Name, std::mem::size_of::<Name>())
    }
}

impl Reflect for Name {
    fn type_desc(&self) -> TypeDesc {
        Self::static_type()
    }

    fn export_text(&self, out: &mut String, nested: bool) {
        write_string(out, &self.as_str(), nested);
    }

    fn import_text(&mut self, reader: &mut TextReader<'_>, nested: bool) -> Result<()> {
        *self = Name::new(&reader.read_string(nested)?);
        Ok(())
    }

    fn clear_value(&mut self) {
        *self = Name::NONE;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Name {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Name {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Ok(Name::new(&s))
    }
}
